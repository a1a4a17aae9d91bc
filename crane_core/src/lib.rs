//! # crane_core - Overhead Crane Bridge Calculation Engine
//!
//! `crane_core` sizes and checks the bridge beam of an overhead
//! traveling crane: section properties, design moments, stresses,
//! deflection, plate buckling and web stiffener layout, for four beam
//! families (single girder, rolled I-beam, double girder and V-beam).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Infallible Core**: Degenerate geometry is clamped and guarded,
//!   never an error; a failed check is a result, not an `Err`
//! - **Workshop Units**: Plate dimensions in mm, spans in cm, loads in
//!   kgf and stresses in kg/cm², as on the drawings this replaces
//!
//! ## Quick Start
//!
//! ```rust
//! use crane_core::calculations::{calculate_beam_properties, BeamInputs, BeamType};
//! use crane_core::materials::Material;
//!
//! let inputs = BeamInputs {
//!     bottom_flange_width_mm: 600.0,
//!     total_height_mm: 900.0,
//!     bottom_flange_thickness_mm: 30.0,
//!     top_flange_thickness_mm: 30.0,
//!     web_thickness_mm: 15.0,
//!     web_spacing_mm: 400.0,
//!     top_flange_width_mm: 600.0,
//!     span_cm: 800.0,
//!     wheel_base_cm: 160.0,
//!     end_taper_cm: 40.0,
//!     hoist_load_kg: 15_000.0,
//!     trolley_load_kg: 5_000.0,
//!     material: Material::default(),
//! };
//!
//! let results = calculate_beam_properties(&inputs, BeamType::SingleGirder);
//! assert!(results.passes());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam family calculations, checks and advisories
//! - [`section`] - Primitive-based cross section property engine
//! - [`geometry`] - 2D plate outlines for rendering and export
//! - [`materials`] - Steel grade table and custom material support
//! - [`units`] - Type-safe unit wrappers and conversion constants
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate_beam_properties, calculate_double_beam_properties, calculate_v_beam_properties,
    check_end_carriage, generate_diagram_data, BeamInputs, BeamType, CalculationResults,
    DoubleBeamInputs, VBeamInputs,
};
pub use errors::{CalcError, CalcResult};
pub use geometry::{build_cross_section_geometry, build_v_cross_section_geometry};
pub use materials::{Material, SteelGrade};
