//! # Beam Calculations
//!
//! One calculation function per beam family, all sharing the section
//! property helper and the load/moment resolver:
//!
//! - [`girder::calculate_beam_properties`] - single-girder and rolled
//!   I-beam bridges
//! - [`double_girder::calculate_double_beam_properties`] - twin-girder
//!   bridges with a transversal cross-member load
//! - [`v_beam::calculate_v_beam_properties`] - asymmetric V-section
//!   bridges (load applied to the bottom flange)
//!
//! Every function is a pure, infallible mapping from inputs to a
//! [`CalculationResults`]: degenerate geometry is clamped, divisions are
//! guarded, and safety factors degrade to `Infinity` (an automatic pass)
//! rather than raising. Pass/fail is a result, not an error.

pub mod buckling;
pub mod diagram;
pub mod double_girder;
pub mod end_carriage;
pub mod girder;
pub mod loads;
pub mod stiffener;
pub mod v_beam;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::section::SectionProperties;

pub use diagram::{generate_diagram_data, DiagramData, DiagramPoint};
pub use double_girder::{calculate_double_beam_properties, DoubleBeamInputs};
pub use end_carriage::{check_end_carriage, EndCarriageAdvisory};
pub use girder::calculate_beam_properties;
pub use loads::LoadTerms;
pub use stiffener::StiffenerRecommendation;
pub use v_beam::{calculate_v_beam_properties, VBeamInputs};

/// Beam structural family discriminator.
///
/// Drives both geometry construction and formula selection. Serialized
/// with the wire tags the front-ends use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeamType {
    SingleGirder,
    IBeam,
    DoubleGirder,
    VBeam,
}

impl BeamType {
    /// Span-ratio deflection limit divisor for this family
    pub fn deflection_limit_divisor(&self) -> f64 {
        match self {
            BeamType::SingleGirder | BeamType::DoubleGirder => 1000.0,
            BeamType::IBeam => 800.0,
            BeamType::VBeam => 850.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamType::SingleGirder => "Single Girder",
            BeamType::IBeam => "I-Beam",
            BeamType::DoubleGirder => "Double Girder",
            BeamType::VBeam => "V-Beam",
        }
    }
}

impl std::fmt::Display for BeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters shared by every beam family.
///
/// Units follow the shop-drawing practice of the domain: plate dimensions
/// in millimeters, span and layout in centimeters, loads in kgf.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bottom_flange_width_mm": 600.0,
///   "total_height_mm": 900.0,
///   "bottom_flange_thickness_mm": 30.0,
///   "top_flange_thickness_mm": 30.0,
///   "web_thickness_mm": 15.0,
///   "web_spacing_mm": 400.0,
///   "top_flange_width_mm": 600.0,
///   "span_cm": 800.0,
///   "wheel_base_cm": 150.0,
///   "end_taper_cm": 60.0,
///   "hoist_load_kg": 15000.0,
///   "trolley_load_kg": 5000.0,
///   "material": { "type": "Grade", "grade": "Ss400" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInputs {
    /// Bottom flange width b (mm)
    pub bottom_flange_width_mm: f64,
    /// Total section height h (mm)
    pub total_height_mm: f64,
    /// Bottom flange thickness t1 (mm)
    pub bottom_flange_thickness_mm: f64,
    /// Top flange thickness t2 (mm)
    pub top_flange_thickness_mm: f64,
    /// Web plate thickness t3 (mm)
    pub web_thickness_mm: f64,
    /// Clear spacing between the twin webs b1 (mm).
    /// Unused by the rolled I-beam and V-beam families.
    pub web_spacing_mm: f64,
    /// Top flange width b3 (mm)
    pub top_flange_width_mm: f64,
    /// Span between end supports L (cm)
    pub span_cm: f64,
    /// End-carriage wheel-center distance (cm) - advisory geometry only
    pub wheel_base_cm: f64,
    /// End-carriage inclined segment length (cm) - advisory geometry only
    pub end_taper_cm: f64,
    /// Rated hoist load (kgf)
    pub hoist_load_kg: f64,
    /// Trolley and hoisting equipment weight (kgf)
    pub trolley_load_kg: f64,
    /// Steel selection
    pub material: Material,
}

impl BeamInputs {
    /// Total concentrated load P = hoist + trolley (kgf)
    pub fn point_load_kg(&self) -> f64 {
        self.hoist_load_kg + self.trolley_load_kg
    }

    /// Validate input parameters.
    ///
    /// The calculation functions themselves are permissive (they clamp
    /// degenerate geometry and never fail); this check is for callers
    /// that want to reject malformed input before calculating.
    pub fn validate(&self) -> CalcResult<()> {
        let non_negative = [
            ("bottom_flange_width_mm", self.bottom_flange_width_mm),
            ("total_height_mm", self.total_height_mm),
            ("bottom_flange_thickness_mm", self.bottom_flange_thickness_mm),
            ("top_flange_thickness_mm", self.top_flange_thickness_mm),
            ("web_thickness_mm", self.web_thickness_mm),
            ("web_spacing_mm", self.web_spacing_mm),
            ("top_flange_width_mm", self.top_flange_width_mm),
            ("span_cm", self.span_cm),
            ("wheel_base_cm", self.wheel_base_cm),
            ("end_taper_cm", self.end_taper_cm),
            ("hoist_load_kg", self.hoist_load_kg),
            ("trolley_load_kg", self.trolley_load_kg),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Pass/fail status of a single safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// A safety factor with its pass/fail verdict.
///
/// A factor of `Infinity` (degenerate geometry or zero demand) is an
/// automatic pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyFactor {
    pub factor: f64,
    pub status: CheckStatus,
}

impl SafetyFactor {
    /// Build from an allowable/actual ratio, guarding zero demand.
    pub fn from_ratio(allowable: f64, actual: f64) -> Self {
        let factor = if actual <= 0.0 {
            f64::INFINITY
        } else {
            allowable / actual
        };
        SafetyFactor {
            factor,
            status: if factor >= 1.0 {
                CheckStatus::Pass
            } else {
                CheckStatus::Fail
            },
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Extreme fiber stresses (kg/cm²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressResults {
    /// Combined biaxial stress σ_u = Mx/Wx + My/Wy
    pub combined_kgcm2: f64,
    /// Compression fiber stress
    pub compression_kgcm2: f64,
    /// Tension fiber stress
    pub tension_kgcm2: f64,
}

/// Mid-span deflection versus its allowable limit (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResults {
    pub actual_cm: f64,
    pub allowable_cm: f64,
}

/// Aggregate result of one beam calculation.
///
/// Produced fresh per invocation; immutable once returned. Consumed by
/// the diagram/report collaborators as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Which formula family produced this result
    pub beam_type: BeamType,
    /// Section properties with inertia breakdowns
    pub section: SectionProperties,
    /// Load and design moment terms
    pub loads: LoadTerms,
    /// Extreme fiber stresses
    pub stress: StressResults,
    /// Mid-span deflection
    pub deflection: DeflectionResults,
    /// Stress safety factor K_sigma = σ_allow / σ_u
    pub stress_check: SafetyFactor,
    /// Deflection safety factor n_f = f_allow / f
    pub deflection_check: SafetyFactor,
    /// Local plate buckling safety factor
    pub buckling_check: SafetyFactor,
    /// Web stiffener sizing
    pub stiffener: StiffenerRecommendation,
}

impl CalculationResults {
    /// Check whether all three safety checks pass
    pub fn passes(&self) -> bool {
        self.stress_check.is_pass()
            && self.deflection_check.is_pass()
            && self.buckling_check.is_pass()
    }
}
