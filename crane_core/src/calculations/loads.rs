//! # Load & Moment Resolver
//!
//! Combines self-weight (derived from the computed section area and steel
//! density), hoist load and trolley weight into the distributed and
//! concentrated load terms of the simply-supported beam model, then forms
//! the design bending moments.
//!
//! ## Design moments
//!
//! The combined moments carry fixed amplification factors that encode the
//! dynamic/impact and biaxial bending allowances of the design practice:
//!
//! - `M_x = 1.05 · (M_bt + 1.25 · M_vn)`
//! - `M_y = 0.05 · (M_bt + M_vn)`
//!
//! These multipliers are calibration constants of the method, not derived
//! quantities, and are reproduced exactly.

use serde::{Deserialize, Serialize};

use crate::materials::STEEL_DENSITY_KG_M3;

/// Dynamic amplification on the major-axis design moment
pub const MAJOR_AXIS_AMPLIFICATION: f64 = 1.05;
/// Impact allowance on the concentrated-load moment inside M_x
pub const POINT_MOMENT_IMPACT: f64 = 1.25;
/// Biaxial allowance forming the minor-axis design moment
pub const MINOR_AXIS_FRACTION: f64 = 0.05;

/// Resolved load and design moment terms for one beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadTerms {
    /// Total concentrated load P = hoist + trolley (kgf)
    pub point_load_kg: f64,
    /// Distributed load q including self-weight (kg/cm)
    pub distributed_load_kgcm: f64,
    /// Total self-weight of the girder over the span (kg)
    pub self_weight_kg: f64,
    /// Moment from the distributed load M_bt = qL²/8 (kg·cm)
    pub moment_distributed_kgcm: f64,
    /// Moment from the mid-span point load M_vn = PL/4 (kg·cm)
    pub moment_point_kgcm: f64,
    /// Major-axis design moment M_x (kg·cm)
    pub moment_x_kgcm: f64,
    /// Minor-axis design moment M_y (kg·cm)
    pub moment_y_kgcm: f64,
}

/// Self-weight distributed load from a section area (kg/cm).
///
/// A 1 cm slice of an F cm² section is F·10⁻⁶ m³ of steel, hence
/// q = F · 7850 / 10⁶.
pub fn self_weight_per_cm(area_cm2: f64) -> f64 {
    area_cm2 * STEEL_DENSITY_KG_M3 / 1.0e6
}

/// Resolve loads and design moments for a simply-supported span.
///
/// * `extra_distributed_kgcm` - additional distributed load beyond
///   self-weight (the double-girder transversal share; zero elsewhere).
pub fn resolve(
    area_cm2: f64,
    span_cm: f64,
    point_load_kg: f64,
    extra_distributed_kgcm: f64,
) -> LoadTerms {
    let q = self_weight_per_cm(area_cm2) + extra_distributed_kgcm;

    let moment_distributed = q * span_cm * span_cm / 8.0;
    let moment_point = point_load_kg * span_cm / 4.0;

    let moment_x =
        MAJOR_AXIS_AMPLIFICATION * (moment_distributed + POINT_MOMENT_IMPACT * moment_point);
    let moment_y = MINOR_AXIS_FRACTION * (moment_distributed + moment_point);

    LoadTerms {
        point_load_kg,
        distributed_load_kgcm: q,
        self_weight_kg: q * span_cm,
        moment_distributed_kgcm: moment_distributed,
        moment_point_kgcm: moment_point,
        moment_x_kgcm: moment_x,
        moment_y_kgcm: moment_y,
    }
}
