//! # Web Stiffener Sizing
//!
//! Decides whether transverse web stiffeners are required (shear-buckling
//! slenderness gate) and, when they are, sizes the plates and lays them
//! out along the span.
//!
//! The sizing sequence follows the Eurocode-adjacent shop practice:
//! plastic shear capacity with γ_M1 = 1.1, spacing from the
//! capacity/demand utilization clamped to the [0.5·h_w, 3·h_w]
//! aspect-ratio band, plate dimensions rounded to fabrication-friendly
//! 10 mm steps.
//!
//! The minimum-inertia comparison in step 4 is informational only: a
//! shortfall is logged, never enforced. Designer follow-up is assumed.

use serde::{Deserialize, Serialize};

use crate::calculations::buckling::slenderness_epsilon;
use crate::materials::STEEL_DENSITY_KG_M3;
use crate::units::{KGF_TO_N, KG_PER_CM2_TO_MPA, MM_PER_CM};

/// Shear-buckling slenderness divisor η
pub const ETA: f64 = 1.2;
/// Partial factor for member buckling resistance γ_M1
pub const GAMMA_M1: f64 = 1.1;
/// Layout runaway guard
const MAX_STIFFENERS: usize = 500;

/// Web stiffener recommendation.
///
/// When `required` is false the sizing fields are zero and `positions_cm`
/// is empty; `web_height_mm` and `epsilon` are always reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StiffenerRecommendation {
    /// Whether stiffening is structurally required
    pub required: bool,
    /// Clear web height h_w (mm)
    pub web_height_mm: f64,
    /// Material slenderness coefficient ε
    pub epsilon: f64,
    /// Recommended stiffener spacing (mm)
    pub spacing_mm: f64,
    /// Number of stiffeners along the span
    pub count: usize,
    /// Stiffener plate width (mm)
    pub plate_width_mm: f64,
    /// Stiffener plate thickness (mm)
    pub plate_thickness_mm: f64,
    /// Minimum required second moment of area (mm⁴)
    pub required_inertia_mm4: f64,
    /// Longitudinal positions from the left support (cm)
    pub positions_cm: Vec<f64>,
    /// Total added stiffener weight (kg)
    pub total_weight_kg: f64,
}

impl StiffenerRecommendation {
    fn not_required(web_height_mm: f64, epsilon: f64) -> Self {
        StiffenerRecommendation {
            required: false,
            web_height_mm,
            epsilon,
            spacing_mm: 0.0,
            count: 0,
            plate_width_mm: 0.0,
            plate_thickness_mm: 0.0,
            required_inertia_mm4: 0.0,
            positions_cm: Vec::new(),
            total_weight_kg: 0.0,
        }
    }
}

fn round_to_10mm(value_mm: f64) -> f64 {
    ((value_mm / 10.0).round() * 10.0).max(10.0)
}

/// Size web stiffeners for one girder web.
///
/// * `web_height_mm` - clear web height h_w = H − t1 − t2
/// * `point_load_kg` / `distributed_load_kgcm` - the per-girder loads
///   producing the support shear reaction
///
/// Never fails; degenerate web geometry produces a not-required block
/// with a logged warning.
pub fn recommend(
    web_height_mm: f64,
    web_thickness_mm: f64,
    span_cm: f64,
    point_load_kg: f64,
    distributed_load_kgcm: f64,
    sigma_yield_kgcm2: f64,
) -> StiffenerRecommendation {
    let epsilon = slenderness_epsilon(sigma_yield_kgcm2);

    if web_height_mm <= 0.0 || web_thickness_mm <= 0.0 {
        log::warn!(
            "stiffener sizing skipped: degenerate web (h_w = {} mm, t_w = {} mm)",
            web_height_mm,
            web_thickness_mm
        );
        return StiffenerRecommendation::not_required(web_height_mm.max(0.0), epsilon);
    }

    let slenderness = web_height_mm / web_thickness_mm;
    let limit = 72.0 * epsilon / ETA;
    if slenderness <= limit {
        return StiffenerRecommendation::not_required(web_height_mm, epsilon);
    }

    // Support reaction: half the point load plus half the distributed
    // load over the span, in newtons.
    let reaction_kg = point_load_kg / 2.0 + distributed_load_kgcm * span_cm / 2.0;
    let demand_n = reaction_kg * KGF_TO_N;

    let fy_mpa = sigma_yield_kgcm2 * KG_PER_CM2_TO_MPA;
    let capacity_n = web_height_mm * web_thickness_mm * fy_mpa / (3.0_f64.sqrt() * GAMMA_M1);

    let utilization = if demand_n > 0.0 {
        capacity_n / demand_n
    } else {
        1.0
    };

    // Aspect-ratio band a/h_w in [0.5, 3.0], then round to 10 mm
    let spacing_mm = round_to_10mm(
        (utilization * web_height_mm).clamp(0.5 * web_height_mm, 3.0 * web_height_mm),
    );

    let plate_width_mm = round_to_10mm((0.1 * web_height_mm).max(80.0));
    let plate_thickness_mm = (0.6 * (fy_mpa / 235.0).sqrt() * web_thickness_mm)
        .round()
        .max(8.0);

    let required_inertia_mm4 = web_height_mm.powi(3) * web_thickness_mm / (10.5 * spacing_mm);
    let provided_inertia_mm4 = plate_width_mm * plate_thickness_mm.powi(3) / 12.0;
    if provided_inertia_mm4 < required_inertia_mm4 {
        log::warn!(
            "stiffener plate inertia {:.0} mm4 below required {:.0} mm4; increase plate size",
            provided_inertia_mm4,
            required_inertia_mm4
        );
    }

    let span_mm = span_cm * MM_PER_CM;
    if spacing_mm >= span_mm {
        // Nothing fits between the supports.
        return StiffenerRecommendation {
            required: false,
            web_height_mm,
            epsilon,
            spacing_mm,
            count: 0,
            plate_width_mm,
            plate_thickness_mm,
            required_inertia_mm4,
            positions_cm: Vec::new(),
            total_weight_kg: 0.0,
        };
    }

    let mut positions_cm = Vec::new();
    let mut index = 1;
    while index <= MAX_STIFFENERS {
        let x_mm = spacing_mm * index as f64;
        if x_mm >= span_mm {
            break;
        }
        positions_cm.push(x_mm / MM_PER_CM);
        index += 1;
    }

    let count = positions_cm.len();
    let plate_weight_kg =
        web_height_mm * plate_width_mm * plate_thickness_mm * STEEL_DENSITY_KG_M3 / 1.0e9;

    StiffenerRecommendation {
        required: true,
        web_height_mm,
        epsilon,
        spacing_mm,
        count,
        plate_width_mm,
        plate_thickness_mm,
        required_inertia_mm4,
        positions_cm,
        total_weight_kg: count as f64 * plate_weight_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_required_below_limit() {
        // h_w/t = 840/15 = 56 vs 72·0.98898/1.2 = 59.3 for SS400
        let rec = recommend(840.0, 15.0, 800.0, 20000.0, 4.8, 2450.0);
        assert!(!rec.required);
        assert_eq!(rec.count, 0);
        assert!(rec.positions_cm.is_empty());
        assert_eq!(rec.spacing_mm, 0.0);
        assert_eq!(rec.total_weight_kg, 0.0);
    }

    #[test]
    fn test_exactly_at_limit_not_required() {
        // The gate is inclusive: slenderness landing exactly on 72ε/1.2
        // stays unstiffened, only exceeding it triggers sizing.
        let limit = 72.0 * slenderness_epsilon(2450.0) / ETA;
        let at_limit = recommend(limit, 1.0, 800.0, 20000.0, 4.8, 2450.0);
        assert!(!at_limit.required);

        let over = recommend(limit + 0.001, 1.0, 800.0, 20000.0, 4.8, 2450.0);
        assert!(over.required);
    }

    #[test]
    fn test_required_above_limit() {
        // h_w/t = 840/6 = 140, about 2.4x the SS400 limit
        let rec = recommend(840.0, 6.0, 800.0, 20000.0, 4.8, 2450.0);
        assert!(rec.required);
        assert!(rec.count >= 2);
        assert_eq!(rec.positions_cm.len(), rec.count);
        assert!(rec.total_weight_kg > 0.0);
    }

    #[test]
    fn test_spacing_within_aspect_band() {
        let rec = recommend(840.0, 6.0, 800.0, 20000.0, 4.8, 2450.0);
        // Clamped band before rounding: [420, 2520]; rounding adds ±5
        assert!(rec.spacing_mm >= 0.5 * 840.0 - 5.0);
        assert!(rec.spacing_mm <= 3.0 * 840.0 + 5.0);
        assert_eq!(rec.spacing_mm % 10.0, 0.0);
    }

    #[test]
    fn test_positions_are_spacing_multiples() {
        let rec = recommend(840.0, 6.0, 800.0, 20000.0, 4.8, 2450.0);
        let spacing_cm = rec.spacing_mm / 10.0;
        for (i, pos) in rec.positions_cm.iter().enumerate() {
            let expected = spacing_cm * (i + 1) as f64;
            assert!((pos - expected).abs() < 1e-9);
            assert!(*pos < 800.0);
        }
    }

    #[test]
    fn test_plate_dimensions() {
        let rec = recommend(840.0, 6.0, 800.0, 20000.0, 4.8, 2450.0);
        // Width: max(0.1·840, 80) = 84 → rounds to 80
        assert_eq!(rec.plate_width_mm, 80.0);
        // Thickness: max(8, round(0.6·√(240.26/235)·6)) = 8
        assert_eq!(rec.plate_thickness_mm, 8.0);
    }

    #[test]
    fn test_short_span_no_fit_reverts() {
        // Slender web but a span shorter than one spacing
        let rec = recommend(840.0, 6.0, 40.0, 20000.0, 4.8, 2450.0);
        assert!(!rec.required);
        assert_eq!(rec.count, 0);
        assert!(rec.positions_cm.is_empty());
        assert_eq!(rec.total_weight_kg, 0.0);
    }

    #[test]
    fn test_degenerate_web_warns_not_panics() {
        let rec = recommend(0.0, 0.0, 800.0, 20000.0, 4.8, 2450.0);
        assert!(!rec.required);
        assert_eq!(rec.count, 0);

        let rec = recommend(840.0, 0.0, 800.0, 20000.0, 4.8, 2450.0);
        assert!(!rec.required);
    }

    #[test]
    fn test_inertia_shortfall_still_produces_result() {
        // Deep thick web forces a large required inertia; the check is
        // informational so the recommendation must still come back.
        let rec = recommend(2000.0, 16.0, 3000.0, 80000.0, 20.0, 2450.0);
        assert!(rec.required);
        assert!(rec.required_inertia_mm4 > 0.0);
        assert!(rec.count > 0);
    }

    #[test]
    fn test_zero_demand_utilization_fallback() {
        // No loads at all: utilization falls back to 1, spacing = h_w
        let rec = recommend(840.0, 6.0, 800.0, 0.0, 0.0, 2450.0);
        assert!(rec.required);
        assert_eq!(rec.spacing_mm, 840.0);
    }

    #[test]
    fn test_weight_matches_count() {
        let rec = recommend(840.0, 6.0, 800.0, 20000.0, 4.8, 2450.0);
        let per_plate =
            840.0 * rec.plate_width_mm * rec.plate_thickness_mm * STEEL_DENSITY_KG_M3 / 1.0e9;
        assert!((rec.total_weight_kg - per_plate * rec.count as f64).abs() < 1e-9);
    }
}
