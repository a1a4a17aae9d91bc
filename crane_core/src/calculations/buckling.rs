//! # Local Plate Buckling Verifier
//!
//! Eurocode Class-3-limit style width/thickness slenderness check for the
//! representative compression element of each beam family.
//!
//! The material slenderness coefficient ε = √(235 / f_y[MPa]) normalizes
//! the class limits to the steel's yield strength; yield stays in kg/cm²
//! at the API surface and converts internally.

use crate::calculations::SafetyFactor;
use crate::units::KG_PER_CM2_TO_MPA;

/// Class-3 limit coefficient for outstand compression flanges (14ε)
pub const OUTSTAND_LIMIT: f64 = 14.0;
/// Class-3 limit coefficient for internal compression elements (42ε)
pub const INTERNAL_LIMIT: f64 = 42.0;

/// Material slenderness coefficient ε = √(235 / f_y[MPa]).
///
/// Non-positive yield degrades to ε = 1 instead of dividing by zero.
pub fn slenderness_epsilon(sigma_yield_kgcm2: f64) -> f64 {
    let fy_mpa = sigma_yield_kgcm2 * KG_PER_CM2_TO_MPA;
    if fy_mpa <= 0.0 {
        1.0
    } else {
        (235.0 / fy_mpa).sqrt()
    }
}

/// Plate buckling safety factor: K = (limit·ε) / (width/thickness).
///
/// A zero-thickness element has no slenderness demand and reports an
/// infinite factor (automatic pass).
pub fn plate_buckling_factor(
    width_mm: f64,
    thickness_mm: f64,
    limit_coefficient: f64,
    epsilon: f64,
) -> SafetyFactor {
    if thickness_mm <= 0.0 {
        return SafetyFactor::from_ratio(limit_coefficient * epsilon, 0.0);
    }
    let ratio = width_mm.max(0.0) / thickness_mm;
    SafetyFactor::from_ratio(limit_coefficient * epsilon, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_reference_steel() {
        // f_y = 235 MPa exactly gives ε = 1
        let fy_kgcm2 = 235.0 / KG_PER_CM2_TO_MPA;
        assert!((slenderness_epsilon(fy_kgcm2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_epsilon_ss400() {
        // 2450 kg/cm² ≈ 240.26 MPa → ε ≈ 0.98898
        let eps = slenderness_epsilon(2450.0);
        assert!((eps - 0.98898).abs() < 1e-4);
    }

    #[test]
    fn test_epsilon_zero_yield_guard() {
        assert_eq!(slenderness_epsilon(0.0), 1.0);
        assert_eq!(slenderness_epsilon(-10.0), 1.0);
    }

    #[test]
    fn test_internal_element_factor() {
        // b1 = 400, t2 = 30, SS400: ratio 13.33 vs 42·0.98898 = 41.54
        let eps = slenderness_epsilon(2450.0);
        let check = plate_buckling_factor(400.0, 30.0, INTERNAL_LIMIT, eps);
        assert!(check.is_pass());
        assert!((check.factor - 3.115).abs() < 0.01);
    }

    #[test]
    fn test_outstand_element_fails_when_slender() {
        let eps = slenderness_epsilon(2450.0);
        // 300 mm outstand on a 10 mm flange: ratio 30 > 14ε
        let check = plate_buckling_factor(300.0, 10.0, OUTSTAND_LIMIT, eps);
        assert!(!check.is_pass());
    }

    #[test]
    fn test_zero_thickness_is_automatic_pass() {
        let check = plate_buckling_factor(400.0, 0.0, INTERNAL_LIMIT, 1.0);
        assert!(check.factor.is_infinite());
        assert!(check.is_pass());
    }
}
