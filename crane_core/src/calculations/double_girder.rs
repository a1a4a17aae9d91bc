//! # Double-Girder Bridge Calculation
//!
//! Twin box girders sharing the crane load equally, tied by transversal
//! cross-members whose weight enters as a user-supplied distributed load.
//!
//! The combined section is built by placing two full girder primitive
//! sets at ±s/2 about the bridge centerline (s = girder-center spacing),
//! so F, Jx and Wx come out exactly twice the single-girder values and
//! Jy/Wy pick up the parallel-axis spacing term. Reported loads and
//! moments are bridge totals; stresses and deflection are identical to
//! the per-girder values because demand and resistance double together.

use serde::{Deserialize, Serialize};

use crate::calculations::buckling::{plate_buckling_factor, slenderness_epsilon, INTERNAL_LIMIT};
use crate::calculations::girder::{deflection, fiber_stresses, girder_primitives};
use crate::calculations::{
    loads, stiffener, BeamInputs, BeamType, CalculationResults, SafetyFactor,
};
use crate::errors::CalcResult;
use crate::section;
use crate::units::MM_PER_CM;

/// Inputs for the double-girder bridge.
///
/// The girder geometry and loads describe the whole bridge; the point
/// loads are split equally between the girders internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleBeamInputs {
    /// Geometry, span, loads and material of one girder
    pub beam: BeamInputs,
    /// Center-to-center spacing between the two girders (cm)
    pub girder_spacing_cm: f64,
    /// Transversal cross-member load shared by the girders (kg/m)
    pub transversal_load_kgm: f64,
}

impl DoubleBeamInputs {
    /// Validate input parameters (see [`BeamInputs::validate`]).
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate()?;
        for (field, value) in [
            ("girder_spacing_cm", self.girder_spacing_cm),
            ("transversal_load_kgm", self.transversal_load_kgm),
        ] {
            if value < 0.0 {
                return Err(crate::errors::CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Calculate a double-girder bridge.
///
/// Pure and infallible, like the single-girder path it delegates to.
pub fn calculate_double_beam_properties(inputs: &DoubleBeamInputs) -> CalculationResults {
    let beam = &inputs.beam;
    let offset_cm = (inputs.girder_spacing_cm / 2.0).max(0.0);

    // Two full girders at ±s/2; each girder is internally symmetric, so
    // this is exactly the parallel-axis combination of the per-girder Jy.
    let mut primitives = girder_primitives(beam, BeamType::SingleGirder, -offset_cm);
    primitives.extend(girder_primitives(beam, BeamType::SingleGirder, offset_cm));

    let h_cm = (beam.total_height_mm / MM_PER_CM).max(0.0);
    let flange_half_cm = (beam.bottom_flange_width_mm.max(beam.top_flange_width_mm)
        / MM_PER_CM
        / 2.0)
        .max(0.0);
    let props = section::compute(&primitives, h_cm, offset_cm + flange_half_cm);

    // Bridge totals: full point load, both girders' self-weight (already
    // in the combined area) plus the full transversal load in kg/cm.
    let transversal_kgcm = inputs.transversal_load_kgm / 100.0;
    let terms = loads::resolve(
        props.area_cm2,
        beam.span_cm,
        beam.point_load_kg(),
        transversal_kgcm,
    );

    let material = beam.material.properties();
    let stress = fiber_stresses(&terms, &props, h_cm);
    let deflection = deflection(
        &terms,
        props.jx_cm4,
        material.e_kgcm2,
        beam.span_cm,
        BeamType::DoubleGirder,
    );

    // The rail sits on the top flange here: check the internal top-flange
    // panel between the webs, overriding nothing else.
    let epsilon = slenderness_epsilon(material.sigma_yield_kgcm2);
    let buckling_check = plate_buckling_factor(
        beam.web_spacing_mm,
        beam.top_flange_thickness_mm,
        INTERNAL_LIMIT,
        epsilon,
    );

    // The web being stiffened belongs to one girder: half the loads.
    let stiffener = stiffener::recommend(
        beam.total_height_mm - beam.bottom_flange_thickness_mm - beam.top_flange_thickness_mm,
        beam.web_thickness_mm,
        beam.span_cm,
        terms.point_load_kg / 2.0,
        terms.distributed_load_kgcm / 2.0,
        material.sigma_yield_kgcm2,
    );

    CalculationResults {
        beam_type: BeamType::DoubleGirder,
        stress_check: SafetyFactor::from_ratio(material.sigma_allow_kgcm2, stress.combined_kgcm2),
        deflection_check: SafetyFactor::from_ratio(deflection.allowable_cm, deflection.actual_cm),
        buckling_check,
        section: props,
        loads: terms,
        stress,
        deflection,
        stiffener,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::girder::calculate_beam_properties;
    use crate::materials::Material;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn bridge() -> DoubleBeamInputs {
        DoubleBeamInputs {
            beam: BeamInputs {
                bottom_flange_width_mm: 600.0,
                total_height_mm: 900.0,
                bottom_flange_thickness_mm: 30.0,
                top_flange_thickness_mm: 30.0,
                web_thickness_mm: 15.0,
                web_spacing_mm: 400.0,
                top_flange_width_mm: 600.0,
                span_cm: 800.0,
                wheel_base_cm: 150.0,
                end_taper_cm: 60.0,
                hoist_load_kg: 15000.0,
                trolley_load_kg: 5000.0,
                material: Material::default(),
            },
            girder_spacing_cm: 120.0,
            transversal_load_kgm: 0.0,
        }
    }

    #[test]
    fn test_exact_doubling_against_half_loaded_single() {
        // With zero transversal load, F, Jx, Wx and M_x must each be
        // exactly twice the single-girder values at half the point loads.
        let double = calculate_double_beam_properties(&bridge());

        let mut half = bridge().beam;
        half.hoist_load_kg /= 2.0;
        half.trolley_load_kg /= 2.0;
        let single = calculate_beam_properties(&half, BeamType::SingleGirder);

        assert!(approx_eq(
            double.section.area_cm2,
            2.0 * single.section.area_cm2,
            1e-12
        ));
        assert!(approx_eq(
            double.section.jx_cm4,
            2.0 * single.section.jx_cm4,
            1e-12
        ));
        assert!(approx_eq(
            double.section.wx_cm3,
            2.0 * single.section.wx_cm3,
            1e-12
        ));
        assert!(approx_eq(
            double.loads.moment_x_kgcm,
            2.0 * single.loads.moment_x_kgcm,
            1e-12
        ));
    }

    #[test]
    fn test_jy_parallel_axis_combination() {
        let double = calculate_double_beam_properties(&bridge());
        let single = calculate_beam_properties(&bridge().beam, BeamType::SingleGirder);

        // Jy = 2(Jy_girder + F_girder·(s/2)²)
        let offset = 60.0;
        let expected = 2.0 * (single.section.jy_cm4 + single.section.area_cm2 * offset * offset);
        assert!(approx_eq(double.section.jy_cm4, expected, 1e-12));

        // Wy extreme fiber at s/2 + widest flange half
        assert!(approx_eq(
            double.section.wy_cm3,
            expected / (offset + 30.0),
            1e-12
        ));
    }

    #[test]
    fn test_per_girder_stress_and_deflection_unchanged() {
        // Demand and resistance double together, so the fiber stresses
        // and deflection match the half-loaded single girder.
        let double = calculate_double_beam_properties(&bridge());

        let mut half = bridge().beam;
        half.hoist_load_kg /= 2.0;
        half.trolley_load_kg /= 2.0;
        let single = calculate_beam_properties(&half, BeamType::SingleGirder);

        assert!(approx_eq(
            double.stress.compression_kgcm2,
            single.stress.compression_kgcm2,
            1e-12
        ));
        assert!(approx_eq(
            double.deflection.actual_cm,
            single.deflection.actual_cm,
            1e-12
        ));
    }

    #[test]
    fn test_transversal_load_enters_distributed() {
        let mut inputs = bridge();
        inputs.transversal_load_kgm = 250.0;
        let with = calculate_double_beam_properties(&inputs);
        let without = calculate_double_beam_properties(&bridge());

        // 250 kg/m = 2.5 kg/cm over the bridge
        assert!(approx_eq(
            with.loads.distributed_load_kgcm - without.loads.distributed_load_kgcm,
            2.5,
            1e-12
        ));
        assert!(with.deflection.actual_cm > without.deflection.actual_cm);
    }

    #[test]
    fn test_top_flange_buckling_override() {
        // Internal 42ε check on b1/t2 = 400/30
        let result = calculate_double_beam_properties(&bridge());
        assert!(approx_eq(result.buckling_check.factor, 3.115, 0.01));
    }

    #[test]
    fn test_beam_type_tag() {
        let result = calculate_double_beam_properties(&bridge());
        assert_eq!(result.beam_type, BeamType::DoubleGirder);
        // L/1000 limit like the single girder
        assert!(approx_eq(result.deflection.allowable_cm, 0.8, 1e-12));
    }

    #[test]
    fn test_validate_rejects_negative_spacing() {
        let mut inputs = bridge();
        inputs.girder_spacing_cm = -10.0;
        assert!(inputs.validate().is_err());
        assert!(bridge().validate().is_ok());
    }
}
