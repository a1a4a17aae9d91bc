//! # Single-Girder / I-Beam Bridge Calculation
//!
//! The reference analytical path for the box-girder and rolled-I-beam
//! bridge families. The double-girder variant reuses everything here with
//! a combined twin-girder primitive set (see
//! [`crate::calculations::double_girder`]).
//!
//! ## Sign Convention
//!
//! Sagging bending with the load on the top flange: the compression fiber
//! is the top (H − Yc above the centroid), the tension fiber the bottom.
//! The V-beam family inverts this - see [`crate::calculations::v_beam`].

use crate::calculations::buckling::{
    plate_buckling_factor, slenderness_epsilon, INTERNAL_LIMIT, OUTSTAND_LIMIT,
};
use crate::calculations::{
    loads, stiffener, BeamInputs, BeamType, CalculationResults, DeflectionResults, LoadTerms,
    SafetyFactor, StressResults,
};
use crate::section::{self, Primitive, SectionComponent, SectionProperties};
use crate::units::MM_PER_CM;

/// Build the primitive decomposition of one girder cross-section, in cm,
/// with an optional horizontal shift of the whole girder (used by the
/// double-girder combination).
pub(crate) fn girder_primitives(
    inputs: &BeamInputs,
    beam_type: BeamType,
    x_shift_cm: f64,
) -> Vec<Primitive> {
    let b = (inputs.bottom_flange_width_mm / MM_PER_CM).max(0.0);
    let h = (inputs.total_height_mm / MM_PER_CM).max(0.0);
    let t1 = (inputs.bottom_flange_thickness_mm / MM_PER_CM).max(0.0);
    let t2 = (inputs.top_flange_thickness_mm / MM_PER_CM).max(0.0);
    let t3 = (inputs.web_thickness_mm / MM_PER_CM).max(0.0);
    let b1 = (inputs.web_spacing_mm / MM_PER_CM).max(0.0);
    let b3 = (inputs.top_flange_width_mm / MM_PER_CM).max(0.0);
    let hw = (h - t1 - t2).max(0.0);

    let mut primitives = vec![
        Primitive::rect(SectionComponent::BottomFlange, b, t1, t1 / 2.0, x_shift_cm),
        Primitive::rect(
            SectionComponent::TopFlange,
            b3,
            t2,
            h - t2 / 2.0,
            x_shift_cm,
        ),
    ];

    let web_y = t1 + hw / 2.0;
    if beam_type == BeamType::IBeam {
        // Rolled section: one central web
        primitives.push(Primitive::rect(
            SectionComponent::Web,
            t3,
            hw,
            web_y,
            x_shift_cm,
        ));
    } else {
        // Built-up box: twin webs just outside the clear spacing b1
        let web_x = (b1 + t3) / 2.0;
        primitives.push(Primitive::rect(
            SectionComponent::Web,
            t3,
            hw,
            web_y,
            x_shift_cm - web_x,
        ));
        primitives.push(Primitive::rect(
            SectionComponent::Web,
            t3,
            hw,
            web_y,
            x_shift_cm + web_x,
        ));
    }

    primitives
}

/// Extreme fiber stresses for sagging bending with compression on top.
pub(crate) fn fiber_stresses(
    terms: &LoadTerms,
    props: &SectionProperties,
    total_height_cm: f64,
) -> StressResults {
    let wx = if props.wx_cm3 > 0.0 { props.wx_cm3 } else { 1.0 };
    let wy = if props.wy_cm3 > 0.0 { props.wy_cm3 } else { 1.0 };
    let combined = terms.moment_x_kgcm / wx + terms.moment_y_kgcm / wy;

    let jx = if props.jx_cm4 > 0.0 { props.jx_cm4 } else { 1.0 };
    let top = terms.moment_x_kgcm * (total_height_cm - props.centroid_y_cm) / jx;
    let bottom = terms.moment_x_kgcm * props.centroid_y_cm / jx;

    StressResults {
        combined_kgcm2: combined,
        compression_kgcm2: top,
        tension_kgcm2: bottom,
    }
}

/// Mid-span deflection by superposition of the uniform-load and
/// mid-span point-load formulas, with the allowable span-ratio limit.
pub(crate) fn deflection(
    terms: &LoadTerms,
    jx_cm4: f64,
    e_kgcm2: f64,
    span_cm: f64,
    beam_type: BeamType,
) -> DeflectionResults {
    let rigidity = e_kgcm2 * jx_cm4;
    let divisor = if rigidity > 0.0 { rigidity } else { 1.0 };

    let from_distributed =
        5.0 * terms.distributed_load_kgcm * span_cm.powi(4) / (384.0 * divisor);
    let from_point = terms.point_load_kg * span_cm.powi(3) / (48.0 * divisor);

    DeflectionResults {
        actual_cm: from_distributed + from_point,
        allowable_cm: span_cm / beam_type.deflection_limit_divisor(),
    }
}

/// Calculate a single-girder or I-beam bridge.
///
/// `mode` selects the shape family; `DoubleGirder`/`VBeam` passed here
/// fall back to the single-girder formulas (their dedicated entry points
/// live in their own modules), and the result is tagged with the family
/// that produced it.
///
/// This is a pure function: it never fails, and degenerate geometry
/// degrades to zeroed properties with infinite (passing) safety factors.
pub fn calculate_beam_properties(inputs: &BeamInputs, mode: BeamType) -> CalculationResults {
    calculate_girder(inputs, mode, 0.0)
}

/// Shared girder path with an extra distributed load term (the
/// double-girder transversal share; zero for the plain variants).
pub(crate) fn calculate_girder(
    inputs: &BeamInputs,
    mode: BeamType,
    extra_distributed_kgcm: f64,
) -> CalculationResults {
    let beam_type = if mode == BeamType::IBeam {
        BeamType::IBeam
    } else {
        BeamType::SingleGirder
    };

    let h_cm = (inputs.total_height_mm / MM_PER_CM).max(0.0);
    let half_width_cm = (inputs.bottom_flange_width_mm.max(inputs.top_flange_width_mm)
        / MM_PER_CM
        / 2.0)
        .max(0.0);

    let primitives = girder_primitives(inputs, beam_type, 0.0);
    let props = section::compute(&primitives, h_cm, half_width_cm);

    let terms = loads::resolve(
        props.area_cm2,
        inputs.span_cm,
        inputs.point_load_kg(),
        extra_distributed_kgcm,
    );

    let material = inputs.material.properties();
    let stress = fiber_stresses(&terms, &props, h_cm);
    let deflection = deflection(
        &terms,
        props.jx_cm4,
        material.e_kgcm2,
        inputs.span_cm,
        beam_type,
    );

    let epsilon = slenderness_epsilon(material.sigma_yield_kgcm2);
    let buckling_check = match beam_type {
        // Outstand half-flange of the rolled section
        BeamType::IBeam => plate_buckling_factor(
            (inputs.top_flange_width_mm - inputs.web_thickness_mm).max(0.0) / 2.0,
            inputs.top_flange_thickness_mm,
            OUTSTAND_LIMIT,
            epsilon,
        ),
        // Internal top-flange panel between the twin webs
        _ => plate_buckling_factor(
            inputs.web_spacing_mm,
            inputs.top_flange_thickness_mm,
            INTERNAL_LIMIT,
            epsilon,
        ),
    };

    let stiffener = stiffener::recommend(
        inputs.total_height_mm - inputs.bottom_flange_thickness_mm
            - inputs.top_flange_thickness_mm,
        inputs.web_thickness_mm,
        inputs.span_cm,
        terms.point_load_kg,
        terms.distributed_load_kgcm,
        material.sigma_yield_kgcm2,
    );

    CalculationResults {
        beam_type,
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
