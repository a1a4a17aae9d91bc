//! # V-Beam Bridge Calculation
//!
//! Asymmetric V-section bridge: a bottom flange carrying the trolley
//! rails, a central vertical web, two webs inclined 30° from vertical and
//! two roof plates rising 10° from horizontal to an apex on the axis of
//! symmetry.
//!
//! ## Sign Convention (inverted)
//!
//! The load hangs from the bottom flange, so the fiber roles swap
//! relative to the girder families: the bottom fiber (Yc from the
//! centroid) is the compression fiber and the top fiber (H − Yc) the
//! tension fiber. This is intentional and covered by a dedicated test.

use serde::{Deserialize, Serialize};

use crate::calculations::buckling::{plate_buckling_factor, slenderness_epsilon, OUTSTAND_LIMIT};
use crate::calculations::girder::deflection;
use crate::calculations::{
    loads, stiffener, BeamInputs, BeamType, CalculationResults, SafetyFactor, StressResults,
};
use crate::errors::{CalcError, CalcResult};
use crate::section::{self, Primitive, SectionComponent};
use crate::units::MM_PER_CM;

/// Fixed inclination of the V webs from vertical (degrees)
pub const WEB_ANGLE_DEG: f64 = 30.0;
/// Fixed roof plate rise from horizontal (degrees)
pub const ROOF_ANGLE_DEG: f64 = 10.0;

/// Inputs for the V-beam bridge: the shared beam record plus the
/// V-specific structural parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VBeamInputs {
    /// Shared geometry, span, loads and material.
    /// `web_thickness_mm` is used for both the central and inclined webs;
    /// the top flange fields of the base record are not used here.
    pub beam: BeamInputs,
    /// Central vertical web height (mm)
    pub central_web_height_mm: f64,
    /// Inclined web plate length (mm)
    pub inclined_web_length_mm: f64,
    /// Roof plate thickness (mm)
    pub roof_thickness_mm: f64,
}

impl VBeamInputs {
    /// Validate input parameters (see [`BeamInputs::validate`]).
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate()?;
        for (field, value) in [
            ("central_web_height_mm", self.central_web_height_mm),
            ("inclined_web_length_mm", self.inclined_web_length_mm),
            ("roof_thickness_mm", self.roof_thickness_mm),
        ] {
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

/// Geometry of the V section derived from the inputs, in cm.
/// Shared between the property calculation and the geometry builder.
pub(crate) struct VSection {
    pub b_cm: f64,
    pub t1_cm: f64,
    pub t3_cm: f64,
    pub central_height_cm: f64,
    pub incline_len_cm: f64,
    pub roof_t_cm: f64,
    /// Vertical extent of an inclined web
    pub web_rise_cm: f64,
    /// x of a web's top (inner line), from the symmetry axis
    pub apex_run_cm: f64,
    /// Roof plate midline length
    pub roof_len_cm: f64,
    /// Roof rise from web top to apex
    pub roof_rise_cm: f64,
}

impl VSection {
    pub(crate) fn from_inputs(inputs: &VBeamInputs) -> Self {
        let web_angle = WEB_ANGLE_DEG.to_radians();
        let roof_angle = ROOF_ANGLE_DEG.to_radians();

        let b_cm = (inputs.beam.bottom_flange_width_mm / MM_PER_CM).max(0.0);
        let t1_cm = (inputs.beam.bottom_flange_thickness_mm / MM_PER_CM).max(0.0);
        let t3_cm = (inputs.beam.web_thickness_mm / MM_PER_CM).max(0.0);
        let central_height_cm = (inputs.central_web_height_mm / MM_PER_CM).max(0.0);
        let incline_len_cm = (inputs.inclined_web_length_mm / MM_PER_CM).max(0.0);
        let roof_t_cm = (inputs.roof_thickness_mm / MM_PER_CM).max(0.0);

        let web_rise_cm = incline_len_cm * web_angle.cos();
        // Webs rise inward from the bottom flange edges toward the apex
        let apex_run_cm = (b_cm / 2.0 - incline_len_cm * web_angle.sin()).max(0.0);
        let roof_len_cm = apex_run_cm / roof_angle.cos();
        let roof_rise_cm = apex_run_cm * roof_angle.tan();

        VSection {
            b_cm,
            t1_cm,
            t3_cm,
            central_height_cm,
            incline_len_cm,
            roof_t_cm,
            web_rise_cm,
            apex_run_cm,
            roof_len_cm,
            roof_rise_cm,
        }
    }

    /// Primitive decomposition for the property calculation
    pub(crate) fn primitives(&self) -> Vec<Primitive> {
        let web_angle_from_horizontal = (90.0 - WEB_ANGLE_DEG).to_radians();
        let roof_angle = ROOF_ANGLE_DEG.to_radians();

        // Midline center of an inclined web: halfway between its base at
        // the flange edge and its top at apex_run
        let incline_x = (self.b_cm / 2.0 + self.apex_run_cm) / 2.0;
        let incline_y = self.t1_cm + self.web_rise_cm / 2.0;

        let roof_x = self.apex_run_cm / 2.0;
        let roof_y = self.t1_cm + self.web_rise_cm + self.roof_rise_cm / 2.0;

        vec![
            Primitive::rect(
                SectionComponent::BottomFlange,
                self.b_cm,
                self.t1_cm,
                self.t1_cm / 2.0,
                0.0,
            ),
            Primitive::rect(
                SectionComponent::Web,
                self.t3_cm,
                self.central_height_cm,
                self.t1_cm + self.central_height_cm / 2.0,
                0.0,
            ),
            Primitive::rotated_rect(
                SectionComponent::Web,
                self.incline_len_cm,
                self.t3_cm,
                web_angle_from_horizontal,
                incline_y,
                -incline_x,
            ),
            Primitive::rotated_rect(
                SectionComponent::Web,
                self.incline_len_cm,
                self.t3_cm,
                web_angle_from_horizontal,
                incline_y,
                incline_x,
            ),
            Primitive::rotated_rect(
                SectionComponent::TopFlange,
                self.roof_len_cm,
                self.roof_t_cm,
                roof_angle,
                roof_y,
                -roof_x,
            ),
            Primitive::rotated_rect(
                SectionComponent::TopFlange,
                self.roof_len_cm,
                self.roof_t_cm,
                roof_angle,
                roof_y,
                roof_x,
            ),
        ]
    }
}

/// Calculate a V-beam bridge. Pure and infallible like the other
/// variants.
pub fn calculate_v_beam_properties(inputs: &VBeamInputs) -> CalculationResults {
    let beam = &inputs.beam;
    let v = VSection::from_inputs(inputs);

    let h_cm = (beam.total_height_mm / MM_PER_CM).max(0.0);
    let props = section::compute(&v.primitives(), h_cm, v.b_cm / 2.0);

    let terms = loads::resolve(props.area_cm2, beam.span_cm, beam.point_load_kg(), 0.0);

    let material = beam.material.properties();

    // Load on the bottom flange: compression at the bottom fiber,
    // tension at the top.
    let wx = if props.wx_cm3 > 0.0 { props.wx_cm3 } else { 1.0 };
    let wy = if props.wy_cm3 > 0.0 { props.wy_cm3 } else { 1.0 };
    let jx = if props.jx_cm4 > 0.0 { props.jx_cm4 } else { 1.0 };
    let stress = StressResults {
        combined_kgcm2: terms.moment_x_kgcm / wx + terms.moment_y_kgcm / wy,
        compression_kgcm2: terms.moment_x_kgcm * props.centroid_y_cm / jx,
        tension_kgcm2: terms.moment_x_kgcm * (h_cm - props.centroid_y_cm) / jx,
    };

    let deflection = deflection(
        &terms,
        props.jx_cm4,
        material.e_kgcm2,
        beam.span_cm,
        BeamType::VBeam,
    );

    // Outstand beside the central web on the (compressed) bottom flange
    let epsilon = slenderness_epsilon(material.sigma_yield_kgcm2);
    let buckling_check = plate_buckling_factor(
        (beam.bottom_flange_width_mm - beam.web_thickness_mm).max(0.0) / 2.0,
        beam.bottom_flange_thickness_mm,
        OUTSTAND_LIMIT,
        epsilon,
    );

    let stiffener = stiffener::recommend(
        beam.total_height_mm - beam.bottom_flange_thickness_mm - inputs.roof_thickness_mm,
        beam.web_thickness_mm,
        beam.span_cm,
        terms.point_load_kg,
        terms.distributed_load_kgcm,
        material.sigma_yield_kgcm2,
    );

    CalculationResults {
        beam_type: BeamType::VBeam,
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
