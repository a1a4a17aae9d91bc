//! # Cross-Section Property Calculator
//!
//! Computes area, centroid, second moments of area and section moduli for
//! built-up crane girder sections by closed-form decomposition into
//! primitive shapes (rectangles and rotated rectangles) and the
//! parallel-axis theorem. Every downstream check depends on Jx/Wx, so this
//! path is exact closed-form throughout - no numerical integration.
//!
//! ## Notation
//!
//! - `F`  = Total cross-sectional area (cm²)
//! - `Yc` = Centroid height above the section bottom (cm)
//! - `Jx` = Second moment of area about the horizontal centroidal axis (cm⁴)
//! - `Jy` = Second moment about the vertical symmetry axis (cm⁴)
//! - `Wx`, `Wy` = Elastic section moduli (cm³)
//!
//! All sections handled here are bilaterally symmetric, so Xc = 0 by
//! construction.

use serde::{Deserialize, Serialize};

/// Structural role of a primitive, used to attribute inertia contributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionComponent {
    /// Bottom flange plate
    BottomFlange,
    /// Top flange or roof plate
    TopFlange,
    /// Vertical or inclined web plate
    Web,
}

/// A primitive shape in the decomposition.
///
/// Local inertia values are about the primitive's own centroidal axes;
/// positions locate that centroid in section coordinates (y above the
/// bottom fiber, x from the symmetry axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub component: SectionComponent,
    /// Area (cm²)
    pub area_cm2: f64,
    /// Centroid height above section bottom (cm)
    pub y_cm: f64,
    /// Centroid offset from the symmetry axis (cm)
    pub x_cm: f64,
    /// Local second moment about the horizontal centroidal axis (cm⁴)
    pub ix_local_cm4: f64,
    /// Local second moment about the vertical centroidal axis (cm⁴)
    pub iy_local_cm4: f64,
}

impl Primitive {
    /// Axis-aligned rectangle of width `w` (horizontal) and height `h`.
    ///
    /// Negative dimensions are clamped to zero so degenerate inputs
    /// contribute nothing instead of producing negative area.
    pub fn rect(component: SectionComponent, w_cm: f64, h_cm: f64, y_cm: f64, x_cm: f64) -> Self {
        let w = w_cm.max(0.0);
        let h = h_cm.max(0.0);
        Primitive {
            component,
            area_cm2: w * h,
            y_cm,
            x_cm,
            ix_local_cm4: w * h.powi(3) / 12.0,
            iy_local_cm4: h * w.powi(3) / 12.0,
        }
    }

    /// Rectangle of length `len` and thickness `t` whose long axis is
    /// rotated by `angle_rad` from the horizontal.
    ///
    /// Local inertia follows the rotated-rectangle formula
    /// I = (b·h³/12)·cos²θ + (h·b³/12)·sin²θ about the horizontal axis,
    /// with sin/cos swapped for the vertical axis.
    pub fn rotated_rect(
        component: SectionComponent,
        len_cm: f64,
        t_cm: f64,
        angle_rad: f64,
        y_cm: f64,
        x_cm: f64,
    ) -> Self {
        let b = len_cm.max(0.0);
        let h = t_cm.max(0.0);
        let (sin, cos) = angle_rad.sin_cos();
        let i_long = b * h.powi(3) / 12.0;
        let i_trans = h * b.powi(3) / 12.0;
        Primitive {
            component,
            area_cm2: b * h,
            y_cm,
            x_cm,
            ix_local_cm4: i_long * cos * cos + i_trans * sin * sin,
            iy_local_cm4: i_long * sin * sin + i_trans * cos * cos,
        }
    }
}

/// Per-component inertia contributions (parallel-axis terms included)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InertiaBreakdown {
    pub bottom_flange_cm4: f64,
    pub top_flange_cm4: f64,
    pub webs_cm4: f64,
}

impl InertiaBreakdown {
    fn add(&mut self, component: SectionComponent, value_cm4: f64) {
        match component {
            SectionComponent::BottomFlange => self.bottom_flange_cm4 += value_cm4,
            SectionComponent::TopFlange => self.top_flange_cm4 += value_cm4,
            SectionComponent::Web => self.webs_cm4 += value_cm4,
        }
    }

    /// Sum of all contributions
    pub fn total_cm4(&self) -> f64 {
        self.bottom_flange_cm4 + self.top_flange_cm4 + self.webs_cm4
    }
}

/// Computed section properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Total area F (cm²)
    pub area_cm2: f64,
    /// Centroid height above the bottom fiber (cm)
    pub centroid_y_cm: f64,
    /// Centroid offset from the symmetry axis (cm) - zero by construction
    pub centroid_x_cm: f64,
    /// Second moment about the horizontal centroidal axis (cm⁴)
    pub jx_cm4: f64,
    /// Second moment about the vertical symmetry axis (cm⁴)
    pub jy_cm4: f64,
    /// Major-axis section modulus (cm³)
    pub wx_cm3: f64,
    /// Minor-axis section modulus (cm³)
    pub wy_cm3: f64,
    /// Jx contributions by component
    pub jx_parts: InertiaBreakdown,
    /// Jy contributions by component
    pub jy_parts: InertiaBreakdown,
}

/// Compute section properties from a primitive decomposition.
///
/// * `total_height_cm` - overall section depth, used for the extreme
///   fiber distance H − Yc.
/// * `wy_half_width_cm` - distance to the extreme fiber for Wy (half the
///   widest relevant flange; varies by beam type).
///
/// Zero-area decompositions are handled without errors: the centroid
/// divisor falls back to 1 and the moduli degrade to zero.
pub fn compute(
    primitives: &[Primitive],
    total_height_cm: f64,
    wy_half_width_cm: f64,
) -> SectionProperties {
    let area: f64 = primitives.iter().map(|p| p.area_cm2).sum();
    let first_moment: f64 = primitives.iter().map(|p| p.area_cm2 * p.y_cm).sum();

    let divisor = if area == 0.0 { 1.0 } else { area };
    let yc = first_moment / divisor;

    let mut jx = 0.0;
    let mut jy = 0.0;
    let mut jx_parts = InertiaBreakdown::default();
    let mut jy_parts = InertiaBreakdown::default();

    for p in primitives {
        let dx = p.ix_local_cm4 + p.area_cm2 * (p.y_cm - yc).powi(2);
        let dy = p.iy_local_cm4 + p.area_cm2 * p.x_cm.powi(2);
        jx += dx;
        jy += dy;
        jx_parts.add(p.component, dx);
        jy_parts.add(p.component, dy);
    }

    let fiber_x = yc.max(total_height_cm - yc);
    let wx = if fiber_x > 0.0 { jx / fiber_x } else { jx };
    let wy = if wy_half_width_cm > 0.0 {
        jy / wy_half_width_cm
    } else {
        jy
    };

    SectionProperties {
        area_cm2: area,
        centroid_y_cm: yc,
        centroid_x_cm: 0.0,
        jx_cm4: jx,
        jy_cm4: jy,
        wx_cm3: wx,
        wy_cm3: wy,
        jx_parts,
        jy_parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_single_rectangle_no_offset_term() {
        // A section made of one primitive has its centroid at the
        // primitive's centroid, so Jx equals the local inertia alone.
        let rect = Primitive::rect(SectionComponent::Web, 2.0, 10.0, 5.0, 0.0);
        let props = compute(&[rect], 10.0, 1.0);

        assert!(approx_eq(props.area_cm2, 20.0, 1e-9));
        assert!(approx_eq(props.centroid_y_cm, 5.0, 1e-9));
        // I = bh³/12 = 2·1000/12
        assert!(approx_eq(props.jx_cm4, 2.0 * 1000.0 / 12.0, 1e-9));
        assert!(approx_eq(props.jx_cm4, rect.ix_local_cm4, 1e-9));
    }

    #[test]
    fn test_parallel_axis_two_flanges() {
        // Two 10x1 flanges 10 cm apart (centers at y=0.5 and y=10.5):
        // Yc = 5.5, each contributes 10/12 + 10·25
        let bottom = Primitive::rect(SectionComponent::BottomFlange, 10.0, 1.0, 0.5, 0.0);
        let top = Primitive::rect(SectionComponent::TopFlange, 10.0, 1.0, 10.5, 0.0);
        let props = compute(&[bottom, top], 11.0, 5.0);

        assert!(approx_eq(props.centroid_y_cm, 5.5, 1e-9));
        let expected = 2.0 * (10.0 / 12.0 + 10.0 * 25.0);
        assert!(approx_eq(props.jx_cm4, expected, 1e-9));
        assert!(approx_eq(
            props.jx_parts.bottom_flange_cm4,
            props.jx_parts.top_flange_cm4,
            1e-9
        ));
        assert!(approx_eq(props.jx_parts.total_cm4(), props.jx_cm4, 1e-9));
    }

    #[test]
    fn test_rotated_rect_limits() {
        // At 0° the rotated formula collapses to bh³/12; at 90° to hb³/12.
        let flat = Primitive::rotated_rect(SectionComponent::Web, 10.0, 1.0, 0.0, 0.0, 0.0);
        assert!(approx_eq(flat.ix_local_cm4, 10.0 / 12.0, 1e-9));
        assert!(approx_eq(flat.iy_local_cm4, 1000.0 / 12.0, 1e-9));

        let upright = Primitive::rotated_rect(
            SectionComponent::Web,
            10.0,
            1.0,
            std::f64::consts::FRAC_PI_2,
            0.0,
            0.0,
        );
        assert!(approx_eq(upright.ix_local_cm4, 1000.0 / 12.0, 1e-9));
        assert!(approx_eq(upright.iy_local_cm4, 10.0 / 12.0, 1e-9));
    }

    #[test]
    fn test_negative_dimensions_clamped() {
        let rect = Primitive::rect(SectionComponent::Web, -5.0, 10.0, 0.0, 0.0);
        assert_eq!(rect.area_cm2, 0.0);
        assert_eq!(rect.ix_local_cm4, 0.0);
    }

    #[test]
    fn test_empty_section_does_not_divide_by_zero() {
        let props = compute(&[], 0.0, 0.0);
        assert_eq!(props.area_cm2, 0.0);
        assert_eq!(props.centroid_y_cm, 0.0);
        assert_eq!(props.jx_cm4, 0.0);
        assert_eq!(props.wx_cm3, 0.0);
        assert!(props.centroid_y_cm.is_finite());
    }

    #[test]
    fn test_jy_uses_x_offset() {
        // Two webs at x = ±10: Jy dominated by A·x²
        let left = Primitive::rect(SectionComponent::Web, 1.0, 10.0, 5.0, -10.0);
        let right = Primitive::rect(SectionComponent::Web, 1.0, 10.0, 5.0, 10.0);
        let props = compute(&[left, right], 10.0, 10.0);

        let expected = 2.0 * (10.0 / 12.0 + 10.0 * 100.0);
        assert!(approx_eq(props.jy_cm4, expected, 1e-9));
        assert!(approx_eq(props.wy_cm3, expected / 10.0, 1e-9));
    }
}
