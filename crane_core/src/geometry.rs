//! # Cross Section Geometry
//!
//! 2D plate outlines of the bridge cross sections for rendering and
//! export. Coordinates are in mm, x measured from the axis of symmetry
//! and y upward from the underside of the bottom flange.
//!
//! The outlines share the clamping rules of the property calculations:
//! negative dimensions collapse to zero and the V-beam roof run clamps
//! at the axis when the inclined webs would cross it.

use serde::{Deserialize, Serialize};

use crate::calculations::v_beam::{VBeamInputs, VSection, ROOF_ANGLE_DEG, WEB_ANGLE_DEG};
use crate::calculations::{BeamInputs, BeamType};
use crate::units::MM_PER_CM;

/// Which plate of the section a polygon outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonRole {
    BottomFlange,
    TopFlange,
    WebLeft,
    WebRight,
    CentralWeb,
    VWebLeft,
    VWebRight,
    RoofLeft,
    RoofRight,
}

/// A 2D point in section coordinates (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// One plate outline, counterclockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPolygon {
    pub role: PolygonRole,
    pub points: Vec<Point>,
}

/// Axis-aligned bounding box of a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Complete outline set for one cross section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionGeometry {
    pub beam_type: BeamType,
    pub polygons: Vec<SectionPolygon>,
    pub bounds: Bounds,
}

fn bounds_of(polygons: &[SectionPolygon]) -> Bounds {
    let mut b = Bounds {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    for poly in polygons {
        for p in &poly.points {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
    }
    if b.min_x > b.max_x {
        Bounds {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    } else {
        b
    }
}

fn rect(role: PolygonRole, center_x: f64, y_bottom: f64, width: f64, height: f64) -> SectionPolygon {
    let w = width.max(0.0);
    let h = height.max(0.0);
    let x0 = center_x - w / 2.0;
    let x1 = center_x + w / 2.0;
    SectionPolygon {
        role,
        points: vec![
            Point::new(x0, y_bottom),
            Point::new(x1, y_bottom),
            Point::new(x1, y_bottom + h),
            Point::new(x0, y_bottom + h),
        ],
    }
}

/// Intersection of two lines given as point + direction. Falls back to
/// the first point when the lines are parallel.
fn line_intersection(p1: Point, d1: (f64, f64), p2: Point, d2: (f64, f64)) -> Point {
    let det = d1.0 * d2.1 - d1.1 * d2.0;
    if det.abs() < 1e-9 {
        return p1;
    }
    let t = ((p2.x - p1.x) * d2.1 - (p2.y - p1.y) * d2.0) / det;
    Point::new(p1.x + t * d1.0, p1.y + t * d1.1)
}

/// Build the plate outlines of a girder-family section.
///
/// Single and double girder share the box shape (a double girder draws
/// one of its two identical girders); the I-beam replaces the twin webs
/// with one central web.
pub fn build_cross_section_geometry(inputs: &BeamInputs, beam_type: BeamType) -> CrossSectionGeometry {
    let b = inputs.bottom_flange_width_mm.max(0.0);
    let h = inputs.total_height_mm.max(0.0);
    let t1 = inputs.bottom_flange_thickness_mm.max(0.0).min(h);
    let t2 = inputs.top_flange_thickness_mm.max(0.0).min((h - t1).max(0.0));
    let t3 = inputs.web_thickness_mm.max(0.0);
    let b1 = inputs.web_spacing_mm.max(0.0);
    let b3 = inputs.top_flange_width_mm.max(0.0);
    let web_height = (h - t1 - t2).max(0.0);

    let mut polygons = vec![rect(PolygonRole::BottomFlange, 0.0, 0.0, b, t1)];

    match beam_type {
        BeamType::IBeam => {
            polygons.push(rect(PolygonRole::CentralWeb, 0.0, t1, t3, web_height));
        }
        _ => {
            let offset = (b1 + t3) / 2.0;
            polygons.push(rect(PolygonRole::WebLeft, -offset, t1, t3, web_height));
            polygons.push(rect(PolygonRole::WebRight, offset, t1, t3, web_height));
        }
    }

    polygons.push(rect(PolygonRole::TopFlange, 0.0, t1 + web_height, b3, t2));

    let bounds = bounds_of(&polygons);
    CrossSectionGeometry {
        beam_type,
        polygons,
        bounds,
    }
}

/// Build the plate outlines of a V-beam section.
pub fn build_v_cross_section_geometry(inputs: &VBeamInputs) -> CrossSectionGeometry {
    let v = VSection::from_inputs(inputs);
    let mm = |cm: f64| cm * MM_PER_CM;

    let b = mm(v.b_cm);
    let t1 = mm(v.t1_cm);
    let t3 = mm(v.t3_cm);
    let t4 = mm(v.roof_t_cm);

    let mut polygons = vec![
        rect(PolygonRole::BottomFlange, 0.0, 0.0, b, t1),
        rect(PolygonRole::CentralWeb, 0.0, t1, t3, mm(v.central_height_cm)),
    ];

    // Inner line of the right inclined web: base at the flange edge,
    // rising inward toward the apex
    let base = Point::new(b / 2.0, t1);
    let top = Point::new(mm(v.apex_run_cm), t1 + mm(v.web_rise_cm));

    let web_angle = WEB_ANGLE_DEG.to_radians();
    let roof_angle = ROOF_ANGLE_DEG.to_radians();
    // Outward normal of the right web
    let normal = (web_angle.cos(), web_angle.sin());
    let outer_base = Point::new(base.x + t3 * normal.0, base.y + t3 * normal.1);
    let outer_top = Point::new(top.x + t3 * normal.0, top.y + t3 * normal.1);

    if v.incline_len_cm > 0.0 {
        let apex = Point::new(0.0, top.y + mm(v.roof_rise_cm));
        let apex_outer = Point::new(0.0, apex.y + t4);

        if v.apex_run_cm > 0.0 && v.roof_t_cm > 0.0 {
            // Roof corner: the web outer line meets the roof outer line
            let web_dir = (-web_angle.sin(), web_angle.cos());
            let roof_dir = (-roof_angle.cos(), roof_angle.sin());
            let corner = line_intersection(outer_base, web_dir, apex_outer, roof_dir);

            for (role, sign) in [(PolygonRole::RoofRight, 1.0), (PolygonRole::RoofLeft, -1.0)] {
                polygons.push(SectionPolygon {
                    role,
                    points: vec![
                        Point::new(sign * top.x, top.y),
                        Point::new(0.0, apex.y),
                        Point::new(0.0, apex_outer.y),
                        Point::new(sign * corner.x, corner.y),
                    ],
                });
            }
        }

        for (role, sign) in [(PolygonRole::VWebRight, 1.0), (PolygonRole::VWebLeft, -1.0)] {
            polygons.push(SectionPolygon {
                role,
                points: vec![
                    Point::new(sign * base.x, base.y),
                    Point::new(sign * outer_base.x, outer_base.y),
                    Point::new(sign * outer_top.x, outer_top.y),
                    Point::new(sign * top.x, top.y),
                ],
            });
        }
    }

    let bounds = bounds_of(&polygons);
    CrossSectionGeometry {
        beam_type: BeamType::VBeam,
        polygons,
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn girder_inputs() -> BeamInputs {
        BeamInputs {
            bottom_flange_width_mm: 600.0,
            total_height_mm: 900.0,
            bottom_flange_thickness_mm: 30.0,
            top_flange_thickness_mm: 30.0,
            web_thickness_mm: 15.0,
            web_spacing_mm: 400.0,
            top_flange_width_mm: 600.0,
            span_cm: 800.0,
            wheel_base_cm: 160.0,
            end_taper_cm: 40.0,
            hoist_load_kg: 15_000.0,
            trolley_load_kg: 5_000.0,
            material: Material::default(),
        }
    }

    fn v_inputs() -> VBeamInputs {
        VBeamInputs {
            beam: BeamInputs {
                bottom_flange_width_mm: 500.0,
                total_height_mm: 370.0,
                bottom_flange_thickness_mm: 10.0,
                top_flange_thickness_mm: 0.0,
                web_thickness_mm: 8.0,
                web_spacing_mm: 0.0,
                top_flange_width_mm: 0.0,
                span_cm: 600.0,
                wheel_base_cm: 120.0,
                end_taper_cm: 50.0,
                hoist_load_kg: 3000.0,
                trolley_load_kg: 500.0,
                material: Material::default(),
            },
            central_web_height_mm: 340.0,
            inclined_web_length_mm: 400.0,
            roof_thickness_mm: 6.0,
        }
    }

    #[test]
    fn test_girder_bounds_match_envelope() {
        let geo = build_cross_section_geometry(&girder_inputs(), BeamType::SingleGirder);
        assert!(approx_eq(geo.bounds.width(), 600.0, 1e-9));
        assert!(approx_eq(geo.bounds.height(), 900.0, 1e-9));
        assert!(approx_eq(geo.bounds.min_x, -300.0, 1e-9));
        assert_eq!(geo.bounds.min_y, 0.0);
    }

    #[test]
    fn test_girder_has_twin_webs() {
        let geo = build_cross_section_geometry(&girder_inputs(), BeamType::SingleGirder);
        let roles: Vec<_> = geo.polygons.iter().map(|p| p.role).collect();
        assert!(roles.contains(&PolygonRole::WebLeft));
        assert!(roles.contains(&PolygonRole::WebRight));
        assert_eq!(geo.polygons.len(), 4);

        // Webs flank the clear spacing of 400 mm
        let left = geo.polygons.iter().find(|p| p.role == PolygonRole::WebLeft).unwrap();
        let max_x = left.points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        assert!(approx_eq(max_x, -(400.0 + 15.0) / 2.0 + 15.0 / 2.0, 1e-9));
    }

    #[test]
    fn test_i_beam_has_single_web() {
        let geo = build_cross_section_geometry(&girder_inputs(), BeamType::IBeam);
        assert_eq!(geo.polygons.len(), 3);
        assert!(geo.polygons.iter().any(|p| p.role == PolygonRole::CentralWeb));
    }

    #[test]
    fn test_double_girder_draws_the_box_shape() {
        let single = build_cross_section_geometry(&girder_inputs(), BeamType::SingleGirder);
        let double = build_cross_section_geometry(&girder_inputs(), BeamType::DoubleGirder);
        assert_eq!(single.polygons, double.polygons);
        assert_eq!(double.beam_type, BeamType::DoubleGirder);
    }

    #[test]
    fn test_web_height_clamps_against_flanges() {
        let mut inputs = girder_inputs();
        inputs.total_height_mm = 50.0;
        let geo = build_cross_section_geometry(&inputs, BeamType::SingleGirder);
        assert!(geo.bounds.height() <= 50.0 + 1e-9);
    }

    #[test]
    fn test_v_section_is_symmetric() {
        let geo = build_v_cross_section_geometry(&v_inputs());
        assert!(approx_eq(geo.bounds.min_x, -geo.bounds.max_x, 1e-9));

        let left = geo.polygons.iter().find(|p| p.role == PolygonRole::VWebLeft).unwrap();
        let right = geo.polygons.iter().find(|p| p.role == PolygonRole::VWebRight).unwrap();
        for (l, r) in left.points.iter().zip(&right.points) {
            assert!(approx_eq(l.x, -r.x, 1e-9) || (l.x == 0.0 && r.x == 0.0));
            assert!(approx_eq(l.y, r.y, 1e-9));
        }
    }

    #[test]
    fn test_v_apex_on_axis() {
        let geo = build_v_cross_section_geometry(&v_inputs());
        let roof = geo.polygons.iter().find(|p| p.role == PolygonRole::RoofRight).unwrap();
        // Second point is the inner apex, on the axis of symmetry
        assert_eq!(roof.points[1].x, 0.0);
        // Apex height: t1 + l·cos30 + run·tan10 with run = 50 mm
        let expected = 10.0 + 400.0 * 30.0_f64.to_radians().cos() + 50.0 * 10.0_f64.to_radians().tan();
        assert!(approx_eq(roof.points[1].y, expected, 1e-9));
    }

    #[test]
    fn test_v_crossing_webs_drop_roof_plates() {
        let mut inputs = v_inputs();
        inputs.inclined_web_length_mm = 800.0;
        let geo = build_v_cross_section_geometry(&inputs);
        assert!(!geo.polygons.iter().any(|p| p.role == PolygonRole::RoofRight));
        assert!(geo.polygons.iter().any(|p| p.role == PolygonRole::VWebRight));
    }
}
