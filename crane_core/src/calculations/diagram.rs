//! Shear and bending moment diagrams for a simply supported bridge under
//! its self-weight line load and the midspan trolley point load.
//!
//! Values are the raw superposition of the two load cases, without the
//! amplification and impact multipliers applied to the design moments.

use serde::{Deserialize, Serialize};

use crate::calculations::LoadTerms;

/// Number of stations sampled along the span (inclusive of both ends)
pub const DIAGRAM_STATIONS: usize = 101;

/// Internal forces at one station along the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Distance from the left support (cm)
    pub position_cm: f64,
    /// Shear force (kg)
    pub shear_kg: f64,
    /// Bending moment (kg·cm)
    pub moment_kgcm: f64,
}

/// Sampled shear and moment diagrams over the full span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub span_cm: f64,
    pub points: Vec<DiagramPoint>,
    pub max_shear_kg: f64,
    pub max_moment_kgcm: f64,
}

/// Sample shear and moment at 101 evenly spaced stations.
///
/// The point load acts at midspan; at the exact midspan station the
/// shear jump is reported as zero (the average of the two one-sided
/// values).
pub fn generate_diagram_data(span_cm: f64, loads: &LoadTerms) -> DiagramData {
    let span = span_cm.max(0.0);
    let q = loads.distributed_load_kgcm;
    let p = loads.point_load_kg;
    let mid = span / 2.0;

    let mut points = Vec::with_capacity(DIAGRAM_STATIONS);
    let mut max_shear: f64 = 0.0;
    let mut max_moment: f64 = 0.0;

    for i in 0..DIAGRAM_STATIONS {
        let x = span * i as f64 / (DIAGRAM_STATIONS - 1) as f64;

        let point_shear = if x < mid {
            p / 2.0
        } else if x > mid {
            -p / 2.0
        } else {
            0.0
        };
        let shear = q * (mid - x) + point_shear;

        let point_moment = if x <= mid {
            p * x / 2.0
        } else {
            p * (span - x) / 2.0
        };
        let moment = q * x * (span - x) / 2.0 + point_moment;

        max_shear = max_shear.max(shear.abs());
        max_moment = max_moment.max(moment.abs());
        points.push(DiagramPoint {
            position_cm: x,
            shear_kg: shear,
            moment_kgcm: moment,
        });
    }

    DiagramData {
        span_cm: span,
        points,
        max_shear_kg: max_shear,
        max_moment_kgcm: max_moment,
    }
}
