//! End carriage proportion advisory.
//!
//! Checks the wheel base against the bridge span and the end taper
//! against the wheel base. These are proportioning guidelines rather
//! than strength checks, so the outcome is advisory text instead of a
//! pass/fail safety factor.

use serde::{Deserialize, Serialize};

/// Recommended wheel base as a fraction of span: [1/7, 1/4]
pub const WHEEL_BASE_RATIO_MIN: f64 = 1.0 / 7.0;
pub const WHEEL_BASE_RATIO_MAX: f64 = 1.0 / 4.0;

/// Recommended end taper as a fraction of wheel base: [0.1, 0.5]
pub const TAPER_RATIO_MIN: f64 = 0.1;
pub const TAPER_RATIO_MAX: f64 = 0.5;

/// Proportioning advisory for the end carriages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndCarriageAdvisory {
    /// Wheel base divided by span
    pub wheel_base_ratio: f64,
    /// True when both proportions fall in their recommended bands
    pub balanced: bool,
    pub messages: Vec<String>,
}

/// Check end carriage proportions. Dimensions in cm.
pub fn check_end_carriage(span_cm: f64, wheel_base_cm: f64, end_taper_cm: f64) -> EndCarriageAdvisory {
    let ratio = if span_cm > 0.0 {
        wheel_base_cm / span_cm
    } else {
        0.0
    };

    let mut messages = Vec::new();

    if ratio < WHEEL_BASE_RATIO_MIN {
        messages.push(format!(
            "Wheel base {:.0} cm is under 1/7 of the span; the crane may skew on the runway",
            wheel_base_cm
        ));
    } else if ratio > WHEEL_BASE_RATIO_MAX {
        messages.push(format!(
            "Wheel base {:.0} cm exceeds 1/4 of the span; hook approach at the runway ends suffers",
            wheel_base_cm
        ));
    }

    if wheel_base_cm > 0.0 {
        let taper_ratio = end_taper_cm / wheel_base_cm;
        if taper_ratio < TAPER_RATIO_MIN {
            messages.push(format!(
                "End taper {:.0} cm is under 10% of the wheel base",
                end_taper_cm
            ));
        } else if taper_ratio > TAPER_RATIO_MAX {
            messages.push(format!(
                "End taper {:.0} cm exceeds half the wheel base",
                end_taper_cm
            ));
        }
    }

    EndCarriageAdvisory {
        wheel_base_ratio: ratio,
        balanced: messages.is_empty(),
        messages,
    }
}
