//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Crane bridge design uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Mixed Metric Units (Primary)
//!
//! The domain keeps the unit mix of the underlying design practice
//! (TCVN/Eurocode-adjacent shop drawings), so the engine does too:
//! - Plate dimensions: millimeters (mm)
//! - Span and layout: centimeters (cm)
//! - Loads: kilograms-force (kgf), distributed loads in kg/cm
//! - Stress: kg/cm², converted to MPa only inside Eurocode-style checks
//! - Section properties: cm², cm³, cm⁴
//!
//! ## Example
//!
//! ```rust
//! use crane_core::units::{Millimeters, Centimeters, KgPerCm2, MegaPascals};
//!
//! let height = Millimeters(900.0);
//! let height_cm: Centimeters = height.into();
//! assert_eq!(height_cm.0, 90.0);
//!
//! let yield_stress = KgPerCm2(2450.0);
//! let yield_mpa: MegaPascals = yield_stress.into();
//! assert!((yield_mpa.0 - 240.26).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimeters per centimeter
pub const MM_PER_CM: f64 = 10.0;

/// Standard gravity conversion: kilograms-force to newtons
pub const KGF_TO_N: f64 = 9.80665;

/// Stress conversion: kg/cm² to MPa (N/mm²)
pub const KG_PER_CM2_TO_MPA: f64 = 0.0980665;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / MM_PER_CM)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * MM_PER_CM)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilograms-force (kgf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgForce(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<KgForce> for Newtons {
    fn from(kgf: KgForce) -> Self {
        Newtons(kgf.0 * KGF_TO_N)
    }
}

impl From<Newtons> for KgForce {
    fn from(n: Newtons) -> Self {
        KgForce(n.0 / KGF_TO_N)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kg/cm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCm2(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<KgPerCm2> for MegaPascals {
    fn from(s: KgPerCm2) -> Self {
        MegaPascals(s.0 * KG_PER_CM2_TO_MPA)
    }
}

impl From<MegaPascals> for KgPerCm2 {
    fn from(s: MegaPascals) -> Self {
        KgPerCm2(s.0 / KG_PER_CM2_TO_MPA)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in kg per centimeter of span
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCm(pub f64);

/// Distributed load in kg per meter of span
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM(pub f64);

impl From<KgPerM> for KgPerCm {
    fn from(q: KgPerM) -> Self {
        KgPerCm(q.0 / 100.0)
    }
}

impl From<KgPerCm> for KgPerM {
    fn from(q: KgPerCm) -> Self {
        KgPerM(q.0 * 100.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Area in cm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm2(pub f64);

/// Section modulus in cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm3(pub f64);

/// Second moment of area in cm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(KgForce);
impl_arithmetic!(Newtons);
impl_arithmetic!(KgPerCm2);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(KgPerCm);
impl_arithmetic!(KgPerM);
impl_arithmetic!(Cm2);
impl_arithmetic!(Cm3);
impl_arithmetic!(Cm4);
