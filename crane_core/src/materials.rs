//! # Steel Materials
//!
//! Reference design values for the structural steels commonly used in
//! crane bridge fabrication, plus a free-entry escape hatch for anything
//! outside the table.
//!
//! Stress values stay in the kg/cm² domain units of the shop practice;
//! the Eurocode-style buckling checks convert to MPa internally
//! (see [`crate::units::KG_PER_CM2_TO_MPA`]).
//!
//! ## Example
//!
//! ```rust
//! use crane_core::materials::Material;
//!
//! let steel = Material::grade_by_name("SS400").unwrap();
//! let props = steel.properties();
//! assert_eq!(props.sigma_yield_kgcm2, 2450.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Density of structural steel (kg/m³)
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Named steel grades with fixed reference values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// JIS G3101 general structural steel
    Ss400,
    /// GOST 380 carbon steel
    Ct3,
    /// ASTM A36 structural steel
    A36,
}

impl SteelGrade {
    /// All named grades for iteration
    pub const ALL: [SteelGrade; 3] = [SteelGrade::Ss400, SteelGrade::Ct3, SteelGrade::A36];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Ss400 => "SS400",
            SteelGrade::Ct3 => "CT3",
            SteelGrade::A36 => "A36",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Material design values in domain units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Allowable bending stress (kg/cm²)
    pub sigma_allow_kgcm2: f64,
    /// Yield stress (kg/cm²)
    pub sigma_yield_kgcm2: f64,
    /// Modulus of elasticity (kg/cm²)
    pub e_kgcm2: f64,
    /// Poisson ratio
    pub poisson: f64,
}

/// Reference table for the named grades
static GRADE_TABLE: Lazy<Vec<(SteelGrade, SteelProperties)>> = Lazy::new(|| {
    vec![
        (
            SteelGrade::Ss400,
            SteelProperties {
                sigma_allow_kgcm2: 1650.0,
                sigma_yield_kgcm2: 2450.0,
                e_kgcm2: 2.1e6,
                poisson: 0.3,
            },
        ),
        (
            SteelGrade::Ct3,
            SteelProperties {
                sigma_allow_kgcm2: 1600.0,
                sigma_yield_kgcm2: 2400.0,
                e_kgcm2: 2.1e6,
                poisson: 0.3,
            },
        ),
        (
            SteelGrade::A36,
            SteelProperties {
                sigma_allow_kgcm2: 1700.0,
                sigma_yield_kgcm2: 2530.0,
                e_kgcm2: 2.1e6,
                poisson: 0.3,
            },
        ),
    ]
});

/// Unified material selector for beam calculations
///
/// Named grades look up fixed reference values; `Custom` carries raw
/// user-entered values unchanged.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Grade", "grade": "Ss400" }
///
/// { "type": "Custom",
///   "sigma_allow_kgcm2": 1650.0, "sigma_yield_kgcm2": 2450.0,
///   "e_kgcm2": 2100000.0, "poisson": 0.3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// A named grade from the reference table
    Grade { grade: SteelGrade },
    /// Free-entry material values
    Custom(SteelProperties),
}

impl Material {
    /// Look up a named grade case-insensitively
    pub fn grade_by_name(name: &str) -> CalcResult<Material> {
        let needle = name.trim().to_uppercase();
        SteelGrade::ALL
            .iter()
            .find(|g| g.display_name() == needle)
            .map(|g| Material::Grade { grade: *g })
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    /// Get the design values for this material
    pub fn properties(&self) -> SteelProperties {
        match self {
            Material::Grade { grade } => {
                GRADE_TABLE
                    .iter()
                    .find(|(g, _)| g == grade)
                    .map(|(_, p)| *p)
                    // Table covers every variant; unreachable in practice
                    .unwrap_or(SteelProperties {
                        sigma_allow_kgcm2: 0.0,
                        sigma_yield_kgcm2: 0.0,
                        e_kgcm2: 0.0,
                        poisson: 0.0,
                    })
            }
            Material::Custom(props) => *props,
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        match self {
            Material::Grade { grade } => grade.display_name().to_string(),
            Material::Custom(_) => "Custom".to_string(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Grade {
            grade: SteelGrade::Ss400,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_lookup() {
        let ss400 = Material::grade_by_name("SS400").unwrap();
        let props = ss400.properties();
        assert_eq!(props.sigma_allow_kgcm2, 1650.0);
        assert_eq!(props.sigma_yield_kgcm2, 2450.0);
        assert_eq!(props.e_kgcm2, 2.1e6);
        assert_eq!(props.poisson, 0.3);
    }

    #[test]
    fn test_grade_lookup_case_insensitive() {
        let a = Material::grade_by_name("ct3").unwrap();
        let b = Material::grade_by_name("CT3").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.properties().sigma_yield_kgcm2, 2400.0);
    }

    #[test]
    fn test_unknown_grade() {
        let result = Material::grade_by_name("S999");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_custom_material_passthrough() {
        let mat = Material::Custom(SteelProperties {
            sigma_allow_kgcm2: 1400.0,
            sigma_yield_kgcm2: 2100.0,
            e_kgcm2: 2.0e6,
            poisson: 0.29,
        });
        let props = mat.properties();
        assert_eq!(props.sigma_allow_kgcm2, 1400.0);
        assert_eq!(props.e_kgcm2, 2.0e6);
    }

    #[test]
    fn test_all_grades_in_table() {
        for grade in SteelGrade::ALL {
            let mat = Material::Grade { grade };
            let props = mat.properties();
            assert!(props.sigma_yield_kgcm2 > 0.0, "{} missing", grade);
            assert!(props.sigma_allow_kgcm2 < props.sigma_yield_kgcm2);
        }
    }

    #[test]
    fn test_material_serialization() {
        let mat = Material::Grade {
            grade: SteelGrade::A36,
        };
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("\"type\":\"Grade\""));
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Material::default().display_name(), "SS400");
        let custom = Material::Custom(Material::default().properties());
        assert_eq!(custom.display_name(), "Custom");
    }
}
