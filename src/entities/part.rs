//! Part and assembly entities - product geometry used for material costing

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::material::Material;

/// A fabricated part within the product.
///
/// `parent` is a weak reference by name; ownership of parts lives with the
/// [`Assembly`] that holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part name (key within the assembly)
    #[serde(default)]
    pub name: String,

    /// Name of the parent part, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Material this part is made from
    pub material: Material,

    /// Stated weight (kg); used when `volume` is zero
    #[serde(default)]
    pub weight: f64,

    /// Length (m)
    #[serde(default)]
    pub length: f64,

    /// Width (m)
    #[serde(default)]
    pub width: f64,

    /// Height (m)
    #[serde(default)]
    pub height: f64,

    /// Part volume (m^3); preferred over `weight` when positive
    #[serde(default)]
    pub volume: f64,

    /// Number of this part per parent
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl Part {
    /// Mass of one part: volume times density when the volume is known,
    /// the stated weight otherwise.
    pub fn unit_weight(&self) -> f64 {
        if self.volume > 0.0 {
            self.volume * self.material.density
        } else {
            self.weight
        }
    }
}

/// The top-level product assembly.
///
/// Owns its named subparts; process steps refer to them by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    /// Assembly name
    #[serde(default)]
    pub name: String,

    /// Material for the legacy assembly-weight costing path
    pub material: Material,

    /// Weight of one plate (kg); used when `volume` is zero
    #[serde(default)]
    pub plate_weight: f64,

    /// Overall length (m)
    #[serde(default)]
    pub length: f64,

    /// Overall width (m)
    #[serde(default)]
    pub width: f64,

    /// Overall height (m)
    #[serde(default)]
    pub height: f64,

    /// Assembly volume (m^3); preferred over plate weight when positive
    #[serde(default)]
    pub volume: f64,

    /// Number of fins
    #[serde(default)]
    pub fin_count: f64,

    /// Named subparts
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parts: BTreeMap<String, Part>,
}

impl Assembly {
    /// Look up a subpart by name.
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.get(name)
    }

    /// Floor footprint of one finished unit (m^2).
    pub fn footprint(&self) -> f64 {
        self.width * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat() -> Material {
        Material::new("polycarbonate", 1200.0, 3.0)
    }

    #[test]
    fn test_unit_weight_prefers_volume() {
        let part = Part {
            name: "plate".to_string(),
            parent: None,
            material: mat(),
            weight: 0.5,
            length: 0.0,
            width: 0.0,
            height: 0.0,
            volume: 0.001,
            count: 1,
        };
        assert!((part.unit_weight() - 1.2).abs() < 1e-10);
    }

    #[test]
    fn test_unit_weight_falls_back_to_stated_weight() {
        let part = Part {
            name: "film".to_string(),
            parent: Some("plate".to_string()),
            material: mat(),
            weight: 0.02,
            length: 0.0,
            width: 0.0,
            height: 0.0,
            volume: 0.0,
            count: 2,
        };
        assert!((part.unit_weight() - 0.02).abs() < 1e-10);
    }

    #[test]
    fn test_assembly_footprint_and_lookup() {
        let mut parts = BTreeMap::new();
        parts.insert(
            "plate".to_string(),
            Part {
                name: "plate".to_string(),
                parent: None,
                material: mat(),
                weight: 0.012,
                length: 0.0,
                width: 0.0,
                height: 0.0,
                volume: 0.0,
                count: 40,
            },
        );
        let asm = Assembly {
            name: "HX".to_string(),
            material: mat(),
            plate_weight: 0.012,
            length: 0.5,
            width: 0.3,
            height: 0.4,
            volume: 0.0,
            fin_count: 40.0,
            parts,
        };
        assert!((asm.footprint() - 0.15).abs() < 1e-10);
        assert!(asm.part("plate").is_some());
        assert!(asm.part("header").is_none());
    }
}
