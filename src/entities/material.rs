//! Material entity - raw materials incorporated into parts

use serde::{Deserialize, Serialize};

/// A raw material incorporated into parts during fabrication.
///
/// Only materials that end up in the product belong here. Items used up
/// incidentally while running a machine (gases, tool inserts, filters)
/// are modeled as [`crate::entities::consumable::Consumable`]s instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name (catalog key)
    #[serde(default)]
    pub name: String,

    /// Density (kg/m^3)
    pub density: f64,

    /// Unit price ($/kg)
    pub price: f64,

    /// Fraction of process scrap recovered for reuse, in [0, 1]
    #[serde(default)]
    pub recycling_rate: f64,
}

impl Material {
    pub fn new(name: impl Into<String>, density: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            density,
            price,
            recycling_rate: 0.0,
        }
    }
}
