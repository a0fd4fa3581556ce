use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::MineralKind;

/// One line of the cargo manifest: a resource, how much of it, and the
/// market price the pilot expects per unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManifestRow {
    /// Opaque id, stable across edits.
    pub id: String,
    /// May reference a retired catalog name; unmatched rows contribute
    /// zero volume and zero yield instead of failing.
    pub resource_name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl ManifestRow {
    pub fn new(id: String, resource_name: impl Into<String>) -> Self {
        Self {
            id,
            resource_name: resource_name.into(),
            quantity: 0.0,
            unit_price: 0.0,
        }
    }

    /// Raw market value of the row.
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Pilot skills and structure calibration feeding the yield multiplier.
///
/// Levels are 0-5 by game convention and the UI only offers that range, but
/// the engine deliberately accepts anything (sandbox tolerance).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillSettings {
    pub reprocessing: u8,
    pub reprocessing_efficiency: u8,
    pub ore_specialization: u8,
    /// Percentage subtracted from every reprocessing job.
    pub station_tax: f64,
    /// Structure base yield percentage.
    pub station_yield: f64,
    /// Multiplicative implant factor, 1.0 = no implant.
    pub implant_bonus: f64,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            reprocessing: 5,
            reprocessing_efficiency: 5,
            ore_specialization: 5,
            station_tax: 1.0,
            station_yield: 56.0,
            implant_bonus: 1.0,
        }
    }
}

/// ISK per unit for each mineral, fully owned and edited by the caller.
pub type MineralPriceTable = HashMap<MineralKind, f64>;

/// Jita split prices the terminal ships with.
pub fn default_mineral_prices() -> MineralPriceTable {
    use MineralKind::*;
    HashMap::from([
        (Tritanium, 5.5),
        (Pyerite, 13.0),
        (Mexallon, 48.0),
        (Isogen, 135.0),
        (Nocxium, 860.0),
        (Zydrine, 1_850.0),
        (Megacyte, 2_600.0),
        (Morphite, 14_800.0),
    ])
}
