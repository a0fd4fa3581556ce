//! Static reference data: the fixed table of harvestable resources and the
//! minerals they reprocess into.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The eight refined minerals, declared in canonical display order.
///
/// Derived `Ord` follows declaration order, which is exactly the order the
/// breakdown views sort by.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MineralKind {
    Tritanium,
    Pyerite,
    Mexallon,
    Isogen,
    Nocxium,
    Zydrine,
    Megacyte,
    Morphite,
}

impl MineralKind {
    pub const ALL: [MineralKind; 8] = [
        MineralKind::Tritanium,
        MineralKind::Pyerite,
        MineralKind::Mexallon,
        MineralKind::Isogen,
        MineralKind::Nocxium,
        MineralKind::Zydrine,
        MineralKind::Megacyte,
        MineralKind::Morphite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MineralKind::Tritanium => "Tritanium",
            MineralKind::Pyerite => "Pyerite",
            MineralKind::Mexallon => "Mexallon",
            MineralKind::Isogen => "Isogen",
            MineralKind::Nocxium => "Nocxium",
            MineralKind::Zydrine => "Zydrine",
            MineralKind::Megacyte => "Megacyte",
            MineralKind::Morphite => "Morphite",
        }
    }
}

/// Where a resource spawns. Drives the grouped resource picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OreCategory {
    HighSec,
    LowSec,
    NullSec,
    Abyssal,
    Moon,
    Wormhole,
}

impl OreCategory {
    /// Picker group order, matching the original terminal layout.
    pub const PICKER_ORDER: [OreCategory; 5] = [
        OreCategory::Wormhole,
        OreCategory::LowSec,
        OreCategory::Moon,
        OreCategory::NullSec,
        OreCategory::HighSec,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OreCategory::HighSec => "High-Sec",
            OreCategory::LowSec => "Low-Sec",
            OreCategory::NullSec => "Null-Sec",
            OreCategory::Abyssal => "Abyssal",
            OreCategory::Moon => "Moon",
            OreCategory::Wormhole => "Wormhole",
        }
    }

    /// Heading shown above the category's entries in the resource picker.
    pub fn picker_label(&self) -> String {
        match self {
            OreCategory::LowSec => "Common J-Space Ores".to_string(),
            other => format!("{} Resources", other.label()),
        }
    }
}

/// One line of a resource's reprocessing output, per full batch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineralYield {
    pub mineral: MineralKind,
    pub per_batch: u32,
}

/// A harvestable ore or gas as the station database describes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub name: String,
    /// Cubic meters per single unit.
    pub volume_per_unit: f64,
    /// Reprocessing consumes whole multiples of this many units.
    pub batch_size: u32,
    pub category: OreCategory,
    /// Empty for gases, which cannot be reprocessed.
    pub yields: Vec<MineralYield>,
}

impl ResourceDefinition {
    pub fn is_reprocessable(&self) -> bool {
        !self.yields.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate resource name in catalog: {0}")]
    DuplicateName(String),
    #[error("resource {0} has a non-positive batch size")]
    InvalidBatchSize(String),
}

/// Read-only lookup table of resource definitions, loaded once at start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<ResourceDefinition>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names and zero batch sizes.
    pub fn new(entries: Vec<ResourceDefinition>) -> Result<Self, CatalogError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.batch_size == 0 {
                return Err(CatalogError::InvalidBatchSize(entry.name.clone()));
            }
            if entries[..index].iter().any(|other| other.name == entry.name) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in station database. A miss is a valid outcome for callers
    /// holding rows that reference retired resource names.
    pub fn lookup(&self, name: &str) -> Option<&ResourceDefinition> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceDefinition> {
        self.entries.iter()
    }

    pub fn in_category(
        &self,
        category: OreCategory,
    ) -> impl Iterator<Item = &ResourceDefinition> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn first(&self) -> Option<&ResourceDefinition> {
        self.entries.first()
    }

    /// The standard J-Space station database: prime and common ores, moon
    /// ores, high-sec fillers and the fullerite gas set.
    pub fn standard() -> Self {
        use MineralKind::*;
        use OreCategory::*;

        fn ore(
            name: &str,
            volume: f64,
            category: OreCategory,
            minerals: &[(MineralKind, u32)],
        ) -> ResourceDefinition {
            ResourceDefinition {
                name: name.to_string(),
                volume_per_unit: volume,
                batch_size: 100,
                category,
                yields: minerals
                    .iter()
                    .map(|&(mineral, per_batch)| MineralYield { mineral, per_batch })
                    .collect(),
            }
        }

        fn gas(name: &str, volume: f64) -> ResourceDefinition {
            ResourceDefinition {
                name: name.to_string(),
                volume_per_unit: volume,
                batch_size: 1,
                category: Wormhole,
                yields: Vec::new(),
            }
        }

        let entries = vec![
            // Prime wormhole and null ores.
            ore("Arkonor", 16.0, Wormhole, &[(Tritanium, 22_000), (Mexallon, 2_500), (Megacyte, 320)]),
            ore("Bistot", 16.0, Wormhole, &[(Pyerite, 12_000), (Zydrine, 450), (Megacyte, 100)]),
            ore("Crokite", 16.0, Wormhole, &[(Tritanium, 21_000), (Nocxium, 760), (Zydrine, 135)]),
            ore("Gneiss", 5.0, Wormhole, &[(Tritanium, 2_200), (Mexallon, 2_400), (Isogen, 300)]),
            ore("Dark Ochre", 8.0, Wormhole, &[(Tritanium, 10_000), (Isogen, 1_600), (Nocxium, 120)]),
            ore("Spodumain", 16.0, NullSec, &[(Tritanium, 56_000), (Pyerite, 12_050), (Mexallon, 2_100), (Isogen, 450)]),
            // Common wormhole and low-sec ores.
            ore("Hedbergite", 3.0, LowSec, &[(Isogen, 700), (Nocxium, 190), (Zydrine, 32)]),
            ore("Hemorphite", 3.0, LowSec, &[(Tritanium, 2_200), (Isogen, 213), (Nocxium, 107), (Zydrine, 15)]),
            ore("Jaspet", 2.0, LowSec, &[(Tritanium, 350), (Mexallon, 350), (Nocxium, 75)]),
            ore("Kernite", 1.2, LowSec, &[(Tritanium, 134), (Mexallon, 267), (Isogen, 134)]),
            ore("Omber", 0.6, LowSec, &[(Tritanium, 307), (Pyerite, 123), (Isogen, 307)]),
            ore("Pyroxeres", 0.3, LowSec, &[(Tritanium, 351), (Pyerite, 25), (Mexallon, 50), (Nocxium, 5)]),
            // Moon ores (Athanor extraction).
            ore("Bitumens", 10.0, Moon, &[(Tritanium, 12_000), (Mexallon, 450), (Pyerite, 2_200)]),
            ore("Coersite", 10.0, Moon, &[(Tritanium, 8_000), (Isogen, 200), (Pyerite, 1_500)]),
            ore("Sylvite", 10.0, Moon, &[(Tritanium, 5_000), (Mexallon, 1_200), (Pyerite, 3_000)]),
            ore("Zeolites", 10.0, Moon, &[(Tritanium, 6_000), (Mexallon, 800), (Pyerite, 2_000)]),
            // High-sec ores.
            ore("Veldspar", 0.1, HighSec, &[(Tritanium, 415)]),
            ore("Scordite", 0.15, HighSec, &[(Tritanium, 346), (Pyerite, 173)]),
            ore("Plagioclase", 0.35, HighSec, &[(Tritanium, 107), (Pyerite, 213), (Mexallon, 107)]),
            // Gases (fullerite set).
            gas("Fullerite-C28", 2.0),
            gas("Fullerite-C32", 5.0),
            gas("Fullerite-C50", 1.0),
            gas("Fullerite-C60", 1.0),
            gas("Fullerite-C70", 1.0),
            gas("Fullerite-C72", 2.0),
            gas("Fullerite-C84", 2.0),
            gas("Fullerite-C320", 5.0),
            gas("Fullerite-C540", 10.0),
        ];

        Self::new(entries).unwrap_or_else(|err| panic!("built-in catalog is invalid: {err}"))
    }
}
