//! Domain logic for manifest valuation lives here.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod evaluation;

#[allow(unused_imports)]
pub use app_state::{AppState, EditAction, SkillField};
#[allow(unused_imports)]
pub use catalog::{
    Catalog, CatalogError, MineralKind, MineralYield, OreCategory, ResourceDefinition,
};
#[allow(unused_imports)]
pub use entities::{default_mineral_prices, ManifestRow, MineralPriceTable, SkillSettings};
#[allow(unused_imports)]
pub use evaluation::{
    buyback_split, buyback_unit_price, evaluate_manifest, yield_multiplier, DensityRow,
    ManifestEvaluation, PartitionStats,
};
