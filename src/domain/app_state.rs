use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, MineralKind};
use super::entities::{default_mineral_prices, ManifestRow, MineralPriceTable, SkillSettings};
use crate::util::generate_id;

/// Which calibration field a [`EditAction::SetSkill`] targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillField {
    Reprocessing,
    ReprocessingEfficiency,
    OreSpecialization,
    StationTax,
    StationYield,
    ImplantBonus,
}

/// The full mutation surface of the terminal. Every widget dispatches one of
/// these; there is no other way to touch the state.
#[derive(Clone, Debug, PartialEq)]
pub enum EditAction {
    AddRow,
    RemoveRow(String),
    SetResource(String, String),
    SetQuantity(String, f64),
    SetUnitPrice(String, f64),
    SetSkill(SkillField, f64),
    SetMineralPrice(MineralKind, f64),
    SetBuybackRate(f64),
}

/// All mutable inputs, owned by the top-level UI composition and passed into
/// the engine as a snapshot on every recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub catalog: Catalog,
    pub rows: Vec<ManifestRow>,
    pub skills: SkillSettings,
    pub mineral_prices: MineralPriceTable,
    pub buyback_rate: f64,
}

impl Default for AppState {
    /// Standard catalog plus the demo manifest the terminal boots with.
    fn default() -> Self {
        let rows = vec![
            seeded_row("Arkonor", 500.0, 2_200.0),
            seeded_row("Fullerite-C320", 1_500.0, 42_000.0),
            seeded_row("Bitumens", 2_000.0, 150.0),
        ];
        Self {
            catalog: Catalog::standard(),
            rows,
            skills: SkillSettings::default(),
            mineral_prices: default_mineral_prices(),
            buyback_rate: 80.0,
        }
    }
}

fn seeded_row(resource: &str, quantity: f64, unit_price: f64) -> ManifestRow {
    ManifestRow {
        id: generate_id("row"),
        resource_name: resource.to_string(),
        quantity,
        unit_price,
    }
}

impl AppState {
    /// Applies one edit. Quantities and prices clamp negatives to zero;
    /// skill levels and the buyback rate are accepted as given (the widgets
    /// constrain their own ranges, the state does not).
    pub fn apply(&mut self, action: EditAction) {
        match action {
            EditAction::AddRow => {
                let default_resource = self
                    .catalog
                    .first()
                    .map(|entry| entry.name.clone())
                    .unwrap_or_default();
                self.rows
                    .push(ManifestRow::new(generate_id("row"), default_resource));
            }
            EditAction::RemoveRow(id) => {
                self.rows.retain(|row| row.id != id);
            }
            EditAction::SetResource(id, name) => {
                if let Some(row) = self.row_mut(&id) {
                    row.resource_name = name;
                }
            }
            EditAction::SetQuantity(id, value) => {
                if let Some(row) = self.row_mut(&id) {
                    row.quantity = value.max(0.0);
                }
            }
            EditAction::SetUnitPrice(id, value) => {
                if let Some(row) = self.row_mut(&id) {
                    row.unit_price = value.max(0.0);
                }
            }
            EditAction::SetSkill(field, value) => match field {
                SkillField::Reprocessing => self.skills.reprocessing = as_level(value),
                SkillField::ReprocessingEfficiency => {
                    self.skills.reprocessing_efficiency = as_level(value)
                }
                SkillField::OreSpecialization => {
                    self.skills.ore_specialization = as_level(value)
                }
                SkillField::StationTax => self.skills.station_tax = value,
                SkillField::StationYield => self.skills.station_yield = value,
                SkillField::ImplantBonus => self.skills.implant_bonus = value,
            },
            EditAction::SetMineralPrice(kind, value) => {
                self.mineral_prices.insert(kind, value.max(0.0));
            }
            EditAction::SetBuybackRate(value) => {
                self.buyback_rate = value;
            }
        }
    }

    /// Runs the valuation engine over the current snapshot.
    pub fn evaluate(&self) -> super::evaluation::ManifestEvaluation {
        super::evaluation::evaluate_manifest(
            &self.rows,
            &self.skills,
            &self.mineral_prices,
            self.buyback_rate,
            &self.catalog,
        )
    }

    fn row_mut(&mut self, id: &str) -> Option<&mut ManifestRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

/// Skill levels arrive from select widgets as numbers; negatives collapse to
/// zero, everything else is kept (including levels beyond 5).
fn as_level(value: f64) -> u8 {
    if value.is_finite() && value > 0.0 {
        value as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_with_the_demo_manifest() {
        let state = AppState::default();
        let names: Vec<&str> = state
            .rows
            .iter()
            .map(|row| row.resource_name.as_str())
            .collect();
        assert_eq!(names, vec!["Arkonor", "Fullerite-C320", "Bitumens"]);
        assert_eq!(state.buyback_rate, 80.0);
        assert!(state.rows.iter().all(|row| state.catalog.lookup(&row.resource_name).is_some()));
    }

    #[test]
    fn add_row_uses_first_catalog_resource_with_zeroed_fields() {
        let mut state = AppState::default();
        state.apply(EditAction::AddRow);
        let added = state.rows.last().expect("row added");
        assert_eq!(added.resource_name, "Arkonor");
        assert_eq!(added.quantity, 0.0);
        assert_eq!(added.unit_price, 0.0);
    }

    #[test]
    fn row_ids_are_unique_and_stable() {
        let mut state = AppState::default();
        state.apply(EditAction::AddRow);
        state.apply(EditAction::AddRow);
        let mut ids: Vec<String> = state.rows.iter().map(|row| row.id.clone()).collect();
        let before = ids.clone();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.rows.len());

        // Field edits never touch the id.
        let target = state.rows[0].id.clone();
        state.apply(EditAction::SetQuantity(target.clone(), 42.0));
        state.apply(EditAction::SetResource(target, "Gneiss".to_string()));
        let after: Vec<String> = state.rows.iter().map(|row| row.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn remove_row_by_id() {
        let mut state = AppState::default();
        let victim = state.rows[1].id.clone();
        state.apply(EditAction::RemoveRow(victim.clone()));
        assert_eq!(state.rows.len(), 2);
        assert!(state.rows.iter().all(|row| row.id != victim));

        // Removing a stale id is a no-op.
        state.apply(EditAction::RemoveRow(victim));
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn negative_quantities_and_prices_clamp_to_zero() {
        let mut state = AppState::default();
        let id = state.rows[0].id.clone();
        state.apply(EditAction::SetQuantity(id.clone(), -12.0));
        state.apply(EditAction::SetUnitPrice(id.clone(), -1.0));
        let row = state.rows.iter().find(|row| row.id == id).unwrap();
        assert_eq!(row.quantity, 0.0);
        assert_eq!(row.unit_price, 0.0);
    }

    #[test]
    fn unknown_resource_names_are_tolerated() {
        let mut state = AppState::default();
        let id = state.rows[0].id.clone();
        state.apply(EditAction::SetResource(id.clone(), "Mercoxit".to_string()));
        let row = state.rows.iter().find(|row| row.id == id).unwrap();
        assert_eq!(row.resource_name, "Mercoxit");
    }

    #[test]
    fn skill_edits_route_to_the_right_field() {
        let mut state = AppState::default();
        state.apply(EditAction::SetSkill(SkillField::Reprocessing, 3.0));
        state.apply(EditAction::SetSkill(SkillField::ReprocessingEfficiency, 1.0));
        state.apply(EditAction::SetSkill(SkillField::OreSpecialization, -4.0));
        state.apply(EditAction::SetSkill(SkillField::StationYield, 72.0));
        state.apply(EditAction::SetSkill(SkillField::StationTax, 2.5));
        state.apply(EditAction::SetSkill(SkillField::ImplantBonus, 1.04));
        assert_eq!(state.skills.reprocessing, 3);
        assert_eq!(state.skills.reprocessing_efficiency, 1);
        assert_eq!(state.skills.ore_specialization, 0);
        assert_eq!(state.skills.station_yield, 72.0);
        assert_eq!(state.skills.station_tax, 2.5);
        assert_eq!(state.skills.implant_bonus, 1.04);
    }

    #[test]
    fn buyback_rate_is_not_range_checked() {
        let mut state = AppState::default();
        state.apply(EditAction::SetBuybackRate(150.0));
        assert_eq!(state.buyback_rate, 150.0);
        state.apply(EditAction::SetBuybackRate(-10.0));
        assert_eq!(state.buyback_rate, -10.0);
    }

    #[test]
    fn mineral_price_edits_clamp_negatives() {
        let mut state = AppState::default();
        state.apply(EditAction::SetMineralPrice(MineralKind::Zydrine, -5.0));
        assert_eq!(state.mineral_prices[&MineralKind::Zydrine], 0.0);
        state.apply(EditAction::SetMineralPrice(MineralKind::Zydrine, 2_000.0));
        assert_eq!(state.mineral_prices[&MineralKind::Zydrine], 2_000.0);
    }
}
