//! The valuation engine: one pure pass from manifest + settings to every
//! figure the terminal displays. Re-run wholesale on each edit; inputs are
//! tens of rows at most, so there is nothing worth caching.

use std::collections::HashMap;

use super::catalog::{Catalog, MineralKind, ResourceDefinition};
use super::entities::{ManifestRow, MineralPriceTable, SkillSettings};

/// Value, volume and value-per-volume for one slice of the manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartitionStats {
    pub value: f64,
    pub volume: f64,
    /// `value / volume`, 0 when the partition has no volume.
    pub isk_per_m3: f64,
}

/// One bar of the logistical density comparison chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityRow {
    pub label: &'static str,
    pub isk_per_m3: f64,
    pub color: &'static str,
}

/// Everything derived from one input snapshot. Recomputed wholesale, never
/// patched incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManifestEvaluation {
    pub total_raw_revenue: f64,
    pub total_volume: f64,
    /// Rows whose resource reprocesses into minerals.
    pub ore: PartitionStats,
    /// Gas-like rows (empty yield table), sold raw.
    pub gas: PartitionStats,
    pub yield_multiplier: f64,
    /// Floored mineral amounts in canonical display order; minerals with no
    /// contribution are omitted.
    pub mineral_breakdown: Vec<(MineralKind, f64)>,
    pub refined_mineral_value: f64,
    /// Refined mineral value spread over the raw ore volume it came from.
    pub refined_isk_per_m3: f64,
    /// Refined minerals plus raw gas value.
    pub total_refined_value: f64,
    /// `total_refined_value - total_raw_revenue`; sign drives the ROI badge.
    pub profit_delta: f64,
    pub buyback_payout: f64,
    pub buyback_forfeited: f64,
    pub density_rows: Vec<DensityRow>,
}

impl ManifestEvaluation {
    pub fn is_profitable(&self) -> bool {
        self.profit_delta > 0.0
    }

    /// The densest bar of the comparison chart, the haul-priority signal.
    pub fn density_leader(&self) -> Option<&DensityRow> {
        self.density_rows
            .iter()
            .max_by(|a, b| a.isk_per_m3.total_cmp(&b.isk_per_m3))
    }
}

/// Combined multiplicative yield bonus: structure base percentage, the three
/// skills at their fixed per-level increments, and the implant factor.
/// Deliberately unclamped; well-fit characters can exceed 100%.
pub fn yield_multiplier(skills: &SkillSettings) -> f64 {
    let reprocessing = 1.0 + f64::from(skills.reprocessing) * 0.03;
    let efficiency = 1.0 + f64::from(skills.reprocessing_efficiency) * 0.02;
    let specialization = 1.0 + f64::from(skills.ore_specialization) * 0.02;
    (skills.station_yield / 100.0)
        * reprocessing
        * efficiency
        * specialization
        * skills.implant_bonus
}

/// Splits a raw total into (payout, forfeited) at a flat buyback percentage.
/// Rates above 100 legitimately push the forfeited share negative.
pub fn buyback_split(total_raw_revenue: f64, rate_percent: f64) -> (f64, f64) {
    let payout = total_raw_revenue * (rate_percent / 100.0);
    (payout, total_raw_revenue - payout)
}

/// Buyback-adjusted price for a single unit.
pub fn buyback_unit_price(unit_price: f64, rate_percent: f64) -> f64 {
    unit_price * (rate_percent / 100.0)
}

/// The engine entry point. Pure and total: unmatched resource names count as
/// zero volume and zero yield, empty manifests come back all zeros, and no
/// input combination is an error.
pub fn evaluate_manifest(
    rows: &[ManifestRow],
    skills: &SkillSettings,
    mineral_prices: &MineralPriceTable,
    buyback_rate_percent: f64,
    catalog: &Catalog,
) -> ManifestEvaluation {
    let mut ore_rows: Vec<(&ManifestRow, &ResourceDefinition)> = Vec::new();
    let mut gas_rows: Vec<&ManifestRow> = Vec::new();
    for row in rows {
        match catalog.lookup(&row.resource_name) {
            Some(resource) if resource.is_reprocessable() => ore_rows.push((row, resource)),
            _ => gas_rows.push(row),
        }
    }

    let total_raw_revenue = raw_value(rows);
    let total_volume = raw_volume(rows, catalog);

    let ore = partition_stats(
        ore_rows.iter().map(|(row, _)| *row),
        catalog,
    );
    let gas = partition_stats(gas_rows.iter().copied(), catalog);

    let multiplier = yield_multiplier(skills);
    let tax_factor = (100.0 - skills.station_tax) / 100.0;

    // Flooring happens once per row per mineral, over the full product;
    // rows are summed after flooring, the way individual reprocessing jobs
    // round in game.
    let mut totals: HashMap<MineralKind, f64> = HashMap::new();
    for (row, resource) in &ore_rows {
        let batches = (row.quantity / f64::from(resource.batch_size)).floor();
        for entry in &resource.yields {
            let amount = (batches * f64::from(entry.per_batch) * multiplier * tax_factor).floor();
            *totals.entry(entry.mineral).or_insert(0.0) += amount;
        }
    }
    let mineral_breakdown: Vec<(MineralKind, f64)> = MineralKind::ALL
        .iter()
        .filter_map(|kind| totals.get(kind).map(|amount| (*kind, *amount)))
        .filter(|(_, amount)| *amount != 0.0)
        .collect();

    let refined_mineral_value = mineral_breakdown
        .iter()
        .map(|(kind, amount)| amount * mineral_prices.get(kind).copied().unwrap_or(0.0))
        .sum::<f64>();
    let refined_isk_per_m3 = if ore.volume > 0.0 {
        refined_mineral_value / ore.volume
    } else {
        0.0
    };

    let total_refined_value = refined_mineral_value + gas.value;
    let profit_delta = total_refined_value - total_raw_revenue;

    let (buyback_payout, buyback_forfeited) =
        buyback_split(total_raw_revenue, buyback_rate_percent);

    let mut density_rows = Vec::new();
    if ore.volume > 0.0 {
        density_rows.push(DensityRow {
            label: "Raw WH Ore",
            isk_per_m3: ore.isk_per_m3.round(),
            color: "#8b5cf6",
        });
        density_rows.push(DensityRow {
            label: "Refined WH",
            isk_per_m3: refined_isk_per_m3.round(),
            color: "#d946ef",
        });
    }
    if gas.volume > 0.0 {
        density_rows.push(DensityRow {
            label: "Raw Fullerite",
            isk_per_m3: gas.isk_per_m3.round(),
            color: "#f59e0b",
        });
    }

    ManifestEvaluation {
        total_raw_revenue,
        total_volume,
        ore,
        gas,
        yield_multiplier: multiplier,
        mineral_breakdown,
        refined_mineral_value,
        refined_isk_per_m3,
        total_refined_value,
        profit_delta,
        buyback_payout,
        buyback_forfeited,
        density_rows,
    }
}

// Left-to-right reductions keep test expectations reproducible.
fn raw_value<'a>(rows: impl IntoIterator<Item = &'a ManifestRow>) -> f64 {
    let mut sum = 0.0;
    for row in rows {
        sum += row.total();
    }
    sum
}

fn raw_volume<'a>(
    rows: impl IntoIterator<Item = &'a ManifestRow>,
    catalog: &Catalog,
) -> f64 {
    let mut sum = 0.0;
    for row in rows {
        let per_unit = catalog
            .lookup(&row.resource_name)
            .map(|resource| resource.volume_per_unit)
            .unwrap_or(0.0);
        sum += row.quantity * per_unit;
    }
    sum
}

fn partition_stats<'a>(
    rows: impl IntoIterator<Item = &'a ManifestRow> + Clone,
    catalog: &Catalog,
) -> PartitionStats {
    let value = raw_value(rows.clone());
    let volume = raw_volume(rows, catalog);
    PartitionStats {
        value,
        volume,
        isk_per_m3: if volume > 0.0 { value / volume } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::default_mineral_prices;

    fn row(id: &str, resource: &str, quantity: f64, unit_price: f64) -> ManifestRow {
        ManifestRow {
            id: id.to_string(),
            resource_name: resource.to_string(),
            quantity,
            unit_price,
        }
    }

    /// Neutral calibration: every bonus term collapses to 1.0 and no tax.
    fn neutral_skills() -> SkillSettings {
        SkillSettings {
            reprocessing: 0,
            reprocessing_efficiency: 0,
            ore_specialization: 0,
            station_tax: 0.0,
            station_yield: 100.0,
            implant_bonus: 1.0,
        }
    }

    #[test]
    fn empty_manifest_is_all_zeros() {
        let catalog = Catalog::standard();
        let result = evaluate_manifest(
            &[],
            &SkillSettings::default(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        assert_eq!(result.total_raw_revenue, 0.0);
        assert_eq!(result.total_volume, 0.0);
        assert_eq!(result.ore.isk_per_m3, 0.0);
        assert_eq!(result.gas.isk_per_m3, 0.0);
        assert_eq!(result.refined_isk_per_m3, 0.0);
        assert!(result.mineral_breakdown.is_empty());
        assert!(result.density_rows.is_empty());
        assert_eq!(result.buyback_payout, 0.0);
        assert_eq!(result.buyback_forfeited, 0.0);
    }

    #[test]
    fn revenue_matches_left_to_right_row_sum() {
        let catalog = Catalog::standard();
        let rows = vec![
            row("1", "Veldspar", 3_333.0, 7.77),
            row("2", "Scordite", 1_234.5, 11.3),
            row("3", "Fullerite-C50", 987.0, 1_204.9),
        ];
        let result = evaluate_manifest(
            &rows,
            &SkillSettings::default(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        let mut expected = 0.0;
        for entry in &rows {
            expected += entry.quantity * entry.unit_price;
        }
        assert_eq!(result.total_raw_revenue, expected);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let catalog = Catalog::standard();
        let rows = vec![
            row("1", "Arkonor", 500.0, 2_200.0),
            row("2", "Fullerite-C320", 1_500.0, 42_000.0),
        ];
        let skills = SkillSettings::default();
        let prices = default_mineral_prices();
        let first = evaluate_manifest(&rows, &skills, &prices, 80.0, &catalog);
        let second = evaluate_manifest(&rows, &skills, &prices, 80.0, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn yield_multiplier_is_monotone_in_each_skill() {
        let base = SkillSettings::default();
        for level in 0..=5u8 {
            let mut bumped = base.clone();
            bumped.reprocessing = level;
            let lower = yield_multiplier(&bumped);
            bumped.reprocessing = level + 1;
            assert!(yield_multiplier(&bumped) >= lower);

            let mut bumped = base.clone();
            bumped.reprocessing_efficiency = level;
            let lower = yield_multiplier(&bumped);
            bumped.reprocessing_efficiency = level + 1;
            assert!(yield_multiplier(&bumped) >= lower);

            let mut bumped = base.clone();
            bumped.ore_specialization = level;
            let lower = yield_multiplier(&bumped);
            bumped.ore_specialization = level + 1;
            assert!(yield_multiplier(&bumped) >= lower);
        }
    }

    #[test]
    fn arkonor_five_batches_at_neutral_calibration() {
        // 500 units = 5 full batches; multiplier collapses to exactly 1.0.
        let catalog = Catalog::standard();
        let rows = vec![row("1", "Arkonor", 500.0, 2_200.0)];
        let result = evaluate_manifest(
            &rows,
            &neutral_skills(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        assert_eq!(result.yield_multiplier, 1.0);
        assert_eq!(result.total_raw_revenue, 1_100_000.0);
        assert_eq!(
            result.mineral_breakdown,
            vec![
                (MineralKind::Tritanium, 110_000.0),
                (MineralKind::Mexallon, 12_500.0),
                (MineralKind::Megacyte, 1_600.0),
            ]
        );
    }

    #[test]
    fn breakdown_follows_canonical_mineral_order() {
        // Bistot yields Pyerite/Zydrine/Megacyte, Arkonor adds Tritanium and
        // Mexallon; the combined list must come out in display order no
        // matter which row was added first.
        let catalog = Catalog::standard();
        let rows = vec![
            row("1", "Bistot", 300.0, 1_800.0),
            row("2", "Arkonor", 500.0, 2_200.0),
        ];
        let result = evaluate_manifest(
            &rows,
            &neutral_skills(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        let kinds: Vec<MineralKind> = result
            .mineral_breakdown
            .iter()
            .map(|(kind, _)| *kind)
            .collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.first(), Some(&MineralKind::Tritanium));
    }

    #[test]
    fn sub_batch_quantities_yield_nothing() {
        let catalog = Catalog::standard();
        for resource in catalog.iter().filter(|entry| entry.is_reprocessable()) {
            let quantity = f64::from(resource.batch_size) - 1.0;
            let rows = vec![row("1", &resource.name, quantity, 1_000.0)];
            let result = evaluate_manifest(
                &rows,
                &SkillSettings::default(),
                &default_mineral_prices(),
                80.0,
                &catalog,
            );
            assert!(
                result.mineral_breakdown.is_empty(),
                "{} produced minerals below one batch",
                resource.name
            );
        }
    }

    #[test]
    fn per_row_flooring_does_not_commute_with_summation() {
        // Two half-filled rows of the same ore each floor independently;
        // merging them into one row may recover a whole extra batch.
        let catalog = Catalog::standard();
        let skills = neutral_skills();
        let prices = default_mineral_prices();
        let split = vec![
            row("1", "Veldspar", 150.0, 10.0),
            row("2", "Veldspar", 150.0, 10.0),
        ];
        let merged = vec![row("1", "Veldspar", 300.0, 10.0)];
        let split_result = evaluate_manifest(&split, &skills, &prices, 80.0, &catalog);
        let merged_result = evaluate_manifest(&merged, &skills, &prices, 80.0, &catalog);
        assert_eq!(split_result.mineral_breakdown[0].1, 830.0);
        assert_eq!(merged_result.mineral_breakdown[0].1, 1_245.0);
    }

    #[test]
    fn gas_rows_flow_raw_into_refined_total() {
        let catalog = Catalog::standard();
        let rows = vec![row("1", "Fullerite-C320", 1_500.0, 42_000.0)];
        let result = evaluate_manifest(
            &rows,
            &SkillSettings::default(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        assert!(result.mineral_breakdown.is_empty());
        assert_eq!(result.gas.value, 63_000_000.0);
        assert_eq!(result.total_refined_value, 63_000_000.0);
        assert_eq!(result.ore.volume, 0.0);
        assert_eq!(result.gas.volume, 7_500.0);
    }

    #[test]
    fn unknown_resource_degrades_to_zero_volume_and_yield() {
        let catalog = Catalog::standard();
        let rows = vec![row("1", "Mercoxit", 10_000.0, 50.0)];
        let result = evaluate_manifest(
            &rows,
            &SkillSettings::default(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        // Value still counts; nothing else does.
        assert_eq!(result.total_raw_revenue, 500_000.0);
        assert_eq!(result.total_volume, 0.0);
        assert!(result.mineral_breakdown.is_empty());
        assert_eq!(result.gas.value, 500_000.0);
        assert_eq!(result.gas.isk_per_m3, 0.0);
    }

    #[test]
    fn buyback_identity_holds_for_all_rates() {
        let catalog = Catalog::standard();
        let rows = vec![
            row("1", "Arkonor", 500.0, 2_200.0),
            row("2", "Bitumens", 2_000.0, 150.0),
        ];
        for rate in [0.0, 15.0, 80.0, 100.0, 150.0] {
            let result = evaluate_manifest(
                &rows,
                &SkillSettings::default(),
                &default_mineral_prices(),
                rate,
                &catalog,
            );
            assert_eq!(
                result.buyback_payout + result.buyback_forfeited,
                result.total_raw_revenue,
                "rate {rate}"
            );
        }
    }

    #[test]
    fn full_rate_buyback_pays_everything() {
        let catalog = Catalog::standard();
        let rows = vec![row("1", "Arkonor", 500.0, 2_200.0)];
        let result = evaluate_manifest(
            &rows,
            &SkillSettings::default(),
            &default_mineral_prices(),
            100.0,
            &catalog,
        );
        assert_eq!(result.buyback_payout, result.total_raw_revenue);
        assert_eq!(result.buyback_forfeited, 0.0);
    }

    #[test]
    fn out_of_range_inputs_propagate_unclamped() {
        // Level 9 and a 150% buyback rate are accepted as-is; the forfeited
        // share goes negative above 100.
        let mut skills = neutral_skills();
        skills.reprocessing = 9;
        assert!((yield_multiplier(&skills) - 1.27).abs() < 1e-12);

        let (payout, forfeited) = buyback_split(1_000.0, 150.0);
        assert_eq!(payout, 1_500.0);
        assert_eq!(forfeited, -500.0);
    }

    #[test]
    fn density_rows_skip_empty_partitions() {
        let catalog = Catalog::standard();
        let skills = SkillSettings::default();
        let prices = default_mineral_prices();

        let ore_only = vec![row("1", "Arkonor", 500.0, 2_200.0)];
        let result = evaluate_manifest(&ore_only, &skills, &prices, 80.0, &catalog);
        let labels: Vec<&str> = result.density_rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Raw WH Ore", "Refined WH"]);

        let gas_only = vec![row("1", "Fullerite-C28", 400.0, 900.0)];
        let result = evaluate_manifest(&gas_only, &skills, &prices, 80.0, &catalog);
        let labels: Vec<&str> = result.density_rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Raw Fullerite"]);
    }

    #[test]
    fn density_leader_tracks_highest_bar() {
        let catalog = Catalog::standard();
        let rows = vec![
            row("1", "Arkonor", 500.0, 2_200.0),
            row("2", "Fullerite-C320", 1_500.0, 42_000.0),
        ];
        let result = evaluate_manifest(
            &rows,
            &SkillSettings::default(),
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        // Fullerite-C320 at 42k ISK over 5 m3 per unit dwarfs the ore bars.
        let leader = result.density_leader().expect("chart has bars");
        assert_eq!(leader.label, "Raw Fullerite");
        assert_eq!(leader.isk_per_m3, 8_400.0);
    }

    #[test]
    fn profit_delta_sign_flips_with_mineral_prices() {
        let catalog = Catalog::standard();
        let rows = vec![row("1", "Veldspar", 10_000.0, 20.0)];
        let skills = neutral_skills();

        let cheap = MineralPriceTable::from([(MineralKind::Tritanium, 0.1)]);
        let result = evaluate_manifest(&rows, &skills, &cheap, 80.0, &catalog);
        assert!(!result.is_profitable());

        let rich = MineralPriceTable::from([(MineralKind::Tritanium, 500.0)]);
        let result = evaluate_manifest(&rows, &skills, &rich, 80.0, &catalog);
        assert!(result.is_profitable());
    }

    #[test]
    fn missing_mineral_price_counts_as_zero() {
        let catalog = Catalog::standard();
        let rows = vec![row("1", "Veldspar", 1_000.0, 10.0)];
        let result = evaluate_manifest(
            &rows,
            &neutral_skills(),
            &MineralPriceTable::new(),
            80.0,
            &catalog,
        );
        assert_eq!(result.mineral_breakdown[0].1, 4_150.0);
        assert_eq!(result.refined_mineral_value, 0.0);
    }

    #[test]
    fn station_tax_scales_the_floored_product() {
        // One Arkonor batch at 50% tax: floor(1 * 22000 * 1.0 * 0.5).
        let catalog = Catalog::standard();
        let mut skills = neutral_skills();
        skills.station_tax = 50.0;
        let rows = vec![row("1", "Arkonor", 100.0, 0.0)];
        let result = evaluate_manifest(
            &rows,
            &skills,
            &default_mineral_prices(),
            80.0,
            &catalog,
        );
        assert_eq!(result.mineral_breakdown[0], (MineralKind::Tritanium, 11_000.0));
        assert_eq!(result.mineral_breakdown[1], (MineralKind::Mexallon, 1_250.0));
        assert_eq!(result.mineral_breakdown[2], (MineralKind::Megacyte, 160.0));
    }
}
