use dioxus::prelude::*;

use crate::domain::DensityRow;
use crate::util::format_isk;

/// Horizontal bar chart of ISK per cubic meter, scaled against the densest
/// entry. Plain divs; the data set is three bars at most.
#[component]
pub fn DensityChart(rows: Vec<DensityRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "text-zinc-700 text-[11px] italic text-center py-10", "Manifest empty..." }
        };
    }

    let max = rows
        .iter()
        .map(|row| row.isk_per_m3)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let bars: Vec<BarView> = rows
        .iter()
        .map(|row| {
            let width = (row.isk_per_m3 / max * 100.0).clamp(2.0, 100.0);
            BarView {
                label: row.label,
                amount: format_isk(row.isk_per_m3),
                style: format!(
                    "width: {width:.1}%; background-color: {}; opacity: 0.8;",
                    row.color
                ),
            }
        })
        .collect();

    rsx! {
        div { class: "space-y-4 bg-slate-950/40 rounded-xl p-6 border border-white/5",
            for bar in bars {
                div { class: "flex items-center gap-4",
                    span { class: "w-28 shrink-0 text-[10px] text-zinc-500 font-bold uppercase tracking-wide text-right",
                        "{bar.label}"
                    }
                    div { class: "flex-1 h-9 bg-slate-900/60 rounded overflow-hidden",
                        div { class: "h-full rounded-r", style: "{bar.style}" }
                    }
                    span { class: "w-24 shrink-0 text-[10px] text-zinc-100 mono font-bold",
                        "{bar.amount}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BarView {
    label: &'static str,
    amount: String,
    style: String,
}
