use dioxus::prelude::*;

use crate::domain::ManifestEvaluation;
use crate::util::format_isk;

/// Profit/loss indicator for the refinement round trip: green when
/// reprocessing beats selling raw, rose when it loses ISK.
#[component]
pub fn RoiBadge(evaluation: ManifestEvaluation) -> Element {
    let profitable = evaluation.is_profitable();
    let (container, icon_box, delta_color, arrow) = if profitable {
        (
            "bg-emerald-500/5 border-emerald-500/20",
            "bg-emerald-500/20 border-emerald-500/30 text-emerald-400",
            "text-emerald-400",
            "▲",
        )
    } else {
        (
            "bg-rose-500/5 border-rose-500/20",
            "bg-rose-500/20 border-rose-500/30 text-rose-400",
            "text-rose-400",
            "▼",
        )
    };

    let delta = evaluation.profit_delta;
    let delta_display = if delta > 0.0 {
        format!("+{}", format_isk(delta))
    } else {
        format_isk(delta)
    };

    rsx! {
        div {
            class: "p-6 rounded-2xl flex items-center justify-between border-2 {container} shadow-lg",
            div { class: "flex items-center gap-4",
                div { class: "w-12 h-12 rounded-xl flex items-center justify-center border text-xl {icon_box}",
                    "{arrow}"
                }
                div {
                    div { class: "text-[9px] font-black uppercase text-zinc-500 leading-none mb-1 tracking-widest",
                        "Refinement ROI"
                    }
                    div { class: "text-xl font-black mono leading-none {delta_color}", "{delta_display}" }
                }
            }
        }
    }
}
