use dioxus::prelude::*;

use crate::domain::ManifestEvaluation;
use crate::ui::components::roi_badge::RoiBadge;
use crate::util::format_isk;

/// Sidebar summary: gross manifest value, refined output and the ROI badge.
#[component]
pub fn OverviewPanel(evaluation: ManifestEvaluation) -> Element {
    let gross = format_isk(evaluation.total_raw_revenue);
    let refined = format_isk(evaluation.total_refined_value);

    rsx! {
        div { class: "glass-card rounded-2xl p-8 border-t-2 border-t-violet-500/40",
            h3 { class: "text-[10px] font-black text-zinc-500 uppercase tracking-[0.3em] mb-8",
                "Efficiency Overview"
            }
            div { class: "space-y-8",
                div {
                    div { class: "text-[10px] text-zinc-500 uppercase font-black tracking-widest mb-2",
                        "Gross Manifest"
                    }
                    div { class: "text-3xl font-black text-white tracking-tighter mono",
                        "{gross} "
                        span { class: "text-xs text-zinc-500 font-bold", "ISK" }
                    }
                }
                div { class: "pt-8 border-t border-white/5",
                    div { class: "text-[10px] text-violet-400 uppercase font-black tracking-widest mb-2",
                        "Refined Output"
                    }
                    div { class: "text-3xl font-black text-white tracking-tighter mono",
                        "{refined} "
                        span { class: "text-xs text-zinc-500 font-bold", "ISK" }
                    }
                }
                RoiBadge { evaluation }
            }
        }
    }
}
