use dioxus::prelude::*;

use crate::{
    domain::{AppState, EditAction, MineralKind},
    util::format_isk,
};

/// The Moon Matrix: mineral price table, the calculated yield index and the
/// reprocessed mineral breakdown.
#[component]
pub fn RefineryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let evaluation = state.with(|st| st.evaluate());
    let prices = state.with(|st| st.mineral_prices.clone());

    let yield_index = format!("{:.2}", evaluation.yield_multiplier * 100.0);
    let breakdown: Vec<BreakdownView> = evaluation
        .mineral_breakdown
        .iter()
        .map(|(kind, amount)| {
            let unit_price = prices.get(kind).copied().unwrap_or(0.0);
            BreakdownView {
                name: kind.name(),
                amount: format_isk(*amount),
                value: format_isk(amount * unit_price),
            }
        })
        .collect();

    rsx! {
        div { class: "glass-card rounded-2xl p-8 border border-indigo-500/10",
            div { class: "flex items-center justify-between mb-10",
                div { class: "flex items-center gap-3",
                    span { class: "text-indigo-400 text-xl", "⚗" }
                    h2 { class: "font-extrabold text-lg uppercase tracking-widest text-white",
                        "Athanor Refining Core"
                    }
                }
                div { class: "bg-indigo-500/10 border border-indigo-500/20 px-4 py-2 rounded-lg flex items-center gap-3",
                    span { class: "text-indigo-400", "▦" }
                    span { class: "text-[10px] font-black text-indigo-300 uppercase tracking-widest",
                        "Yield Index: {yield_index}%"
                    }
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-6 mb-10",
                for kind in MineralKind::ALL {
                    MineralPriceField {
                        kind,
                        price: prices.get(&kind).copied().unwrap_or(0.0),
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                for row in breakdown {
                    div { class: "bg-indigo-500/5 border border-indigo-500/10 p-5 rounded-xl text-center transition-all hover:bg-indigo-500/10",
                        span { class: "text-[9px] text-indigo-400 font-black uppercase mb-2 block tracking-[0.2em]",
                            "{row.name}"
                        }
                        span { class: "text-xl font-extrabold text-white mono leading-none",
                            "{row.amount}"
                        }
                        div { class: "mt-3 text-[10px] text-zinc-500 mono", "≈ {row.value} ISK" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BreakdownView {
    name: &'static str,
    amount: String,
    value: String,
}

#[component]
fn MineralPriceField(kind: MineralKind, price: f64) -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "bg-slate-900/60 border border-white/5 p-4 rounded-xl transition-all hover:border-indigo-500/30",
            label { class: "block text-[9px] text-zinc-500 font-black uppercase mb-2 tracking-widest",
                "{kind.name()}"
            }
            div { class: "flex items-baseline gap-2",
                input {
                    r#type: "number",
                    step: "0.1",
                    value: "{price}",
                    class: "bg-transparent text-sm font-bold text-white mono focus:outline-none w-full",
                    oninput: {
                        let mut state = state.clone();
                        move |evt: FormEvent| {
                            let value = evt.value().parse::<f64>().unwrap_or(0.0);
                            state.with_mut(|st| st.apply(EditAction::SetMineralPrice(kind, value)));
                        }
                    },
                }
                span { class: "text-[9px] text-zinc-600 font-bold", "ISK" }
            }
        }
    }
}
