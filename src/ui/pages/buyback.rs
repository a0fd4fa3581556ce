use dioxus::prelude::*;

use crate::{
    domain::{buyback_unit_price, AppState, EditAction},
    ui::components::kpi_card::KpiCard,
    util::format_isk,
};

/// The Buyback Hub: flat-rate corp buyback against the whole manifest, with
/// the per-row adjusted prices and payouts.
#[component]
pub fn BuybackPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let rows = state.with(|st| st.rows.clone());
    let rate = state.with(|st| st.buyback_rate);
    let evaluation = state.with(|st| st.evaluate());

    let payout = format_isk(evaluation.buyback_payout);
    let forfeited = format_isk(evaluation.buyback_forfeited);

    rsx! {
        div { class: "glass-card rounded-2xl p-8 border border-emerald-500/10",
            div { class: "flex items-center justify-between mb-10",
                div { class: "flex items-center gap-3",
                    span { class: "text-emerald-400 text-xl", "🤝" }
                    h2 { class: "font-extrabold text-lg uppercase tracking-widest text-white",
                        "Corporation Buyback Hub"
                    }
                }
                div { class: "flex items-center gap-4 bg-emerald-500/10 border border-emerald-500/20 px-6 py-3 rounded-xl",
                    span { class: "text-emerald-400", "◈" }
                    div {
                        span { class: "text-[9px] font-black text-emerald-300 uppercase block tracking-widest mb-1",
                            "Buyback Rate"
                        }
                        div { class: "flex items-center gap-2",
                            input {
                                r#type: "number",
                                value: "{rate}",
                                class: "bg-transparent border-none focus:outline-none text-white font-black mono text-lg w-16",
                                oninput: {
                                    let mut state = state.clone();
                                    move |evt: FormEvent| {
                                        let value = evt.value().parse::<f64>().unwrap_or(0.0);
                                        state.with_mut(|st| st.apply(EditAction::SetBuybackRate(value)));
                                    }
                                },
                            }
                            span { class: "text-white font-black text-lg", "%" }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-10",
                KpiCard {
                    title: "Total Contract Value".to_string(),
                    value: payout,
                    unit: Some("ISK".to_string()),
                    accent: Some("text-emerald-400".to_string()),
                }
                KpiCard {
                    title: "Corporate Contribution".to_string(),
                    value: forfeited,
                    unit: Some("ISK".to_string()),
                    accent: Some("text-zinc-600".to_string()),
                }
            }

            div { class: "bg-slate-950/40 rounded-xl overflow-hidden border border-white/5",
                table { class: "w-full text-left",
                    thead { class: "bg-slate-900/60 text-[9px] font-black uppercase text-zinc-500 tracking-widest",
                        tr {
                            th { class: "px-6 py-4", "Resource" }
                            th { class: "px-6 py-4", "Market Unit" }
                            th { class: "px-6 py-4", "Adjusted Unit" }
                            th { class: "px-6 py-4 text-right", "Payout" }
                        }
                    }
                    tbody { class: "divide-y divide-white/5",
                        for row in rows {
                            tr { class: "text-xs font-bold text-zinc-300",
                                td { class: "px-6 py-4", "{row.resource_name}" }
                                td { class: "px-6 py-4 mono", {format_isk(row.unit_price)} }
                                td { class: "px-6 py-4 mono text-emerald-400",
                                    {format_isk(buyback_unit_price(row.unit_price, rate))}
                                }
                                td { class: "px-6 py-4 text-right mono text-white",
                                    {format_isk(row.total() * (rate / 100.0))}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "mt-10 bg-emerald-500/5 border border-emerald-500/10 p-6 rounded-2xl flex items-center gap-6",
                span { class: "text-emerald-500 opacity-50 text-2xl", "⇄" }
                div { class: "flex-1",
                    h4 { class: "text-xs font-black text-white uppercase tracking-widest mb-1",
                        "Corporate Logistics Benefit"
                    }
                    p { class: "text-[10px] text-zinc-500 leading-relaxed italic",
                        "Selling via buyback eliminates market taxes, broker fees, and the high-risk logistics of hauling through contested J-Space pipelines."
                    }
                }
            }
        }
    }
}
