use dioxus::prelude::*;

use crate::domain::{AppState, EditAction, SkillField};

/// Sidebar panel for skills and structure calibration. Every control routes
/// through one `SetSkill` dispatch.
#[component]
pub fn CalibrationPanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let skills = state.with(|st| st.skills.clone());

    let station_yield = skills.station_yield;
    let station_tax = skills.station_tax;
    let implant_bonus = skills.implant_bonus;

    rsx! {
        div { class: "glass-card rounded-2xl p-8",
            div { class: "flex items-center gap-3 mb-8",
                span { class: "text-zinc-500 text-sm", "⚙" }
                h3 { class: "text-[10px] font-black uppercase tracking-[0.3em] text-zinc-400",
                    "Structure Calibration"
                }
            }
            div { class: "space-y-8",
                div {
                    div { class: "flex justify-between items-center mb-3",
                        label { class: "text-[10px] font-black text-zinc-500 uppercase tracking-widest",
                            "Structure Yield %"
                        }
                        span { class: "text-xs font-bold text-violet-400 mono", "{station_yield}%" }
                    }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{station_yield}",
                        class: "w-full accent-violet-600 h-1.5 bg-zinc-800 rounded-lg appearance-none cursor-pointer",
                        oninput: {
                            let mut state = state.clone();
                            move |evt: FormEvent| {
                                let value = evt.value().parse::<f64>().unwrap_or(0.0);
                                state.with_mut(|st| st.apply(EditAction::SetSkill(SkillField::StationYield, value)));
                            }
                        },
                    }
                }
                div { class: "grid grid-cols-2 gap-4",
                    SkillLevelSelect { label: "Reprocessing", field: SkillField::Reprocessing, level: skills.reprocessing }
                    SkillLevelSelect { label: "Efficiency", field: SkillField::ReprocessingEfficiency, level: skills.reprocessing_efficiency }
                    SkillLevelSelect { label: "Specialization", field: SkillField::OreSpecialization, level: skills.ore_specialization }
                    div { class: "space-y-2",
                        label { class: "text-[9px] font-black text-zinc-500 uppercase tracking-widest",
                            "Station Tax %"
                        }
                        input {
                            r#type: "number",
                            step: "0.1",
                            value: "{station_tax}",
                            class: "w-full bg-slate-900/80 border border-white/5 rounded-lg px-3 py-2 text-xs text-white font-bold mono outline-none focus:border-violet-500/50",
                            oninput: {
                                let mut state = state.clone();
                                move |evt: FormEvent| {
                                    let value = evt.value().parse::<f64>().unwrap_or(0.0);
                                    state.with_mut(|st| st.apply(EditAction::SetSkill(SkillField::StationTax, value)));
                                }
                            },
                        }
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-[9px] font-black text-zinc-500 uppercase tracking-widest",
                        "Implant Bonus (×)"
                    }
                    input {
                        r#type: "number",
                        step: "0.01",
                        value: "{implant_bonus}",
                        class: "w-full bg-slate-900/80 border border-white/5 rounded-lg px-3 py-2 text-xs text-white font-bold mono outline-none focus:border-violet-500/50",
                        oninput: {
                            let mut state = state.clone();
                            move |evt: FormEvent| {
                                let value = evt.value().parse::<f64>().unwrap_or(1.0);
                                state.with_mut(|st| st.apply(EditAction::SetSkill(SkillField::ImplantBonus, value)));
                            }
                        },
                    }
                }
            }
            div { class: "mt-10 pt-6 border-t border-white/5 flex items-start gap-4",
                span { class: "text-violet-600 opacity-40", "🛡" }
                p { class: "text-[9px] text-zinc-600 font-medium italic",
                    "Terminal operating in stand-alone mode."
                }
            }
        }
    }
}

#[component]
fn SkillLevelSelect(label: &'static str, field: SkillField, level: u8) -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "space-y-2",
            label { class: "text-[9px] font-black text-zinc-500 uppercase tracking-widest", "{label}" }
            select {
                class: "w-full bg-slate-900/80 border border-white/5 rounded-lg px-3 py-2 text-xs text-white font-bold outline-none focus:border-violet-500/50",
                value: "{level}",
                onchange: {
                    let mut state = state.clone();
                    move |evt: FormEvent| {
                        let value = evt.value().parse::<f64>().unwrap_or(0.0);
                        state.with_mut(|st| st.apply(EditAction::SetSkill(field, value)));
                    }
                },
                for candidate in 0..=5u8 {
                    option { value: "{candidate}", selected: candidate == level, "Level {candidate}" }
                }
            }
        }
    }
}
