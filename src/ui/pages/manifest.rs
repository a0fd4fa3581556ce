use dioxus::prelude::*;

use crate::{
    domain::{AppState, EditAction, OreCategory},
    ui::components::{
        density_chart::DensityChart,
        manifest_table::{ManifestTable, PickerGroup},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::format_isk,
};

/// The Cargo Deck: editable manifest plus the logistical density overview.
#[component]
pub fn ManifestPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let rows = state.with(|st| st.rows.clone());
    let evaluation = state.with(|st| st.evaluate());
    let picker_groups = state.with(build_picker_groups);

    let on_add = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.apply(EditAction::AddRow));
            push_toast(toasts.clone(), ToastKind::Success, "Discovery logged.");
        }
    };

    let on_edit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |action: EditAction| {
            let removed = matches!(action, EditAction::RemoveRow(_));
            state.with_mut(|st| st.apply(action));
            if removed {
                push_toast(toasts.clone(), ToastKind::Info, "Entry removed from manifest.");
            }
        }
    };

    let leader = evaluation.density_leader().cloned();
    let density_rows = evaluation.density_rows.clone();

    rsx! {
        div { class: "space-y-8",
            div { class: "glass-card rounded-2xl overflow-hidden border border-violet-500/10",
                div { class: "p-6 border-b border-white/5 flex justify-between items-center bg-white/5",
                    div { class: "flex items-center gap-3",
                        span { class: "text-violet-400", "▣" }
                        h2 { class: "font-extrabold text-sm uppercase tracking-widest text-white",
                            "Cargo Manifest"
                        }
                    }
                    button {
                        class: "flex items-center gap-2 text-[10px] font-black bg-violet-600 hover:bg-violet-500 text-white px-5 py-2 rounded uppercase tracking-widest transition-all",
                        onclick: on_add,
                        "+ Log Discovery"
                    }
                }
                ManifestTable { rows, picker_groups, on_edit }
            }

            div { class: "glass-card rounded-2xl p-8 border border-amber-500/10",
                div { class: "flex items-center gap-3 mb-10",
                    span { class: "text-amber-400", "▥" }
                    h2 { class: "font-extrabold text-sm uppercase tracking-widest text-white",
                        "Logistical Density (ISK/m³)"
                    }
                }
                div { class: "grid grid-cols-1 xl:grid-cols-3 gap-10",
                    div { class: "xl:col-span-2",
                        DensityChart { rows: density_rows }
                    }
                    div { class: "bg-slate-900/40 border border-white/5 p-6 rounded-xl flex flex-col justify-center",
                        div { class: "flex items-center gap-2 mb-4",
                            span { class: "text-amber-400", "◎" }
                            span { class: "text-[9px] font-black text-zinc-500 uppercase tracking-widest",
                                "Density Priority"
                            }
                        }
                        if let Some(leader) = leader {
                            div {
                                div { class: "text-xs font-bold text-zinc-400 mb-2 uppercase tracking-wide",
                                    "{leader.label}"
                                }
                                div { class: "text-3xl font-black text-white tracking-tighter mono leading-none",
                                    {format_isk(leader.isk_per_m3)}
                                    span { class: "text-xs text-zinc-500", " ISK/m³" }
                                }
                            }
                        } else {
                            div { class: "text-zinc-700 text-[11px] italic text-center py-4", "Manifest empty..." }
                        }
                    }
                }
            }
        }
    }
}

/// Category-grouped picker entries, in the terminal's fixed group order.
fn build_picker_groups(state: &AppState) -> Vec<PickerGroup> {
    OreCategory::PICKER_ORDER
        .iter()
        .filter_map(|category| {
            let resources: Vec<String> = state
                .catalog
                .in_category(*category)
                .map(|entry| entry.name.clone())
                .collect();
            if resources.is_empty() {
                None
            } else {
                Some(PickerGroup {
                    label: category.picker_label(),
                    resources,
                })
            }
        })
        .collect()
}
