use dioxus::prelude::*;

/// Dark stat tile used across the Buyback Hub and Moon Matrix panels.
#[component]
pub fn KpiCard(title: String, value: String, unit: Option<String>, accent: Option<String>) -> Element {
    let accent_class = accent.unwrap_or_else(|| "text-emerald-400".to_string());

    rsx! {
        div {
            class: "bg-slate-900/60 p-6 rounded-2xl border border-white/5",
            div { class: "text-[9px] font-black text-zinc-500 uppercase tracking-widest mb-2", "{title}" }
            div { class: "text-3xl font-black text-white mono tracking-tighter",
                "{value} "
                if let Some(unit) = unit {
                    span { class: "text-xs {accent_class}", "{unit}" }
                }
            }
        }
    }
}
