use dioxus::prelude::*;

use crate::domain::{EditAction, ManifestRow};
use crate::util::format_isk;

/// One `<optgroup>` of the resource picker.
#[derive(Clone, PartialEq)]
pub struct PickerGroup {
    pub label: String,
    pub resources: Vec<String>,
}

/// The editable cargo manifest. Every widget dispatches a single
/// [`EditAction`]; the table itself owns nothing.
#[component]
pub fn ManifestTable(
    rows: Vec<ManifestRow>,
    picker_groups: Vec<PickerGroup>,
    on_edit: EventHandler<EditAction>,
) -> Element {
    let is_empty = rows.is_empty();

    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full text-left border-collapse",
                thead { class: "bg-slate-950/60 text-[9px] uppercase tracking-[0.2em] text-zinc-500 font-black",
                    tr {
                        th { class: "px-6 py-4", "Resource ID" }
                        th { class: "px-6 py-4", "Quantity" }
                        th { class: "px-6 py-4", "Unit Value" }
                        th { class: "px-6 py-4", "Total ISK" }
                        th { class: "px-6 py-4 text-right", "Action" }
                    }
                }
                tbody { class: "divide-y divide-white/5",
                    for row in rows {
                        ManifestRowView {
                            row,
                            picker_groups: picker_groups.clone(),
                            on_edit: on_edit.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-6 py-8 text-center text-[11px] italic text-zinc-700",
                                colspan: "5",
                                "Manifest empty. Log a discovery to begin."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ManifestRowView(
    row: ManifestRow,
    picker_groups: Vec<PickerGroup>,
    on_edit: EventHandler<EditAction>,
) -> Element {
    let row_total = format_isk(row.total());
    let select_id = row.id.clone();
    let quantity_id = row.id.clone();
    let price_id = row.id.clone();
    let remove_id = row.id.clone();

    let input_class = "bg-slate-900/50 border border-white/10 rounded px-3 py-1.5 text-xs focus:outline-none focus:border-violet-500/50 w-full mono text-white";

    rsx! {
        tr { class: "hover:bg-violet-500/5 transition-colors",
            td { class: "px-6 py-4",
                select {
                    class: "bg-slate-900/50 border border-white/10 rounded px-3 py-1.5 text-xs focus:outline-none focus:border-violet-500/50 w-full text-zinc-100",
                    value: row.resource_name.clone(),
                    onchange: move |evt| {
                        on_edit.call(EditAction::SetResource(select_id.clone(), evt.value()));
                    },
                    for group in picker_groups.iter() {
                        optgroup { label: group.label.clone(),
                            for resource in group.resources.iter() {
                                option {
                                    value: resource.clone(),
                                    selected: *resource == row.resource_name,
                                    "{resource}"
                                }
                            }
                        }
                    }
                }
            }
            td { class: "px-6 py-4",
                input {
                    r#type: "number",
                    class: input_class,
                    value: "{row.quantity}",
                    oninput: move |evt| {
                        let value = evt.value().parse::<f64>().unwrap_or(0.0);
                        on_edit.call(EditAction::SetQuantity(quantity_id.clone(), value));
                    },
                }
            }
            td { class: "px-6 py-4",
                input {
                    r#type: "number",
                    class: input_class,
                    value: "{row.unit_price}",
                    oninput: move |evt| {
                        let value = evt.value().parse::<f64>().unwrap_or(0.0);
                        on_edit.call(EditAction::SetUnitPrice(price_id.clone(), value));
                    },
                }
            }
            td { class: "px-6 py-4 text-sm font-bold text-violet-400 mono", "{row_total}" }
            td { class: "px-6 py-4 text-right",
                button {
                    class: "text-zinc-600 hover:text-rose-400 transition-all p-2 text-sm",
                    onclick: move |_| on_edit.call(EditAction::RemoveRow(remove_id.clone())),
                    "✕"
                }
            }
        }
    }
}
