use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::components::{
    calibration_panel::CalibrationPanel, overview_panel::OverviewPanel,
};
use crate::util::{format_isk, version::version_label};

/// Frame shared by every tab: branded header with live manifest readouts,
/// tab navigation, the persistent calibration sidebar and the footer.
#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let evaluation = state.with(|st| st.evaluate());

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let total_volume = format_isk(evaluation.total_volume);
    let total_revenue = format_isk(evaluation.total_raw_revenue);
    let version = version_label();

    rsx! {
        div { class: "min-h-screen flex flex-col bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-violet-500/20 bg-slate-950/80 backdrop-blur sticky top-0 z-50",
                div { class: "mx-auto max-w-7xl px-6 h-20 flex items-center justify-between gap-6",
                    div { class: "flex items-center gap-4",
                        div { class: "w-10 h-10 rounded border border-violet-500/30 bg-violet-500/10 flex items-center justify-center text-violet-400 font-black",
                            "◉"
                        }
                        div {
                            h1 { class: "text-xl font-extrabold text-white uppercase tracking-tight leading-none mb-1",
                                "Astraea Deep-Space"
                            }
                            div { class: "flex items-center gap-2",
                                span { class: "w-2 h-2 rounded-full bg-emerald-500 animate-pulse" }
                                p { class: "text-[9px] text-zinc-400 uppercase tracking-widest font-bold",
                                    "Static Terminal Online"
                                }
                            }
                        }
                    }

                    nav { class: "hidden lg:flex items-center gap-1 bg-slate-900/60 rounded-lg p-1 border border-white/5",
                        TabButton {
                            active: matches!(current_route, Route::Manifest {}),
                            onclick: move |_| { nav.push(Route::Manifest {}); },
                            label: "Cargo Deck",
                        }
                        TabButton {
                            active: matches!(current_route, Route::Refinery {}),
                            onclick: move |_| { nav.push(Route::Refinery {}); },
                            label: "Moon Matrix",
                        }
                        TabButton {
                            active: matches!(current_route, Route::Buyback {}),
                            onclick: move |_| { nav.push(Route::Buyback {}); },
                            label: "Buyback Hub",
                        }
                    }

                    div { class: "flex items-center gap-6",
                        div { class: "hidden xl:flex flex-col items-end border-r border-white/5 pr-6",
                            span { class: "text-[9px] text-zinc-500 uppercase font-bold", "Cargo Mass" }
                            span { class: "text-sm font-bold text-white mono", "{total_volume} m³" }
                        }
                        div { class: "flex flex-col items-end",
                            span { class: "text-[9px] text-amber-500 uppercase font-bold", "Manifest Value" }
                            span { class: "text-lg font-black text-white mono",
                                "{total_revenue} "
                                span { class: "text-[10px] text-zinc-500", "ISK" }
                            }
                        }
                    }
                }
            }

            main { class: "flex-1 mx-auto max-w-7xl w-full p-6 lg:p-10 grid grid-cols-1 lg:grid-cols-12 gap-10",
                div { class: "lg:col-span-8 space-y-8",
                    {children}
                }
                div { class: "lg:col-span-4 space-y-8",
                    OverviewPanel { evaluation: evaluation.clone() }
                    CalibrationPanel {}
                }
            }

            footer { class: "border-t border-white/5 p-10 bg-slate-950/90",
                div { class: "mx-auto max-w-7xl flex flex-col md:flex-row justify-between items-center gap-6",
                    div { class: "flex items-center gap-4",
                        div { class: "w-3 h-3 rounded-full bg-violet-500/20 border border-violet-500 animate-pulse" }
                        p { class: "text-zinc-600 text-[9px] font-black uppercase tracking-[0.3em]",
                            "Astraea Terminal {version} (Static)"
                        }
                    }
                    div { class: "flex gap-10",
                        span { class: "text-zinc-700 text-[10px] uppercase font-black", "Zero-Key Access" }
                        span { class: "text-zinc-700 text-[10px] uppercase font-black", "Open Source Industrial Utility" }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "px-6 py-2 rounded-md text-[10px] font-black uppercase tracking-widest bg-violet-600 text-white"
    } else {
        "px-6 py-2 rounded-md text-[10px] font-black uppercase tracking-widest text-zinc-500 transition hover:text-zinc-300"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
