pub mod calibration_panel;
pub mod density_chart;
pub mod kpi_card;
pub mod manifest_table;
pub mod overview_panel;
pub mod roi_badge;
pub mod toast;
