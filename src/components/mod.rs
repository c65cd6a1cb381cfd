pub mod app;
pub mod scale_readout;
pub mod settings_panel;
pub mod stats_panel;
pub mod zoom_canvas;
