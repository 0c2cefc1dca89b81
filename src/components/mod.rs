pub mod app;
pub mod board;
pub mod controls_panel;
pub mod game_over_overlay;
pub mod run_view;
pub mod stats_panel;
pub mod time_display;
pub mod tower_panel;

pub use app::App;
