pub mod tui;
pub mod views;
