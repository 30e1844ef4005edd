use ratatui::prelude::*;

use crate::app::App;
use crate::model::frame::DisplayFrame;
use crate::ui::views;

impl App {
    /// Draw one frame. Derivation only happens once a snapshot exists; until
    /// then the loading screen is the whole UI.
    pub fn draw(&self, f: &mut Frame) {
        let snapshot = match self.slot.latest() {
            Some(s) => s,
            None => {
                views::status::draw_loading(f, f.area());
                return;
            }
        };

        let frame = DisplayFrame::derive(&snapshot, self.config.display.leaderboard_size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(f.area());
        views::status::draw_header(f, chunks[0], frame.round, frame.delay_ns);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(24)])
            .split(chunks[1]);
        views::grid::draw_grid(f, body[0], &frame);
        views::leaderboard::draw_leaderboard(f, body[1], &frame.leaders);
    }
}
