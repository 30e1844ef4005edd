pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use crate::ui::tui::Tui;

impl App {
    /// Render loop. Each pass draws off the latest committed snapshot; the
    /// polling task runs independently and never blocks a frame.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(50);

        while self.running {
            let frame_start = Instant::now();

            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            // Use 1ms poll interval to prevent busy-waiting while remaining responsive
            while event::poll(Duration::from_millis(1))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if let Some(remaining) = tick_rate.checked_sub(frame_start.elapsed()) {
                tokio::time::sleep(remaining).await;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }
}
