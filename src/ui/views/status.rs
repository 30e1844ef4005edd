use ratatui::prelude::*;
use ratatui::widgets::*;

/// Shown until the first snapshot is committed.
pub fn draw_loading(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(msg, area);
}

pub fn draw_header(f: &mut Frame, area: Rect, round: u64, delay_ns: u64) {
    let title = Paragraph::new(format!("Round {round}  ({} delay)", format_delay(delay_ns)))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

/// Round delay readout: ns down to `seconds.millis` with millis zero-padded
/// to three digits. Truncates rather than rounds, and seconds wrap at one
/// minute, matching the reference UI exactly.
pub fn format_delay(delay_ns: u64) -> String {
    let ms = delay_ns / 1_000_000;
    let seconds = (ms / 1000) % 60;
    let millis = ms % 1000;
    format!("{seconds}.{millis:03}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_and_padded_millis() {
        assert_eq!(format_delay(1_250_000_000), "1.250s");
        assert_eq!(format_delay(0), "0.000s");
        assert_eq!(format_delay(42_000_000), "0.042s");
        assert_eq!(format_delay(5_000_000), "0.005s");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 1.9996s stays 1.999, never 2.000.
        assert_eq!(format_delay(1_999_600_000), "1.999s");
    }

    #[test]
    fn seconds_wrap_at_one_minute() {
        assert_eq!(format_delay(61_005_000_000), "1.005s");
    }
}
