use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::model::leaderboard::LeaderboardEntry;

pub fn draw_leaderboard(f: &mut Frame, area: Rect, leaders: &[LeaderboardEntry]) {
    let rows: Vec<Row> = leaders
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name.clone()),
                Cell::from(entry.score.to_string()),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(8)])
        .header(
            Row::new(vec!["Name", "Score"]).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Leaderboard"));
    f.render_widget(table, area);
}
