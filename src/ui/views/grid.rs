use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::model::frame::DisplayFrame;

/// Terminal cells are tall, so a grid cell is two characters wide.
const CELL_WIDTH: usize = 2;

/// Grid with the line-of-sight overlay, facing arrows, and robot icons.
///
/// Paints in layers: the ordered cell matrix first (positional index maps
/// straight to screen position), then each robot's facing arrow, then the
/// robot icons on top.
pub fn draw_grid(f: &mut Frame, area: Rect, frame: &DisplayFrame) {
    let side = frame.grid as usize;
    let dark = Style::default().fg(Color::DarkGray);
    let lit = Style::default()
        .bg(Color::Rgb(0xcc, 0xcc, 0xcc))
        .fg(Color::Black);

    let mut tiles: Vec<(String, Style)> = frame
        .cells
        .iter()
        .map(|c| (" .".to_string(), if c.illuminated { lit } else { dark }))
        .collect();

    for robot in &frame.robots {
        let color = parse_color(&robot.color).unwrap_or(Color::White);
        if let (Some((ax, ay)), Some(arrow)) = (robot.facing_cell(), robot.arrow()) {
            if let Some(idx) = tile_index(side, ax, ay) {
                tiles[idx].0 = format!("{arrow} ");
                tiles[idx].1 = tiles[idx].1.fg(color);
            }
        }
        if let Some(idx) = tile_index(side, robot.x, robot.y) {
            tiles[idx].0 = format!("{:<w$.w$}", robot.name, w = CELL_WIDTH);
            tiles[idx].1 = tiles[idx].1.fg(color).add_modifier(Modifier::BOLD);
        }
    }

    let lines: Vec<Line> = tiles
        .chunks(side)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|(text, style)| Span::styled(text.clone(), *style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let grid = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Grid {side}x{side}")),
    );
    f.render_widget(grid, area);
}

/// Positional index into the row-major tile buffer, if (x, y) is on grid.
fn tile_index(side: usize, x: i64, y: i64) -> Option<usize> {
    let side_i = side as i64;
    if (0..side_i).contains(&x) && (0..side_i).contains(&y) {
        Some((y * side_i + x) as usize)
    } else {
        None
    }
}

/// "#rrggbb" color token to RGB; anything else falls back to the caller's
/// default.
pub fn parse_color(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
