//! Playfield rendering.
//!
//! Uses a cell buffer for per-character color control: the ground, player
//! square, and spike triangles are drawn into a 2D grid in scaled field
//! coordinates and then stamped row-by-row as Paragraph widgets, with
//! adjacent same-style cells coalesced into single spans.

use super::to_color;
use crate::game::{
    Snapshot, Triangle, BACKGROUND_COLOR, FIELD_HEIGHT, FIELD_WIDTH, GROUND_COLOR, OBSTACLE_COLOR,
    PLAYER_COLOR, TEXT_COLOR,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

/// Render the playfield: ground, spikes, player, score readouts.
pub fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let x_scale = width as f64 / FIELD_WIDTH;
    let y_scale = height as f64 / FIELD_HEIGHT;

    let background = Cell {
        ch: ' ',
        fg: Color::Reset,
        bg: to_color(BACKGROUND_COLOR),
    };
    let mut buffer: Vec<Vec<Cell>> = vec![vec![background; width]; height];

    // ── Ground strip ──────────────────────────────────────────────────
    let ground_top = scale_row(snapshot.ground.y, y_scale, height);
    for (row_idx, row) in buffer.iter_mut().enumerate().skip(ground_top) {
        for (col_idx, cell) in row.iter_mut().enumerate() {
            // Sparse texture on the surface row, solid fill below.
            let ch = if row_idx == ground_top && col_idx % 4 == 0 {
                GROUND_SUB
            } else {
                GROUND_CHAR
            };
            *cell = Cell {
                ch,
                fg: Color::Rgb(70, 70, 95),
                bg: to_color(GROUND_COLOR),
            };
        }
    }

    // ── Spikes ────────────────────────────────────────────────────────
    for triangle in &snapshot.obstacles {
        draw_triangle(&mut buffer, triangle, x_scale, y_scale, ground_top);
    }

    // ── Player square ─────────────────────────────────────────────────
    let left = (snapshot.player.x * x_scale).round() as i32;
    let right = ((snapshot.player.x + snapshot.player.w) * x_scale).round() as i32;
    let top = scale_row(snapshot.player.y, y_scale, height) as i32;
    let bottom = scale_row(snapshot.player.y + snapshot.player.h, y_scale, height) as i32;
    for row in top..bottom.max(top + 1) {
        if row < 0 || row >= height as i32 {
            continue;
        }
        for col in left..right.max(left + 1) {
            if col >= 0 && col < width as i32 {
                buffer[row as usize][col as usize] = Cell {
                    ch: '█',
                    fg: to_color(PLAYER_COLOR),
                    bg: to_color(BACKGROUND_COLOR),
                };
            }
        }
    }

    // ── Score readouts ────────────────────────────────────────────────
    stamp_text(
        &mut buffer,
        0,
        1,
        &format!("Score: {}", snapshot.score),
        to_color(TEXT_COLOR),
    );
    let best_text = format!("Best: {}", snapshot.best);
    let best_col = width.saturating_sub(best_text.len() + 1);
    stamp_text(&mut buffer, 0, best_col, &best_text, Color::DarkGray);

    // ── Stamp the buffer row-by-row, coalescing same-style runs ───────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Scale a field y coordinate to a buffer row, clamped into range.
fn scale_row(y: f64, y_scale: f64, height: usize) -> usize {
    ((y * y_scale).round() as usize).min(height.saturating_sub(1))
}

/// Rasterize one spike triangle: rows narrow from the full base toward a
/// single apex cell.
fn draw_triangle(
    buffer: &mut [Vec<Cell>],
    triangle: &Triangle,
    x_scale: f64,
    y_scale: f64,
    ground_top: usize,
) {
    let height = buffer.len();
    let width = buffer[0].len();

    let apex_col = (triangle.apex.0 * x_scale).round() as i32;
    let apex_row = scale_row(triangle.apex.1, y_scale, height) as i32;
    // Base sits on the ground surface row; keep at least one row of spike
    // above it even on tiny terminals.
    let base_row = (ground_top as i32 - 1).max(apex_row);
    let half_base = (triangle.base_right.0 - triangle.apex.0) * x_scale;

    for row in apex_row..=base_row {
        if row < 0 || row >= height as i32 {
            continue;
        }
        let t = if base_row > apex_row {
            (row - apex_row) as f64 / (base_row - apex_row) as f64
        } else {
            1.0
        };
        let half = (half_base * t).round() as i32;
        for col in (apex_col - half)..=(apex_col + half) {
            if col < 0 || col >= width as i32 {
                continue;
            }
            let ch = if row == apex_row { '▲' } else { '█' };
            buffer[row as usize][col as usize] = Cell {
                ch,
                fg: to_color(OBSTACLE_COLOR),
                bg: to_color(BACKGROUND_COLOR),
            };
        }
    }
}

/// Write a small text label straight into the buffer.
fn stamp_text(buffer: &mut [Vec<Cell>], row: usize, col: usize, text: &str, fg: Color) {
    if row >= buffer.len() {
        return;
    }
    let width = buffer[row].len();
    for (i, ch) in text.chars().enumerate() {
        let col = col + i;
        if col >= width {
            break;
        }
        let bg = buffer[row][col].bg;
        buffer[row][col] = Cell { ch, fg, bg };
    }
}
