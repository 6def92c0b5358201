//! Terminal rendering.
//!
//! Consumes the core's [`Snapshot`] and draws it with ratatui: a bordered
//! playfield, a two-line status bar, and a centered restart banner over
//! the frozen world after a crash. Nothing in here mutates game state.

pub mod scene;

use crate::game::{Rgb, Snapshot, GAME_OVER_COLOR, TEXT_COLOR};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Draw one frame.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();
    if area.width < 20 || area.height < 8 {
        return;
    }

    // Outer border around the whole game.
    let block = Block::default()
        .title(" Spike Dash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(to_color(TEXT_COLOR)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Playfield (top) + status bar (bottom 2 lines).
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(inner);

    scene::render_play_field(frame, chunks[0], snapshot);
    render_status_bar_content(frame, chunks[1], snapshot);

    if snapshot.game_over {
        render_game_over_banner(frame, chunks[0], snapshot);
    }
}

/// Render a two-line status bar: status message + key hints.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if snapshot.game_over {
        render_status_bar(
            frame,
            area,
            "Wiped out!",
            to_color(GAME_OVER_COLOR),
            &[("[Space/Up]", "Restart"), ("[Q/Esc]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Run!",
            to_color(TEXT_COLOR),
            &[("[Space/Up]", "Jump"), ("[Q/Esc]", "Quit")],
        );
    }
}

/// Centered "game over" banner drawn over the frozen playfield. Only the
/// banner box itself is cleared so the world stays visible around it.
fn render_game_over_banner(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let banner_width = 38u16.min(area.width);
    let banner_height = 6u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(banner_width)) / 2;
    let y = area.y + (area.height.saturating_sub(banner_height)) / 2;
    let banner_area = Rect::new(x, y, banner_width, banner_height);

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(to_color(GAME_OVER_COLOR)));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default()
                .fg(to_color(GAME_OVER_COLOR))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Survived {}s  -  best {}s", snapshot.score, snapshot.best),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to restart",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
