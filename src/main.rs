//! Spike Dash entry point.
//!
//! Owns the real collaborators (terminal, clock, audio) and runs the
//! frame-paced loop: poll input, advance the core, draw the snapshot,
//! sleep off the frame remainder.

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use spikedash::audio::{AudioSink, Cue};
use spikedash::constants::FRAME_INTERVAL_MS;
use spikedash::game::{process_input, tick, Game, GameEvent};
use spikedash::input::{map_key, InputAction};
use spikedash::ui;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let audio = AudioSink::new();
    let started = Instant::now();
    let mut game = Game::new(0);

    let frame_budget = Duration::from_millis(FRAME_INTERVAL_MS);
    'game: loop {
        let frame_start = Instant::now();

        // Drain whatever input arrived since the previous frame.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match map_key(key) {
                    InputAction::Quit => break 'game,
                    InputAction::Game(input) => {
                        let now_ms = started.elapsed().as_millis() as u64;
                        if process_input(&mut game, input, now_ms) == Some(GameEvent::Jumped) {
                            audio.play(Cue::Jump);
                        }
                    }
                },
                // Resize is picked up by the next draw.
                _ => {}
            }
        }

        let now_ms = started.elapsed().as_millis() as u64;
        if tick(&mut game, now_ms) == Some(GameEvent::Crashed) {
            audio.play(Cue::Crash);
        }

        terminal.draw(|frame| ui::draw(frame, &game.snapshot()))?;

        // Cap the frame rate. Slow frames just run less often; the core
        // keys spawn timing and score off the wall clock.
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
