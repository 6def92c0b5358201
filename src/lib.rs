//! Spike Dash - a terminal side-scroller.
//!
//! A square sprints along the ground and jumps over scrolling spikes; the
//! score is how long you survive. Core modules:
//! - `game`: pure simulation (physics, spawning, collisions, scoring)
//! - `ui`: ratatui rendering of the game's frame snapshot
//! - `audio`: best-effort procedural sound cues
//! - `input`: terminal key mapping

pub mod audio;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
