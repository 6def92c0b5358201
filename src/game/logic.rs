//! Spike Dash game logic: physics stepping, spawn timing, collision
//! detection, scoring.

use super::types::*;

/// UI-agnostic input actions for the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// The one action key (Space/Up/Enter): jump while running, restart
    /// after a crash.
    Primary,
    /// Any other key the terminal reports; ignored.
    Other,
}

/// Things the core reports back to the shell, which maps them to sound
/// cues. The core itself never talks to the audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A jump actually started (not emitted for mid-air presses).
    Jumped,
    /// The player hit a spike this tick.
    Crashed,
}

/// Process one input action. `now_ms` re-anchors the timer baselines when
/// the action restarts a finished run.
pub fn process_input(game: &mut Game, input: GameInput, now_ms: u64) -> Option<GameEvent> {
    match input {
        GameInput::Primary => match game.phase {
            GamePhase::Running => game.player.jump().then_some(GameEvent::Jumped),
            GamePhase::GameOver => {
                game.reset(now_ms);
                None
            }
        },
        GameInput::Other => None,
    }
}

/// Advance the world by one frame.
///
/// Physics takes exactly one Euler step per call regardless of how long
/// the frame really took; spawn timing and score ride the wall clock via
/// `now_ms`. Does nothing once the game is over.
pub fn tick(game: &mut Game, now_ms: u64) -> Option<GameEvent> {
    if game.is_game_over() {
        return None;
    }

    // 1. Player physics.
    game.player.update();

    // 2. Spawn on the wall clock, measured from the previous spawn event
    //    (not a fixed cadence grid).
    if now_ms.saturating_sub(game.last_spawn_ms) >= SPAWN_INTERVAL_MS {
        game.spawn_obstacle();
        game.last_spawn_ms = now_ms;
    }

    // 3. Scroll and collide, in spawn order. The first hit ends the run;
    //    spikes behind it keep their positions this tick.
    let mut crashed = false;
    let player_rect = game.player.rect();
    for obstacle in &mut game.obstacles {
        obstacle.update(SCROLL_SPEED);
        if obstacle.rect().intersects(&player_rect) {
            game.phase = GamePhase::GameOver;
            crashed = true;
            break;
        }
    }

    // Off-screen cleanup runs every tick, crash or not.
    game.obstacles.retain(|o| !o.is_off_screen());

    // 4. Score accrues by elapsed wall-clock time and freezes on the
    //    crash tick. Fractions banked on earlier ticks are kept.
    if !crashed {
        game.score += now_ms.saturating_sub(game.last_score_ms) as f64 / 1000.0;
        game.last_score_ms = now_ms;
        game.best = game.best.max(game.score as u32);
    }

    crashed.then_some(GameEvent::Crashed)
}
