//! Integration test: full play sessions through the public API.
//!
//! Drives input -> tick -> snapshot exactly the way the binary does, but
//! with deterministic injected timestamps instead of a real clock.

use spikedash::game::{
    process_input, tick, Game, GameEvent, GameInput, GamePhase, Obstacle, GRAVITY, JUMP_SPEED,
    PLAYER_GROUND_Y, PLAYER_SIZE, PLAYER_X, SPAWN_INTERVAL_MS,
};

/// Advance the game in fixed 10ms frames, exclusive of `from_ms`, up to
/// and including `end_ms`. Returns every event the core emitted.
fn run_until(game: &mut Game, from_ms: u64, end_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut t = from_ms;
    while t < end_ms {
        t += 10;
        if let Some(event) = tick(game, t) {
            events.push(event);
        }
    }
    events
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_jump_arc_respects_floor_invariant() {
    let mut game = Game::new(0);
    let event = process_input(&mut game, GameInput::Primary, 0);
    assert_eq!(event, Some(GameEvent::Jumped));

    let mut t = 0;
    let mut left_ground = false;
    while t < 2_000 {
        t += 10;
        tick(&mut game, t);
        assert!(game.player.y <= PLAYER_GROUND_Y, "floor invariant violated");
        if !game.player.on_ground {
            left_ground = true;
        }
        if left_ground && game.player.on_ground {
            break;
        }
    }

    assert!(left_ground, "jump never became airborne");
    assert!(game.player.on_ground, "jump never landed");
    assert_eq!(game.player.y, PLAYER_GROUND_Y);
    assert_eq!(game.player.vy, 0.0);
}

#[test]
fn test_jump_follows_euler_recurrence() {
    let mut game = Game::new(0);
    process_input(&mut game, GameInput::Primary, 0);

    // Three airborne ticks: velocity gains g per tick, position gains the
    // running velocity, step by step rather than a closed-form parabola.
    let mut vy = JUMP_SPEED;
    let mut y = PLAYER_GROUND_Y;
    for i in 1..=3u64 {
        tick(&mut game, i * 10);
        vy += GRAVITY;
        y += vy;
        assert!((game.player.vy - vy).abs() < 1e-9);
        assert!((game.player.y - y).abs() < 1e-9);
    }
}

#[test]
fn test_double_press_changes_velocity_once() {
    let mut game = Game::new(0);
    process_input(&mut game, GameInput::Primary, 0);
    tick(&mut game, 10);
    let vy_airborne = game.player.vy;

    // Mid-air press: no event, no velocity reset.
    assert_eq!(process_input(&mut game, GameInput::Primary, 15), None);
    assert_eq!(game.player.vy, vy_airborne);
}

// =============================================================================
// Spawning
// =============================================================================

#[test]
fn test_spawn_scenario_1500_and_3100() {
    let mut game = Game::new(0);
    let mut spawn_times = Vec::new();

    for t in (10..=3_100u64).step_by(10) {
        if t == 2_470 {
            // Hop over the first spike as it reaches the player's column.
            assert_eq!(
                process_input(&mut game, GameInput::Primary, t),
                Some(GameEvent::Jumped)
            );
        }
        let before = game.obstacles.len();
        assert_eq!(tick(&mut game, t), None, "the run must survive to 3100ms");
        if game.obstacles.len() > before {
            spawn_times.push(t);
        }
    }

    // First spawn exactly at the interval; the second is measured from
    // the first spawn (1500 + 1500 = 3000), not from a fixed cadence
    // grid. Exactly two spawns happened by 3100ms.
    assert_eq!(spawn_times, vec![1_500, 3_000]);
}

#[test]
fn test_restart_reanchors_spawn_timer() {
    let mut game = Game::new(0);
    game.phase = GamePhase::GameOver;
    process_input(&mut game, GameInput::Primary, 7_000);

    run_until(&mut game, 7_000, 7_000 + SPAWN_INTERVAL_MS - 10);
    assert!(game.obstacles.is_empty());
    tick(&mut game, 7_000 + SPAWN_INTERVAL_MS);
    assert_eq!(game.obstacles.len(), 1);
}

// =============================================================================
// A full run: crash, freeze, restart
// =============================================================================

#[test]
fn test_full_session_crash_freeze_restart() {
    let mut game = Game::new(0);

    // Never jump: the first spawned spike eventually runs the player over.
    let events = run_until(&mut game, 0, 4_000);
    assert_eq!(events, vec![GameEvent::Crashed], "exactly one crash event");
    assert!(game.is_game_over());

    let frozen_score = game.score;
    let frozen_positions: Vec<f64> = game.obstacles.iter().map(|o| o.x).collect();
    assert!(frozen_score > 0.0);

    // Querying the finished world changes nothing.
    let events = run_until(&mut game, 4_000, 6_000);
    assert!(events.is_empty());
    assert_eq!(game.score, frozen_score);
    let positions: Vec<f64> = game.obstacles.iter().map(|o| o.x).collect();
    assert_eq!(positions, frozen_positions);

    // Restart: fresh world, session best kept.
    let best = game.best;
    process_input(&mut game, GameInput::Primary, 6_000);
    assert_eq!(game.phase, GamePhase::Running);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.score, 0.0);
    assert_eq!(game.best, best);
    assert_eq!(game.player.y, PLAYER_GROUND_Y);
    assert_eq!(game.player.vy, 0.0);
    assert!(game.player.on_ground);
}

#[test]
fn test_score_monotonic_until_crash() {
    let mut game = Game::new(0);
    let mut previous = 0.0;
    let mut t = 0;
    while !game.is_game_over() && t < 10_000 {
        t += 10;
        let event = tick(&mut game, t);
        if event == Some(GameEvent::Crashed) {
            // The crash tick banks nothing.
            assert_eq!(game.score, previous);
        } else {
            assert!(game.score > previous);
        }
        previous = game.score;
    }
    assert!(game.is_game_over(), "the no-jump run should end in a crash");
}

#[test]
fn test_timed_jump_clears_a_spike() {
    let mut game = Game::new(0);
    // A spike a short distance ahead of the player.
    game.obstacles.push(Obstacle::new(200.0));

    // Five frames of approach, then jump; the arc spans the whole window
    // in which the spike crosses the player's column.
    let events = run_until(&mut game, 0, 50);
    assert!(events.is_empty());
    assert_eq!(process_input(&mut game, GameInput::Primary, 50), Some(GameEvent::Jumped));

    let events = run_until(&mut game, 50, 500);
    assert!(events.is_empty(), "the jump should clear the spike");
    assert_eq!(game.phase, GamePhase::Running);
    assert!(game.player.on_ground, "the player lands after the spike passes");
}

// =============================================================================
// Cleanup
// =============================================================================

#[test]
fn test_passed_spike_scrolls_off_and_disappears() {
    let mut game = Game::new(0);
    // Already behind the player; it can never collide again.
    game.obstacles.push(Obstacle::new(PLAYER_X - PLAYER_SIZE));

    let events = run_until(&mut game, 0, 300);
    assert!(events.is_empty());
    assert!(
        game.obstacles.is_empty(),
        "spike past the left edge should be cleaned up"
    );
    assert_eq!(game.phase, GamePhase::Running);
}
