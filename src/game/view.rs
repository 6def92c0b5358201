//! Render-ready view of the game world.
//!
//! The core never draws. Each frame it yields a [`Snapshot`] with plain
//! geometry in field coordinates; the `ui` module scales it onto whatever
//! terminal area is available.

use super::types::{Game, Obstacle, RectF, Triangle, FIELD_WIDTH, GROUND_HEIGHT, GROUND_Y};

/// Palette entry: plain RGB so the view stays free of any UI crate.
pub type Rgb = (u8, u8, u8);

pub const BACKGROUND_COLOR: Rgb = (20, 20, 30);
pub const GROUND_COLOR: Rgb = (50, 50, 70);
pub const PLAYER_COLOR: Rgb = (240, 60, 60);
pub const OBSTACLE_COLOR: Rgb = (220, 220, 220);
pub const TEXT_COLOR: Rgb = (185, 185, 245);
pub const GAME_OVER_COLOR: Rgb = (255, 100, 100);

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The fixed ground strip.
    pub ground: RectF,
    /// The player square.
    pub player: RectF,
    /// One triangle per live spike, in spawn order.
    pub obstacles: Vec<Triangle>,
    /// Integer score for the HUD.
    pub score: u32,
    /// Session best.
    pub best: u32,
    /// When true the renderer overlays the restart banner on the frozen
    /// world.
    pub game_over: bool,
}

impl Game {
    /// Capture the current frame.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ground: RectF {
                x: 0.0,
                y: GROUND_Y,
                w: FIELD_WIDTH,
                h: GROUND_HEIGHT,
            },
            player: self.player.rect(),
            obstacles: self.obstacles.iter().map(Obstacle::triangle).collect(),
            score: self.score as u32,
            best: self.best,
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{FIELD_HEIGHT, GamePhase, PLAYER_GROUND_Y, PLAYER_SIZE, PLAYER_X};
    use super::*;

    #[test]
    fn test_snapshot_ground_spans_field() {
        let game = Game::new(0);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.ground.x, 0.0);
        assert_eq!(snapshot.ground.w, FIELD_WIDTH);
        assert_eq!(snapshot.ground.y + snapshot.ground.h, FIELD_HEIGHT);
    }

    #[test]
    fn test_snapshot_player_rect() {
        let game = Game::new(0);
        let snapshot = game.snapshot();
        assert_eq!(
            snapshot.player,
            RectF {
                x: PLAYER_X,
                y: PLAYER_GROUND_Y,
                w: PLAYER_SIZE,
                h: PLAYER_SIZE
            }
        );
    }

    #[test]
    fn test_snapshot_obstacles_in_spawn_order() {
        let mut game = Game::new(0);
        game.obstacles.push(Obstacle::new(300.0));
        game.obstacles.push(Obstacle::new(600.0));
        let snapshot = game.snapshot();
        assert_eq!(snapshot.obstacles.len(), 2);
        assert!(snapshot.obstacles[0].apex.0 < snapshot.obstacles[1].apex.0);
        // Bases sit on the ground line.
        assert_eq!(snapshot.obstacles[0].base_left.1, GROUND_Y);
    }

    #[test]
    fn test_snapshot_score_truncates_to_integer() {
        let mut game = Game::new(0);
        game.score = 7.9;
        assert_eq!(game.snapshot().score, 7);
    }

    #[test]
    fn test_snapshot_game_over_flag() {
        let mut game = Game::new(0);
        assert!(!game.snapshot().game_over);
        game.phase = GamePhase::GameOver;
        assert!(game.snapshot().game_over);
    }
}
