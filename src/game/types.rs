//! Spike Dash data structures.
//!
//! The world is a fixed 800x400 virtual field with the origin at the top
//! left and y growing downward. A square player runs in place at a fixed
//! column while triangular spikes scroll toward it along the ground.

/// Virtual playfield dimensions. The renderer scales these to whatever
/// terminal area it actually has.
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 400.0;

/// Height of the ground strip along the bottom of the field.
pub const GROUND_HEIGHT: f64 = 80.0;

/// Top edge of the ground strip.
pub const GROUND_Y: f64 = FIELD_HEIGHT - GROUND_HEIGHT;

/// Player square side length.
pub const PLAYER_SIZE: f64 = 40.0;

/// Fixed horizontal position of the player's left edge.
pub const PLAYER_X: f64 = 100.0;

/// Ground clamp for the player's top edge. The player can never be below
/// this (y never exceeds it).
pub const PLAYER_GROUND_Y: f64 = GROUND_Y - PLAYER_SIZE;

/// Spike dimensions.
pub const OBSTACLE_WIDTH: f64 = 30.0;
pub const OBSTACLE_HEIGHT: f64 = 40.0;

/// Top edge of a spike; the base sits flush with the ground line.
pub const OBSTACLE_Y: f64 = GROUND_Y - OBSTACLE_HEIGHT;

/// Gravity (velocity change per tick, positive = downward).
pub const GRAVITY: f64 = 0.8;

/// Jump impulse (negative = upward, sets velocity directly).
pub const JUMP_SPEED: f64 = -15.0;

/// Horizontal displacement applied to every live spike each tick.
pub const SCROLL_SPEED: f64 = 7.0;

/// Minimum wall-clock time between spike spawns, measured from the
/// previous spawn event.
pub const SPAWN_INTERVAL_MS: u64 = 1500;

/// How far beyond the right field edge new spikes appear.
pub const SPAWN_LEAD_X: f64 = 50.0;

/// Axis-aligned box in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    /// True when the boxes strictly overlap. Touching edges do not count
    /// as a hit.
    pub fn intersects(&self, other: &RectF) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Triangle geometry in field coordinates, apex up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub apex: (f64, f64),
    pub base_left: (f64, f64),
    pub base_right: (f64, f64),
}

/// The player square.
#[derive(Debug, Clone)]
pub struct Player {
    /// Vertical position of the top edge.
    pub y: f64,
    /// Vertical velocity in units/tick (negative = upward).
    pub vy: f64,
    /// True iff resting on the ground line with zero velocity.
    pub on_ground: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            y: PLAYER_GROUND_Y,
            vy: 0.0,
            on_ground: true,
        }
    }

    /// One explicit Euler step: gravity accumulates into velocity,
    /// velocity accumulates into position, then the position is clamped
    /// to the ground line.
    pub fn update(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;

        if self.y >= PLAYER_GROUND_Y {
            self.y = PLAYER_GROUND_Y;
            self.vy = 0.0;
            self.on_ground = true;
        }
    }

    /// Start a jump if grounded. Returns true when the jump actually
    /// happened so the caller can fire the jump cue; mid-air presses are
    /// a no-op.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vy = JUMP_SPEED;
        self.on_ground = false;
        true
    }

    /// Collision box.
    pub fn rect(&self) -> RectF {
        RectF {
            x: PLAYER_X,
            y: self.y,
            w: PLAYER_SIZE,
            h: PLAYER_SIZE,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A single spike scrolling toward the player.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// X position of the left edge (float for smooth scrolling).
    pub x: f64,
}

impl Obstacle {
    pub fn new(x: f64) -> Self {
        Self { x }
    }

    /// Scroll left by `speed` units.
    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// Collision box (the spike collides as its full bounding box).
    pub fn rect(&self) -> RectF {
        RectF {
            x: self.x,
            y: OBSTACLE_Y,
            w: OBSTACLE_WIDTH,
            h: OBSTACLE_HEIGHT,
        }
    }

    /// Triangle geometry for rendering: apex centered on top, base flush
    /// with the ground line.
    pub fn triangle(&self) -> Triangle {
        Triangle {
            apex: (self.x + OBSTACLE_WIDTH / 2.0, OBSTACLE_Y),
            base_left: (self.x, GROUND_Y),
            base_right: (self.x + OBSTACLE_WIDTH, GROUND_Y),
        }
    }

    /// True once the right edge has crossed the left field boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + OBSTACLE_WIDTH < 0.0
    }
}

/// Session phase. A crash freezes the world until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct Game {
    pub phase: GamePhase,
    pub player: Player,
    /// Live spikes in spawn order, which is also left-to-right on screen.
    pub obstacles: Vec<Obstacle>,
    /// Survival time in seconds. Monotonic while running, frozen from the
    /// crash tick on.
    pub score: f64,
    /// Highest integer score reached this session. Survives restarts,
    /// never persisted.
    pub best: u32,
    /// Wall-clock baseline of the most recent spawn (ms).
    pub(crate) last_spawn_ms: u64,
    /// Wall-clock baseline for score accrual (ms).
    pub(crate) last_score_ms: u64,
}

impl Game {
    /// Create a fresh session anchored at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::new(),
            obstacles: Vec::new(),
            score: 0.0,
            best: 0,
            last_spawn_ms: now_ms,
            last_score_ms: now_ms,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Push a new spike at the spawn position off the right field edge.
    pub fn spawn_obstacle(&mut self) {
        self.obstacles.push(Obstacle::new(FIELD_WIDTH + SPAWN_LEAD_X));
    }

    /// Back to a fresh run: spikes discarded, player recreated, score
    /// zeroed, timer baselines re-anchored at `now_ms`. The session best
    /// is kept.
    pub fn reset(&mut self, now_ms: u64) {
        self.phase = GamePhase::Running;
        self.player = Player::new();
        self.obstacles.clear();
        self.score = 0.0;
        self.last_spawn_ms = now_ms;
        self.last_score_ms = now_ms;
    }
}
