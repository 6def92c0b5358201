// Frame timing constants
pub const TARGET_FPS: u64 = 60;
pub const FRAME_INTERVAL_MS: u64 = 1000 / TARGET_FPS;
