//! Skyline Dash - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `driver`: Frame clock that steps the simulation and feeds a renderer
//! - `tuning`: Data-driven game balance
//!
//! Rendering is left to the host: it reads a [`sim::Snapshot`] each frame.

pub mod driver;
pub mod sim;
pub mod tuning;

pub use driver::{Clock, HostUi, Renderer};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`](crate::Tuning))
pub mod consts {
    /// Nominal display refresh rate the simulation is balanced for
    pub const FRAMES_PER_SECOND: u32 = 60;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Height of the road strip below the ground line
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Initial upward velocity of a player jump (pixels/frame)
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// World scroll speed at run start (pixels/frame)
    pub const BASE_SPEED: f32 = 5.0;
    /// Speed increase applied every `SPEED_STEP_FRAMES`
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_STEP_FRAMES: u64 = 600;
    /// Score gained per active frame
    pub const SCORE_PER_FRAME: f64 = 0.1;

    pub const STARTING_LIVES: u32 = 3;
    /// Invincibility window after a hit (~1 second at 60 Hz)
    pub const INVINCIBILITY_FRAMES: u32 = 60;

    /// Player defaults
    pub const PLAYER_X: f32 = 150.0;
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Obstacle (building) defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MIN_HEIGHT: u32 = 20;
    pub const OBSTACLE_MAX_HEIGHT: u32 = 70;

    /// Spawn interval = max(MIN, BASE - speed * SLOPE) frames
    pub const SPAWN_BASE_INTERVAL: f32 = 120.0;
    pub const SPAWN_SLOPE: f32 = 5.0;
    pub const SPAWN_MIN_INTERVAL: f32 = 60.0;

    /// Antagonist attack cadence (~3 seconds)
    pub const ATTACK_PERIOD_FRAMES: u64 = 180;
}

/// Floor a non-negative frame count derived from a float formula, never below 1
#[inline]
pub fn frames_from_f32(value: f32) -> u64 {
    (value.floor() as u64).max(1)
}
