//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. A tuning is validated once when
//! a [`GameState`](crate::sim::GameState) is built, so nothing downstream
//! (in particular spawning) ever has to fail.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::AntagonistBehavior;

/// Rejected configuration
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must be positive (got {1})")]
    NonPositive(&'static str, f32),

    #[error("{0} must not be negative (got {1})")]
    Negative(&'static str, f64),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} must be at least one frame")]
    ZeroFrames(&'static str),

    #[error("Obstacle height range {min}..={max} is empty")]
    EmptyHeightRange { min: u32, max: u32 },

    #[error("Obstacle max height {max} does not fit above the ground line at {ground_y}")]
    ObstacleTooTall { max: u32, ground_y: f32 },

    #[error("Ground height {ground} must be below the viewport height {viewport}")]
    GroundOutsideViewport { ground: f32, viewport: f32 },

    #[error("A run needs at least one life")]
    NoLives,
}

/// Obstacle (building) balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub width: f32,
    /// Inclusive height range, whole pixels
    pub min_height: u32,
    pub max_height: u32,
    pub color: u32,
    /// interval = max(min_interval, base_interval - speed * slope)
    pub base_interval: f32,
    pub slope: f32,
    pub min_interval: f32,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            width: OBSTACLE_WIDTH,
            min_height: OBSTACLE_MIN_HEIGHT,
            max_height: OBSTACLE_MAX_HEIGHT,
            color: 0xff2222,
            base_interval: SPAWN_BASE_INTERVAL,
            slope: SPAWN_SLOPE,
            min_interval: SPAWN_MIN_INTERVAL,
        }
    }
}

/// Projectile fired by the antagonist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    pub width: f32,
    pub height: f32,
    /// Absolute hazard speed as a multiple of world speed at spawn time
    pub speed_factor: f32,
    pub color: u32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 20.0,
            speed_factor: 1.6,
            color: 0xffeb3b,
        }
    }
}

/// The background monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntagonistTuning {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
    pub behavior: AntagonistBehavior,
    pub hazard: HazardTuning,
}

impl Default for AntagonistTuning {
    fn default() -> Self {
        Self {
            x: -10.0,
            width: 90.0,
            height: 110.0,
            color: 0x4e342e,
            behavior: AntagonistBehavior::JumpImpactTriggered {
                jump_period: ATTACK_PERIOD_FRAMES,
                jump_velocity: -14.0,
            },
            hazard: HazardTuning::default(),
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_height: f32,

    pub gravity: f32,
    pub jump_velocity: f32,

    pub base_speed: f32,
    pub speed_step: f32,
    pub speed_step_frames: u64,
    pub score_per_frame: f64,

    pub starting_lives: u32,
    pub invincibility_frames: u32,

    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_color: u32,

    pub obstacle: ObstacleTuning,
    pub antagonist: AntagonistTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::ground_pounder()
    }
}

impl Tuning {
    /// Night-city run: the monster leaps and sends a shockwave on every landing
    pub fn ground_pounder() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            speed_step_frames: SPEED_STEP_FRAMES,
            score_per_frame: SCORE_PER_FRAME,
            starting_lives: STARTING_LIVES,
            invincibility_frames: INVINCIBILITY_FRAMES,
            player_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            player_color: 0x00ccff,
            obstacle: ObstacleTuning::default(),
            antagonist: AntagonistTuning::default(),
        }
    }

    /// Daytime run: the monster stands still and breathes fire on a fixed period
    pub fn breath_attacker() -> Self {
        Self {
            player_color: 0x0055ff,
            obstacle: ObstacleTuning {
                color: 0x555555,
                ..ObstacleTuning::default()
            },
            antagonist: AntagonistTuning {
                x: -20.0,
                width: 100.0,
                height: 120.0,
                color: 0x2e8b57,
                behavior: AntagonistBehavior::StationaryPeriodic {
                    fire_period: ATTACK_PERIOD_FRAMES,
                    mouth_offset: 20.0,
                },
                hazard: HazardTuning {
                    width: 60.0,
                    height: 15.0,
                    speed_factor: 1.5,
                    color: 0xff4500,
                },
            },
            ..Self::ground_pounder()
        }
    }

    /// Parse a tuning from JSON. Missing fields take the defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - self.ground_height
    }

    /// Check every value that spawning and physics rely on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        positive("gravity", self.gravity)?;
        positive("base_speed", self.base_speed)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("obstacle.width", self.obstacle.width)?;
        positive("obstacle.min_interval", self.obstacle.min_interval)?;
        positive("antagonist.width", self.antagonist.width)?;
        positive("antagonist.height", self.antagonist.height)?;
        positive("hazard.width", self.antagonist.hazard.width)?;
        positive("hazard.height", self.antagonist.hazard.height)?;
        positive("hazard.speed_factor", self.antagonist.hazard.speed_factor)?;
        // Upward jump means a negative velocity
        positive("-jump_velocity", -self.jump_velocity)?;

        non_negative("speed_step", self.speed_step as f64)?;
        non_negative("score_per_frame", self.score_per_frame)?;
        finite("player_x", self.player_x)?;
        finite("antagonist.x", self.antagonist.x)?;
        finite("obstacle.base_interval", self.obstacle.base_interval)?;
        finite("obstacle.slope", self.obstacle.slope)?;

        if !(0.0..self.viewport_height).contains(&self.ground_height) {
            return Err(TuningError::GroundOutsideViewport {
                ground: self.ground_height,
                viewport: self.viewport_height,
            });
        }
        if self.speed_step_frames == 0 {
            return Err(TuningError::ZeroFrames("speed_step_frames"));
        }
        if self.starting_lives == 0 {
            return Err(TuningError::NoLives);
        }

        let obstacle = &self.obstacle;
        if obstacle.min_height == 0 || obstacle.min_height > obstacle.max_height {
            return Err(TuningError::EmptyHeightRange {
                min: obstacle.min_height,
                max: obstacle.max_height,
            });
        }
        if obstacle.max_height as f32 > self.ground_y() {
            return Err(TuningError::ObstacleTooTall {
                max: obstacle.max_height,
                ground_y: self.ground_y(),
            });
        }

        self.antagonist.behavior.validate()
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NonPositive(name, value))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), TuningError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Negative(name, value))
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NotFinite(name))
    }
}
