//! The background monster and its attack patterns
//!
//! A run is configured with exactly one [`AntagonistBehavior`]. Either the
//! monster stands still and fires on a fixed period, or it leaps on a fixed
//! period and fires once each time it lands. Never both.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::{AntagonistTuning, TuningError};

/// How the antagonist decides when to attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AntagonistBehavior {
    /// Stands at the left edge and emits a projectile every `fire_period` frames
    StationaryPeriodic {
        fire_period: u64,
        /// Projectile spawn height below the antagonist's top edge
        mouth_offset: f32,
    },
    /// Jumps every `jump_period` frames (if grounded); each landing emits one
    /// shockwave along the ground
    JumpImpactTriggered { jump_period: u64, jump_velocity: f32 },
}

impl AntagonistBehavior {
    pub fn validate(&self) -> Result<(), TuningError> {
        match *self {
            AntagonistBehavior::StationaryPeriodic { fire_period, .. } => {
                if fire_period == 0 {
                    return Err(TuningError::ZeroFrames("antagonist.fire_period"));
                }
            }
            AntagonistBehavior::JumpImpactTriggered {
                jump_period,
                jump_velocity,
            } => {
                if jump_period == 0 {
                    return Err(TuningError::ZeroFrames("antagonist.jump_period"));
                }
                if jump_velocity.is_nan() || jump_velocity >= 0.0 {
                    return Err(TuningError::NonPositive(
                        "-antagonist.jump_velocity",
                        -jump_velocity,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Integrate airborne motion. Returns true on the frame the antagonist
    /// touches down, which is the impact attack trigger.
    pub fn step_physics(&self, antagonist: &mut Antagonist, gravity: f32, ground_y: f32) -> bool {
        match self {
            AntagonistBehavior::StationaryPeriodic { .. } => false,
            AntagonistBehavior::JumpImpactTriggered { .. } => {
                if !antagonist.airborne {
                    return false;
                }
                antagonist.vel_y += gravity;
                antagonist.pos.y += antagonist.vel_y;
                if antagonist.pos.y + antagonist.size.y >= ground_y {
                    antagonist.land(ground_y);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Scheduled action at the end of a frame. Returns true if a projectile
    /// should be fired right now.
    pub fn on_schedule(&self, antagonist: &mut Antagonist, frame: u64) -> bool {
        match *self {
            AntagonistBehavior::StationaryPeriodic { fire_period, .. } => {
                frame.is_multiple_of(fire_period)
            }
            AntagonistBehavior::JumpImpactTriggered {
                jump_period,
                jump_velocity,
            } => {
                if frame.is_multiple_of(jump_period) && !antagonist.airborne {
                    antagonist.vel_y = jump_velocity;
                    antagonist.airborne = true;
                    log::trace!("Antagonist leaps at frame {}", frame);
                }
                false
            }
        }
    }

    /// Where a freshly fired projectile's top edge sits
    pub fn hazard_y(&self, antagonist: &Antagonist, hazard_height: f32, ground_y: f32) -> f32 {
        match *self {
            AntagonistBehavior::StationaryPeriodic { mouth_offset, .. } => {
                antagonist.pos.y + mouth_offset
            }
            // Shockwaves travel along the road
            AntagonistBehavior::JumpImpactTriggered { .. } => ground_y - hazard_height,
        }
    }
}

/// The monster chasing the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Antagonist {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    /// Mid-leap (only ever set by the jumping behavior)
    pub airborne: bool,
    pub color: u32,
}

impl Antagonist {
    /// Standing on the ground line at its configured x
    pub fn spawn(tuning: &AntagonistTuning, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(tuning.x, ground_y - tuning.height),
            size: Vec2::new(tuning.width, tuning.height),
            vel_y: 0.0,
            airborne: false,
            color: tuning.color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    fn land(&mut self, ground_y: f32) {
        self.pos.y = ground_y - self.size.y;
        self.vel_y = 0.0;
        self.airborne = false;
    }
}
