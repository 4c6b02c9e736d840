//! Read-only view handed to renderers each frame

use super::antagonist::Antagonist;
use super::scenery::Scenery;
use super::state::{GamePhase, GameState, Hazard, Obstacle, Player};

/// Frames per on/off half-cycle of the invincibility blink
pub const BLINK_HALF_PERIOD: u64 = 5;

/// Everything a renderer may draw, borrowed from the live state
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub antagonist: &'a Antagonist,
    pub obstacles: &'a [Obstacle],
    pub hazards: &'a [Hazard],
    pub scenery: &'a Scenery,
    pub score: u64,
    pub lives: u32,
    pub speed: f32,
    pub frame: u64,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_y: f32,
}

impl Snapshot<'_> {
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Whether to draw the player this frame (blinks while invincible)
    pub fn player_visible(&self) -> bool {
        !self.player.invincible || (self.frame / BLINK_HALF_PERIOD).is_multiple_of(2)
    }

    /// Score to show on the game-over screen
    pub fn final_score(&self) -> Option<u64> {
        (self.phase == GamePhase::Ended).then_some(self.score)
    }
}

impl GameState {
    /// Borrow the current state for drawing
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            player: &self.player,
            antagonist: &self.antagonist,
            obstacles: &self.obstacles,
            hazards: &self.hazards,
            scenery: &self.scenery,
            score: self.score,
            lives: self.lives,
            speed: self.speed,
            frame: self.frame,
            viewport_width: self.tuning.viewport_width,
            viewport_height: self.tuning.viewport_height,
            ground_y: self.tuning.ground_y(),
        }
    }
}
