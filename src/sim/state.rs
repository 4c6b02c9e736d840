//! Game state and core simulation types
//!
//! One [`GameState`] owns everything a run needs. Nothing is global, so any
//! number of independent simulations can coexist.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::antagonist::Antagonist;
use super::rect::Rect;
use super::scenery::Scenery;
use crate::tuning::{Tuning, TuningError};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing started yet (title screen)
    Idle,
    /// Simulation is ticking
    Active,
    /// Lives ran out; waiting for a restart
    Ended,
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    Obstacle,
    Hazard,
}

/// Things that happened during a tick, for the host to surface
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RunStarted,
    ScoreChanged(u64),
    LivesChanged(u32),
    PlayerHit { source: HitSource },
    SpeedIncreased(f32),
    ObstacleSpawned { id: u32 },
    HazardSpawned { id: u32 },
    AntagonistLanded,
    RunEnded { final_score: u64 },
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    pub grounded: bool,
    pub invincible: bool,
    /// Invincible frames left after the current one
    pub invincibility_timer: u32,
    pub color: u32,
}

impl Player {
    /// Standing on the ground line at the configured x
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_y() - tuning.player_height),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel_y: 0.0,
            grounded: true,
            invincible: false,
            invincibility_timer: 0,
            color: tuning.player_color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Constant-acceleration vertical step with ground clamp
    pub fn step_physics(&mut self, gravity: f32, ground_y: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y + self.size.y >= ground_y {
            self.pos.y = ground_y - self.size.y;
            self.vel_y = 0.0;
            self.grounded = true;
        }
    }

    /// Count down the post-hit window (call once per frame, before collisions)
    pub fn tick_invincibility(&mut self) {
        if !self.invincible {
            return;
        }
        if self.invincibility_timer == 0 {
            self.invincible = false;
        } else {
            self.invincibility_timer -= 1;
        }
    }

    pub fn grant_invincibility(&mut self, frames: u32) {
        self.invincible = true;
        self.invincibility_timer = frames;
    }
}

/// A building scrolling toward the player. Stays put when hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: u32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A projectile fired by the antagonist. Consumed on contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Absolute speed; on-screen motion is `speed - world speed` per frame
    pub speed: f32,
    pub color: u32,
}

impl Hazard {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance this state was built with (validated)
    pub tuning: Tuning,
    /// Seed the gameplay RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    /// floor(frames * score_per_frame)
    pub score: u64,
    pub lives: u32,
    /// World scroll speed (pixels/frame)
    pub speed: f32,
    /// Frames simulated in the current run
    pub frame: u64,
    pub player: Player,
    pub antagonist: Antagonist,
    /// Oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    pub hazards: Vec<Hazard>,
    /// Background visuals (not gameplay-affecting)
    pub scenery: Scenery,
    pub(crate) rng: Pcg32,
    #[serde(skip)]
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle game with the given balance and seed
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;

        let ground_y = tuning.ground_y();
        Ok(Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            lives: tuning.starting_lives,
            speed: tuning.base_speed,
            frame: 0,
            player: Player::spawn(&tuning),
            antagonist: Antagonist::spawn(&tuning.antagonist, ground_y),
            obstacles: Vec::new(),
            hazards: Vec::new(),
            scenery: Scenery::new(seed),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
            tuning,
        })
    }

    /// Begin a fresh run. Ignored while a run is already active.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Active {
            return;
        }

        let ground_y = self.tuning.ground_y();
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.speed = self.tuning.base_speed;
        self.frame = 0;
        self.obstacles.clear();
        self.hazards.clear();
        self.player = Player::spawn(&self.tuning);
        self.antagonist = Antagonist::spawn(&self.tuning.antagonist, ground_y);
        self.scenery.reset();
        self.phase = GamePhase::Active;
        // Anything the host never drained belongs to the previous run
        self.events.clear();

        log::info!(
            "Run started: lives={}, speed={}, seed={}",
            self.lives,
            self.speed,
            self.seed
        );
        self.events.push(GameEvent::RunStarted);
        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::LivesChanged(self.lives));
    }

    /// Jump if the run is active and the player is on the ground.
    /// Returns whether the jump happened.
    pub fn request_jump(&mut self) -> bool {
        if self.phase != GamePhase::Active || !self.player.grounded {
            return false;
        }
        self.player.vel_y = self.tuning.jump_velocity;
        self.player.grounded = false;
        true
    }

    /// Apply one hit. Ignored while invincible or outside an active run.
    /// Returns whether the hit cost a life.
    pub fn take_damage(&mut self, source: HitSource) -> bool {
        if self.phase != GamePhase::Active || self.player.invincible {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        log::debug!("Hit by {:?} at frame {}, lives left {}", source, self.frame, self.lives);
        self.events.push(GameEvent::PlayerHit { source });
        self.events.push(GameEvent::LivesChanged(self.lives));

        if self.lives == 0 {
            self.end_run();
        } else {
            self.player.grant_invincibility(self.tuning.invincibility_frames);
        }
        true
    }

    fn end_run(&mut self) {
        self.phase = GamePhase::Ended;
        log::info!("Run ended at frame {} with score {}", self.frame, self.score);
        self.events.push(GameEvent::RunEnded {
            final_score: self.score,
        });
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Score of the last finished run
    pub fn final_score(&self) -> Option<u64> {
        (self.phase == GamePhase::Ended).then_some(self.score)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event produced since the last drain.
    /// The queue grows until drained (or the next run starts).
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
