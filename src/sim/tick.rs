//! Per-frame simulation step
//!
//! Order within a frame:
//! 1. commands (start, jump, autopilot)
//! 2. clock: frame counter, score, speed ramp, scenery
//! 3. player physics, invincibility countdown
//! 4. antagonist physics (a landing fires a shockwave)
//! 5. obstacles then hazards: move, collide, cull
//! 6. spawning

use super::collision::overlaps;
use super::rect::Rect;
use super::spawn::{obstacle_due, spawn_hazard, spawn_obstacle};
use super::state::{GameEvent, GamePhase, GameState, HitSource};

/// Frames of warning the autopilot wants before reaching a building
const AUTOPILOT_OBSTACLE_LEAD: f32 = 10.0;
/// Frames of warning the autopilot wants before a projectile reaches it
const AUTOPILOT_HAZARD_LEAD: f32 = 5.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space / up arrow)
    pub jump: bool,
    /// Start or restart a run
    pub start: bool,
    /// Idle/demo mode - the game jumps by itself
    pub autopilot: bool,
}

/// Advance the game state by one frame
///
/// Events pile up in the state until the host calls
/// [`GameState::drain_events`]; [`Clock`](crate::Clock) does so every step.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.start();
    }

    // Don't tick unless a run is in progress
    if state.phase != GamePhase::Active {
        return;
    }

    if input.jump || (input.autopilot && autopilot_wants_jump(state)) {
        state.request_jump();
    }

    state.frame += 1;
    advance_clock(state);
    state.scenery.advance(state.speed);

    let gravity = state.tuning.gravity;
    let ground_y = state.tuning.ground_y();
    state.player.step_physics(gravity, ground_y);
    state.player.tick_invincibility();

    let behavior = state.tuning.antagonist.behavior;
    if behavior.step_physics(&mut state.antagonist, gravity, ground_y) {
        state.push_event(GameEvent::AntagonistLanded);
        spawn_hazard(state);
    }

    update_obstacles(state);
    update_hazards(state);

    if obstacle_due(state.frame, state.speed, &state.tuning.obstacle) {
        spawn_obstacle(state);
    }
    if behavior.on_schedule(&mut state.antagonist, state.frame) {
        spawn_hazard(state);
    }
}

/// Score and speed follow elapsed frames
fn advance_clock(state: &mut GameState) {
    let score = (state.frame as f64 * state.tuning.score_per_frame).floor() as u64;
    if score != state.score {
        state.score = score;
        state.push_event(GameEvent::ScoreChanged(score));
    }

    if state.frame.is_multiple_of(state.tuning.speed_step_frames) {
        state.speed += state.tuning.speed_step;
        log::debug!("Speed up to {} at frame {}", state.speed, state.frame);
        state.push_event(GameEvent::SpeedIncreased(state.speed));
    }
}

/// Scroll buildings, damage on contact (they stay), drop ones past the left edge
fn update_obstacles(state: &mut GameState) {
    let speed = state.speed;
    let player = state.player.rect();
    let mut obstacles = std::mem::take(&mut state.obstacles);

    obstacles.retain_mut(|obstacle| {
        obstacle.pos.x -= speed;
        if overlaps(&player, &obstacle.rect()) {
            state.take_damage(HitSource::Obstacle);
        }
        !obstacle.rect().is_left_of(0.0)
    });

    state.obstacles = obstacles;
}

/// Move projectiles relative to the scroll, consume on contact, drop ones
/// that left the viewport
fn update_hazards(state: &mut GameState) {
    let speed = state.speed;
    let viewport_width = state.tuning.viewport_width;
    let player = state.player.rect();
    let mut hazards = std::mem::take(&mut state.hazards);

    hazards.retain_mut(|hazard| {
        hazard.pos.x += hazard.speed - speed;
        let rect = hazard.rect();
        if overlaps(&player, &rect) {
            // Consumed even if the hit was absorbed by invincibility
            state.take_damage(HitSource::Hazard);
            return false;
        }
        !(rect.is_right_of(viewport_width) || rect.is_left_of(0.0))
    });

    state.hazards = hazards;
}

/// Demo AI: hop when a building or a ground-level projectile is about to arrive
fn autopilot_wants_jump(state: &GameState) -> bool {
    if !state.player.grounded {
        return false;
    }
    let player = state.player.rect();

    let building_close = state.obstacles.iter().any(|obstacle| {
        let gap = obstacle.pos.x - player.right();
        gap >= 0.0 && gap <= state.speed * AUTOPILOT_OBSTACLE_LEAD
    });

    let projectile_close = state.hazards.iter().any(|hazard| {
        let rect = hazard.rect();
        let closing = hazard.speed - state.speed;
        let gap = player.left() - rect.right();
        in_lane(&player, &rect)
            && closing > 0.0
            && gap >= 0.0
            && gap <= closing * AUTOPILOT_HAZARD_LEAD
    });

    building_close || projectile_close
}

/// Vertical overlap: the projectile would hit the player standing still
fn in_lane(player: &Rect, hazard: &Rect) -> bool {
    hazard.top() < player.bottom() && hazard.bottom() > player.top()
}
