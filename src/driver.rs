//! Frame clock
//!
//! [`Clock`] owns a [`GameState`] and runs one update + draw cycle per call to
//! [`Clock::step`]. Any driver can call it: a real-time loop
//! ([`Clock::run_realtime`]), a fixed-step test harness, or a benchmark.
//! Input arriving between frames is queued and applied at the start of the
//! next step.

use std::time::{Duration, Instant};

use crate::consts::FRAMES_PER_SECOND;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Display refresh the real-time loop paces itself to
pub const FRAME_DURATION: Duration =
    Duration::from_nanos(1_000_000_000 / FRAMES_PER_SECOND as u64);

/// Paints the current frame. Must not mutate the simulation.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>);
}

/// Headless runs draw nothing
impl Renderer for () {
    fn draw(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// HUD notifications. The host decides how to show them.
pub trait HostUi {
    fn score_changed(&mut self, _score: u64) {}
    fn lives_changed(&mut self, _lives: u32) {}
    fn run_ended(&mut self, _final_score: u64) {}
}

impl HostUi for () {}

/// Steps the simulation and feeds renderer + HUD
#[derive(Debug)]
pub struct Clock {
    state: GameState,
    /// One-shot commands waiting for the next step
    pending: TickInput,
}

impl Clock {
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Ok(Self {
            state: GameState::new(tuning, seed)?,
            pending: TickInput::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_active()
    }

    /// Demo mode: the simulation jumps on its own
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.pending.autopilot = enabled;
    }

    /// Queue a jump for the next step. Ignored unless a run is active.
    pub fn request_jump(&mut self) {
        if self.state.is_active() {
            self.pending.jump = true;
        }
    }

    /// Start a fresh run now (from Idle or Ended). Ignored while active.
    pub fn request_start(&mut self) {
        self.state.start();
    }

    /// Run one frame: update then draw. Returns false (and does nothing)
    /// when no run is active.
    pub fn step<R, U>(&mut self, renderer: &mut R, ui: &mut U) -> bool
    where
        R: Renderer + ?Sized,
        U: HostUi + ?Sized,
    {
        if !self.state.is_active() {
            return false;
        }

        tick(&mut self.state, &self.pending);
        self.pending.jump = false;

        self.dispatch_events(ui);
        renderer.draw(&self.state.snapshot());
        true
    }

    /// Fixed-step driver: up to `frames` steps, stopping early if the run
    /// ends. Returns the number of frames simulated.
    pub fn run_frames<R, U>(&mut self, frames: u64, renderer: &mut R, ui: &mut U) -> u64
    where
        R: Renderer + ?Sized,
        U: HostUi + ?Sized,
    {
        let mut stepped = 0;
        while stepped < frames && self.step(renderer, ui) {
            stepped += 1;
        }
        stepped
    }

    /// Real-time driver: one step per `frame_duration`, sleeping between
    /// frames, until the run ends. `poll_input` is called before every step
    /// and may queue commands on the clock.
    pub fn run_realtime<R, U, F>(
        &mut self,
        frame_duration: Duration,
        renderer: &mut R,
        ui: &mut U,
        mut poll_input: F,
    ) -> u64
    where
        R: Renderer + ?Sized,
        U: HostUi + ?Sized,
        F: FnMut(&mut Clock),
    {
        let mut frames = 0;
        let mut next_frame = Instant::now();
        loop {
            poll_input(&mut *self);
            if !self.step(renderer, ui) {
                break;
            }
            frames += 1;

            next_frame += frame_duration;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else {
                // Fell behind; don't try to catch up with a burst of frames
                next_frame = now;
            }
        }
        frames
    }

    fn dispatch_events<U: HostUi + ?Sized>(&mut self, ui: &mut U) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => ui.score_changed(score),
                GameEvent::LivesChanged(lives) => ui.lives_changed(lives),
                GameEvent::RunEnded { final_score } => ui.run_ended(final_score),
                _ => {}
            }
        }
    }
}
