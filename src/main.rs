//! Skyline Dash entry point
//!
//! Native demo host: runs one autopilot run in real time and prints a coarse
//! text view of the road twice a second.
//!
//! Usage: `skyline-dash [pound|breath] [seed]`

use skyline_dash::driver::FRAME_DURATION;
use skyline_dash::sim::Snapshot;
use skyline_dash::{Clock, HostUi, Renderer, Tuning};

/// Characters across the text road
const LANE_COLUMNS: usize = 80;
/// Draw every Nth frame
const DRAW_EVERY: u64 = 30;

/// Prints the road as one line of text
struct TextRenderer;

impl Renderer for TextRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        if !snapshot.frame.is_multiple_of(DRAW_EVERY) {
            return;
        }

        let scale = LANE_COLUMNS as f32 / snapshot.viewport_width;
        let mut lane = vec!['_'; LANE_COLUMNS];
        let mut paint = |left: f32, right: f32, glyph: char| {
            let start = (left * scale).floor().max(0.0) as usize;
            let end = ((right * scale).ceil().max(0.0) as usize).min(LANE_COLUMNS);
            for cell in lane.iter_mut().take(end).skip(start) {
                *cell = glyph;
            }
        };

        let antagonist = snapshot.antagonist.rect();
        paint(antagonist.left(), antagonist.right(), 'M');
        for obstacle in snapshot.obstacles {
            let rect = obstacle.rect();
            paint(rect.left(), rect.right(), '#');
        }
        for hazard in snapshot.hazards {
            let rect = hazard.rect();
            paint(rect.left(), rect.right(), '~');
        }
        if snapshot.player_visible() {
            let player = snapshot.player.rect();
            let glyph = if snapshot.player.grounded { 'o' } else { '^' };
            paint(player.left(), player.right(), glyph);
        }

        let lane: String = lane.into_iter().collect();
        println!(
            "{} score {:>5} lives {} speed {:.1}",
            lane, snapshot.score, snapshot.lives, snapshot.speed
        );
    }
}

/// Logs HUD changes
struct LogHud;

impl HostUi for LogHud {
    fn lives_changed(&mut self, lives: u32) {
        log::info!("Lives: {}", lives);
    }

    fn run_ended(&mut self, final_score: u64) {
        log::info!("Game over! Final score: {}", final_score);
        println!("GAME OVER - final score {}", final_score);
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next().as_deref() {
        Some("breath") => Tuning::breath_attacker(),
        Some("pound") | None => Tuning::ground_pounder(),
        Some(other) => {
            eprintln!("Unknown variant '{}', expected 'pound' or 'breath'", other);
            std::process::exit(2);
        }
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut clock = match Clock::new(tuning, seed) {
        Ok(clock) => clock,
        Err(err) => {
            eprintln!("Invalid tuning: {}", err);
            std::process::exit(1);
        }
    };

    log::info!("Skyline Dash (native) starting, seed {}", seed);
    clock.set_autopilot(true);
    clock.request_start();
    let frames = clock.run_realtime(FRAME_DURATION, &mut TextRenderer, &mut LogHud, |_| {});
    log::info!("Simulated {} frames", frames);
}
