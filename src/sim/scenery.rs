//! Background skyline and road scroll
//!
//! Purely cosmetic: nothing here collides with anything. Scenery draws from
//! its own RNG stream so the gameplay sequence for a seed does not depend on
//! how many windows happened to be generated.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Number of skyline buildings kept in rotation
pub const BUILDING_COUNT: usize = 15;
/// Horizontal spacing between buildings at reset, and gap when recycling
pub const BUILDING_SPACING: f32 = 80.0;
/// Skyline scrolls slower than the road
pub const PARALLAX_FACTOR: f32 = 0.3;
/// Road stripe pattern period
pub const ROAD_STRIPE_PERIOD: f32 = 80.0;

const WINDOW_SIZE: Vec2 = Vec2::new(6.0, 10.0);
const WINDOW_COLUMN_STEP: f32 = 15.0;
const WINDOW_ROW_STEP: f32 = 20.0;
const WINDOW_TOP_PADDING: f32 = 10.0;
const WARM_LIGHT: u32 = 0xffeb3b;
const AMBER_LIGHT: u32 = 0xffc107;

/// Stream id for the scenery RNG, distinct from gameplay
const SCENERY_STREAM: u64 = 0x5c3e_e7a1;

/// A lit window, relative to its building's top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    pub offset: Vec2,
    pub size: Vec2,
    pub color: u32,
}

/// A background building standing on the ground line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub windows: Vec<Window>,
}

/// Parallax city and road stripes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenery {
    /// Road stripe phase in [0, ROAD_STRIPE_PERIOD]
    pub road_offset: f32,
    pub buildings: Vec<Building>,
    rng: Pcg32,
}

impl Scenery {
    pub fn new(seed: u64) -> Self {
        let mut scenery = Self {
            road_offset: 0.0,
            buildings: Vec::with_capacity(BUILDING_COUNT),
            rng: Pcg32::new(seed, SCENERY_STREAM),
        };
        scenery.reset();
        scenery
    }

    /// Regenerate the skyline from the left edge
    pub fn reset(&mut self) {
        self.road_offset = 0.0;
        self.buildings.clear();
        for i in 0..BUILDING_COUNT {
            let building = self.random_building(i as f32 * BUILDING_SPACING);
            self.buildings.push(building);
        }
    }

    /// Scroll by one frame at the given world speed
    pub fn advance(&mut self, speed: f32) {
        self.road_offset += speed;
        if self.road_offset > ROAD_STRIPE_PERIOD {
            self.road_offset -= ROAD_STRIPE_PERIOD;
        }

        for i in 0..self.buildings.len() {
            self.buildings[i].x -= speed * PARALLAX_FACTOR;

            let building = &self.buildings[i];
            if building.x + building.width < 0.0 {
                let max_x = self
                    .buildings
                    .iter()
                    .map(|b| b.x)
                    .fold(f32::NEG_INFINITY, f32::max);
                self.buildings[i] = self.random_building(max_x + BUILDING_SPACING);
            }
        }
    }

    fn random_building(&mut self, x: f32) -> Building {
        let width = 60.0 + self.rng.random::<f32>() * 60.0;
        let height = 80.0 + self.rng.random::<f32>() * 200.0;
        let windows = self.random_windows(width, height);
        Building {
            x,
            width,
            height,
            windows,
        }
    }

    fn random_windows(&mut self, width: f32, height: f32) -> Vec<Window> {
        let cols = (width / WINDOW_COLUMN_STEP).floor() as u32;
        let rows = (height / WINDOW_ROW_STEP).floor() as u32;
        let padding_x = (width - cols as f32 * 10.0) / 2.0;

        let mut windows = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                // ~40% of windows are lit
                if self.rng.random::<f32>() > 0.6 {
                    let color = if self.rng.random::<f32>() > 0.2 {
                        WARM_LIGHT
                    } else {
                        AMBER_LIGHT
                    };
                    windows.push(Window {
                        offset: Vec2::new(
                            padding_x + col as f32 * WINDOW_COLUMN_STEP,
                            WINDOW_TOP_PADDING + row as f32 * WINDOW_ROW_STEP,
                        ),
                        size: WINDOW_SIZE,
                        color,
                    });
                }
            }
        }
        windows
    }
}
