//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable list order (spawn order, oldest first)
//! - No rendering or platform dependencies

pub mod antagonist;
pub mod collision;
pub mod rect;
pub mod scenery;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use antagonist::{Antagonist, AntagonistBehavior};
pub use collision::overlaps;
pub use rect::Rect;
pub use scenery::{Building, Scenery, Window};
pub use snapshot::Snapshot;
pub use spawn::{obstacle_interval, spawn_hazard, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, Hazard, HitSource, Obstacle, Player};
pub use tick::{TickInput, tick};
