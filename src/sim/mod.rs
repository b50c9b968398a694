//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - The grid mutates only when a pickup cell downgrades to empty

pub mod collision;
pub mod grid;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Aabb, body_aabb, cell_aabb, pickup_aabb};
pub use grid::{Grid, Tile, cell_center, cell_of};
pub use level::{DEFAULT_LEVEL, LevelError};
pub use state::{Body, GravityDir, Outcome, Session, StepResult};
pub use tick::{TickInput, step, tick};
