//! Gravity Maze - a gravity-flipping tile maze puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, collision, physics, session state)
//! - `render`: Read-only frame drawing
//!
//! All gameplay rules live in `sim`, which is fixed-timestep and free of
//! platform dependencies. The binary polls input, advances the session and
//! draws it; nothing flows back from rendering into the simulation.

pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Side of one maze cell in pixels
    pub const TILE_SIZE: f32 = 40.0;
    /// Side of the body's square collision box (also the drawn circle's diameter)
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Drawn radius of a pickup; its collision box is the circumscribing square
    pub const PICKUP_RADIUS: f32 = 10.0;
    /// Velocity gained along the active gravity axis each tick (pixels/tick)
    pub const GRAVITY: f32 = 0.5;

    /// Window dimensions (the built-in 20x13 level fills 800x520)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
}
