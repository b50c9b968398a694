//! Axis-aligned box collision
//!
//! Every contact test in this game is a box test: the body's square against
//! wall and hazard cells, pickup squares, and the exit tile.

use glam::Vec2;

use super::grid::cell_center;
use crate::consts::{PICKUP_RADIUS, PLAYER_SIZE, TILE_SIZE};

/// Axis-aligned box stored as min/max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Strict overlap test: boxes that merely share an edge do not overlap,
    /// so a body clamped flush against a wall is at rest, not colliding.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Full-tile box of the cell at (row, col)
pub fn cell_aabb(row: usize, col: usize) -> Aabb {
    Aabb::from_center(cell_center(row, col), Vec2::splat(TILE_SIZE / 2.0))
}

/// The body's square collision box around its center
pub fn body_aabb(pos: Vec2) -> Aabb {
    Aabb::from_center(pos, Vec2::splat(PLAYER_SIZE / 2.0))
}

/// A pickup's collision box: the square circumscribing its drawn circle
pub fn pickup_aabb(center: Vec2) -> Aabb {
    Aabb::from_center(center, Vec2::splat(PICKUP_RADIUS))
}
