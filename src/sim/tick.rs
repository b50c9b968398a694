//! Fixed timestep simulation tick
//!
//! The physics step and the session rules around it. One call to [`tick`]
//! advances the game by exactly one timestep.

use glam::Vec2;

use super::collision::{Aabb, body_aabb, cell_aabb, pickup_aabb};
use super::grid::{Grid, Tile, cell_of};
use super::state::{Body, GravityDir, Outcome, Session, StepResult};
use crate::consts::{GRAVITY, PLAYER_SIZE, TILE_SIZE};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Gravity-cycle trigger presses since the previous tick. Each press
    /// advances the direction once, in order, before the physics step.
    pub gravity_cycles: u32,
}

/// Advance the session by one fixed timestep. Once the outcome is terminal
/// this is a no-op and keeps returning the same outcome.
pub fn tick(session: &mut Session, input: &TickInput) -> Outcome {
    if session.outcome.is_terminal() {
        return session.outcome;
    }

    for _ in 0..input.gravity_cycles {
        session.body.cycle_gravity();
        log::debug!("gravity now {:?}", session.body.gravity_dir);
    }

    if step(&mut session.body, &session.grid) == StepResult::Dead {
        log::info!(
            "hazard contact at ({:.1}, {:.1})",
            session.body.pos.x,
            session.body.pos.y
        );
        session.outcome = Outcome::Lost;
        return session.outcome;
    }

    collect_pickups(session);

    if session.collected_pickups == session.total_pickups {
        let exit_box = Aabb::from_center(session.exit_pos, Vec2::splat(TILE_SIZE / 2.0));
        if session.body.collision_box().overlaps(&exit_box) {
            log::info!(
                "exit reached with {}/{} pickups",
                session.collected_pickups,
                session.total_pickups
            );
            session.outcome = Outcome::Won;
        }
    }

    session.outcome
}

/// Advance the body one step against the grid: integrate gravity into
/// velocity, velocity into position, then resolve contacts cell by cell in
/// row-major order.
///
/// Returns [`StepResult::Dead`] at the first hazard overlap. Wall contact is
/// resolved only against the direction gravity is pulling; motion opposite
/// the pull, or across the perpendicular axis, passes through walls.
pub fn step(body: &mut Body, grid: &Grid) -> StepResult {
    match body.gravity_dir {
        GravityDir::Down => body.vel.y += GRAVITY,
        GravityDir::Up => body.vel.y -= GRAVITY,
        GravityDir::Left => body.vel.x -= GRAVITY,
        GravityDir::Right => body.vel.x += GRAVITY,
    }
    body.pos += body.vel;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let tile = grid.tile(row, col);
            if !tile.is_solid() {
                continue;
            }
            // The box is rebuilt from the current position: a clamp against
            // an earlier cell moves it for every later cell in the scan.
            if !body_aabb(body.pos).overlaps(&cell_aabb(row, col)) {
                continue;
            }
            if tile == Tile::Hazard {
                return StepResult::Dead;
            }
            resolve_wall(body, row, col);
        }
    }

    StepResult::Alive
}

/// Clamp the body flush against the wall cell it entered and kill the
/// velocity component that carried it in. Applies only when the body is
/// moving the way gravity pulls.
fn resolve_wall(body: &mut Body, row: usize, col: usize) {
    let half = PLAYER_SIZE / 2.0;
    match body.gravity_dir {
        GravityDir::Down if body.vel.y > 0.0 => {
            body.pos.y = row as f32 * TILE_SIZE - half;
            body.vel.y = 0.0;
        }
        GravityDir::Up if body.vel.y < 0.0 => {
            body.pos.y = (row as f32 + 1.0) * TILE_SIZE + half;
            body.vel.y = 0.0;
        }
        GravityDir::Left if body.vel.x < 0.0 => {
            body.pos.x = (col as f32 + 1.0) * TILE_SIZE + half;
            body.vel.x = 0.0;
        }
        GravityDir::Right if body.vel.x > 0.0 => {
            body.pos.x = col as f32 * TILE_SIZE - half;
            body.vel.x = 0.0;
        }
        _ => {}
    }
}

/// Sweep the remaining pickups against the body. Overlapping pickups leave
/// the remaining list, bump the counter and downgrade their grid cell.
/// Membership is decided on a drained snapshot, never on a list being
/// iterated in place.
fn collect_pickups(session: &mut Session) {
    let body_box = session.body.collision_box();
    let mut remaining = Vec::with_capacity(session.pickups.len());
    for pos in session.pickups.drain(..) {
        if body_box.overlaps(&pickup_aabb(pos)) {
            session.collected_pickups += 1;
            let (row, col) = cell_of(pos);
            session.grid.set_tile(row, col, Tile::Empty);
            log::debug!(
                "pickup collected ({}/{})",
                session.collected_pickups,
                session.total_pickups
            );
        } else {
            remaining.push(pos);
        }
    }
    session.pickups = remaining;
}
