//! Session state and core simulation types

use glam::Vec2;

use super::collision::{Aabb, body_aabb};
use super::grid::{Grid, Tile, cell_center};
use super::level::LevelError;

/// Direction gravity currently pulls the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityDir {
    Down,
    Up,
    Left,
    Right,
}

impl GravityDir {
    /// Successor in the fixed trigger cycle
    pub fn next(self) -> Self {
        match self {
            GravityDir::Down => GravityDir::Up,
            GravityDir::Up => GravityDir::Left,
            GravityDir::Left => GravityDir::Right,
            GravityDir::Right => GravityDir::Down,
        }
    }
}

/// Result of a single physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Alive,
    /// The body overlapped a hazard cell
    Dead,
}

/// Terminal or non-terminal status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// The player body: a circle in continuous space with a square collision box
#[derive(Debug, Clone)]
pub struct Body {
    /// Center position in pixels
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub gravity_dir: GravityDir,
}

impl Body {
    /// New body at rest at the center of the given cell, gravity pulling down
    pub fn at_cell(row: usize, col: usize) -> Self {
        Self {
            pos: cell_center(row, col),
            vel: Vec2::ZERO,
            gravity_dir: GravityDir::Down,
        }
    }

    /// Advance gravity to the next direction in the cycle, shedding the
    /// velocity that belonged to the axis being left. Only the Up -> Left
    /// switch also clears the perpendicular component; the other three
    /// transitions clear a single axis.
    pub fn cycle_gravity(&mut self) {
        match self.gravity_dir {
            GravityDir::Down => self.vel.y = 0.0,
            GravityDir::Up => self.vel = Vec2::ZERO,
            GravityDir::Left => self.vel.x = 0.0,
            GravityDir::Right => self.vel.x = 0.0,
        }
        self.gravity_dir = self.gravity_dir.next();
    }

    /// Collision box around the current position
    pub fn collision_box(&self) -> Aabb {
        body_aabb(self.pos)
    }
}

/// One play-through of a level: grid, body and win/lose bookkeeping
#[derive(Debug, Clone)]
pub struct Session {
    pub grid: Grid,
    pub body: Body,
    /// Center of the exit cell, fixed at load
    pub exit_pos: Vec2,
    /// Centers of the pickups not yet collected
    pub pickups: Vec<Vec2>,
    pub total_pickups: u32,
    pub collected_pickups: u32,
    pub outcome: Outcome,
}

impl Session {
    /// Scan the grid for the start, exit and pickups and spawn the body.
    /// Fails unless the grid has exactly one start and exactly one exit.
    pub fn new(grid: Grid) -> Result<Self, LevelError> {
        let mut start = None;
        let mut exit = None;
        let mut pickups = Vec::new();

        for (row, col, tile) in grid.cells() {
            match tile {
                Tile::PlayerStart => {
                    if start.replace((row, col)).is_some() {
                        return Err(LevelError::DuplicateStart);
                    }
                }
                Tile::Exit => {
                    if exit.replace((row, col)).is_some() {
                        return Err(LevelError::DuplicateExit);
                    }
                }
                Tile::Pickup => pickups.push(cell_center(row, col)),
                Tile::Empty | Tile::Wall | Tile::Hazard => {}
            }
        }

        let (start_row, start_col) = start.ok_or(LevelError::MissingStart)?;
        let (exit_row, exit_col) = exit.ok_or(LevelError::MissingExit)?;
        let total_pickups = pickups.len() as u32;
        log::info!(
            "session start: {}x{} grid, {} pickups",
            grid.rows(),
            grid.cols(),
            total_pickups
        );

        Ok(Self {
            grid,
            body: Body::at_cell(start_row, start_col),
            exit_pos: cell_center(exit_row, exit_col),
            pickups,
            total_pickups,
            collected_pickups: 0,
            outcome: Outcome::InProgress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level;
    use proptest::prelude::*;

    const DIRS: [GravityDir; 4] = [
        GravityDir::Down,
        GravityDir::Up,
        GravityDir::Left,
        GravityDir::Right,
    ];

    fn body_with(vel: Vec2, gravity_dir: GravityDir) -> Body {
        Body {
            pos: Vec2::ZERO,
            vel,
            gravity_dir,
        }
    }

    #[test]
    fn test_gravity_cycle_order() {
        assert_eq!(GravityDir::Down.next(), GravityDir::Up);
        assert_eq!(GravityDir::Up.next(), GravityDir::Left);
        assert_eq!(GravityDir::Left.next(), GravityDir::Right);
        assert_eq!(GravityDir::Right.next(), GravityDir::Down);
    }

    #[test]
    fn cycle_reset_table_is_asymmetric() {
        // Down -> Up sheds only the vertical component
        let mut body = body_with(Vec2::new(3.0, 4.0), GravityDir::Down);
        body.cycle_gravity();
        assert_eq!(body.gravity_dir, GravityDir::Up);
        assert_eq!(body.vel, Vec2::new(3.0, 0.0));

        // Up -> Left is the odd one out: it clears both components
        let mut body = body_with(Vec2::new(3.0, 4.0), GravityDir::Up);
        body.cycle_gravity();
        assert_eq!(body.gravity_dir, GravityDir::Left);
        assert_eq!(body.vel, Vec2::ZERO);

        // Left -> Right sheds only the horizontal component
        let mut body = body_with(Vec2::new(3.0, 4.0), GravityDir::Left);
        body.cycle_gravity();
        assert_eq!(body.gravity_dir, GravityDir::Right);
        assert_eq!(body.vel, Vec2::new(0.0, 4.0));

        // Right -> Down likewise
        let mut body = body_with(Vec2::new(3.0, 4.0), GravityDir::Right);
        body.cycle_gravity();
        assert_eq!(body.gravity_dir, GravityDir::Down);
        assert_eq!(body.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_body_spawns_at_cell_center() {
        let body = Body::at_cell(1, 6);
        assert_eq!(body.pos, Vec2::new(260.0, 60.0));
        assert_eq!(body.vel, Vec2::ZERO);
        assert_eq!(body.gravity_dir, GravityDir::Down);
    }

    #[test]
    fn test_session_scans_grid() {
        let grid = level::parse("####\n#P.#\n#oE#\n####").unwrap();
        let session = Session::new(grid).unwrap();
        assert_eq!(session.body.pos, cell_center(1, 1));
        assert_eq!(session.exit_pos, cell_center(2, 2));
        assert_eq!(session.pickups, vec![cell_center(2, 1)]);
        assert_eq!(session.total_pickups, 1);
        assert_eq!(session.collected_pickups, 0);
        assert_eq!(session.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_session_requires_exactly_one_start() {
        let grid = level::parse("..E").unwrap();
        assert!(matches!(
            Session::new(grid),
            Err(LevelError::MissingStart)
        ));

        let grid = level::parse("PPE").unwrap();
        assert!(matches!(
            Session::new(grid),
            Err(LevelError::DuplicateStart)
        ));
    }

    #[test]
    fn test_session_requires_exactly_one_exit() {
        let grid = level::parse("P..").unwrap();
        assert!(matches!(Session::new(grid), Err(LevelError::MissingExit)));

        let grid = level::parse("PEE").unwrap();
        assert!(matches!(
            Session::new(grid),
            Err(LevelError::DuplicateExit)
        ));
    }

    proptest! {
        #[test]
        fn four_cycles_return_to_start(
            start in 0usize..4,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
        ) {
            let mut body = body_with(Vec2::new(vx, vy), DIRS[start]);
            for _ in 0..4 {
                body.cycle_gravity();
            }
            prop_assert_eq!(body.gravity_dir, DIRS[start]);
        }
    }
}
