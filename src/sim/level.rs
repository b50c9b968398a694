//! Level text format and parsing
//!
//! One line per maze row, one character per cell:
//! `#` wall, `.` or space empty, `P` player start, `o` pickup, `E` exit,
//! `^` hazard. All rows must be the same width.

use std::fs;

use thiserror::Error;

use super::grid::{Grid, Tile};

/// Errors from level loading and session setup
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("level has no rows")]
    Empty,
    #[error("row {row} is {len} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown tile character {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },
    #[error("level has no player start")]
    MissingStart,
    #[error("level has more than one player start")]
    DuplicateStart,
    #[error("level has no exit")]
    MissingExit,
    #[error("level has more than one exit")]
    DuplicateExit,
}

/// The built-in level: open corridors over a pillar lattice, two pickups in
/// the middle column, exit in the bottom-right corner.
pub const DEFAULT_LEVEL: &str = "\
####################
#P.................#
#.##.###.###.###.#.#
#..................#
#.##.###.#o#.###.#.#
#..................#
#.##.###.###.###.#.#
#..................#
#.##.###.#o#.###.#.#
#..................#
#.##.###.###.###.#.#
#.................E#
####################";

/// Parse level text into a grid. Trailing blank lines are ignored.
pub fn parse(text: &str) -> Result<Grid, LevelError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() || lines[0].is_empty() {
        return Err(LevelError::Empty);
    }

    let cols = lines[0].chars().count();
    let mut tiles = Vec::with_capacity(lines.len() * cols);
    for (row, line) in lines.iter().enumerate() {
        let mut len = 0;
        for (col, ch) in line.chars().enumerate() {
            len += 1;
            tiles.push(match ch {
                '#' => Tile::Wall,
                '.' | ' ' => Tile::Empty,
                'P' => Tile::PlayerStart,
                'o' => Tile::Pickup,
                'E' => Tile::Exit,
                '^' => Tile::Hazard,
                _ => return Err(LevelError::UnknownTile { ch, row, col }),
            });
        }
        if len != cols {
            return Err(LevelError::RaggedRow {
                row,
                len,
                expected: cols,
            });
        }
    }

    Ok(Grid::new(lines.len(), cols, tiles))
}

/// Read and parse a level file
pub fn load_file(path: &str) -> Result<Grid, LevelError> {
    let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_string(),
        source,
    })?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_parses() {
        let grid = parse(DEFAULT_LEVEL).unwrap();
        assert_eq!(grid.rows(), 13);
        assert_eq!(grid.cols(), 20);

        let pickups = grid
            .cells()
            .filter(|&(_, _, tile)| tile == Tile::Pickup)
            .count();
        assert_eq!(pickups, 2);
        assert_eq!(grid.tile(1, 1), Tile::PlayerStart);
        assert_eq!(grid.tile(11, 18), Tile::Exit);
    }

    #[test]
    fn test_space_is_empty() {
        let grid = parse("# #\nP E").unwrap();
        assert_eq!(grid.tile(0, 1), Tile::Empty);
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let grid = parse("PE\n##\n\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = parse("###\n##\n###").unwrap_err();
        assert!(matches!(
            err,
            LevelError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_unknown_character_rejected() {
        let err = parse("#P#\n#?#").unwrap_err();
        assert!(matches!(
            err,
            LevelError::UnknownTile {
                ch: '?',
                row: 1,
                col: 1
            }
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse(""), Err(LevelError::Empty)));
        assert!(matches!(parse("\n\n"), Err(LevelError::Empty)));
    }
}
