use std::str::FromStr;

use thiserror::Error;

use super::PipeMazeError;
use super::tile::{Direction, InvalidTile, Tile};

/// Column and row of a tile, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("maze input has no rows")]
    Empty,
    #[error("line {line}, column {column}: {source}")]
    InvalidTile {
        line: usize,
        column: usize,
        source: InvalidTile,
    },
    #[error("line {line} has {found} tiles, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular maze stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<Tile> {
        if position.x >= self.width || position.y >= self.height {
            return None;
        }
        self.tiles.get(position.y * self.width + position.x).copied()
    }

    /// The neighbouring position one step towards `direction`, or `None` off the edge.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let Position { x, y } = position;
        let next = match direction {
            Direction::North => Position::new(x, y.checked_sub(1)?),
            Direction::South => Position::new(x, y + 1),
            Direction::West => Position::new(x.checked_sub(1)?, y),
            Direction::East => Position::new(x + 1, y),
        };
        (next.x < self.width && next.y < self.height).then_some(next)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width)
    }

    /// Position of the first start marker in reading order.
    pub fn find_start(&self) -> Result<Position, PipeMazeError> {
        self.tiles
            .iter()
            .position(|tile| *tile == Tile::Start)
            .map(|index| Position::new(index % self.width, index / self.width))
            .ok_or(PipeMazeError::MissingStart)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in s.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                continue;
            }

            let before = tiles.len();
            for (column, symbol) in line.chars().enumerate() {
                let tile = Tile::try_from(symbol).map_err(|source| GridError::InvalidTile {
                    line: line_idx + 1,
                    column: column + 1,
                    source,
                })?;
                tiles.push(tile);
            }

            let found = tiles.len() - before;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    line: line_idx + 1,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let width = width.ok_or(GridError::Empty)?;
        Ok(Self {
            tiles,
            width,
            height,
        })
    }
}
