use std::fmt;

use thiserror::Error;

/// Compass direction from a tile to one of its four neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Above, below, left, right: the order neighbours of the start are probed in.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::West => 0b0100,
            Direction::East => 0b1000,
        }
    }
}

/// One symbol of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
    /// `.`
    Ground,
    /// `S`, a pipe of unknown shape
    Start,
}

/// Every pipe shape and the two sides it opens to.
const PIPES: [(Tile, [Direction; 2]); 6] = [
    (Tile::Vertical, [Direction::North, Direction::South]),
    (Tile::Horizontal, [Direction::West, Direction::East]),
    (Tile::NorthEast, [Direction::North, Direction::East]),
    (Tile::NorthWest, [Direction::North, Direction::West]),
    (Tile::SouthWest, [Direction::South, Direction::West]),
    (Tile::SouthEast, [Direction::South, Direction::East]),
];

impl Tile {
    /// The two sides a pipe opens to; `None` for ground and the start marker.
    pub fn connections(self) -> Option<[Direction; 2]> {
        PIPES
            .iter()
            .find(|(tile, _)| *tile == self)
            .map(|(_, sides)| *sides)
    }

    pub fn opens(self, direction: Direction) -> bool {
        self.connections()
            .is_some_and(|sides| sides.contains(&direction))
    }

    /// The pipe shape opening to exactly `a` and `b`, in either order.
    pub fn from_connections(a: Direction, b: Direction) -> Option<Tile> {
        PIPES
            .iter()
            .find(|(_, sides)| *sides == [a, b] || *sides == [b, a])
            .map(|(tile, _)| *tile)
    }

    pub fn is_pipe(self) -> bool {
        self.connections().is_some()
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Vertical => '|',
            Tile::Horizontal => '-',
            Tile::NorthEast => 'L',
            Tile::NorthWest => 'J',
            Tile::SouthWest => '7',
            Tile::SouthEast => 'F',
            Tile::Ground => '.',
            Tile::Start => 'S',
        }
    }

    /// Box-drawing rendering used by the loop diagnostics.
    pub fn glyph(self) -> char {
        match self {
            Tile::Vertical => '│',
            Tile::Horizontal => '─',
            Tile::NorthEast => '└',
            Tile::NorthWest => '┘',
            Tile::SouthWest => '┐',
            Tile::SouthEast => '┌',
            Tile::Ground => ' ',
            Tile::Start => 'S',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("character is invalid for a maze tile: {0:?}")]
pub struct InvalidTile(pub char);

impl TryFrom<char> for Tile {
    type Error = InvalidTile;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '|' => Ok(Tile::Vertical),
            '-' => Ok(Tile::Horizontal),
            'L' => Ok(Tile::NorthEast),
            'J' => Ok(Tile::NorthWest),
            '7' => Ok(Tile::SouthWest),
            'F' => Ok(Tile::SouthEast),
            '.' => Ok(Tile::Ground),
            'S' => Ok(Tile::Start),
            other => Err(InvalidTile(other)),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The directions in which the loop attaches to the start tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StartDirections(u8);

impl StartDirections {
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl FromIterator<Direction> for StartDirections {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = StartDirections::default();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// The pipe hidden under the start marker.
///
/// Only a set of exactly two directions names a pipe; anything else comes
/// back as [`Tile::Start`], which callers must treat as unknown.
pub fn resolve_start_tile(directions: StartDirections) -> Tile {
    let mut sides = directions.iter();
    match (sides.next(), sides.next(), sides.next()) {
        (Some(a), Some(b), None) => Tile::from_connections(a, b).unwrap_or(Tile::Start),
        _ => Tile::Start,
    }
}
