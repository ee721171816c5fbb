use crate::code::Code;
use serde::{Deserialize, Serialize};

/// One of the eight compass directions around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Lane movement as `(dx, dy)`: `dx` moves the longitude lane (east is
    /// positive), `dy` the latitude lane (north is positive).
    pub const fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// The eight codes adjacent to a source code, all at the source's step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSet {
    pub north: Code,
    pub north_east: Code,
    pub east: Code,
    pub south_east: Code,
    pub south: Code,
    pub south_west: Code,
    pub west: Code,
    pub north_west: Code,
}

impl NeighborSet {
    /// Builds a set by computing each direction with `f`.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Direction) -> Code,
    {
        Self {
            north: f(Direction::North),
            north_east: f(Direction::NorthEast),
            east: f(Direction::East),
            south_east: f(Direction::SouthEast),
            south: f(Direction::South),
            south_west: f(Direction::SouthWest),
            west: f(Direction::West),
            north_west: f(Direction::NorthWest),
        }
    }

    pub fn get(&self, direction: Direction) -> Code {
        match direction {
            Direction::North => self.north,
            Direction::NorthEast => self.north_east,
            Direction::East => self.east,
            Direction::SouthEast => self.south_east,
            Direction::South => self.south,
            Direction::SouthWest => self.south_west,
            Direction::West => self.west,
            Direction::NorthWest => self.north_west,
        }
    }

    /// Iterates `(direction, code)` pairs clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Code)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}
