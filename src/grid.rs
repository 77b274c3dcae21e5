//! Grid-world data model: directions, positions, the per-tick occupancy
//! snapshot, and the player roster that arrives with it.

use std::ops::Add;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// The four cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed candidate order every evaluator walks: north, east, south, west.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit displacement on the grid. Screen convention: y grows southward.
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::North => Vec2 { x: 0, y: -1 },
            Direction::East => Vec2 { x: 1, y: 0 },
            Direction::South => Vec2 { x: 0, y: 1 },
            Direction::West => Vec2 { x: -1, y: 0 },
        }
    }

    /// Stable integer code, constant for the process lifetime.
    pub fn code(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Direction> {
        Direction::ALL.get(code as usize).copied()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Immutable-per-tick occupancy snapshot. Cells are row-major; 0 is empty,
/// anything else is a wall or trail.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Result<Grid> {
        if cells.len() != (width as usize) * (height as usize) {
            return Err(anyhow!(
                "grid cells mismatch: {} cells for {width}x{height}",
                cells.len()
            ));
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_inside(&self, position: Vec2) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn cell(&self, position: Vec2) -> Option<u8> {
        if !self.is_inside(position) {
            return None;
        }
        let index = position.y as usize * self.width as usize + position.x as usize;
        self.cells.get(index).copied()
    }

    /// True iff the cell holds no wall or trail. Out-of-range positions
    /// read as occupied; callers still pair this with [`Grid::is_inside`].
    pub fn is_cell_empty(&self, position: Vec2) -> bool {
        self.cell(position) == Some(0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Vec2,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Vec2) -> Player {
        Player {
            name: name.into(),
            position,
        }
    }
}

/// The complete game state as of one tick, fully replacing prior state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub players: Vec<Player>,
}

impl GameState {
    /// First player whose name matches, in snapshot order.
    pub fn player_named(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }
}
