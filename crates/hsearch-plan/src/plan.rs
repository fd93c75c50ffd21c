//! The plan (map) model: one overworld and the dungeons reachable from it.

use std::fmt;

use hsearch_core::{Grid, GridError, Point};

use crate::terrain::{DungeonTerrain, Terrain};

/// A dungeon entered from the overworld.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    /// The dungeon's own grid.
    pub grid: Grid<DungeonTerrain>,
    /// Entrance position on the overworld grid.
    pub entrance: Point,
    /// Where the agent appears after entering.
    pub start: Point,
    /// The item to fetch inside the dungeon.
    pub goal: Point,
}

/// An overworld with its landmarks and dungeons.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub grid: Grid<Terrain>,
    /// Where the agent starts, and returns to after every dungeon.
    pub start: Point,
    pub sword: Point,
    /// Final destination after the dungeons.
    pub gate: Point,
    pub dungeons: Vec<Dungeon>,
}

impl Dungeon {
    /// Check that `start` and `goal` lie on floor cells of the dungeon grid.
    ///
    /// The entrance is checked against the overworld by [`Plan::validate`].
    pub fn validate(&self, index: usize) -> Result<(), PlanError> {
        for (name, pos) in [("start", self.start), ("goal", self.goal)] {
            match self.grid.get(pos) {
                None => {
                    return Err(PlanError::OutOfBounds {
                        landmark: format!("dungeon {index} {name}"),
                        pos,
                    });
                }
                Some(t) if !t.is_traversable() => {
                    return Err(PlanError::Blocked {
                        landmark: format!("dungeon {index} {name}"),
                        pos,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl Plan {
    /// Check that every landmark lies inside its grid and that dungeon
    /// landmarks are on floor.
    pub fn validate(&self) -> Result<(), PlanError> {
        let landmarks = [
            ("start".to_string(), self.start),
            ("sword".to_string(), self.sword),
            ("gate".to_string(), self.gate),
        ]
        .into_iter()
        .chain(
            self.dungeons
                .iter()
                .enumerate()
                .map(|(i, d)| (format!("dungeon {i} entrance"), d.entrance)),
        );

        for (landmark, pos) in landmarks {
            if !self.grid.contains(pos) {
                return Err(PlanError::OutOfBounds { landmark, pos });
            }
        }

        for (i, d) in self.dungeons.iter().enumerate() {
            d.validate(i)?;
        }
        Ok(())
    }

    /// The dungeon whose entrance is at `pos`.
    pub fn dungeon_at(&self, pos: Point) -> Option<&Dungeon> {
        self.dungeons.iter().find(|d| d.entrance == pos)
    }
}

/// Errors reported by plan validation and construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A grid could not be built from its rows.
    Grid(GridError),
    /// A landmark lies outside its grid.
    OutOfBounds { landmark: String, pos: Point },
    /// A dungeon landmark lies on a wall.
    Blocked { landmark: String, pos: Point },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "plan: {e}"),
            Self::OutOfBounds { landmark, pos } => {
                write!(f, "plan: {landmark} at {pos} is outside the grid")
            }
            Self::Blocked { landmark, pos } => {
                write!(f, "plan: {landmark} at {pos} is on a non traversable cell")
            }
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PlanError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
