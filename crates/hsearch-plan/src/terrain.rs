//! Terrain kinds and their entry costs.
//!
//! Each kind has a single-character glyph so that small maps can be written
//! inline as rows of text.

use hsearch_core::{Grid, GridError};
use hsearch_paths::CellCost;

/// Overworld terrain. Every kind can be entered, at different costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Grass,
    Sand,
    Forest,
    Mountain,
    Water,
}

impl Terrain {
    /// All overworld terrain kinds.
    pub const ALL: [Terrain; 5] = [
        Self::Grass,
        Self::Sand,
        Self::Forest,
        Self::Mountain,
        Self::Water,
    ];

    /// Cost of entering a cell of this kind.
    pub const fn cost(self) -> i32 {
        match self {
            Self::Grass => 10,
            Self::Sand => 20,
            Self::Forest => 100,
            Self::Mountain => 150,
            Self::Water => 180,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Grass => ' ',
            Self::Sand => '_',
            Self::Forest => '@',
            Self::Mountain => '%',
            Self::Water => '*',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.glyph() == c)
    }

    /// Build an overworld grid from rows of glyphs.
    pub fn grid_from_glyphs(rows: &[&str]) -> Result<Grid<Self>, GridError> {
        Grid::from_glyphs(rows, Self::from_glyph)
    }
}

impl CellCost for Terrain {
    #[inline]
    fn entry_cost(&self) -> Option<i32> {
        Some(self.cost())
    }
}

/// Dungeon terrain: open floor or solid wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DungeonTerrain {
    #[default]
    Floor,
    Wall,
}

impl DungeonTerrain {
    /// Cost of entering a floor cell.
    pub const FLOOR_COST: i32 = 10;

    #[inline]
    pub const fn is_traversable(self) -> bool {
        matches!(self, Self::Floor)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Floor => ' ',
            Self::Wall => '#',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            _ => None,
        }
    }

    /// Build a dungeon grid from rows of glyphs.
    pub fn grid_from_glyphs(rows: &[&str]) -> Result<Grid<Self>, GridError> {
        Grid::from_glyphs(rows, Self::from_glyph)
    }
}

impl CellCost for DungeonTerrain {
    #[inline]
    fn entry_cost(&self) -> Option<i32> {
        self.is_traversable().then_some(Self::FLOOR_COST)
    }
}
