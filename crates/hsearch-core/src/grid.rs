//! A rectangular grid of arbitrary cell values.
//!
//! [`Grid`] stores its cells row-major and is addressed by [`Point`]
//! (x = column, y = row). Searches usually wrap one in an `Rc` and share
//! it between every node of a query.

use std::fmt;

use crate::geom::{Point, Range};

/// A 2D grid of `T` values with origin (0, 0).
///
/// `cells.len()` is always `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone> Grid<T> {
    /// Create a new `width` × `height` grid filled with `fill`.
    ///
    /// Non-positive dimensions produce an empty grid.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![fill; width as usize * height as usize],
            width,
            height,
        }
    }
}

/// Check that `cells` holds exactly `width * height` values.
fn check_shape(width: i32, height: i32, cells: usize) -> Result<(), GridError> {
    let expected = usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h));
    if expected == Some(cells) {
        Ok(())
    } else {
        Err(GridError::Shape {
            width,
            height,
            cells,
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows, where `rows[y][x]` becomes the cell at (x, y).
    ///
    /// Every row must have the same length and the grid must not be empty.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(GridError::TooLarge { width, height });
        };
        Ok(Self {
            cells,
            width: w,
            height: h,
        })
    }

    /// Build a grid from row-major `cells`.
    ///
    /// Fails with [`GridError::Shape`] unless there are exactly
    /// `width * height` cells.
    pub fn from_cells(width: i32, height: i32, cells: Vec<T>) -> Result<Self, GridError> {
        check_shape(width, height, cells.len())?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from ASCII rows, decoding each character with `decode`.
    ///
    /// Characters for which `decode` returns `None` are reported as
    /// [`GridError::UnknownGlyph`].
    pub fn from_glyphs(
        rows: &[&str],
        decode: impl Fn(char) -> Option<T>,
    ) -> Result<Self, GridError> {
        let mut decoded = Vec::with_capacity(rows.len());
        for (y, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, glyph) in line.chars().enumerate() {
                let cell = decode(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(cell);
            }
            decoded.push(row);
        }
        Self::from_rows(decoded)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).and_then(|i| self.cells.get(i))
    }

    /// Set the cell at a point. Returns `false` if out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p).and_then(|i| self.cells.get_mut(i)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over every cell together with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGrid::deserialize(deserializer)?;
        Grid::from_cells(raw.width, raw.height, raw.cells).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A glyph could not be decoded into a cell.
    UnknownGlyph { glyph: char, pos: Point },
    /// The cell count does not match the dimensions.
    Shape { width: i32, height: i32, cells: usize },
    /// The rows do not fit in `i32` coordinates.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has length {found}, expected {expected}"
            ),
            Self::UnknownGlyph { glyph, pos } => {
                write!(f, "grid: unknown glyph '{glyph}' at {pos}")
            }
            Self::Shape {
                width,
                height,
                cells,
            } => write!(f, "grid: {cells} cells do not fill {width}x{height}"),
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}
