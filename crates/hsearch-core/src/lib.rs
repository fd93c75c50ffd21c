//! **hsearch-core**: geometry primitives and the rectangular grid shared by
//! the search crates.
//!
//! A [`Grid`] is usually wrapped in an `Rc` and handed to every node of a
//! search, so that node equality can include the identity of the grid it
//! belongs to.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridError};
