use hsearch_core::Point;

use crate::grid_node::GridNode;
use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// [`manhattan`] distance between the positions of two grid nodes.
///
/// Consistent for 4-way movement when every enterable cell costs at least 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<T> Heuristic<GridNode<T>> for Manhattan {
    #[inline]
    fn estimate(&self, from: &GridNode<T>, to: &GridNode<T>) -> i32 {
        manhattan(from.pos(), to.pos())
    }
}

/// [`chebyshev`] distance between the positions of two grid nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl<T> Heuristic<GridNode<T>> for Chebyshev {
    #[inline]
    fn estimate(&self, from: &GridNode<T>, to: &GridNode<T>) -> i32 {
        chebyshev(from.pos(), to.pos())
    }
}
