use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use hsearch_core::{Grid, Point};

use crate::traits::Node;

/// Entry cost of a grid cell.
pub trait CellCost {
    /// Cost of entering the cell, or `None` if it cannot be entered.
    fn entry_cost(&self) -> Option<i32>;
}

/// Every integer cell can be entered; its value is the cost.
impl CellCost for i32 {
    #[inline]
    fn entry_cost(&self) -> Option<i32> {
        Some(*self)
    }
}

/// `true` cells cost 1 to enter, `false` cells are blocked.
impl CellCost for bool {
    #[inline]
    fn entry_cost(&self) -> Option<i32> {
        self.then_some(1)
    }
}

/// A position on a shared [`Grid`].
///
/// The grid handle is the search context: two nodes are equal only if they
/// have the same position *and* point at the same `Rc` allocation, so
/// identical coordinates on different grids never collide. Every node of a
/// search must be created from clones of one `Rc`.
pub struct GridNode<T> {
    pos: Point,
    grid: Rc<Grid<T>>,
}

impl<T> GridNode<T> {
    /// Create a node at `pos` on `grid`.
    pub fn new(pos: Point, grid: &Rc<Grid<T>>) -> Self {
        Self {
            pos,
            grid: Rc::clone(grid),
        }
    }

    /// Position on the grid.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The grid this node belongs to.
    #[inline]
    pub fn grid(&self) -> &Rc<Grid<T>> {
        &self.grid
    }

    /// Another node on the same grid.
    #[inline]
    pub fn at(&self, pos: Point) -> Self {
        Self {
            pos,
            grid: Rc::clone(&self.grid),
        }
    }
}

impl<T: CellCost> Node for GridNode<T> {
    fn neighbors(&self, buf: &mut Vec<Self>) {
        for p in self.pos.neighbors_4() {
            if self.grid.get(p).and_then(T::entry_cost).is_some() {
                buf.push(self.at(p));
            }
        }
    }

    /// Entry cost of the cell under this node; 0 for a blocked or
    /// out-of-bounds cell, which can only happen for a start node.
    fn cost(&self) -> i32 {
        self.grid
            .get(self.pos)
            .and_then(T::entry_cost)
            .unwrap_or(0)
    }
}

impl<T> Clone for GridNode<T> {
    fn clone(&self) -> Self {
        self.at(self.pos)
    }
}

impl<T> PartialEq for GridNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && Rc::ptr_eq(&self.grid, &other.grid)
    }
}

impl<T> Eq for GridNode<T> {}

impl<T> Hash for GridNode<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
        std::ptr::hash(Rc::as_ptr(&self.grid), state);
    }
}

impl<T> fmt::Debug for GridNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridNode")
            .field("pos", &self.pos)
            .field("grid", &Rc::as_ptr(&self.grid))
            .finish()
    }
}
