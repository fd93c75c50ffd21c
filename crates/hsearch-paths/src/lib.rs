//! Generic shortest-path search.
//!
//! This crate provides an A*-style search over any implicit graph whose
//! positions implement [`Node`]:
//!
//! - **Frontier**: an array-backed binary max-heap ([`Frontier`])
//! - **Search**: single start→goal queries ([`find_path`], [`AstarSearch`])
//! - **Grid nodes**: ready-made [`Node`] types over an [`hsearch_core::Grid`]
//!   ([`GridNode`], [`CellCost`])
//!
//! # Contracts
//!
//! | Trait | Provided by |
//! |---|---|
//! | [`Node`] | the caller's position type |
//! | [`Heuristic`] | any `Fn(&N, &N) -> i32` |
//! | [`CellCost`] | grid cell types used with [`GridNode`] |

mod astar;
mod distance;
mod frontier;
mod grid_node;
mod traits;

pub use astar::{AstarSearch, Path, Ranking, SearchStats, find_path, find_path_ranked};
pub use distance::{Chebyshev, Manhattan, chebyshev, manhattan};
pub use frontier::Frontier;
pub use grid_node::{CellCost, GridNode};
pub use traits::{Heuristic, Node};
