//! Terrain plans and route planning: an overworld with dungeons, and the
//! brute-force ordering of stops that chains single-goal searches.

pub mod plan;
pub mod route;
pub mod terrain;

pub use plan::{Dungeon, Plan, PlanError};
pub use route::{Route, RouteError, Tour, dungeon_route, multi_path, permutations, plan_tour};
pub use terrain::{DungeonTerrain, Terrain};
