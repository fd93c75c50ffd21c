//! Multi-stop routes built by chaining single-goal searches.
//!
//! The number of dungeons is small, so the best visiting order is found by
//! trying every permutation.

use std::fmt;
use std::rc::Rc;

use hsearch_core::{Grid, Point};
use hsearch_paths::{AstarSearch, CellCost, GridNode, Manhattan, Ranking};

use crate::plan::{Dungeon, Plan, PlanError};

/// A sequence of legs walked one after the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// One entry per stop. Each leg excludes the cell it starts from and ends
    /// on its stop, so a leg to the current position is empty.
    pub legs: Vec<Vec<Point>>,
    /// Sum of the costs of every leg.
    pub cost: i32,
}

impl Route {
    /// Every step of the route, in walking order.
    pub fn steps(&self) -> impl Iterator<Item = Point> + '_ {
        self.legs.iter().flatten().copied()
    }
}

/// The cheapest overworld tour found by [`plan_tour`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Dungeon indices in visiting order.
    pub order: Vec<usize>,
    pub route: Route,
}

/// All orderings of `0..n`.
///
/// The identity ordering always comes first.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn permute(arr: &mut Vec<usize>, k: usize, out: &mut Vec<Vec<usize>>) {
        if k <= 1 {
            out.push(arr.clone());
            return;
        }
        for i in 0..k {
            permute(arr, k - 1, out);
            if k % 2 == 1 {
                arr.swap(i, k - 1);
            } else {
                arr.swap(0, k - 1);
            }
        }
    }

    let mut arr: Vec<usize> = (0..n).collect();
    let mut out = Vec::new();
    permute(&mut arr, n, &mut out);
    out
}

/// Walk from `start` through every stop in order.
///
/// `start` must lie on the grid.
pub fn multi_path<T: CellCost>(
    grid: &Rc<Grid<T>>,
    start: Point,
    stops: &[Point],
    ranking: Ranking,
) -> Result<Route, RouteError> {
    if !grid.contains(start) {
        return Err(RouteError::OffGrid { pos: start });
    }
    let mut search = AstarSearch::with_ranking(ranking);
    let mut route = Route::default();
    let mut from = start;
    for &to in stops {
        let path = search
            .find_path(GridNode::new(from, grid), GridNode::new(to, grid), Manhattan)
            .ok_or(RouteError::Unreachable { from, to })?;
        route.cost += path.cost;
        route
            .legs
            .push(path.nodes.iter().skip(1).map(GridNode::pos).collect());
        from = to;
    }
    Ok(route)
}

/// Find the cheapest tour of the overworld: every dungeon entrance in some
/// order, then back to the plan's start, then to the gate.
///
/// Ties keep the ordering found first.
pub fn plan_tour(plan: &Plan, ranking: Ranking) -> Result<Tour, RouteError> {
    plan.validate()?;
    let grid = Rc::new(plan.grid.clone());

    let tour_for = |order: Vec<usize>| -> Result<Tour, RouteError> {
        let stops: Vec<Point> = order
            .iter()
            .map(|&i| plan.dungeons[i].entrance)
            .chain([plan.start, plan.gate])
            .collect();
        let route = multi_path(&grid, plan.start, &stops, ranking)?;
        log::debug!("route: order {order:?} costs {}", route.cost);
        Ok(Tour { order, route })
    };

    let mut orders = permutations(plan.dungeons.len()).into_iter();
    let mut best = tour_for(orders.next().unwrap_or_default())?;
    for order in orders {
        let tour = tour_for(order)?;
        if tour.route.cost < best.route.cost {
            best = tour;
        }
    }
    Ok(best)
}

/// Route inside a dungeon: from its start to the goal and back.
pub fn dungeon_route(dungeon: &Dungeon, ranking: Ranking) -> Result<Route, RouteError> {
    let grid = Rc::new(dungeon.grid.clone());
    multi_path(&grid, dungeon.start, &[dungeon.goal, dungeon.start], ranking)
}

/// Errors reported by route planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The plan failed validation.
    Invalid(PlanError),
    /// The route starts outside the grid.
    OffGrid { pos: Point },
    /// A stop cannot be reached from the previous one.
    Unreachable { from: Point, to: Point },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "route: invalid plan: {e}"),
            Self::OffGrid { pos } => write!(f, "route: start {pos} is outside the grid"),
            Self::Unreachable { from, to } => {
                write!(f, "route: no path from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlanError> for RouteError {
    fn from(e: PlanError) -> Self {
        Self::Invalid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::tests::{sample_dungeon, sample_plan};
    use crate::terrain::{DungeonTerrain, Terrain};
    use hsearch_paths::manhattan;
    use std::collections::HashSet;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn entry_cost(grid: &Grid<Terrain>, steps: impl Iterator<Item = Point>) -> i32 {
        steps.map(|p| grid.get(p).map_or(0, |t| t.cost())).sum()
    }

    #[test]
    fn permutations_cover_every_ordering() {
        let perms = permutations(3);
        assert_eq!(perms.len(), 6);
        assert_eq!(perms[0], vec![0, 1, 2]);
        let unique: HashSet<_> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), 6);
        for p in &perms {
            let mut sorted = p.clone();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2]);
        }
    }

    #[test]
    fn permutations_of_small_sets() {
        assert_eq!(permutations(0), vec![Vec::<usize>::new()]);
        assert_eq!(permutations(1), vec![vec![0]]);
        assert_eq!(permutations(2), vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(permutations(4).len(), 24);
    }

    #[test]
    fn corridor_route_legs() {
        let grid = Rc::new(Terrain::grid_from_glyphs(&["      "]).unwrap());
        let stops = pts(&[(1, 0), (4, 0), (0, 0), (5, 0)]);
        let route = multi_path(&grid, Point::new(0, 0), &stops, Ranking::Literal).unwrap();

        assert_eq!(
            route.legs,
            vec![
                pts(&[(1, 0)]),
                pts(&[(2, 0), (3, 0), (4, 0)]),
                pts(&[(3, 0), (2, 0), (1, 0), (0, 0)]),
                pts(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]),
            ]
        );
        assert_eq!(route.cost, 130);
        assert_eq!(route.steps().count(), 13);
    }

    #[test]
    fn stop_at_current_position_is_an_empty_leg() {
        let grid = Rc::new(Terrain::grid_from_glyphs(&["  "]).unwrap());
        let route = multi_path(&grid, Point::new(0, 0), &pts(&[(0, 0), (1, 0)]), Ranking::Literal).unwrap();
        assert_eq!(route.legs, vec![vec![], pts(&[(1, 0)])]);
        assert_eq!(route.cost, 10);
    }

    #[test]
    fn unreachable_stop() {
        let grid = Rc::new(DungeonTerrain::grid_from_glyphs(&["  #  "]).unwrap());
        let err = multi_path(&grid, Point::new(0, 0), &pts(&[(1, 0), (4, 0)]), Ranking::Literal).unwrap_err();
        assert_eq!(
            err,
            RouteError::Unreachable {
                from: Point::new(1, 0),
                to: Point::new(4, 0)
            }
        );
        assert_eq!(err.to_string(), "route: no path from (1, 0) to (4, 0)");
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let grid = Rc::new(Terrain::grid_from_glyphs(&["   "]).unwrap());
        for start in [Point::new(-1, 0), Point::new(0, 1)] {
            let err = multi_path(&grid, start, &pts(&[(2, 0)]), Ranking::Literal).unwrap_err();
            assert_eq!(err, RouteError::OffGrid { pos: start });
        }
        let err = multi_path(&grid, Point::new(3, 0), &[], Ranking::Literal).unwrap_err();
        assert_eq!(err.to_string(), "route: start (3, 0) is outside the grid");
    }

    #[test]
    fn tour_is_cheapest_ordering() {
        let plan = sample_plan();
        let grid = Rc::new(plan.grid.clone());

        for ranking in [Ranking::Literal, Ranking::Admissible] {
            let tour = plan_tour(&plan, ranking).unwrap();

            let cheapest = permutations(plan.dungeons.len())
                .into_iter()
                .map(|order| {
                    let mut stops: Vec<Point> =
                        order.iter().map(|&i| plan.dungeons[i].entrance).collect();
                    stops.extend([plan.start, plan.gate]);
                    multi_path(&grid, plan.start, &stops, ranking).unwrap().cost
                })
                .min()
                .unwrap();
            assert_eq!(tour.route.cost, cheapest);
        }
    }

    #[test]
    fn tour_visits_entrances_then_start_then_gate() {
        let plan = sample_plan();
        let tour = plan_tour(&plan, Ranking::Admissible).unwrap();
        let route = &tour.route;

        assert_eq!(route.legs.len(), plan.dungeons.len() + 2);
        for (leg, &i) in route.legs.iter().zip(&tour.order) {
            assert_eq!(leg.last(), Some(&plan.dungeons[i].entrance));
        }
        let n = route.legs.len();
        assert_eq!(route.legs[n - 2].last(), Some(&plan.start));
        assert_eq!(route.legs[n - 1].last(), Some(&plan.gate));
        assert_eq!(entry_cost(&plan.grid, route.steps()), route.cost);

        let mut prev = plan.start;
        for p in route.steps() {
            assert_eq!(manhattan(prev, p), 1);
            prev = p;
        }
    }

    #[test]
    fn tour_ties_keep_first_ordering() {
        let plan = Plan {
            grid: Terrain::grid_from_glyphs(&["      "]).unwrap(),
            start: Point::new(0, 0),
            sword: Point::new(0, 0),
            gate: Point::new(5, 0),
            dungeons: vec![
                sample_dungeon(Point::new(1, 0)),
                sample_dungeon(Point::new(4, 0)),
            ],
        };
        let tour = plan_tour(&plan, Ranking::Literal).unwrap();
        assert_eq!(tour.order, vec![0, 1]);
        assert_eq!(tour.route.cost, 130);
    }

    #[test]
    fn tour_without_dungeons() {
        let mut plan = sample_plan();
        plan.dungeons.clear();
        let tour = plan_tour(&plan, Ranking::Admissible).unwrap();
        assert!(tour.order.is_empty());
        assert_eq!(tour.route.legs.len(), 2);
        assert!(tour.route.legs[0].is_empty());
    }

    #[test]
    fn invalid_plan_is_rejected() {
        let mut plan = sample_plan();
        plan.start = Point::new(-1, 0);
        let err = plan_tour(&plan, Ranking::Literal).unwrap_err();
        assert!(matches!(err, RouteError::Invalid(PlanError::OutOfBounds { .. })));
    }

    #[test]
    fn dungeon_round_trip() {
        let dungeon = sample_dungeon(Point::ZERO);
        for ranking in [Ranking::Literal, Ranking::Admissible] {
            let route = dungeon_route(&dungeon, ranking).unwrap();
            assert_eq!(
                route.legs,
                vec![
                    pts(&[(2, 1), (2, 2), (2, 3), (3, 3)]),
                    pts(&[(2, 3), (2, 2), (2, 1), (1, 1)]),
                ]
            );
            assert_eq!(route.cost, 80);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route {
            legs: vec![vec![Point::new(1, 0)], vec![]],
            cost: 10,
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
