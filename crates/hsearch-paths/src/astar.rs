use std::collections::HashMap;

use crate::frontier::Frontier;
use crate::traits::{Heuristic, Node};

/// How a discovered node's frontier priority is derived from its
/// cost-to-come `g` and heuristic estimate `h`.
///
/// Higher priorities are expanded first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    /// `h - g`. The estimate *raises* the priority, so nodes the heuristic
    /// scores higher are expanded earlier. Identical to
    /// [`Admissible`](Self::Admissible) when `h` is always 0.
    #[default]
    Literal,
    /// `-(g + h)`: the textbook A* ordering. Yields minimum-cost paths with a
    /// consistent heuristic.
    Admissible,
}

impl Ranking {
    #[inline]
    fn priority(self, g: i32, h: i32) -> i32 {
        match self {
            Self::Literal => -g + h,
            Self::Admissible => -(g + h),
        }
    }
}

/// A path returned by a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N> {
    /// Every node from start to goal, both included.
    pub nodes: Vec<N>,
    /// Sum of the entry costs of every node except the start.
    pub cost: i32,
}

impl<N> Path<N> {
    /// First node of the path.
    #[inline]
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Last node of the path.
    #[inline]
    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of nodes, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total cost of a search outcome: the path's cost, or 0 when no path
    /// was found.
    #[inline]
    pub fn cost_of(path: Option<&Path<N>>) -> i32 {
        path.map_or(0, |p| p.cost)
    }
}

/// Counters for the most recent query of an [`AstarSearch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal pop is not counted).
    pub expansions: usize,
    /// Frontier insertions, including the start node and duplicates.
    pub pushes: usize,
}

/// Reusable search engine.
///
/// Owns the frontier, the cost-to-come and predecessor maps, and a neighbor
/// scratch buffer. All of them are cleared at the start of every query, so
/// each query is independent; only the allocations survive.
///
/// Nodes are never closed: a node rediscovered at a lower cost is pushed
/// again, and the stale entry is harmlessly re-expanded when popped.
pub struct AstarSearch<N> {
    ranking: Ranking,
    frontier: Frontier<N>,
    cost_to: HashMap<N, i32>,
    came_from: HashMap<N, Option<N>>,
    nbuf: Vec<N>,
    stats: SearchStats,
}

impl<N: Node> AstarSearch<N> {
    /// Create an engine using [`Ranking::Literal`].
    pub fn new() -> Self {
        Self::with_ranking(Ranking::default())
    }

    /// Create an engine using the given ranking.
    pub fn with_ranking(ranking: Ranking) -> Self {
        Self {
            ranking,
            frontier: Frontier::new(),
            cost_to: HashMap::new(),
            came_from: HashMap::new(),
            nbuf: Vec::with_capacity(8),
            stats: SearchStats::default(),
        }
    }

    /// The ranking used by subsequent queries.
    #[inline]
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    /// Change the ranking used by subsequent queries.
    pub fn set_ranking(&mut self, ranking: Ranking) {
        self.ranking = ranking;
    }

    /// Counters for the last query.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute a path from `start` to `goal`.
    ///
    /// Returns the path (both endpoints included) with its cost, or `None`
    /// if `goal` cannot be reached from `start`.
    pub fn find_path<H: Heuristic<N>>(&mut self, start: N, goal: N, heuristic: H) -> Option<Path<N>> {
        self.frontier.clear();
        self.cost_to.clear();
        self.came_from.clear();
        self.stats = SearchStats::default();

        self.cost_to.insert(start.clone(), 0);
        self.came_from.insert(start.clone(), None);
        self.frontier.push(start, 0);
        self.stats.pushes = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.frontier.pop() else {
                break false;
            };

            if current == goal {
                break true;
            }

            self.stats.expansions += 1;
            let current_cost = self.cost_to.get(&current).copied().unwrap_or(0);
            log::trace!("astar: expanding node at cost {current_cost}");

            nbuf.clear();
            current.neighbors(&mut nbuf);

            for next in nbuf.drain(..) {
                let cost_to_next = current_cost + next.cost();
                let improved = self
                    .cost_to
                    .get(&next)
                    .is_none_or(|&known| cost_to_next < known);
                if !improved {
                    continue;
                }

                let priority = self
                    .ranking
                    .priority(cost_to_next, heuristic.estimate(&next, &goal));
                self.cost_to.insert(next.clone(), cost_to_next);
                self.came_from.insert(next.clone(), Some(current.clone()));
                self.frontier.push(next, priority);
                self.stats.pushes += 1;
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "astar: {} after {} expansions, {} pushes",
            if found { "reached goal" } else { "goal unreachable" },
            self.stats.expansions,
            self.stats.pushes
        );

        if !found {
            return None;
        }

        let cost = self.cost_to.get(&goal).copied().unwrap_or(0);
        Some(Path {
            nodes: self.reconstruct(goal),
            cost,
        })
    }

    /// Walk the predecessor links back from `goal` and return the nodes in
    /// start→goal order.
    fn reconstruct(&self, goal: N) -> Vec<N> {
        let mut prev = self.came_from.get(&goal).cloned().flatten();
        let mut nodes = vec![goal];
        while let Some(node) = prev {
            prev = self.came_from.get(&node).cloned().flatten();
            nodes.push(node);
        }
        nodes.reverse();
        nodes
    }
}

impl<N: Node> Default for AstarSearch<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute a path from `start` to `goal` with [`Ranking::Literal`].
///
/// Returns `None` if `goal` is unreachable; see [`Path::cost_of`] for the
/// zero-cost convention of that outcome.
pub fn find_path<N: Node, H: Heuristic<N>>(start: N, goal: N, heuristic: H) -> Option<Path<N>> {
    find_path_ranked(start, goal, heuristic, Ranking::Literal)
}

/// Compute a path from `start` to `goal` with the given ranking.
pub fn find_path_ranked<N: Node, H: Heuristic<N>>(
    start: N,
    goal: N,
    heuristic: H,
    ranking: Ranking,
) -> Option<Path<N>> {
    AstarSearch::with_ranking(ranking).find_path(start, goal, heuristic)
}
