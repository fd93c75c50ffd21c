/// A position in a search space.
///
/// Equality and hashing identify the position: two values are equal iff they
/// denote the same logical position in the same search context. Values used
/// together in one search must share that context.
pub trait Node: Clone + Eq + std::hash::Hash {
    /// Append every node reachable from `self` in exactly one step into `buf`.
    /// The caller clears `buf` before calling.
    ///
    /// The order must be the same on every call for reproducible results.
    fn neighbors(&self, buf: &mut Vec<Self>);

    /// Cost of entering this node. Must be >= 0.
    fn cost(&self) -> i32;
}

/// Cost-to-goal estimate used to bias exploration order.
///
/// Implemented for every `Fn(&N, &N) -> i32`. Must be pure.
pub trait Heuristic<N> {
    /// Estimate for going from `from` to `to`.
    fn estimate(&self, from: &N, to: &N) -> i32;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> i32,
{
    #[inline]
    fn estimate(&self, from: &N, to: &N) -> i32 {
        self(from, to)
    }
}
