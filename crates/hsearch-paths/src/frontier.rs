//! Max-priority queue used as the search frontier.
//!
//! Entries live in a flat array laid out as a binary heap: the children of
//! slot `i` are `2i + 1` and `2i + 2`, and every parent's priority is at
//! least that of both children. Only the priority is compared; the order in
//! which equal priorities come out depends on the heap layout and is not
//! part of the contract.

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    priority: i32,
}

/// A max-priority queue over arbitrary values.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    heap: Vec<Entry<T>>,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Create an empty frontier able to hold `capacity` entries without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Insert `value` with the given priority. O(log n).
    pub fn push(&mut self, value: T, priority: i32) {
        self.heap.push(Entry { value, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the highest-priority value. O(log n).
    ///
    /// Returns `None` on an empty frontier.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(value, _)| value)
    }

    /// Remove the highest-priority value, also returning its priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, i32)> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        self.sift_down(0, last);
        self.heap.pop().map(|e| (e.value, e.priority))
    }

    /// Priority of the value [`pop`](Self::pop) would return next.
    #[inline]
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.first().map(|e| e.priority)
    }

    /// Whether the frontier is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    #[inline]
    fn higher(&self, i: usize, j: usize) -> bool {
        self.heap[i].priority > self.heap[j].priority
    }

    fn sift_up(&mut self, mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.higher(j, parent) {
                break;
            }
            self.heap.swap(parent, j);
            j = parent;
        }
    }

    /// Restore the heap property below `i`, considering only the first `n`
    /// slots.
    fn sift_down(&mut self, mut i: usize, n: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.higher(right, left) {
                child = right;
            }
            if !self.higher(child, i) {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn pops_highest_priority_first() {
        let mut f = Frontier::new();
        f.push("B", 10);
        f.push("A", 15);
        f.push("C", 5);

        assert_eq!(f.pop(), Some("A"));
        assert_eq!(f.pop(), Some("B"));
        assert_eq!(f.pop(), Some("C"));
        assert!(f.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut f = Frontier::<u8>::new();
        assert_eq!(f.pop(), None);
        assert_eq!(f.pop_with_priority(), None);
        assert_eq!(f.peek_priority(), None);
    }

    #[test]
    fn negative_priorities() {
        let mut f = Frontier::new();
        f.push('a', -7);
        f.push('b', -1);
        f.push('c', -30);
        f.push('d', 0);
        assert_eq!(f.pop_with_priority(), Some(('d', 0)));
        assert_eq!(f.pop_with_priority(), Some(('b', -1)));
        assert_eq!(f.pop_with_priority(), Some(('a', -7)));
        assert_eq!(f.pop_with_priority(), Some(('c', -30)));
    }

    #[test]
    fn peek_tracks_maximum() {
        let mut f = Frontier::new();
        f.push(1, 3);
        assert_eq!(f.peek_priority(), Some(3));
        f.push(2, 9);
        assert_eq!(f.peek_priority(), Some(9));
        f.push(3, 4);
        assert_eq!(f.peek_priority(), Some(9));
        f.pop();
        assert_eq!(f.peek_priority(), Some(4));
    }

    #[test]
    fn equal_priorities_all_come_out() {
        let mut f = Frontier::new();
        for v in 0..10 {
            f.push(v, 1);
        }
        let mut out: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        out.sort();
        assert_eq!(out, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        f.push("x", 2);
        f.push("x", 5);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop_with_priority(), Some(("x", 5)));
        assert_eq!(f.pop_with_priority(), Some(("x", 2)));
    }

    #[test]
    fn is_empty_exactly_when_pops_match_pushes() {
        let mut f = Frontier::with_capacity(4);
        assert!(f.is_empty());
        for p in [4, 2, 8, 6] {
            f.push(p, p);
        }
        for remaining in (0..4).rev() {
            assert!(!f.is_empty());
            f.pop();
            assert_eq!(f.len(), remaining);
        }
        assert!(f.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut f = Frontier::new();
        f.push((), 1);
        f.push((), 2);
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn random_pushes_pop_non_increasing() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let n = rng.random_range(1..200usize);
            let mut f = Frontier::new();
            let mut expected = Vec::with_capacity(n);
            for i in 0..n {
                let p = rng.random_range(-1000..1000i32);
                f.push(i, p);
                expected.push(p);
            }
            expected.sort_unstable_by(|a, b| b.cmp(a));

            let mut popped = Vec::with_capacity(n);
            while let Some((_, p)) = f.pop_with_priority() {
                popped.push(p);
            }
            assert_eq!(popped, expected);
        }
    }

    #[test]
    fn interleaved_push_pop_keeps_heap_order() {
        let mut rng = rand::rng();
        let mut f = Frontier::new();
        let mut shadow: Vec<i32> = Vec::new();
        for _ in 0..2000 {
            if shadow.is_empty() || rng.random_range(0..3u32) > 0 {
                let p = rng.random_range(-50..50i32);
                f.push(p, p);
                shadow.push(p);
            } else {
                let max = *shadow.iter().max().unwrap();
                let pos = shadow.iter().position(|&p| p == max).unwrap();
                shadow.swap_remove(pos);
                assert_eq!(f.pop(), Some(max));
            }
            assert_eq!(f.len(), shadow.len());
        }
    }
}
