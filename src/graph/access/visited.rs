//! Visited sets for terminating graph traversals.
//!
//! `VisitedSet` packs one bit per node into machine words. Traversals own
//! their set, so no atomics are involved.

const WORD_BITS: usize = usize::BITS as usize;

/// A dense, word-packed visited set for a fixed node count.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<usize>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds for visited set of {}", self.len);
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1usize << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.len && self.words[node / WORD_BITS] & (1usize << (node % WORD_BITS)) != 0
    }

    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
