use crate::moves::{do_braid_move, do_comm_move, is_braid_move, is_comm_move};
use crate::types::Word;
use crate::union_find::PersistentUnionFind;
use std::collections::{BTreeSet, HashSet, VecDeque};
use tracing::debug;

/// Search state for a single braid-cover query.
/// Owns the visited set, the frontier and the result set of one call.
struct CoverSearch {
    /// First and last position of the window; a path is finished once they merge.
    span: (usize, usize),
    visited: HashSet<Word>,
    queue: VecDeque<(Word, PersistentUnionFind)>,
    covers: BTreeSet<Word>,
}

impl CoverSearch {
    fn new(w: &Word, span: (usize, usize)) -> Self {
        let mut visited = HashSet::new();
        visited.insert(w.clone());
        let mut queue = VecDeque::new();
        queue.push_back((w.clone(), PersistentUnionFind::new(w.len())));
        CoverSearch {
            span,
            visited,
            queue,
            covers: BTreeSet::new(),
        }
    }

    /// Records a successor reached by one move on `path`.
    fn advance(&mut self, next: Word, path: PersistentUnionFind) {
        self.visited.insert(next.clone());
        if path.equal(self.span.0, self.span.1) {
            self.covers.insert(next);
        } else {
            self.queue.push_back((next, path));
        }
    }
}

/// Returns the braid covers of `w` that keep `p` positions fixed at each end.
///
/// Runs a breadth-first search over the words reachable from `w` by braid and
/// commutation moves inside the window `[p, len(w) - p)`. Each search path
/// carries a [`PersistentUnionFind`] recording which positions its moves have
/// merged; a move is only taken if it merges positions that are still
/// distinct on that path. A word where position `p` has become equivalent to
/// position `len(w) - p - 1` is a cover and is not expanded further.
///
/// Returns the empty set when `p > len(w) / 2` or the window is narrower
/// than two positions.
///
/// # Example
/// ```
/// use chain_engine::{get_braid_cover, Word};
///
/// let covers = get_braid_cover(&Word::from([1, 2, 1]), 0);
/// assert_eq!(covers.into_iter().collect::<Vec<_>>(), vec![Word::from([2, 1, 2])]);
/// ```
pub fn get_braid_cover(w: &Word, p: usize) -> BTreeSet<Word> {
    let n = w.len();
    if p > n / 2 || n - p < p + 2 {
        return BTreeSet::new();
    }
    // Exclusive end of the window
    let end = n - p;
    let mut search = CoverSearch::new(w, (p, end - 1));

    while let Some((word, path)) = search.queue.pop_front() {
        let classes = if cfg!(debug_assertions) {
            path.class_count()
        } else {
            0
        };

        for i in p..end.saturating_sub(2) {
            if !is_braid_move(i, &word) {
                continue;
            }
            if path.equal(i, i + 1) || path.equal(i + 1, i + 2) || path.equal(i, i + 2) {
                continue;
            }
            let next = do_braid_move(i, &word);
            if search.visited.contains(&next) {
                continue;
            }
            let next_path = path.union(i, i + 1).union(i + 1, i + 2);
            debug_assert!(next_path.class_count() + 2 == classes);
            search.advance(next, next_path);
        }

        for i in p..end - 1 {
            if !is_comm_move(i, &word) || path.equal(i, i + 1) {
                continue;
            }
            let next = do_comm_move(i, &word);
            if search.visited.contains(&next) {
                continue;
            }
            let next_path = path.union(i, i + 1);
            debug_assert!(next_path.class_count() + 1 == classes);
            search.advance(next, next_path);
        }
    }

    debug!(
        word = %w,
        p,
        covers = search.covers.len(),
        explored = search.visited.len(),
        "braid cover search finished"
    );
    search.covers
}
