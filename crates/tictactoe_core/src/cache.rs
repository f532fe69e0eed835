//! Optional memoization of search scores.
//!
//! A cache is an accelerator only: the engine produces the same moves and
//! scores with [`NoCache`], an empty [`MemoryCache`] or a warm one.

use crate::board::Board;
use crate::search::Score;
use crate::types::Mark;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Identifies a searched position.
///
/// The minimax value depends on whose turn it is and on which mark is
/// maximizing, so both are part of the key alongside the board signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    signature: String,
    to_move: Mark,
    maximizer: Mark,
}

impl CacheKey {
    /// Builds the key for `board` with `to_move` about to play.
    pub fn new(board: &Board, to_move: Mark, maximizer: Mark) -> Self {
        Self {
            signature: board.signature(),
            to_move,
            maximizer,
        }
    }

    /// Board signature part of the key.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Lookup/store capability injected into the search engine.
pub trait ScoreCache {
    /// Returns a previously stored score.
    fn lookup(&self, key: &CacheKey) -> Option<Score>;

    /// Records the score of a position.
    fn store(&self, key: CacheKey, score: Score);
}

impl<C: ScoreCache + ?Sized> ScoreCache for &C {
    fn lookup(&self, key: &CacheKey) -> Option<Score> {
        (**self).lookup(key)
    }

    fn store(&self, key: CacheKey, score: Score) {
        (**self).store(key, score)
    }
}

/// Cache that never remembers anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ScoreCache for NoCache {
    fn lookup(&self, _key: &CacheKey) -> Option<Score> {
        None
    }

    fn store(&self, _key: CacheKey, _score: Score) {}
}

/// In-process score table, safe to share between search threads.
#[derive(Debug, Default)]
pub struct MemoryCache {
    scores: RwLock<HashMap<CacheKey, Score>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.scores.read().len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.scores.read().is_empty()
    }

    /// Drops every stored score.
    pub fn clear(&self) {
        self.scores.write().clear();
    }
}

impl ScoreCache for MemoryCache {
    fn lookup(&self, key: &CacheKey) -> Option<Score> {
        self.scores.read().get(key).copied()
    }

    fn store(&self, key: CacheKey, score: Score) {
        self.scores.write().insert(key, score);
    }
}
