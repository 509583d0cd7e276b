//! Fetch Generations
//!
//! Guard against stale asynchronous updates. Each page-level fetch takes a
//! generation number before suspending; only the response belonging to the
//! latest generation may write state. Rapid navigation between group ids can
//! still issue overlapping requests, but the late responses are discarded
//! instead of clobbering newer data, and responses arriving after the view
//! moved on are dropped the same way.

use std::cell::Cell;
use std::rc::Rc;

/// A monotonically increasing generation counter shared by all in-flight
/// fetches of one resource. Clones share the counter.
#[derive(Clone, Default)]
pub struct FetchGeneration {
    current: Rc<Cell<u64>>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating every earlier one. Returns the token
    /// to check against after the response arrives.
    pub fn begin(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// True if `token` still belongs to the latest fetch.
    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_generation_wins() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = FetchGeneration::new();
        let shared = generation.clone();

        let token = generation.begin();
        assert!(shared.is_current(token));

        shared.begin();
        assert!(!generation.is_current(token));
    }
}
