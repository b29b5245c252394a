//! Agent activity feed simulator
//!
//! Keeps a bounded, newest-first list of synthetic agent status entries.
//! Each tick prepends one entry drawn uniformly from the agent/action pools
//! and drops the oldest so the feed never exceeds its capacity. Randomness
//! sits behind [`IndexSource`] so tests can script the draws.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::FEED_CAPACITY;
use crate::models::{ActivityEntry, Agent, ACTIVITY_ACTIONS};

/// Source of uniform indices, injectable for deterministic tests
pub trait IndexSource: Send {
    /// Returns a value in `0..bound`
    fn pick(&mut self, bound: usize) -> usize;
}

/// Production source backed by a seeded-from-entropy `SmallRng`
pub struct EntropySource(SmallRng);

impl EntropySource {
    pub fn new() -> Self {
        EntropySource(SmallRng::from_entropy())
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for EntropySource {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// The rotating feed of synthetic agent activity
pub struct ActivityFeed {
    entries: VecDeque<ActivityEntry>,
    source: Box<dyn IndexSource>,
}

impl ActivityFeed {
    /// Creates a feed pre-seeded with the three fixed mockup entries
    pub fn new(source: Box<dyn IndexSource>) -> Self {
        ActivityFeed {
            entries: crate::models::seed_activities().into(),
            source,
        }
    }

    /// Newest-first view of the current entries
    pub fn entries(&self) -> &VecDeque<ActivityEntry> {
        &self.entries
    }

    /// Owned snapshot for the render state
    pub fn snapshot(&self) -> Vec<ActivityEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Produces one synthetic entry, prepends it and drops the oldest
    pub fn tick(&mut self) {
        let agent = Agent::ALL[self.source.pick(Agent::ALL.len())];
        let action = ACTIVITY_ACTIONS[self.source.pick(ACTIVITY_ACTIONS.len())];
        let entry = ActivityEntry::new(agent, action, "now");

        tracing::debug!(agent = agent.as_str(), action, "feed tick");

        self.entries.push_front(entry);
        self.entries.truncate(FEED_CAPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted source that replays a fixed list of indices
    struct Scripted(Vec<usize>, usize);

    impl Scripted {
        fn new(picks: Vec<usize>) -> Self {
            Scripted(picks, 0)
        }
    }

    impl IndexSource for Scripted {
        fn pick(&mut self, bound: usize) -> usize {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v % bound
        }
    }

    #[test]
    fn test_feed_seeds_with_fixed_entries() {
        let feed = ActivityFeed::new(Box::new(Scripted::new(vec![0])));
        let entries = feed.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].agent, Agent::Executive);
        assert_eq!(entries[0].action, "Analyzing market conditions...");
        assert_eq!(entries[0].age_label, "2m ago");
        assert_eq!(entries[1].agent, Agent::Operations);
        assert_eq!(entries[2].agent, Agent::Financial);
    }

    #[test]
    fn test_tick_prepends_and_caps() {
        let mut feed = ActivityFeed::new(Box::new(Scripted::new(vec![1, 2])));
        feed.tick();

        let entries = feed.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].agent, Agent::Operations);
        assert_eq!(entries[0].action, ACTIVITY_ACTIONS[2]);
        assert_eq!(entries[0].age_label, "now");
        // oldest seed entry dropped, second seed entry now last
        assert_eq!(entries[2].agent, Agent::Operations);
        assert_eq!(entries[2].action, "Optimized mining efficiency by 12%");
    }

    #[test]
    fn test_feed_never_exceeds_capacity() {
        let mut feed = ActivityFeed::new(Box::new(Scripted::new(vec![0, 1, 2, 3])));
        for _ in 0..20 {
            feed.tick();
            assert_eq!(feed.entries().len(), FEED_CAPACITY);
        }
    }

    #[test]
    fn test_tick_draws_from_fixed_pools() {
        let mut feed = ActivityFeed::new(Box::new(EntropySource::new()));
        for _ in 0..50 {
            feed.tick();
            let newest = &feed.entries()[0];
            assert!(Agent::ALL.contains(&newest.agent));
            assert!(ACTIVITY_ACTIONS.contains(&newest.action.as_str()));
            assert_eq!(newest.age_label, "now");
        }
    }
}
