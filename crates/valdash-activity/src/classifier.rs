use serde::{Deserialize, Serialize};
use tracing::debug;
use valdash_types::{ProposalEvent, ProposalOutcome};

/// One bar on the proposal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub timestamp_ms: i64,
    pub weight: u32,
}

impl ActivityPoint {
    pub fn at(timestamp_ms: i64) -> Self {
        ActivityPoint {
            timestamp_ms,
            weight: 1,
        }
    }
}

/// Proposal events split by outcome, each bucket in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBuckets {
    pub proposed: Vec<ActivityPoint>,
    pub missed: Vec<ActivityPoint>,
    pub orphaned: Vec<ActivityPoint>,
}

impl ActivityBuckets {
    pub fn bucket(&self, outcome: ProposalOutcome) -> &[ActivityPoint] {
        match outcome {
            ProposalOutcome::Proposed => &self.proposed,
            ProposalOutcome::Missed => &self.missed,
            ProposalOutcome::Orphaned => &self.orphaned,
        }
    }

    fn bucket_mut(&mut self, outcome: ProposalOutcome) -> &mut Vec<ActivityPoint> {
        match outcome {
            ProposalOutcome::Proposed => &mut self.proposed,
            ProposalOutcome::Missed => &mut self.missed,
            ProposalOutcome::Orphaned => &mut self.orphaned,
        }
    }

    /// Number of events that landed in any bucket
    pub fn total(&self) -> usize {
        self.proposed.len() + self.missed.len() + self.orphaned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Routes each feed event into the bucket of its outcome.
///
/// Single pass, no sorting or dedup. Timestamps go from seconds to
/// milliseconds. Events with an unknown outcome code are skipped.
pub fn classify(events: &[ProposalEvent]) -> ActivityBuckets {
    let mut buckets = ActivityBuckets::default();
    let mut dropped = 0usize;

    for event in events {
        match event.outcome() {
            Some(outcome) => buckets
                .bucket_mut(outcome)
                .push(ActivityPoint::at(event.timestamp_secs.saturating_mul(1000))),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, total = events.len(), "skipped proposal events with unknown outcome");
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_feed_example() {
        let events: Vec<ProposalEvent> = [(100, 1), (200, 2), (300, 1), (400, 3)]
            .into_iter()
            .map(ProposalEvent::from)
            .collect();

        let buckets = classify(&events);

        assert_eq!(buckets.proposed, vec![ActivityPoint::at(100_000), ActivityPoint::at(300_000)]);
        assert_eq!(buckets.missed, vec![ActivityPoint::at(200_000)]);
        assert_eq!(buckets.orphaned, vec![ActivityPoint::at(400_000)]);
        assert!(buckets.proposed.iter().all(|p| p.weight == 1));
    }

    #[test]
    fn test_unknown_outcomes_dropped() {
        let events = vec![
            ProposalEvent::raw(1, 0),
            ProposalEvent::raw(2, 1),
            ProposalEvent::raw(3, 9),
            ProposalEvent::raw(4, -1),
        ];

        let buckets = classify(&events);

        assert_eq!(buckets.total(), 1);
        assert_eq!(buckets.proposed, vec![ActivityPoint::at(2000)]);
    }

    #[test]
    fn test_order_preserved_without_sorting() {
        let events = vec![
            ProposalEvent::new(500, ProposalOutcome::Missed),
            ProposalEvent::new(100, ProposalOutcome::Missed),
            ProposalEvent::new(100, ProposalOutcome::Missed),
        ];

        let buckets = classify(&events);

        let stamps: Vec<i64> = buckets.missed.iter().map(|p| p.timestamp_ms).collect();
        assert_eq!(stamps, vec![500_000, 100_000, 100_000]);
    }

    #[test]
    fn test_empty_feed() {
        let buckets = classify(&[]);
        assert!(buckets.is_empty());
        assert!(buckets.bucket(ProposalOutcome::Orphaned).is_empty());
    }
}
