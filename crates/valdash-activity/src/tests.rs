// Classification and summary laws over arbitrary feeds

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;
    use valdash_types::ProposalEvent;

    fn feed() -> impl Strategy<Value = Vec<ProposalEvent>> {
        prop::collection::vec((0i64..2_000_000_000, -2i64..6), 0..200)
            .prop_map(|pairs| pairs.into_iter().map(ProposalEvent::from).collect())
    }

    #[test]
    fn test_feed_example_summary() {
        let events: Vec<ProposalEvent> = serde_json::from_str("[[100,1],[200,2],[300,1],[400,3]]").unwrap();

        let summary = summarize(&classify(&events));

        assert_eq!(summary.good, 2);
        assert_eq!(summary.bad, 2);
    }

    #[test]
    fn test_buckets_serialize_for_chart_sink() {
        let buckets = classify(&[ProposalEvent::raw(100, 1)]);
        let json = serde_json::to_value(&buckets).unwrap();
        assert_eq!(json["proposed"][0]["timestamp_ms"], 100_000);
        assert_eq!(json["proposed"][0]["weight"], 1);
        assert_eq!(json["missed"].as_array().unwrap().len(), 0);
    }

    proptest! {
        #[test]
        fn prop_good_plus_bad_is_classified_total(events in feed()) {
            let buckets = classify(&events);
            let known = events.iter().filter(|e| e.outcome().is_some()).count();
            let summary = summarize(&buckets);

            prop_assert_eq!(summary.good + summary.bad, buckets.total());
            prop_assert_eq!(buckets.total(), known);
        }

        #[test]
        fn prop_classify_is_idempotent(events in feed()) {
            prop_assert_eq!(classify(&events), classify(&events));
        }

        #[test]
        fn prop_bucket_timestamps_follow_feed_order(events in feed()) {
            let buckets = classify(&events);
            let expected: Vec<i64> = events
                .iter()
                .filter(|e| e.outcome == 1)
                .map(|e| e.timestamp_secs * 1000)
                .collect();
            let actual: Vec<i64> = buckets.proposed.iter().map(|p| p.timestamp_ms).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
