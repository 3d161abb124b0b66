//! Property-based tests for flattening grouped policies
//!
//! Uses proptest to verify properties that should hold for all groupings.

use policyhub::core::models::{GroupedPolicies, flatten_policies};
use policyhub::core::services::PolicyService;
use proptest::prelude::*;

use super::common::fixtures::policy;
use super::common::mocks::{RecordingRefresher, RecordingRepository, journal};

fn grouped_strategy() -> impl Strategy<Value = GroupedPolicies> {
    prop::collection::btree_map("[A-Z]{4}[0-9]{2}", prop::collection::vec("[a-z0-9-]{1,12}", 0..6), 0..6)
        .prop_map(|groups| {
            groups
                .into_iter()
                .map(|(key, ids)| (key, ids.iter().map(|id| policy(id)).collect()))
                .collect()
        })
}

proptest! {
    /// The flat list has exactly one entry per grouped policy
    #[test]
    fn flattened_count_is_sum_of_groups(grouped in grouped_strategy()) {
        let expected: usize = grouped.values().map(Vec::len).sum();
        prop_assert_eq!(flatten_policies(grouped).len(), expected);
    }

    /// Every entry keeps its policy fields and carries the key it came from
    #[test]
    fn flattened_entries_preserve_identity(grouped in grouped_strategy()) {
        let expected: Vec<_> = grouped
            .iter()
            .flat_map(|(key, policies)| policies.iter().map(move |p| (key.clone(), p.clone())))
            .collect();

        let flat = flatten_policies(grouped);

        prop_assert_eq!(flat.len(), expected.len());
        for (view, (key, policy)) in flat.iter().zip(expected) {
            prop_assert_eq!(&view.business_partner_number, &key);
            prop_assert_eq!(&view.policy_id, &policy.policy_id);
            prop_assert_eq!(view.created_on, policy.created_on);
            prop_assert_eq!(view.valid_until, policy.valid_until);
            prop_assert_eq!(&view.permissions, &policy.permissions);
        }
    }

    /// The service's flat listing matches the store's grouping
    #[test]
    fn service_listing_matches_store(grouped in grouped_strategy()) {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.grouped = grouped.clone();
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        prop_assert_eq!(service.list_policies().unwrap(), flatten_policies(grouped));
    }
}
