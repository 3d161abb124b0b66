//! Tests for the policy service
//!
//! Covers argument checks, lookup semantics, and the store-then-refresh
//! ordering of every mutation.

use std::collections::BTreeMap;

use policyhub::core::PolicyError;
use policyhub::core::services::PolicyService;

use super::common::fixtures::{created, policy, register_request, update_request};
use super::common::mocks::{RecordingRefresher, RecordingRepository, calls, journal};

// =============================================================================
// PRECONDITIONS
// =============================================================================

mod preconditions {
    use super::*;

    #[test]
    fn blank_ids_never_reach_the_store() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        for id in ["", " ", "\t"] {
            assert!(matches!(service.get_policy(id), Err(PolicyError::InvalidArgument(_))));
            assert!(matches!(service.delete_policy(id), Err(PolicyError::InvalidArgument(_))));
        }
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn missing_requests_never_reach_the_store() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        assert!(matches!(service.create_policy(None), Err(PolicyError::InvalidArgument(_))));
        assert!(matches!(service.update_policy(None), Err(PolicyError::InvalidArgument(_))));
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn invalid_argument_message_names_the_field() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        let err = service.get_policy("").unwrap_err();
        assert_eq!(err.to_string(), "Policy ID must not be null or empty");
        let err = service.create_policy(None).unwrap_err();
        assert_eq!(err.to_string(), "RegisterPolicyRequest must not be null");
    }
}

// =============================================================================
// READS
// =============================================================================

mod reads {
    use super::*;

    #[test]
    fn list_grouped_returns_store_mapping_unchanged() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.grouped.insert("BPNL-A".to_string(), vec![policy("p-1"), policy("p-2")]);
        repo.grouped.insert("default".to_string(), vec![policy("p-3")]);
        let expected = repo.grouped.clone();
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        assert_eq!(service.list_grouped_policies().unwrap(), expected);
        assert_eq!(calls(&log), vec!["store.list_grouped"]);
    }

    #[test]
    fn list_flattens_in_key_then_list_order() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.grouped.insert("BPNL-B".to_string(), vec![policy("p-3")]);
        repo.grouped.insert("BPNL-A".to_string(), vec![policy("p-1"), policy("p-2")]);
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        let flat = service.list_policies().unwrap();
        let pairs: Vec<(&str, &str)> = flat
            .iter()
            .map(|p| (p.business_partner_number.as_str(), p.policy_id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("BPNL-A", "p-1"), ("BPNL-A", "p-2"), ("BPNL-B", "p-3")]);
        assert!(!calls(&log).contains(&"refresher.refresh".to_string()));
    }

    #[test]
    fn get_returns_view_paired_with_its_key() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.lookup = BTreeMap::from([("edc-1".to_string(), Some(policy("p-7")))]);
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        let view = service.get_policy("p-7").unwrap();
        assert_eq!(view.business_partner_number, "edc-1");
        assert_eq!(view.policy_id, "p-7");
        assert_eq!(view.permissions, policy("p-7").permissions);
        assert_eq!(calls(&log), vec!["store.find(p-7)"]);
    }

    #[test]
    fn get_skips_keys_without_the_policy() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.lookup = BTreeMap::from([
            ("BPNL-A".to_string(), None),
            ("BPNL-B".to_string(), Some(policy("p-7"))),
        ]);
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        assert_eq!(service.get_policy("p-7").unwrap().business_partner_number, "BPNL-B");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        let err = service.get_policy("p-42").unwrap_err();
        assert!(matches!(err, PolicyError::PolicyNotFound(ref id) if id == "p-42"));
        assert!(err.to_string().contains("p-42"));
    }

    #[test]
    fn get_all_absent_is_not_found() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.lookup = BTreeMap::from([("BPNL-A".to_string(), None), ("default".to_string(), None)]);
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        assert!(matches!(service.get_policy("p-42"), Err(PolicyError::PolicyNotFound(_))));
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

mod mutations {
    use super::*;

    #[test]
    fn create_stores_then_refreshes_once() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.created = Some(created("p-9", "BPNL-A"));
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        let response = service
            .create_policy(Some(register_request(Some("BPNL-A"), None)))
            .unwrap();

        assert_eq!(response, created("p-9", "BPNL-A"));
        assert_eq!(calls(&log), vec!["store.create", "refresher.refresh"]);
    }

    #[test]
    fn update_stores_then_refreshes_once() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        service
            .update_policy(Some(update_request(&["p-1", "p-2"], Some("BPNL-B"))))
            .unwrap();

        assert_eq!(calls(&log), vec!["store.update(p-1,p-2)", "refresher.refresh"]);
    }

    #[test]
    fn delete_stores_then_refreshes_once() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        service.delete_policy("p-1").unwrap();

        assert_eq!(calls(&log), vec!["store.delete(p-1)", "refresher.refresh"]);
    }

    #[test]
    fn store_failure_skips_refresh() {
        let log = journal();
        let mut repo = RecordingRepository::new(&log);
        repo.fail = true;
        let service = PolicyService::new(repo, RecordingRefresher::new(&log));

        assert!(matches!(service.delete_policy("p-1"), Err(PolicyError::Store(_))));
        assert!(matches!(
            service.create_policy(Some(register_request(None, None))),
            Err(PolicyError::Store(_))
        ));
        assert!(matches!(
            service.update_policy(Some(update_request(&["p-1"], None))),
            Err(PolicyError::Store(_))
        ));
        assert!(!calls(&log).contains(&"refresher.refresh".to_string()));
    }

    #[test]
    fn refresh_failure_surfaces_after_store_write() {
        let log = journal();
        let service =
            PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::failing(&log));

        let err = service.delete_policy("p-1").unwrap_err();

        assert!(matches!(err, PolicyError::Refresh(_)));
        assert!(err.to_string().contains("publish failed"));
        // The store write is not rolled back
        assert_eq!(calls(&log), vec!["store.delete(p-1)", "refresher.refresh"]);
    }

    #[test]
    fn reads_never_refresh() {
        let log = journal();
        let service = PolicyService::new(RecordingRepository::new(&log), RecordingRefresher::new(&log));

        let _ = service.list_policies();
        let _ = service.list_grouped_policies();
        let _ = service.get_policy("p-1");

        assert!(!calls(&log).contains(&"refresher.refresh".to_string()));
    }
}
