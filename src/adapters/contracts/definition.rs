//! Notification contract definitions
//!
//! One contract exists per notification type and method. Each one lists
//! the policies a counterparty must accept to negotiate it.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::GroupedPolicies;

/// Kind of notification exchanged between partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    /// Quality investigation (supplier direction)
    QualityInvestigation,
    /// Quality alert (customer direction)
    QualityAlert,
}

impl NotificationType {
    /// Every notification type, in publication order
    pub const ALL: [Self; 2] = [Self::QualityInvestigation, Self::QualityAlert];

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QualityInvestigation => "quality-investigation",
            Self::QualityAlert => "quality-alert",
        }
    }
}

/// Notification endpoint method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    /// Initial notification
    Receive,
    /// Follow-up on an existing notification
    Update,
}

impl NotificationMethod {
    /// Every method, in publication order
    pub const ALL: [Self; 2] = [Self::Receive, Self::Update];

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receive => "receive",
            Self::Update => "update",
        }
    }
}

/// A single published contract definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContract {
    /// Contract definition ID, `notification-<type>-<method>`
    pub contract_id: String,
    /// Notification type
    pub notification_type: NotificationType,
    /// Notification method
    pub method: NotificationMethod,
    /// Policies a counterparty must satisfy (sorted, unique)
    pub access_policy_ids: Vec<String>,
}

/// The full published document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDefinitions {
    /// When the definitions were computed
    pub generated_at: DateTime<Utc>,
    /// One entry per type and method
    pub contracts: Vec<NotificationContract>,
}

/// Derive contract definitions from the policies valid at `now`
#[must_use]
pub fn build_definitions(policies: &GroupedPolicies, now: DateTime<Utc>) -> ContractDefinitions {
    let valid: BTreeSet<&str> = policies
        .values()
        .flatten()
        .filter(|p| p.is_valid_at(now))
        .map(|p| p.policy_id.as_str())
        .collect();
    let access_policy_ids: Vec<String> = valid.into_iter().map(String::from).collect();

    let contracts = NotificationType::ALL
        .iter()
        .flat_map(|&notification_type| {
            NotificationMethod::ALL.iter().map(move |&method| (notification_type, method))
        })
        .map(|(notification_type, method)| NotificationContract {
            contract_id: format!("notification-{}-{}", notification_type.as_str(), method.as_str()),
            notification_type,
            method,
            access_policy_ids: access_policy_ids.clone(),
        })
        .collect();

    ContractDefinitions {
        generated_at: now,
        contracts,
    }
}
