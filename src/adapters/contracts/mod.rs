//! Notification contract publication
//!
//! Implements `ContractRefresher` by deriving notification contract
//! definitions from the currently valid policies and writing them out.
//!
//! - [`definition`] - Contract definition types and derivation
//! - [`publisher`] - File-backed `ContractRefresher`

pub mod definition;
pub mod publisher;

pub use definition::{
    ContractDefinitions, NotificationContract, NotificationMethod, NotificationType,
    build_definitions,
};
pub use publisher::FileContractPublisher;
