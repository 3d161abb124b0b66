//! Contract refresher port

use std::sync::Arc;

/// Recomputes and publishes notification contract definitions
///
/// Called after every policy mutation. Takes no input; implementations
/// read current policy state themselves and must be idempotent.
pub trait ContractRefresher: Send + Sync {
    /// Recompute and publish the contract definitions
    fn refresh(&self) -> anyhow::Result<()>;
}

impl<T: ContractRefresher + ?Sized> ContractRefresher for Arc<T> {
    fn refresh(&self) -> anyhow::Result<()> {
        (**self).refresh()
    }
}
