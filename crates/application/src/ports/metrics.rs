use std::sync::Arc;

/// Named counter handle; must be safe for concurrent increment.
pub trait Counter: Send + Sync {
    fn inc(&self);
    fn inc_by(&self, by: u64);
    fn set(&self, value: u64);
    fn get(&self) -> u64;
}

/// Get-or-create registry of named counters exposed to scripts.
pub trait MetricRegistry: Send + Sync {
    fn counter(&self, name: &str) -> Arc<dyn Counter>;
}
