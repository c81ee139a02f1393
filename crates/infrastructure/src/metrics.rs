//! In-process metric registry backing the counters scripts bump.

use dashmap::DashMap;
use scriptor_application::ports::{Counter, MetricRegistry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct AtomicCounter(AtomicU64);

impl Counter for AtomicCounter {
    fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_by(&self, by: u64) {
        self.0.fetch_add(by, Ordering::Relaxed);
    }

    fn set(&self, value: u64) {
        self.0.store(value, Ordering::Relaxed);
    }

    fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters are created on first access and live for the registry's
/// lifetime; two lookups of the same name share one underlying cell.
#[derive(Default)]
pub struct InMemoryMetrics {
    counters: DashMap<String, Arc<AtomicCounter>>,
}

impl InMemoryMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricRegistry for InMemoryMetrics {
    fn counter(&self, name: &str) -> Arc<dyn Counter> {
        self.counters
            .entry(name.to_string())
            .or_default()
            .clone()
    }
}
