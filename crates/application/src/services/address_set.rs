use rustc_hash::FxHashSet;
use std::net::IpAddr;
use tracing::warn;

/// Address-only containment set scripts use for allow/deny matching.
/// Ports never participate in equality.
#[derive(Debug, Default)]
pub struct AddressSet {
    addrs: FxHashSet<IpAddr>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, addr: IpAddr) {
        self.addrs.insert(addr);
    }

    /// Bulk insertion: malformed entries are logged and skipped one by one,
    /// the remaining valid entries still apply.
    pub fn add_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a str>) {
        for entry in entries {
            match entry.parse::<IpAddr>() {
                Ok(addr) => {
                    self.addrs.insert(addr);
                }
                Err(e) => warn!(entry, error = %e, "skipping malformed address entry"),
            }
        }
    }

    pub fn check(&self, addr: &IpAddr) -> bool {
        self.addrs.contains(addr)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}
