use compact_str::CompactString;
use hickory_proto::rr::Name;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    terminal: bool,
}

/// Suffix-tree containment structure over domain names: `check` matches a
/// name against every suffix previously added, so `example.com` in the set
/// matches `www.example.com` and `example.com` itself.
#[derive(Default)]
pub struct SuffixSet {
    root: TrieNode,
}

impl SuffixSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &Name) {
        let mut node = &mut self.root;
        for label in reversed_labels(name) {
            node = node.children.entry(label).or_default();
        }
        node.terminal = true;
    }

    /// Bulk insertion from text: malformed names are logged and skipped one
    /// by one, the remaining valid entries still apply.
    pub fn add_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a str>) {
        for entry in entries {
            match Name::from_str(entry) {
                Ok(name) => self.add(&name),
                Err(e) => warn!(entry, error = %e, "skipping malformed suffix entry"),
            }
        }
    }

    pub fn check(&self, name: &Name) -> bool {
        if self.root.terminal {
            return true;
        }
        let labels: SmallVec<[CompactString; 8]> = reversed_labels(name).collect();
        let mut node = &self.root;
        for label in labels.iter() {
            match node.children.get(label.as_str()) {
                Some(child) => {
                    node = child;
                    if node.terminal {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }
}

fn reversed_labels(name: &Name) -> impl Iterator<Item = CompactString> {
    let labels: Vec<CompactString> = name
        .iter()
        .map(|label| CompactString::new(String::from_utf8_lossy(label).to_ascii_lowercase()))
        .collect();
    labels.into_iter().rev()
}
