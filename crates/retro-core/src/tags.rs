//! Alert tag catalogue, ordered tag selection, and echoed-tag reconciliation.

use serde::{Deserialize, Serialize};

/// Tags offered by the custom insight selector.
pub const EXAMPLE_ALERT_TAGS: &[&str] = &[
    "Noisy",
    "Suppressed",
    "No Automation",
    "No ITR",
    "Unclaimed",
    "High Severity",
    "Customer Impact",
    "Database Issue",
    "Network Error",
    "Resolved Automatically",
    "Requires Manual Intervention",
    "Flapping",
    "Configuration Error",
    "Security Alert",
    "Payment Service",
    "Auth Service",
    "Inventory API",
    "Logging Pipeline",
    "K8s Node Unhealthy",
    "Disk Space Low",
    "CPU High",
    "Memory Low",
    "Latency Spike",
    "Error Rate High",
];

/// A set of tags that remembers the order in which they were first selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `tag` if absent, deselect it if present. Returns whether the tag
    /// is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for tag in iter {
            if !selection.contains(tag.as_ref()) {
                selection.tags.push(tag.as_ref().to_string());
            }
        }
        selection
    }
}

/// Outcome of comparing the tags a source echoed back with the requested ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReconciliation {
    /// Tags to store: always the requested tags in the requested order.
    pub tags: Vec<String>,
    /// Whether the echo was a permutation of the request.
    pub matched: bool,
}

/// Reconcile echoed tags against the requested ones.
///
/// The stored tags are always the requested tags in the user's order. The
/// `matched` flag reports whether the echo was a permutation of the request
/// (compared as sorted sequences, so duplicates count).
#[must_use]
pub fn reconcile_tags(requested: &[String], echoed: &[String]) -> TagReconciliation {
    let mut want: Vec<&str> = requested.iter().map(String::as_str).collect();
    let mut got: Vec<&str> = echoed.iter().map(String::as_str).collect();
    want.sort_unstable();
    got.sort_unstable();

    TagReconciliation {
        tags: requested.to_vec(),
        matched: want == got,
    }
}
