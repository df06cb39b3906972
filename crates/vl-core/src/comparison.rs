//! Comparison selection store and side-by-side table
//!
//! The store is one session's selection: an ordered set of at most
//! [`MAX_COMPARE`] distinct tools. Being full is a hard cap; adds are refused
//! rather than evicting anything. Surfaces that render the selection
//! register listeners to hear about changes.

use crate::catalog::Catalog;
use crate::taxonomy::join_labels;
use crate::tool::Tool;
use crate::tool_id::ToolSlug;
use serde::Serialize;
use std::fmt;

/// Maximum number of tools in a comparison
pub const MAX_COMPARE: usize = 4;

/// Result of [`ComparisonStore::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The slug was already selected; nothing changed
    AlreadySelected,
    /// The selection is at capacity; nothing changed
    Full,
}

/// A state change, delivered to listeners after it is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonEvent {
    Added(ToolSlug),
    Removed(ToolSlug),
    Cleared,
}

/// Handle returned by [`ComparisonStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ComparisonEvent, &[Tool])>;

/// Bounded, ordered selection of tools to compare
#[derive(Default)]
pub struct ComparisonStore {
    selected: Vec<Tool>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl ComparisonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a selection from routing payloads.
    ///
    /// Unknown slugs are skipped; duplicates and anything past the cap are
    /// dropped by the usual [`add`](Self::add) rules.
    pub fn resolve<S: AsRef<str>>(catalog: &Catalog, slugs: &[S]) -> Self {
        let mut store = Self::new();
        for slug in slugs {
            let slug = slug.as_ref();
            match catalog.get(slug) {
                Some(tool) => {
                    if store.add(tool.clone()) == AddOutcome::Full {
                        log::debug!("Comparison full, ignoring '{}'", slug);
                    }
                }
                None => log::debug!("Unknown tool '{}' in comparison request", slug),
            }
        }
        store
    }

    /// Append a tool unless it is already selected or the store is full.
    pub fn add(&mut self, tool: Tool) -> AddOutcome {
        if self.is_selected(&tool.slug) {
            return AddOutcome::AlreadySelected;
        }
        if !self.can_add_more() {
            return AddOutcome::Full;
        }
        let slug = tool.slug.clone();
        self.selected.push(tool);
        self.notify(ComparisonEvent::Added(slug));
        AddOutcome::Added
    }

    /// Remove a tool by slug. Returns whether anything was removed.
    pub fn remove(&mut self, slug: &str) -> bool {
        let Some(pos) = self.selected.iter().position(|t| t.slug == slug) else {
            return false;
        };
        let removed = self.selected.remove(pos);
        self.notify(ComparisonEvent::Removed(removed.slug));
        true
    }

    /// Empty the selection. Listeners hear about it only if it was non-empty.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.notify(ComparisonEvent::Cleared);
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected.iter().any(|t| t.slug == slug)
    }

    pub fn can_add_more(&self) -> bool {
        self.selected.len() < MAX_COMPARE
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected tools in insertion order
    pub fn tools(&self) -> &[Tool] {
        &self.selected
    }

    pub fn slugs(&self) -> Vec<&ToolSlug> {
        self.selected.iter().map(|t| &t.slug).collect()
    }

    /// Register a listener called after every effective change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ComparisonEvent, &[Tool]) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Side-by-side rows for the current selection
    pub fn table(&self) -> ComparisonTable {
        ComparisonTable::build(&self.selected)
    }

    fn notify(&mut self, event: ComparisonEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event, &self.selected);
        }
    }
}

impl fmt::Debug for ComparisonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonStore")
            .field("selected", &self.slugs())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// One labelled row of per-tool values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Whether each tool lists a feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub feature: String,
    pub present: Vec<bool>,
}

/// Comparison grid: one column per selected tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub attributes: Vec<AttributeRow>,
    /// Union of all feature labels, in first-seen order
    pub features: Vec<FeatureRow>,
}

impl ComparisonTable {
    pub fn build(tools: &[Tool]) -> Self {
        let columns = tools.iter().map(|t| t.name.clone()).collect();

        let row = |label: &'static str, value: fn(&Tool) -> String| AttributeRow {
            label,
            values: tools.iter().map(value).collect(),
        };

        let attributes = vec![
            row("Vendor", |t| t.vendor.clone()),
            row("Score", |t| t.score.to_string()),
            row("Reviews", |t| t.reviews.to_string()),
            row("Verified", |t| yes_no(t.verified).to_string()),
            row("Pricing", |t| t.pricing.to_string()),
            row("Industries", |t| join_labels(&t.industries)),
            row("Use cases", |t| join_labels(&t.use_cases)),
            row("Certifications", |t| join_labels(&t.certifications)),
            row("Deployment", |t| join_labels(&t.deployment_options)),
            row("Last updated", |t| t.last_updated.format("%Y-%m-%d").to_string()),
        ];

        let mut feature_names: Vec<&str> = Vec::new();
        for feature in tools.iter().flat_map(|t| t.features.iter()) {
            if !feature_names.contains(&feature.as_str()) {
                feature_names.push(feature);
            }
        }
        let features = feature_names
            .into_iter()
            .map(|feature| FeatureRow {
                feature: feature.to_string(),
                present: tools.iter().map(|t| t.has_feature(feature)).collect(),
            })
            .collect();

        Self {
            columns,
            attributes,
            features,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
#[path = "comparison_test.rs"]
mod tests;
