//! Index over a flat, parent-referenced log entry list.
//!
//! Entries are kept in an arena in source order and addressed by index; the
//! id-to-index map and children adjacency are built once per load, so no
//! entry ever holds a direct reference to another. Parent references must be
//! acyclic — that is a documented precondition, not a runtime check. A
//! `parent_id` that never resolves is tolerated: the ancestor walk stops
//! there and the entry behaves like a root.

use std::collections::{HashMap, HashSet};

use crate::state::LogEntry;

/// Derived per-entry metadata computed once when the tree is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMeta {
    /// Arena indices of the entry's ancestors, root-first.
    pub ancestors: Vec<usize>,
    /// Whether the entry is the last child of its sibling group.
    pub is_last_sibling: bool,
}

/// Arena-indexed view over a job's entry list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTree {
    entries: Vec<LogEntry>,
    by_id: HashMap<String, usize>,
    meta: Vec<RowMeta>,
}

impl LogTree {
    /// Build the index in two passes: children adjacency, then per-entry
    /// ancestor chains and last-sibling flags.
    pub fn build(entries: Vec<LogEntry>) -> Self {
        let by_id: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.id.clone(), index))
            .collect();

        let mut children: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            children.entry(entry.parent_id.as_deref()).or_default().push(index);
        }

        let mut meta = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let mut ancestors = Vec::new();
            let mut current = entry.parent_id.as_deref();
            while let Some(parent_id) = current {
                match by_id.get(parent_id) {
                    Some(&parent_index) => {
                        ancestors.push(parent_index);
                        current = entries[parent_index].parent_id.as_deref();
                    }
                    // Dangling reference: truncate the walk.
                    None => break,
                }
            }
            ancestors.reverse();

            let is_last_sibling = children
                .get(&entry.parent_id.as_deref())
                .and_then(|group| group.last())
                .is_some_and(|&last| last == index);

            meta.push(RowMeta { ancestors, is_last_sibling });
        }

        Self { entries, by_id, meta }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> &LogEntry {
        &self.entries[index]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn meta(&self, index: usize) -> &RowMeta {
        &self.meta[index]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Initial expansion state: every collapsible entry starts open.
    pub fn default_expanded(&self) -> HashSet<String> {
        self.entries
            .iter()
            .filter(|entry| entry.collapsible)
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Indices of the entries whose entire ancestor chain is expanded, in
    /// source order. Roots are always visible. Pure function of the tree and
    /// the expanded set.
    pub fn visible_rows(&self, expanded: &HashSet<String>) -> Vec<usize> {
        (0..self.entries.len())
            .filter(|&index| {
                self.meta[index]
                    .ancestors
                    .iter()
                    .all(|&ancestor| expanded.contains(&self.entries[ancestor].id))
            })
            .collect()
    }
}
