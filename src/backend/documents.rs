use std::collections::HashSet;

use crate::backend::model::{DocumentCategory, DocumentSlot, DocumentStatus};

/// Keeps documents whose name contains `search_term` (case-insensitive) and
/// drops categories left empty. Source order is preserved.
pub fn filter_categories(categories: &[DocumentCategory], search_term: &str) -> Vec<DocumentCategory> {
    let needle = search_term.to_lowercase();
    categories
        .iter()
        .map(|category| DocumentCategory {
            name: category.name.clone(),
            documents: category
                .documents
                .iter()
                .filter(|doc| doc.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        })
        .filter(|category| !category.documents.is_empty())
        .collect()
}

pub fn toggle_expanded(expanded: &HashSet<String>, category: &str) -> HashSet<String> {
    let mut next = expanded.clone();
    if !next.remove(category) {
        next.insert(category.to_string());
    }
    next
}

/// Builds a new registry with the slot of the same id swapped for `slot`.
pub fn replace_slot(categories: &[DocumentCategory], slot: &DocumentSlot) -> Vec<DocumentCategory> {
    categories
        .iter()
        .map(|category| DocumentCategory {
            name: category.name.clone(),
            documents: category
                .documents
                .iter()
                .map(|doc| if doc.id == slot.id { slot.clone() } else { doc.clone() })
                .collect(),
        })
        .collect()
}

pub fn find_slot<'a>(categories: &'a [DocumentCategory], slot_id: &str) -> Option<&'a DocumentSlot> {
    categories
        .iter()
        .flat_map(|c| c.documents.iter())
        .find(|doc| doc.id == slot_id)
}

/// Folds a slot reported by the backend into the registry. Returns `None`
/// when the id is unknown or the slot breaks the status/file pairing.
pub fn apply_slot_update(categories: &[DocumentCategory], slot: &DocumentSlot) -> Option<Vec<DocumentCategory>> {
    let Some(previous) = find_slot(categories, &slot.id) else {
        tracing::warn!("Ignoring update for unknown slot {}", slot.id);
        return None;
    };
    if !slot.is_consistent() {
        tracing::warn!("Ignoring inconsistent update for {} ({})", slot.id, slot.status.label());
        return None;
    }
    tracing::debug!("{}: {} -> {}", slot.id, previous.status.label(), slot.status.label());
    Some(replace_slot(categories, slot))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub pending: usize,
    pub uploaded: usize,
    pub verified: usize,
}

impl DocumentStats {
    pub fn of(categories: &[DocumentCategory]) -> Self {
        categories.iter().fold(Self::default(), |acc, c| acc.merge(Self::of_slots(&c.documents)))
    }

    pub fn of_slots(slots: &[DocumentSlot]) -> Self {
        let mut stats = Self::default();
        for slot in slots {
            match slot.status {
                DocumentStatus::Pending => stats.pending += 1,
                DocumentStatus::Uploaded => stats.uploaded += 1,
                DocumentStatus::Verified => stats.verified += 1,
            }
        }
        stats
    }

    fn merge(self, other: Self) -> Self {
        Self {
            pending: self.pending + other.pending,
            uploaded: self.uploaded + other.uploaded,
            verified: self.verified + other.verified,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.uploaded + self.verified
    }

    /// Slots that have a file attached, verified or not.
    pub fn submitted(&self) -> usize {
        self.uploaded + self.verified
    }
}
