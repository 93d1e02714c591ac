//! Pure input checks shared by the link orchestrator.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::CoreError;
use crate::linkage::graph::LinkageEdge;
use crate::types::DbId;

/// Reject a request whose template-ID set contains repeats.
///
/// The message enumerates every duplicated ID with its repetition count,
/// in ascending ID order so it is stable for callers and tests.
pub fn check_duplicate_template_ids(template_ids: &[DbId]) -> Result<(), CoreError> {
    let mut counts: BTreeMap<DbId, usize> = BTreeMap::new();
    for &id in template_ids {
        *counts.entry(id).or_default() += 1;
    }

    let duplicates: Vec<String> = counts
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(id, count)| format!("template ID \"{id}\" is passed {count} times"))
        .collect();

    if duplicates.is_empty() {
        return Ok(());
    }
    Err(CoreError::Parameters(format!(
        "Cannot pass duplicate template IDs for the linkage: {}.",
        duplicates.join(", ")
    )))
}

/// Templates linked to every one of the given targets.
///
/// The intersection runs across all targets; the caller unions the result
/// with the newly requested template IDs to form the common template set
/// used by the trigger-dependency check. Targets with no links at all
/// make the intersection empty.
pub fn common_sources(edges: &[LinkageEdge], targets: &[DbId]) -> Vec<DbId> {
    let target_set: HashSet<DbId> = targets.iter().copied().collect();
    if target_set.is_empty() {
        return Vec::new();
    }

    let mut targets_per_source: HashMap<DbId, HashSet<DbId>> = HashMap::new();
    for edge in edges {
        if target_set.contains(&edge.target_id) {
            targets_per_source
                .entry(edge.source_id)
                .or_default()
                .insert(edge.target_id);
        }
    }

    let mut common: Vec<DbId> = targets_per_source
        .into_iter()
        .filter(|(_, linked_targets)| linked_targets.len() == target_set.len())
        .map(|(source, _)| source)
        .collect();
    common.sort_unstable();
    common
}
