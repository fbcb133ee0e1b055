use crate::models::Entry;
use std::collections::BTreeSet;

/// Distinct, trimmed, non-empty prizes referenced by `entries`, sorted
/// ascending.
pub fn extract_prizes_from_entries(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|e| e.prize.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
