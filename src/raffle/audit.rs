use super::pool::effective_tickets;
use crate::models::Entry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tickets held by one person for one prize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRow {
    pub prize: String,
    pub person: String,
    pub ticket_count: i64,
}

/// Per-prize, per-person ticket totals.
///
/// Entries without a prize are counted under `default_prize`. Negative
/// ticket counts add nothing, same as in the pool. Rows come out sorted by
/// prize, then by person.
pub fn build_audit(entries: &[Entry], default_prize: &str) -> Vec<AuditRow> {
    let mut totals: BTreeMap<(String, String), i64> = BTreeMap::new();

    for e in entries {
        let prize = e
            .prize
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(default_prize);

        *totals
            .entry((prize.to_string(), e.name.clone()))
            .or_insert(0) += effective_tickets(e).max(0);
    }

    totals
        .into_iter()
        .map(|((prize, person), ticket_count)| AuditRow {
            prize,
            person,
            ticket_count,
        })
        .collect()
}
