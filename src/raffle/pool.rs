use crate::models::Entry;
use std::collections::BTreeMap;

/// Ticket weight of an entry: missing or zero counts as 1, negatives stay
/// negative (and add nothing to a pool).
pub fn effective_tickets(entry: &Entry) -> i64 {
    match entry.tickets {
        None | Some(0) => 1,
        Some(n) => n,
    }
}

/// Flatten entries into a pool holding one name per ticket.
///
/// Input order is preserved and each entry's tickets are contiguous.
pub fn create_entry_pool(entries: &[Entry]) -> Vec<String> {
    let mut pool = Vec::new();
    for entry in entries {
        push_tickets(&mut pool, entry);
    }
    pool
}

/// One pool per prize, keyed by trimmed prize name.
///
/// Entries without a prize (or with a blank one) are left out.
pub fn create_prize_pools(entries: &[Entry]) -> BTreeMap<String, Vec<String>> {
    let mut pools: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        let Some(prize) = entry.prize.as_deref().map(str::trim) else {
            continue;
        };
        if prize.is_empty() {
            continue;
        }
        push_tickets(pools.entry(prize.to_string()).or_default(), entry);
    }
    pools
}

fn push_tickets(pool: &mut Vec<String>, entry: &Entry) {
    for _ in 0..effective_tickets(entry).max(0) {
        pool.push(entry.name.clone());
    }
}
