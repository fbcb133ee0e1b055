use rafflepick::models::Entry;
use rafflepick::raffle::{
    build_audit, create_entry_pool, create_prize_pools, effective_tickets,
    extract_prizes_from_entries,
};

#[test]
fn test_pool_expands_tickets_in_order() {
    let entries = vec![Entry::new("A").with_tickets(3), Entry::new("B").with_tickets(1)];
    assert_eq!(create_entry_pool(&entries), vec!["A", "A", "A", "B"]);
}

#[test]
fn test_missing_and_zero_tickets_count_once() {
    let entries = vec![Entry::new("A"), Entry::new("B").with_tickets(0)];
    assert_eq!(create_entry_pool(&entries), vec!["A", "B"]);
    assert_eq!(effective_tickets(&entries[1]), 1);
}

#[test]
fn test_negative_tickets_add_nothing() {
    let entries = vec![
        Entry::new("A").with_tickets(-3),
        Entry::new("B").with_tickets(2),
    ];
    assert_eq!(create_entry_pool(&entries), vec!["B", "B"]);
}

#[test]
fn test_pool_length_matches_ticket_sum() {
    let entries = vec![
        Entry::new("A").with_tickets(5),
        Entry::new("B"),
        Entry::new("C").with_tickets(0),
        Entry::new("D").with_tickets(-1),
        Entry::new("E").with_tickets(2),
    ];
    let expected: i64 = entries.iter().map(|e| effective_tickets(e).max(0)).sum();
    assert_eq!(create_entry_pool(&entries).len() as i64, expected);
    assert_eq!(expected, 9);
}

#[test]
fn test_empty_entries_give_empty_pool() {
    assert!(create_entry_pool(&[]).is_empty());
}

#[test]
fn test_prize_pools_group_by_trimmed_prize() {
    let entries = vec![
        Entry::new("A").with_tickets(2).with_prize("Bike "),
        Entry::new("B").with_prize("Hamper"),
        Entry::new("C").with_prize(" Bike"),
        Entry::new("D"),
        Entry::new("E").with_prize("  "),
    ];
    let pools = create_prize_pools(&entries);

    assert_eq!(pools.len(), 2);
    assert_eq!(pools["Bike"], vec!["A", "A", "C"]);
    assert_eq!(pools["Hamper"], vec!["B"]);
}

#[test]
fn test_prizes_sorted_unique_trimmed() {
    let entries = vec![
        Entry::new("A").with_prize("Zebra plush"),
        Entry::new("B").with_prize(" Bike"),
        Entry::new("C").with_prize("Bike"),
        Entry::new("D").with_prize(""),
        Entry::new("E").with_prize("   "),
        Entry::new("F"),
        Entry::new("G").with_prize("Hamper"),
    ];
    assert_eq!(
        extract_prizes_from_entries(&entries),
        vec!["Bike", "Hamper", "Zebra plush"]
    );
}

#[test]
fn test_prizes_invariants_hold_for_many_inputs() {
    let labels = ["b", " a", "c ", "", "a", "  ", "B", "b"];
    for n in 0..labels.len() {
        let entries: Vec<Entry> = labels[..n]
            .iter()
            .enumerate()
            .map(|(i, p)| Entry::new(format!("p{i}")).with_prize(*p))
            .collect();
        let prizes = extract_prizes_from_entries(&entries);

        let mut sorted = prizes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(prizes, sorted);
        assert!(prizes.iter().all(|p| !p.is_empty() && p.trim() == p));
    }
}

#[test]
fn test_audit_counts_tickets_per_prize_and_person() {
    let entries = vec![
        Entry::new("Alice").with_tickets(3).with_prize("Bike"),
        Entry::new("Bob").with_prize("Bike"),
        Entry::new("Alice").with_tickets(2).with_prize("Bike"),
        Entry::new("Carol").with_tickets(-4).with_prize("Hamper"),
        Entry::new("Dan"),
    ];
    let audit = build_audit(&entries, "Grand Prize");
    let rows: Vec<_> = audit
        .iter()
        .map(|r| (r.prize.as_str(), r.person.as_str(), r.ticket_count))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Bike", "Alice", 5),
            ("Bike", "Bob", 1),
            ("Grand Prize", "Dan", 1),
            ("Hamper", "Carol", 0),
        ]
    );
}
