use crate::models::{ColumnMapping, Entry, RawRow};

const UNKNOWN_NAME: &str = "Unknown";

/// Turn parsed rows into entries according to `mapping`.
///
/// Optional fields are only set when their mapped column exists in the
/// row. The full row is always kept in `original_data`.
pub fn map_csv_data(rows: &[RawRow], mapping: &ColumnMapping) -> Vec<Entry> {
    rows.iter().map(|row| map_row(row, mapping)).collect()
}

fn map_row(row: &RawRow, mapping: &ColumnMapping) -> Entry {
    let name = lookup(row, &mapping.name)
        .filter(|v| !v.is_empty())
        .or_else(|| row.first_value().filter(|v| !v.is_empty()))
        .unwrap_or(UNKNOWN_NAME)
        .to_string();

    Entry {
        name,
        email: lookup(row, &mapping.email).map(str::to_string),
        tickets: lookup(row, &mapping.tickets).map(parse_ticket_count),
        prize: lookup(row, &mapping.prize).map(str::to_string),
        original_data: row.clone(),
    }
}

fn lookup<'a>(row: &'a RawRow, column: &Option<String>) -> Option<&'a str> {
    column.as_deref().and_then(|c| row.get(c))
}

/// Ticket count with `parseInt(value) || 1` semantics.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of digits. No digits, or a value of zero, yields 1. Negative counts
/// are kept as-is and contribute nothing to the pool.
pub fn parse_ticket_count(value: &str) -> i64 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 1;
    }

    // Saturate absurdly long digit runs instead of failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    let n = if negative { -magnitude } else { magnitude };

    if n == 0 { 1 } else { n }
}
