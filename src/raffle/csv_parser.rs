use crate::models::RawRow;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Header row plus one `RawRow` per non-blank data line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub data: Vec<RawRow>,
}

/// Parse uploaded CSV text.
///
/// - the first non-empty line is the header row
/// - fields may be double-quoted; every field and header is trimmed
/// - rows whose fields are all empty are dropped
/// - missing trailing fields become `""`, extra fields are ignored
///
/// Never fails: records the reader cannot decode are skipped.
pub fn parse_csv(content: &str) -> ParsedCsv {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = reader.records().filter_map(Result::ok);

    let headers: Vec<String> = match records.by_ref().find(|r| !is_blank_line(r)) {
        Some(r) => r.iter().map(str::to_string).collect(),
        None => return ParsedCsv::default(),
    };

    let data = records
        .filter(|r| !is_empty_row(r))
        .map(|r| {
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), r.get(i).unwrap_or("").to_string()))
                .collect::<RawRow>()
        })
        .collect();

    ParsedCsv { headers, data }
}

// A whitespace-only line comes back from the reader as a single empty field.
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

fn is_empty_row(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}
