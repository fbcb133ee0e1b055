use rafflepick::models::RawRow;
use rafflepick::raffle::parse_csv;

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn test_empty_input() {
    let parsed = parse_csv("");
    assert!(parsed.headers.is_empty());
    assert!(parsed.data.is_empty());
}

#[test]
fn test_blank_lines_only() {
    let parsed = parse_csv("\n   \n\n");
    assert!(parsed.headers.is_empty());
    assert!(parsed.data.is_empty());
}

#[test]
fn test_single_row() {
    let parsed = parse_csv("name,email\nJohn,j@x.com");
    assert_eq!(parsed.headers, vec!["name", "email"]);
    assert_eq!(parsed.data, vec![row(&[("name", "John"), ("email", "j@x.com")])]);
}

#[test]
fn test_header_after_leading_blank_lines() {
    let parsed = parse_csv("\n\nname,tickets\nA,3\n");
    assert_eq!(parsed.headers, vec!["name", "tickets"]);
    assert_eq!(parsed.data.len(), 1);
}

#[test]
fn test_trims_fields_and_headers() {
    let parsed = parse_csv(" name , email \n  John  ,  j@x.com ");
    assert_eq!(parsed.headers, vec!["name", "email"]);
    assert_eq!(parsed.data[0].get("name"), Some("John"));
    assert_eq!(parsed.data[0].get("email"), Some("j@x.com"));
}

#[test]
fn test_quoted_fields_keep_commas() {
    let parsed = parse_csv("name,prize\n\"Smith, John\",\"Bike, red\"\n");
    assert_eq!(parsed.data[0].get("name"), Some("Smith, John"));
    assert_eq!(parsed.data[0].get("prize"), Some("Bike, red"));
}

#[test]
fn test_empty_rows_are_dropped() {
    let parsed = parse_csv("name,email\nJohn,j@x.com\n,\n , \n\nJane,\n");
    let names: Vec<_> = parsed.data.iter().map(|r| r.get("name").unwrap()).collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

#[test]
fn test_missing_trailing_fields_default_to_empty() {
    let parsed = parse_csv("name,email,tickets\nJohn\n");
    assert_eq!(
        parsed.data,
        vec![row(&[("name", "John"), ("email", ""), ("tickets", "")])]
    );
}

#[test]
fn test_extra_fields_are_ignored() {
    let parsed = parse_csv("name\nJohn,extra,more\n");
    assert_eq!(parsed.data, vec![row(&[("name", "John")])]);
}

#[test]
fn test_crlf_line_endings() {
    let parsed = parse_csv("name,tickets\r\nA,3\r\nB,1\r\n");
    assert_eq!(parsed.headers, vec!["name", "tickets"]);
    assert_eq!(parsed.data.len(), 2);
    assert_eq!(parsed.data[1].get("tickets"), Some("1"));
}

#[test]
fn test_row_keeps_column_order() {
    let parsed = parse_csv("b,a,c\n1,2,3\n");
    let cols: Vec<_> = parsed.data[0].columns().collect();
    assert_eq!(cols, vec!["b", "a", "c"]);
    assert_eq!(parsed.data[0].first_value(), Some("1"));
}
