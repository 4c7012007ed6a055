//! Publication date formatting

use chrono::DateTime;

/// Brazilian Portuguese month abbreviations
const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Format a publication timestamp as `dd MMM yyyy` (pt-BR)
///
/// Unpublished (`None`) and unparsable dates render as an empty string
/// rather than failing the page.
///
/// # Examples
/// ```ignore
/// format_publication_date(Some("2021-03-15T19:25:28+0000")) // -> "15 mar 2021"
/// ```
pub fn format_publication_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return String::new();
    };

    let Some(parsed) = parse_publication_date(raw) else {
        return String::new();
    };

    use chrono::Datelike;
    let month = MONTHS_PT_BR[parsed.month0() as usize];
    format!("{:02} {} {}", parsed.day(), month, parsed.year())
}

/// Parse the service's ISO-8601 timestamps, with or without a colon in the
/// UTC offset
fn parse_publication_date(raw: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}
