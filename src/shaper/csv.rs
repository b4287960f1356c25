//! CSV rendering for `export_network_csv`.

use crate::models::ContactRecord;

/// Header row, in column order.
pub const CSV_HEADER: [&str; 9] = [
    "Name",
    "LinkedIn URL",
    "Headline",
    "Location",
    "Company",
    "Title",
    "Industry",
    "Skills",
    "Keywords",
];

const LINE_END: &str = "\r\n";

/// Render contacts as RFC 4180 CSV, header first, CRLF line endings.
///
/// Absent values become empty cells; list columns hold a JSON array.
pub fn render(records: &[ContactRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, CSV_HEADER.iter().copied());

    for record in records {
        let company = record.current_company.as_ref();
        let skills = json_list(&record.skills_top);
        let keywords = json_list(&record.keywords);
        write_row(
            &mut out,
            [
                record.full_name.as_str(),
                record.linkedin_url.as_deref().unwrap_or(""),
                record.headline.as_deref().unwrap_or(""),
                record.location.as_deref().unwrap_or(""),
                company.and_then(|c| c.name.as_deref()).unwrap_or(""),
                company.and_then(|c| c.title.as_deref()).unwrap_or(""),
                company.and_then(|c| c.industry.as_deref()).unwrap_or(""),
                skills.as_str(),
                keywords.as_str(),
            ],
        );
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, cell);
    }
    out.push_str(LINE_END);
}

/// Quote a field only when it contains a delimiter, quote, or line break.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn json_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    serde_json::to_string(items).unwrap_or_default()
}
