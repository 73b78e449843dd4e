use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::super::domain::CandidateRecord;
use super::{fields, IntakeError};

/// Reads the first worksheet of an Excel workbook and feeds its cells
/// through the same header-mapping path as delimited text.
pub(crate) fn parse_workbook(path: &Path) -> Result<Vec<CandidateRecord>, IntakeError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|err| IntakeError::Format(format!("Excel parsing error: {err}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IntakeError::Format("Excel parsing error: workbook has no sheets".to_string()))?
        .map_err(|err| IntakeError::Format(format!("Excel parsing error: {err}")))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    parse_rows(&rows)
}

/// Structurally equivalent intake path for spreadsheet sources: first row
/// is the header, blank rows are skipped but still consume row ids, and
/// the acceptance rule matches the delimited-text path exactly.
pub(crate) fn parse_rows(rows: &[Vec<String>]) -> Result<Vec<CandidateRecord>, IntakeError> {
    if rows.len() < 2 {
        return Err(IntakeError::Format(
            "Excel file must have at least a header row and one data row".to_string(),
        ));
    }

    let headers: Vec<String> = rows[0].iter().map(|h| h.trim().to_lowercase()).collect();
    let mut candidates = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let values: Vec<String> = row.iter().map(|cell| cell.trim().to_string()).collect();
        if let Some(record) = fields::record_from_row(index as u32, &headers, &values) {
            candidates.push(record);
        }
    }

    if candidates.is_empty() {
        return Err(IntakeError::Format(
            "No valid candidate data found. Please check your file format.".to_string(),
        ));
    }

    Ok(candidates)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        // Years arrive as floats from Excel; render whole numbers without
        // the trailing ".0" so the analyzer sees plain 4-digit tokens.
        Data::Float(value) if value.fract() == 0.0 => format!("{}", *value as i64),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.trim().to_string(),
        Data::Error(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn parses_sheet_rows_with_header_mapping() {
        let sheet = rows(&[
            &["Name", "Email", "Education", "Experience"],
            &["Jane", "jane@email.com", "MBA (2020-2022)", ""],
        ]);

        let candidates = parse_rows(&sheet).expect("rows parse");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 1);
        assert_eq!(candidates[0].name, "Jane");
        assert_eq!(candidates[0].education, "MBA (2020-2022)");
    }

    #[test]
    fn blank_rows_are_skipped_but_consume_ids() {
        let sheet = rows(&[
            &["name", "education"],
            &["", ""],
            &["Jane", "MBA 2020"],
        ]);

        let candidates = parse_rows(&sheet).expect("rows parse");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 2);
    }

    #[test]
    fn short_rows_default_missing_cells_to_empty() {
        let sheet = rows(&[&["name", "email", "experience"], &["Jane"]]);
        // Name alone is not enough: no education/experience narrative.
        assert!(parse_rows(&sheet).is_err());

        let sheet = rows(&[&["name", "experience", "email"], &["Jane", "Dev 2020"]]);
        let candidates = parse_rows(&sheet).expect("rows parse");
        assert_eq!(candidates[0].email, "");
    }

    #[test]
    fn header_only_sheet_is_a_format_error() {
        let sheet = rows(&[&["name", "education"]]);
        let err = parse_rows(&sheet).expect_err("header only");
        assert!(err.to_string().contains("at least a header row and one data row"));
    }
}
