mod fields;
mod rows;

use std::path::Path;

use super::domain::CandidateRecord;

/// Ingestion failure. `Format` covers malformed or empty candidate data,
/// `UnsupportedFormat` an unrecognized source extension. Both carry a
/// user-displayable message and are surfaced unmodified -- there is no
/// retry or fallback parsing.
#[derive(Debug)]
pub enum IntakeError {
    Format(String),
    UnsupportedFormat(String),
    Io(std::io::Error),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Format(message) => write!(f, "{}", message),
            IntakeError::UnsupportedFormat(message) => write!(f, "{}", message),
            IntakeError::Io(err) => write!(f, "failed to read candidate file: {}", err),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Format(_) | IntakeError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Turns raw candidate files into ordered `CandidateRecord` sequences.
pub struct CandidateImporter;

impl CandidateImporter {
    /// Dispatches on the file extension: `.csv` is parsed as delimited
    /// text, `.xlsx`/`.xls` through the spreadsheet adapter. Anything
    /// else is rejected up front.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateRecord>, IntakeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => {
                let text = std::fs::read_to_string(path)?;
                Self::parse_csv(&text)
            }
            "xlsx" | "xls" => rows::parse_workbook(path),
            _ => Err(IntakeError::UnsupportedFormat(
                "Unsupported file type. Please upload CSV or Excel file.".to_string(),
            )),
        }
    }

    /// Parses delimited candidate text. Whitespace-only lines are dropped
    /// before numbering; the first remaining line is the header. Rows
    /// with fewer fields than the header, or failing the acceptance rule,
    /// are skipped silently while still consuming their 1-based id.
    pub fn parse_csv(text: &str) -> Result<Vec<CandidateRecord>, IntakeError> {
        let lines: Vec<&str> = text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(IntakeError::Format(
                "CSV file must have at least a header row and one data row".to_string(),
            ));
        }

        let headers: Vec<String> = fields::split_line(lines[0])
            .iter()
            .map(|header| header.to_lowercase())
            .collect();

        let mut candidates = Vec::new();
        for (index, line) in lines.iter().enumerate().skip(1) {
            let values = fields::split_line(line);
            if values.len() < headers.len() {
                continue;
            }
            if let Some(record) = fields::record_from_row(index as u32, &headers, &values) {
                candidates.push(record);
            }
        }

        if candidates.is_empty() {
            return Err(IntakeError::Format(
                "No valid candidate data found. Please check your CSV format.".to_string(),
            ));
        }

        Ok(candidates)
    }

    /// Spreadsheet-shaped entry point: rows of cells, first row = header.
    pub fn parse_rows(rows: &[Vec<String>]) -> Result<Vec<CandidateRecord>, IntakeError> {
        rows::parse_rows(rows)
    }
}
