use super::super::domain::CandidateRecord;

/// Splits one delimited line with quote-toggle semantics: a double quote
/// flips the in-quotes state (the quote itself is dropped), a comma
/// outside quotes ends the field, and every field is trimmed. This is
/// deliberately not RFC 4180 -- there is no doubled-quote escape.
pub(crate) fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Maps one data row onto the recognized columns by header position and
/// applies the acceptance rule: `name` must be non-empty and at least one
/// of `education`/`experience` must be non-empty. Missing optional fields
/// default to the empty string.
pub(crate) fn record_from_row(
    id: u32,
    headers: &[String],
    values: &[String],
) -> Option<CandidateRecord> {
    let name = field(headers, values, "name");
    let education = field(headers, values, "education");
    let experience = field(headers, values, "experience");

    if name.is_empty() || (education.is_empty() && experience.is_empty()) {
        return None;
    }

    Some(CandidateRecord {
        id,
        name,
        email: field(headers, values, "email"),
        phone: field(headers, values, "phone"),
        education,
        experience,
    })
}

// Duplicate headers resolve to the rightmost occurrence.
fn field(headers: &[String], values: &[String], name: &str) -> String {
    headers
        .iter()
        .rposition(|header| header == name)
        .and_then(|index| values.get(index))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_line_respects_quoted_commas() {
        assert_eq!(
            split_line(r#"Jane Smith,"MBA, Harvard",jane@email.com"#),
            vec!["Jane Smith", "MBA, Harvard", "jane@email.com"]
        );
    }

    #[test]
    fn split_line_drops_quote_characters_and_trims() {
        assert_eq!(
            split_line(r#" "John"  , BS "CS" MIT "#),
            vec!["John", "BS CS MIT"]
        );
    }

    #[test]
    fn split_line_keeps_empty_fields() {
        assert_eq!(split_line("a,,c"), vec!["a", "", "c"]);
    }

    #[test]
    fn record_requires_name_and_some_narrative() {
        let headers: Vec<String> = ["name", "education", "experience"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        let no_name: Vec<String> = ["", "BS 2018", ""].iter().map(|v| v.to_string()).collect();
        assert!(record_from_row(1, &headers, &no_name).is_none());

        let no_narrative: Vec<String> = ["Jo", "", ""].iter().map(|v| v.to_string()).collect();
        assert!(record_from_row(1, &headers, &no_narrative).is_none());

        let valid: Vec<String> = ["Jo", "", "Engineer 2019"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        let record = record_from_row(3, &headers, &valid).expect("record accepted");
        assert_eq!(record.id, 3);
        assert_eq!(record.email, "");
        assert_eq!(record.experience, "Engineer 2019");
    }
}
