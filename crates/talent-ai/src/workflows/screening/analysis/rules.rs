use super::super::domain::CandidateRecord;

/// One detected textual signal plus the confidence weight it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finding {
    pub(crate) message: String,
    pub(crate) weight: i32,
}

impl Finding {
    fn new(message: impl Into<String>, weight: i32) -> Self {
        Self {
            message: message.into(),
            weight,
        }
    }
}

const GAP_KEYWORDS: [&str; 5] = ["gap", "unemployed", "break", "career break", "employment gap"];
const FREELANCE_PATTERNS: [&str; 3] = ["freelance", "consultant", "consulting"];

/// Runs every detector against one candidate. Finding order is fixed and
/// determines the order of the reported `gaps` list.
pub(crate) fn detect_findings(record: &CandidateRecord, reference_year: i32) -> Vec<Finding> {
    let education = record.education.to_lowercase();
    let experience = record.experience.to_lowercase();
    let full_text = format!("{education} {experience}");

    let mut findings = Vec::new();

    // Keywords are checked independently, so overlapping literals each
    // fire ("career break" also triggers "break").
    for keyword in GAP_KEYWORDS {
        if full_text.contains(keyword) {
            findings.push(Finding::new(
                format!("Explicit {keyword} mentioned in resume"),
                25,
            ));
        }
    }

    if full_text.contains("currently unemployed")
        || full_text.contains("seeking employment")
        || full_text.contains("currently seeking")
    {
        findings.push(Finding::new("Currently unemployed or seeking employment", 30));
    }

    let freelance_hits: usize = FREELANCE_PATTERNS
        .iter()
        .map(|pattern| count_occurrences(&full_text, pattern))
        .sum();
    if freelance_hits >= 2 {
        findings.push(Finding::new(
            "Multiple freelance/consulting periods detected - verify employment continuity",
            20,
        ));
    }

    if full_text.contains("career change") || full_text.contains("transition") {
        findings.push(Finding::new("Career transition period mentioned", 15));
    }

    let mut years = extract_years(&full_text);
    years.sort_unstable();
    years.dedup();
    for pair in years.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 1 && delta < 10 {
            findings.push(Finding::new(
                format!("{delta} year timeline gap between {} and {}", pair[0], pair[1]),
                delta * 12,
            ));
        }
    }

    if education.contains("graduated") || education.contains("degree") {
        let education_years = extract_years(&education);
        let experience_years = extract_years(&experience);
        if let (Some(last_education), Some(first_employment)) = (
            education_years.iter().max().copied(),
            experience_years.iter().min().copied(),
        ) {
            let transition_gap = first_employment - last_education;
            if transition_gap > 1 {
                findings.push(Finding::new(
                    format!(
                        "{transition_gap} year gap between graduation ({last_education}) and first employment ({first_employment})"
                    ),
                    transition_gap * 10,
                ));
            }
        }
    }

    if !full_text.contains("present")
        && !full_text.contains("current")
        && !full_text.contains(&reference_year.to_string())
    {
        if let Some(latest) = extract_years(&full_text).into_iter().max() {
            if reference_year - latest >= 1 {
                findings.push(Finding::new(
                    format!("No current employment listed - last mentioned year is {latest}"),
                    20,
                ));
            }
        }
    }

    findings
}

/// Counts non-overlapping occurrences of `pattern` in `text`.
fn count_occurrences(text: &str, pattern: &str) -> usize {
    let mut count = 0;
    let mut offset = 0;
    while let Some(position) = text[offset..].find(pattern) {
        count += 1;
        offset += position + pattern.len();
    }
    count
}

/// Collects 19xx/20xx tokens delimited by word boundaries, in source
/// order with duplicates kept. Longer digit runs ("12020", "20203") never
/// match: both ends of the token must sit against a non-word character.
pub(crate) fn extract_years(text: &str) -> Vec<i32> {
    let bytes = text.as_bytes();
    let mut years = Vec::new();

    let mut i = 0;
    while i + 4 <= bytes.len() {
        let token = &bytes[i..i + 4];
        let bounded = (i == 0 || !is_word_byte(bytes[i - 1]))
            && (i + 4 == bytes.len() || !is_word_byte(bytes[i + 4]));
        if bounded
            && token.iter().all(|b| b.is_ascii_digit())
            && (token.starts_with(b"19") || token.starts_with(b"20"))
        {
            if let Ok(year) = text[i..i + 4].parse::<i32>() {
                years.push(year);
            }
            i += 4;
        } else {
            i += 1;
        }
    }

    years
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
