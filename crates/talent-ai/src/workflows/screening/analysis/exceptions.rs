/// Exception rules reviewers accept by default. Matching is association
/// based: each entry pairs a substring looked up in the lowercased
/// exception text with a substring looked up in the lowercased finding.
const ASSOCIATIONS: [(&str, &str); 7] = [
    ("maternity", "gap"),
    ("paternity", "gap"),
    ("career transition", "freelance"),
    ("career transition", "transition"),
    ("educational", "graduation"),
    ("health", "health"),
    ("family", "family"),
];

const LITERAL_ASSOCIATIONS: [&str; 2] = ["sabbatical", "military"];

/// The acceptable-gap policy shipped with the screening workflow.
/// Callers may replace or extend this list per run.
pub fn default_exceptions() -> Vec<String> {
    [
        "Maternity/Paternity leave (up to 1 year)",
        "Career transition period (up to 6 months)",
        "Educational pursuits (MBA, certifications, advanced degrees)",
        "Health/Family emergency leave",
        "Sabbatical or documented travel",
        "Military service",
        "Startup founding activities",
        "Family care responsibilities",
    ]
    .iter()
    .map(|rule| rule.to_string())
    .collect()
}

/// True when any active exception rule covers the finding. `finding` and
/// the entries of `exceptions_lower` must already be lowercased.
pub(crate) fn is_excused(finding: &str, exceptions_lower: &[String]) -> bool {
    exceptions_lower.iter().any(|exception| {
        ASSOCIATIONS
            .iter()
            .any(|(rule, signal)| exception.contains(rule) && finding.contains(signal))
            || LITERAL_ASSOCIATIONS
                .iter()
                .any(|word| exception.contains(word) && finding.contains(word))
    })
}
