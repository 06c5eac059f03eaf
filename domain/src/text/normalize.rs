//! Instruction normalization.

/// Trim, unify full-width punctuation, and collapse whitespace.
///
/// Full-width comma and parentheses become their half-width forms; any run
/// of whitespace (newlines included) becomes a single space. Idempotent.
pub fn normalize(text: &str) -> String {
    let unified: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '，' => ',',
            '（' => '(',
            '）' => ')',
            other => other,
        })
        .collect();

    unified.split_whitespace().collect::<Vec<_>>().join(" ")
}
