//! JavaScript identifier checks for root binding names.

/// Returns `true` if `s` is a plain JavaScript identifier (ASCII letters,
/// digits, `_`, `$`, not starting with a digit).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Rewrites an arbitrary name into identifier characters.
///
/// Every character outside `[A-Za-z0-9_$]` becomes `_`. A leading digit (or
/// an empty input) is prefixed with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
