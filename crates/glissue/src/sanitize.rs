/// Normalize a free-text issue title into an identifier-safe string:
/// spaces and hyphens become underscores, everything outside
/// `[A-Za-z0-9_]` is dropped.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
