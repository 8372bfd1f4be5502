/// True for names made of ASCII letters, digits, `-` or `_`.
///
/// Such names are safe as path components and as log fields.
pub fn validate_identifier(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Validates a pip requirement specifier.
///
/// Rejects anything pip would read as an option or that would split into
/// several arguments.
pub fn validate_requirement(spec: &str) -> bool {
    !spec.is_empty()
        && !spec.starts_with('-')
        && !spec.chars().any(char::is_whitespace)
        && spec.chars().next().is_some_and(char::is_alphanumeric)
}
