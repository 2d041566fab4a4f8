//! Identifier validation for property names.

/// Check whether `name` is usable as a property name.
///
/// Property names follow identifier rules: a letter or underscore, then
/// letters, digits, or underscores. A lone `_` is rejected.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if name == "_" {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
