//! Name normalization between file slugs, catalog names and Elm identifiers.
//!
//! - `arrow-up` (slug) -> `arrowUp`
//! - `ArrowUp` (pascal) -> `arrowUp`
//! - `stroke-width` (SVG attribute) -> `strokeWidth`

/// Convert a hyphenated name to camelCase: every `-x` becomes `X`.
/// A trailing hyphen is kept as-is.
pub fn kebab_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.next() {
                Some(next) => result.extend(next.to_uppercase()),
                None => result.push('-'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Lowercase the first character only.
pub fn pascal_to_camel(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
