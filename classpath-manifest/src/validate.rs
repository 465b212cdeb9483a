//! Source span lookup for validation errors.

use miette::SourceSpan;

/// Find the span of a quoted string value in the TOML source.
///
/// Matches basic (`"..."`) and literal (`'...'`) strings and points at the
/// content between the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Find the span of `key = ...` in the TOML source, pointing at the key.
///
/// The key must start a line or follow `{` or `,` in an inline table.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.match_indices(key).find_map(|(pos, _)| {
        let before = src[..pos].trim_end_matches([' ', '\t']);
        let starts_key = before.is_empty() || before.ends_with(['\n', '{', ',']);
        let followed_by_eq = src[pos + key.len()..].trim_start().starts_with('=');
        (starts_key && followed_by_eq).then(|| SourceSpan::from((pos, key.len())))
    })
}
