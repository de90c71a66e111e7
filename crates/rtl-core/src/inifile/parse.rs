//! Line classification for the INI text format.

/// What a single physical line of an INI file means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `[name]` – opens a section.  The name is returned without brackets and
    /// is not trimmed further.
    Section(&'a str),
    /// `ident=value` with a non-empty ident.
    Entry { ident: &'a str, value: &'a str },
    /// Blank line, `;` comment, or a line that is neither of the above.
    Skip,
}

/// Classifies one raw line.  Surrounding whitespace is ignored.
pub(crate) fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(';') {
        return Line::Skip;
    }

    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Section(&line[1..line.len() - 1]);
    }

    match split_entry(line) {
        Some((ident, value)) => Line::Entry { ident, value },
        None => Line::Skip,
    }
}

/// Splits a stored `ident=value` line at its first `=`.
///
/// Returns `None` when there is no `=` or when it is the first character
/// (an empty ident).
pub(crate) fn split_entry(line: &str) -> Option<(&str, &str)> {
    match line.find('=') {
        Some(pos) if pos > 0 => Some((&line[..pos], &line[pos + 1..])),
        _ => None,
    }
}

// ── Storable names ────────────────────────────────────────────────────────────
//
// A name or value is storable when the line it produces classifies back to
// the same thing on the next load.

/// Returns `true` if `name` can be written as a `[name]` header and read back.
///
/// The name must be non-empty (`[]` closes a section) and must not contain a
/// line break.
pub fn is_valid_section_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['\r', '\n'])
}

/// Returns `true` if `ident` can be written as the key of an `ident=value`
/// line and read back.
///
/// Rejected: empty keys, keys containing `=` or a line break, keys starting
/// with `;` (a comment) or `[` (could read as a header) and keys starting
/// with whitespace (trimmed on load).
pub fn is_valid_ident(ident: &str) -> bool {
    !ident.is_empty()
        && !ident.contains(['=', '\r', '\n'])
        && !ident.starts_with([';', '['])
        && !ident.starts_with(char::is_whitespace)
}

/// Returns `true` if `value` fits on one line.
///
/// Trailing whitespace is allowed but does not survive a reload, since whole
/// lines are trimmed on load.
pub fn is_valid_value(value: &str) -> bool {
    !value.contains(['\r', '\n'])
}
