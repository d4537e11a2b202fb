//! Word-per-line document encoding
//!
//! git diffs line by line. Prose is stored with every space-separated word
//! on its own line, so editing one word changes one line. Real line breaks
//! are kept as a standalone [`SENTINEL`] token between two words.

use crate::error::Error;

/// Stands in for a line break in the stored form.
///
/// U+2029 PARAGRAPH SEPARATOR: a single code point that keyboards do not
/// produce, and that keeps the stored file valid text for git.
pub const SENTINEL: char = '\u{2029}';

/// Sentinel as it appears once encoded words are joined by spaces
const SPACED_SENTINEL: &str = " \u{2029} ";

/// Check that `prose` can be encoded losslessly
///
/// Fails with [`Error::EncodingViolation`] at the byte offset of the first
/// sentinel character.
pub fn validate(prose: &str) -> Result<(), Error> {
    match prose.find(SENTINEL) {
        Some(offset) => Err(Error::EncodingViolation { offset }),
        None => Ok(()),
    }
}

/// Convert prose into its stored, one-word-per-line form
pub fn encode(prose: &str) -> Result<String, Error> {
    validate(prose)?;

    let mut stored = prose.replace('\n', SPACED_SENTINEL).replace(' ', "\n");
    stored.push('\n');
    Ok(stored)
}

/// Convert a stored document back into prose
pub fn decode(stored: &str) -> String {
    let body = stored.strip_suffix('\n').unwrap_or(stored);
    body.replace('\n', " ").replace(SPACED_SENTINEL, "\n")
}

/// Decode a single stored line
///
/// The bare sentinel becomes a line break, any other token is a word.
pub fn decode_token(token: &str) -> String {
    if token.len() == SENTINEL.len_utf8() && token.starts_with(SENTINEL) {
        "\n".to_string()
    } else {
        token.to_string()
    }
}
