//! Best-effort JSON block extraction.
//!
//! A block is the first bracketed (`[...]`) or braced (`{...}`) literal
//! after a marker token. The scan tracks nesting and JSON string state, so
//! nested arrays and brackets inside string values do not end a block
//! early. The search for the opening delimiter stops at the next marker
//! token, so one marker never captures another marker's block.

use crate::Marker;
use serde::de::DeserializeOwned;

/// Delimiters of a JSON block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    /// `[ ... ]`
    Array,
    /// `{ ... }`
    Object,
}

impl BlockShape {
    /// Opening delimiter.
    pub fn open(self) -> char {
        match self {
            BlockShape::Array => '[',
            BlockShape::Object => '{',
        }
    }
}

/// Why a field could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FieldMiss {
    /// The marker, or a delimited literal after it, was not found
    #[display("block not found")]
    NotFound,
    /// The literal was not valid JSON
    #[display("invalid JSON: {}", _0)]
    Syntax(String),
    /// Valid JSON that does not match the expected record shape
    #[display("unexpected shape: {}", _0)]
    Shape(String),
}

/// Every delimited literal that follows an occurrence of `marker`, in text
/// order.
///
/// Unterminated or mismatched literals are skipped.
pub fn block_candidates<'a>(
    text: &'a str,
    marker: Marker,
    shape: BlockShape,
) -> impl Iterator<Item = &'a str> + 'a {
    let token = marker.token();
    text.match_indices(token).filter_map(move |(pos, _)| {
        let start = pos + token.len();
        let window_end = next_marker_at(text, start).unwrap_or(text.len());
        let open = text[start..window_end].find(shape.open())?;
        let from = start + open;
        balanced_len(&text[from..]).map(|len| &text[from..from + len])
    })
}

/// The first delimited literal after `marker`, if any.
///
/// # Examples
///
/// ```
/// use cineregional_analysis::{BlockShape, Marker, extract_block};
///
/// let text = "prose\nDATA_BLOCK:\n```json\n[{\"a\": [1, 2]}]\n```\nmore prose";
/// assert_eq!(
///     extract_block(text, Marker::DataBlock, BlockShape::Array),
///     Some("[{\"a\": [1, 2]}]")
/// );
/// assert_eq!(extract_block(text, Marker::GlobalStats, BlockShape::Object), None);
/// ```
pub fn extract_block(text: &str, marker: Marker, shape: BlockShape) -> Option<&str> {
    block_candidates(text, marker, shape).next()
}

/// Parse the first candidate block after `marker` that deserializes as `T`.
///
/// When no candidate parses, the miss reported is the one of the first
/// candidate, which is the block the model most likely meant.
pub fn parse_block<T: DeserializeOwned>(text: &str, marker: Marker) -> Result<T, FieldMiss> {
    let mut first_miss = None;
    for candidate in block_candidates(text, marker, marker.shape()) {
        let cleaned = strip_code_fences(candidate);
        match serde_json::from_str::<T>(&cleaned) {
            Ok(value) => return Ok(value),
            Err(e) => {
                let miss = if e.is_data() {
                    FieldMiss::Shape(e.to_string())
                } else {
                    FieldMiss::Syntax(e.to_string())
                };
                first_miss.get_or_insert(miss);
            }
        }
    }
    Err(first_miss.unwrap_or(FieldMiss::NotFound))
}

/// Position of the nearest marker token at or after `from`.
fn next_marker_at(text: &str, from: usize) -> Option<usize> {
    Marker::ALL
        .iter()
        .filter_map(|m| text[from..].find(m.token()).map(|i| from + i))
        .min()
}

/// Byte length of the balanced literal at the start of `s`.
///
/// `s` must begin with `[` or `{`. Returns `None` when the literal is never
/// closed or a closing delimiter does not match its opener.
fn balanced_len(s: &str) -> Option<usize> {
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '{' => stack.push(c),
            ']' | '}' => {
                let expected = if c == ']' { '[' } else { '{' };
                if stack.pop() != Some(expected) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove markdown code fence decoration.
fn strip_code_fences(block: &str) -> String {
    block.replace("```json", "").replace("```", "").trim().to_string()
}
