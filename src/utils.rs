//! String processing shared by the store, the engine, and the consumers.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and
/// collapse whitespace.
///
/// This lets ASCII queries hit accented field text:
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "Kārray" → "karray"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization, e.g. WASM)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization for WASM (no unicode-normalization dependency).
/// Just lowercases and collapses whitespace. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split a string into normalized tokens.
///
/// Tokens are maximal runs of alphanumeric characters after
/// [`normalize`]; punctuation and whitespace both act as separators, so
/// `"Graph.kernels(x)"` tokenizes to `["graph", "kernels", "x"]`. A string
/// with no alphanumeric content yields no tokens.
///
/// Duplicates are kept; query-side set semantics are applied by the caller.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cut a short display snippet out of a record's `text`, centered on the
/// first occurrence of any query token.
///
/// Embedded markup and newlines are flattened to single spaces first. When
/// no token occurs (or the token list is empty) the snippet is simply the
/// head of the text. Truncation is marked with `…` on the clipped sides.
pub fn excerpt(text: &str, tokens: &[String], max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() || max_chars == 0 {
        return String::new();
    }

    let chars: Vec<char> = flat.chars().collect();
    if chars.len() <= max_chars {
        return flat;
    }

    // Per-char lowercasing keeps a 1:1 char mapping between `flat` and the
    // haystack we search, so a byte hit converts cleanly to a char index.
    let haystack: String = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    let match_start = tokens
        .iter()
        .filter_map(|token| haystack.find(token.as_str()))
        .min()
        .map(|byte_pos| haystack[..byte_pos].chars().count())
        .unwrap_or(0);

    // Lead the match a little so it sits inside the window, not at its edge.
    let start = match_start.saturating_sub(max_chars / 4).min(chars.len() - max_chars);
    let end = start + max_chars;

    let mut snippet = String::new();
    if start > 0 {
        snippet.push('…');
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push('…');
    }
    snippet
}
