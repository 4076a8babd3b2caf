//! Pulls the headword out of a lexical list page.
//!
//! The page ends with a line of the form `...</span>字`; the single character
//! following the last closing `</span>` at the end of a line is the word.
//! This is a textual match, not an HTML parse: markup that does not fit the
//! pattern yields no word rather than an error.

use regex::Regex;
use std::sync::LazyLock;

// `R` 讓 `$` 同時接受 \r\n 行尾
static WORD_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)</span>(.)$").expect("word pattern is valid"));

/// Returns the extracted character, or `None` when the page holds no word.
pub fn extract_word(html: Option<&str>) -> Option<String> {
    let html = html.filter(|s| !s.is_empty())?;

    WORD_TAIL
        .captures_iter(html)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
