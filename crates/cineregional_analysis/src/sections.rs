//! Numbered prose sections at the top of an answer.
//!
//! Section numbers are only recognized at the start of a line, optionally
//! behind markdown headings, quotes, or `**` emphasis. A single `*` is a
//! bullet, not decoration, so `* 3.2M tickets` stays a highlight. Numbers
//! inside prose such as "version 2.5" are ignored.

use regex::Regex;
use std::sync::LazyLock;

static SUMMARY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:(?:#+|>|\*\*)[ \t]*)*1\.[ \t]+(\S.*)$").ok()
});

static HIGHLIGHTS_START_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:(?:#+|>|\*\*)[ \t]*)*2\.(?:\*\*)?(?:[ \t]+|\r?$)").ok()
});

static SECTION_THREE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:(?:#+|>|\*\*)[ \t]*)*3\.(?:\*\*)?(?:[ \t]|\r?$)").ok()
});

/// Text of the first line numbered `1.`.
///
/// Surrounding markdown emphasis is removed. Returns `None` when there is no
/// such line or it is blank after cleanup.
///
/// ```
/// use cineregional_analysis::extract_summary;
///
/// assert_eq!(
///     extract_summary("Intro\n1. Widely praised on release.\n2. - Record opening"),
///     Some("Widely praised on release.".to_string())
/// );
/// assert_eq!(extract_summary("No numbered lines"), None);
/// ```
pub fn extract_summary(text: &str) -> Option<String> {
    let caps = SUMMARY_RE.as_ref()?.captures(text)?;
    let line = caps.get(1)?.as_str();
    let cleaned = line.trim().trim_matches('*').trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Bulleted lines between the `2.` section and the `3.` section.
///
/// The span runs to the end of the text when no `3.` follows. Only lines
/// starting with `-` or `*` are kept; the bullet is stripped and blank
/// results are dropped.
pub fn extract_highlights(text: &str) -> Vec<String> {
    let Some(start) = HIGHLIGHTS_START_RE.as_ref().and_then(|re| re.find(text)) else {
        return Vec::new();
    };
    let end = SECTION_THREE_RE
        .as_ref()
        .and_then(|re| re.find_at(text, start.end()))
        .map(|m| m.start())
        .unwrap_or(text.len());

    text[start.end()..end]
        .lines()
        .filter_map(|line| {
            let line = line.trim_start();
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('*'))
                .map(str::trim)
        })
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_on_marker_line() {
        let text = "1. Widely praised on release.\n2. - Record opening\n3. ...";
        assert_eq!(extract_highlights(text), vec!["Record opening"]);
    }

    #[test]
    fn highlights_keep_order_and_skip_prose() {
        let text = "1. Summary\n\
                    2. Global highlights:\n\
                    Some framing prose.\n\
                    - First\n\
                    \t* Second \n\
                    -\n\
                    - Third\n\
                    3. Regional\n\
                    - Not a highlight";
        assert_eq!(extract_highlights(text), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn highlights_run_to_end_without_section_three() {
        let text = "2.\n- Only one";
        assert_eq!(extract_highlights(text), vec!["Only one"]);
    }

    #[test]
    fn highlights_ignore_inline_numbers() {
        let text = "Version 2. - not a section\n3. done";
        assert!(extract_highlights(text).is_empty());
    }

    #[test]
    fn markdown_decorated_sections() {
        let text = "### 1. **A sleeper hit.**\n**2. Highlights**\n* Sold out\n## 3. Regions";
        assert_eq!(extract_summary(text), Some("A sleeper hit.".to_string()));
        assert_eq!(extract_highlights(text), vec!["Sold out"]);
    }

    #[test]
    fn star_bullet_starting_with_three_is_a_highlight() {
        let text = "1. Hit.\n2. Highlights\n* 3.2M tickets in Korea\n* Record IMAX run\n3. Regions";
        assert_eq!(
            extract_highlights(text),
            vec!["3.2M tickets in Korea", "Record IMAX run"]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let text = "1. Hit.\r\n2.\r\n- Record opening\r\n3. Regions\r\n- Not a highlight";
        assert_eq!(extract_summary(text), Some("Hit.".to_string()));
        assert_eq!(extract_highlights(text), vec!["Record opening"]);
    }

    #[test]
    fn bold_section_three_ends_highlights() {
        let text = "2. Highlights\n- Kept\n**3.** Regions\n- Dropped";
        assert_eq!(extract_highlights(text), vec!["Kept"]);
    }

    #[test]
    fn summary_requires_text_after_number() {
        assert_eq!(extract_summary("1.\n2. - x"), None);
        assert_eq!(extract_summary("1.5 million viewers"), None);
    }
}
