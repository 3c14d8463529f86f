//! Shared rendering utilities.
//!
//! Highlight ranges are character indices, not byte indices, so names with
//! accents (`Flabébé`) highlight correctly.

use std::fmt::Write;

use crate::ui::theme::Theme;

/// Finds every non-overlapping case-insensitive occurrence of `needle` in
/// `text` and returns their character ranges.
///
/// `needle` must already be lowercased.
///
/// ```
/// use dexview::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Charmander", "ar"), vec![(2, 4)]);
/// assert_eq!(match_ranges("Nidoran", ""), vec![]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Lowercasing can expand one char into several; remember which source
    // char each folded char came from.
    let mut folded = Vec::new();
    let mut owner = Vec::new();
    for (idx, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            owner.push(idx);
        }
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        if folded[pos..pos + needle.len()] == needle[..] {
            let start = owner[pos];
            let end = owner[pos + needle.len() - 1] + 1;
            ranges.push((start, end));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

/// Appends `text` to `out`, wrapping the given character ranges in the
/// theme's highlight colors.
pub fn write_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        out.extend(&chars[current_pos..start]);
        let _ = write!(
            out,
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_occurrences() {
        assert_eq!(match_ranges("Nidorina", "n"), vec![(0, 1), (6, 7)]);
    }

    #[test]
    fn ranges_are_in_characters() {
        assert_eq!(match_ranges("Flabébé", "bé"), vec![(3, 5), (5, 7)]);
    }

    #[test]
    fn highlight_wraps_only_matched_text() {
        let theme = Theme::builtin_dark();
        let mut out = String::new();
        write_highlighted_text(&mut out, "Pikachu", &[(2, 4)], &theme);
        assert!(out.starts_with("Pi\u{1b}["));
        assert!(out.ends_with("\u{1b}[0mchu"));
        assert!(out.contains("ka"));
    }

    #[test]
    fn pad_counts_characters() {
        assert_eq!(pad("Mé", 4), "Mé  ");
        assert_eq!(pad("Charizard", 4), "Charizard");
    }
}
