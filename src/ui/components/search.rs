//! Search bar component renderer.
//!
//! Renders the search input as a bordered box. An empty query shows the
//! placeholder, dimmed.

use std::fmt::Write;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Appends the three-line search box to `out`.
///
/// ```text
/// [margin] ┌─────────────┐
/// [margin] │ ⌕ query     │
/// [margin] └─────────────┘
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.accent);

    let _ = writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() {
        (format!(" ⌕ {}", search.placeholder), &theme.colors.text_dim)
    } else {
        (format!(" ⌕ {}", search.query), &theme.colors.text_normal)
    };
    let padding = inner_width.saturating_sub(text.chars().count());
    let _ = writeln!(
        out,
        "{margin}{border}│{}{text}{}{border}│{}",
        Theme::fg(color),
        " ".repeat(padding),
        Theme::reset()
    );

    let _ = writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}
