//! Footer component renderer.
//!
//! Renders the command hints centered with dimmed styling.

use std::fmt::Write;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends the footer help line to `out`.
///
/// Text wider than `cols` is truncated so narrow terminals keep one line.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    let _ = writeln!(
        out,
        "{}{}{help_text}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(padding),
        Theme::reset()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_width() {
        let footer = FooterInfo {
            keybindings: "search <text> · quit".into(),
        };
        let mut out = String::new();
        render_footer(&mut out, &footer, &Theme::builtin_light(), 6);
        assert!(out.contains("search"));
        assert!(!out.contains("quit"));
    }
}
