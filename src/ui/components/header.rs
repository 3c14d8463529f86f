//! Header component renderer.
//!
//! Renders the title centered on the first line and the current location,
//! dimmed, on the second, the way a browser shows its address bar.

use std::fmt::Write;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the two-line header to `out`.
///
/// ```text
/// [left padding] TITLE [right padding]
///  /pokemon?type=Fire
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    let _ = writeln!(
        out,
        "{}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        " ".repeat(padding),
        header.title,
        Theme::reset()
    );
    let _ = writeln!(
        out,
        "{} {}{}",
        Theme::fg(&theme.colors.text_dim),
        header.address,
        Theme::reset()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_title_and_shows_address() {
        let header = HeaderInfo {
            title: "Pokédex".into(),
            address: "/pokemon?view=list".into(),
        };
        let mut out = String::new();
        render_header(&mut out, &header, &Theme::builtin_dark(), 21);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&format!("{}Pokédex", " ".repeat(7))));
        assert!(lines[1].contains("/pokemon?view=list"));
    }
}
