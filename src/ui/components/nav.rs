//! Navigation panel renderer.
//!
//! Three rows of pills: type filter, sort order and view mode. The active pill
//! in each row is drawn inverted. A collapsed panel shows only the active
//! choices on one line.

use std::fmt::Write;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NavInfo, Pill};

pub fn render_nav(out: &mut String, nav: &NavInfo, theme: &Theme) {
    if nav.collapsed {
        let active: Vec<&str> = [&nav.type_pills, &nav.sort_pills, &nav.view_pills]
            .into_iter()
            .filter_map(|row| row.iter().find(|p| p.active))
            .map(|p| p.label.as_str())
            .collect();
        let _ = writeln!(
            out,
            " {}☰ {}{}",
            Theme::fg(&theme.colors.text_dim),
            active.join(" · "),
            Theme::reset()
        );
        return;
    }

    render_row(out, "Type", &nav.type_pills, theme);
    render_row(out, "Sort", &nav.sort_pills, theme);
    render_row(out, "View", &nav.view_pills, theme);
}

fn render_row(out: &mut String, label: &str, pills: &[Pill], theme: &Theme) {
    let _ = write!(out, " {}{label:<5}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    for pill in pills {
        if pill.active {
            let _ = write!(
                out,
                "{}{}{} {} {}",
                Theme::bold(),
                Theme::fg(&theme.colors.pill_active_fg),
                Theme::bg(&theme.colors.pill_active_bg),
                pill.label,
                Theme::reset()
            );
        } else {
            let _ = write!(
                out,
                "{} {} {}",
                Theme::fg(&theme.colors.text_normal),
                pill.label,
                Theme::reset()
            );
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pill(label: &str, active: bool) -> Pill {
        Pill {
            label: label.into(),
            active,
        }
    }

    fn nav(collapsed: bool) -> NavInfo {
        NavInfo {
            collapsed,
            type_pills: vec![pill("All", false), pill("Fire", true)],
            sort_pills: vec![pill("# ↑", true), pill("A–Z", false)],
            view_pills: vec![pill("Grid", false), pill("List", true)],
        }
    }

    #[test]
    fn expanded_nav_lists_every_choice() {
        let mut out = String::new();
        render_nav(&mut out, &nav(false), &Theme::builtin_dark());
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("A–Z"));
    }

    #[test]
    fn collapsed_nav_shows_active_choices_only() {
        let mut out = String::new();
        render_nav(&mut out, &nav(true), &Theme::builtin_dark());
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("Fire · # ↑ · List"));
        assert!(!out.contains("Grid"));
    }
}
