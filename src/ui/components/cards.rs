//! Item list renderer.
//!
//! Draws the list body in either layout: a grid of three-line cards or a
//! compact one-line-per-item list. Status bodies (loading, failure, empty)
//! render as a single centered message.

use std::fmt::Write;

use crate::ui::helpers::{pad, write_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, ListBody, COLLECTION_ERROR_TEXT, LOADING_TEXT,
};
use crate::view::ViewMode;

/// Width of one grid card including its right gutter.
const CARD_WIDTH: usize = 26;

/// Width of the name column in list layout.
const NAME_COLUMN: usize = 16;

pub fn render_list_body(out: &mut String, body: &ListBody, theme: &Theme, cols: usize) {
    match body {
        ListBody::Loading => render_message(out, LOADING_TEXT, &theme.colors.text_dim, cols),
        ListBody::Failed => render_message(out, COLLECTION_ERROR_TEXT, &theme.colors.error_fg, cols),
        ListBody::Empty(empty) => render_message(out, &empty.message, &theme.colors.text_dim, cols),
        ListBody::Cards {
            mode: ViewMode::Grid,
            items,
        } => render_grid(out, items, theme, cols),
        ListBody::Cards {
            mode: ViewMode::List,
            items,
        } => render_rows(out, items, theme),
    }
}

fn render_message(out: &mut String, message: &str, color: &str, cols: usize) {
    let padding = cols.saturating_sub(message.chars().count()) / 2;
    let _ = writeln!(out, "\n{}{}{message}{}\n", Theme::fg(color), " ".repeat(padding), Theme::reset());
}

/// Lays cards out left to right, as many per row as fit in `cols`.
fn render_grid(out: &mut String, items: &[DisplayItem], theme: &Theme, cols: usize) {
    let per_row = (cols / CARD_WIDTH).max(1);
    let inner = CARD_WIDTH - 2;

    for row in items.chunks(per_row) {
        for item in row {
            let label = format!("{:>3}  {}", item.index, item.number);
            let _ = write!(out, " {}{}{} ", Theme::fg(&theme.colors.text_dim), pad(&label, inner), Theme::reset());
        }
        out.push('\n');

        for item in row {
            let shown: String = item.name.chars().take(inner).collect();
            let _ = write!(out, " {}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
            write_highlighted_text(out, &shown, &item.highlight_ranges, theme);
            let _ = write!(out, "{}{} ", Theme::reset(), " ".repeat(inner.saturating_sub(shown.chars().count())));
        }
        out.push('\n');

        for item in row {
            let _ = write!(out, " ");
            let used = write_chips(out, &item.types, theme);
            let _ = write!(out, "{} ", " ".repeat(inner.saturating_sub(used)));
        }
        out.push_str("\n\n");
    }
}

fn render_rows(out: &mut String, items: &[DisplayItem], theme: &Theme) {
    for item in items {
        let _ = write!(
            out,
            "{}{:>4}  {:<6}{} {}",
            Theme::fg(&theme.colors.text_dim),
            item.index,
            item.number,
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal)
        );
        write_highlighted_text(out, &item.name, &item.highlight_ranges, theme);
        let _ = write!(
            out,
            "{}{} ",
            Theme::reset(),
            " ".repeat(NAME_COLUMN.saturating_sub(item.name.chars().count()))
        );
        write_chips(out, &item.types, theme);
        out.push('\n');
    }
}

/// Writes type chips and returns their visible width.
pub fn write_chips(out: &mut String, tags: &[String], theme: &Theme) -> usize {
    let mut width = 0;
    for tag in tags {
        let _ = write!(
            out,
            "{}{} {tag} {} ",
            Theme::fg(&theme.colors.chip_fg),
            Theme::bg(&theme.colors.chip_bg),
            Theme::reset()
        );
        width += tag.chars().count() + 3;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::EmptyState;

    fn item(index: usize, name: &str, types: &[&str]) -> DisplayItem {
        DisplayItem {
            index,
            name: name.into(),
            number: format!("#{index:03}"),
            types: types.iter().map(|t| (*t).to_string()).collect(),
            image: String::new(),
            highlight_ranges: vec![],
        }
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn status_bodies_render_their_text() {
        let theme = Theme::builtin_dark();
        let mut out = String::new();
        render_list_body(&mut out, &ListBody::Loading, &theme, 40);
        render_list_body(&mut out, &ListBody::Failed, &theme, 40);
        render_list_body(
            &mut out,
            &ListBody::Empty(EmptyState {
                message: "No Pokémon found.".into(),
            }),
            &theme,
            40,
        );
        let plain = strip_ansi(&out);
        assert!(plain.contains(LOADING_TEXT));
        assert!(plain.contains(COLLECTION_ERROR_TEXT));
        assert!(plain.contains("No Pokémon found."));
    }

    #[test]
    fn grid_wraps_cards_to_width() {
        let items = vec![
            item(1, "Bulbasaur", &["Grass", "Poison"]),
            item(2, "Ivysaur", &["Grass", "Poison"]),
            item(3, "Venusaur", &["Grass", "Poison"]),
        ];
        let mut out = String::new();
        render_list_body(
            &mut out,
            &ListBody::Cards {
                mode: ViewMode::Grid,
                items,
            },
            &Theme::builtin_dark(),
            CARD_WIDTH * 2,
        );
        let plain = strip_ansi(&out);
        let name_lines: Vec<_> = plain.lines().filter(|l| l.contains("saur")).collect();
        assert_eq!(name_lines.len(), 2);
        assert!(name_lines[0].contains("Bulbasaur") && name_lines[0].contains("Ivysaur"));
        assert!(name_lines[1].contains("Venusaur"));
    }

    #[test]
    fn list_layout_is_one_line_per_item() {
        let items = vec![item(1, "Pikachu", &["Electric"]), item(2, "Raichu", &["Electric"])];
        let mut out = String::new();
        render_list_body(
            &mut out,
            &ListBody::Cards {
                mode: ViewMode::List,
                items,
            },
            &Theme::builtin_light(),
            80,
        );
        let plain = strip_ansi(&out);
        assert_eq!(plain.lines().count(), 2);
        assert!(plain.lines().next().unwrap().contains("#001"));
        assert!(plain.contains(" Electric "));
    }
}
