//! Detail overlay renderer.
//!
//! Draws the open record as a framed panel below the list, one labeled row
//! per attribute.

use std::fmt::Write;

use super::cards::write_chips;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailBody, DetailPanel, DetailValue, DETAIL_ERROR_TEXT, LOADING_TEXT, NOT_FOUND_TEXT,
};

const LABEL_WIDTH: usize = 16;

pub fn render_detail(out: &mut String, panel: &DetailPanel, theme: &Theme, cols: usize) {
    let border = Theme::fg(&theme.colors.border);
    let width = cols.saturating_sub(2);
    let title = format!(" {} ", panel.title);
    let _ = writeln!(
        out,
        "{border}┌{}{}{title}{}{border}{}┐{}",
        Theme::reset(),
        Theme::bold(),
        Theme::reset(),
        "─".repeat(width.saturating_sub(title.chars().count())),
        Theme::reset()
    );

    match &panel.body {
        DetailBody::Loading => line(out, &theme.colors.text_dim, LOADING_TEXT),
        DetailBody::Failed => line(out, &theme.colors.error_fg, DETAIL_ERROR_TEXT),
        DetailBody::NotFound => line(out, &theme.colors.text_dim, NOT_FOUND_TEXT),
        DetailBody::Record { image, rows } => {
            if !image.is_empty() {
                line(out, &theme.colors.text_dim, image);
            }
            for row in rows {
                let _ = write!(
                    out,
                    "  {}{:<width$}{}",
                    Theme::fg(&theme.colors.text_dim),
                    row.label,
                    Theme::reset(),
                    width = LABEL_WIDTH
                );
                match &row.value {
                    DetailValue::Text(text) => {
                        let _ = write!(out, "{}{text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
                    }
                    DetailValue::Chips(tags) if tags.is_empty() => {
                        let _ = write!(out, "{}–{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
                    }
                    DetailValue::Chips(tags) => {
                        write_chips(out, tags, theme);
                    }
                }
                out.push('\n');
            }
        }
    }

    let _ = writeln!(out, "{border}└{}┘{}", "─".repeat(width), Theme::reset());
}

fn line(out: &mut String, color: &str, text: &str) {
    let _ = writeln!(out, "  {}{text}{}", Theme::fg(color), Theme::reset());
}
