//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared `String` buffer; the renderer
//! decides the order.
//!
//! # Components
//!
//! - [`header`]: Title and current location
//! - [`nav`]: Type, sort and view pills (collapsible)
//! - [`search`]: Search input box
//! - [`cards`]: Item grid or list, and the list status messages
//! - [`detail`]: Detail overlay for the open record
//! - [`footer`]: Command hints

mod cards;
mod detail;
mod footer;
mod header;
mod nav;
mod search;

pub use cards::render_list_body;
pub use detail::render_detail;
pub use footer::render_footer;
pub use header::render_header;
pub use nav::render_nav;
pub use search::render_search_bar;

use std::fmt::Write;

use crate::ui::theme::Theme;

/// Appends a horizontal border line.
pub fn render_border(out: &mut String, color: &str, cols: usize) {
    let _ = writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}
