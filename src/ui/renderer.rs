//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the `UIViewModel` from `AppState`, then
//! hand each region to its component. The result is one ANSI-styled frame as
//! a `String`; the shell decides where to print it.
//!
//! # Layout
//!
//! ```text
//! [Header: title + location]
//! [Border]
//! [Nav pills]
//! [Search bar]
//! [List body]
//! [Detail overlay, when open]
//! [Border]
//! [Footer]
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current state into a frame `cols` columns wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let _span = tracing::trace_span!("render", cols).entered();
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, state.active_theme(), cols)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    components::render_header(&mut out, &vm.header, theme, cols);
    components::render_border(&mut out, &theme.colors.border, cols);
    components::render_nav(&mut out, &vm.nav, theme);
    components::render_search_bar(&mut out, &vm.search_bar, theme, cols);
    components::render_list_body(&mut out, &vm.list, theme, cols);
    if let Some(panel) = &vm.detail {
        components::render_detail(&mut out, panel, theme, cols);
    }
    components::render_border(&mut out, &theme.colors.border, cols);
    components::render_footer(&mut out, &vm.footer, theme, cols);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ThemeMode;
    use crate::domain::CollectionItem;
    use crate::ui::theme::Themes;
    use crate::ui::viewmodel::{COLLECTION_ERROR_TEXT, LOADING_TEXT};
    use crate::view::Location;

    fn state(path: &str) -> AppState {
        AppState::new(Location::parse(path), 1000, 100, ThemeMode::Dark, Themes::default())
    }

    #[test]
    fn frame_contains_every_region() {
        let mut s = state("/pokemon/Pikachu?view=list");
        let req = s.collection.begin(1000);
        s.collection
            .apply_loaded(req.request_id, vec![CollectionItem::new("p", "Pikachu", "025", &["Electric"])]);
        s.refresh_visible();
        let location = s.location.clone();
        assert!(s.navigate(location).is_some());

        let frame = render(&s, 80);
        assert!(frame.contains("Pokédex"));
        assert!(frame.contains("/pokemon/Pikachu?view=list"));
        assert!(frame.contains("Electric"));
        assert!(frame.contains(LOADING_TEXT));
    }

    #[test]
    fn theme_toggle_changes_palette() {
        let mut s = state("/pokemon");
        let dark = render(&s, 60);
        s.theme.toggle();
        let light = render(&s, 60);
        assert_ne!(dark, light);
    }

    #[test]
    fn collection_failure_shows_error_text() {
        let mut s = state("/pokemon");
        let req = s.collection.begin(1000);
        s.collection.apply_failed(req.request_id, "boom".into());
        assert!(render(&s, 60).contains(COLLECTION_ERROR_TEXT));
    }
}
