//! Filter-sort pipeline.
//!
//! [`project`] turns the fetched collection, the free-text query and the view
//! state into the ordered list the UI shows. It is pure and total: the input
//! slice is never mutated and the result is always a fresh vector.

pub mod filter;
pub mod sort;

pub use filter::{matches_query, matches_type, normalize_query};
pub use sort::{collate, order};

use crate::domain::CollectionItem;
use crate::view::ViewState;

/// Filters `items` by `query` and the view's type, then sorts by the view's
/// sort key.
///
/// # Examples
///
/// ```
/// use dexview::domain::CollectionItem;
/// use dexview::pipeline::project;
/// use dexview::view::decode;
///
/// let items = vec![
///     CollectionItem::new("001", "Bulbasaur", "1", &["Grass", "Poison"]),
///     CollectionItem::new("004", "Charmander", "4", &["Fire"]),
/// ];
/// let shown = project(&items, "char", &decode(""));
/// assert_eq!(shown.len(), 1);
/// assert_eq!(shown[0].name, "Charmander");
/// ```
#[must_use]
pub fn project(items: &[CollectionItem], query: &str, view: &ViewState) -> Vec<CollectionItem> {
    let _span = tracing::debug_span!(
        "project",
        total_items = items.len(),
        query_len = query.len(),
        type_filter = view.type_filter.as_str(),
        sort = view.sort.as_str()
    )
    .entered();

    let mut shown: Vec<CollectionItem> = filter::select(items, query, view.type_filter)
        .into_iter()
        .cloned()
        .collect();
    order(&mut shown, Some(view.sort));

    tracing::debug!(shown = shown.len(), "pipeline recomputed");
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PokemonType, SortKey, TypeFilter, ViewMode};

    fn sample() -> Vec<CollectionItem> {
        vec![
            CollectionItem::new("001", "Bulbasaur", "1", &["Grass", "Poison"]),
            CollectionItem::new("004", "Charmander", "4", &["Fire"]),
        ]
    }

    fn view(type_filter: TypeFilter, sort: SortKey) -> ViewState {
        ViewState {
            type_filter,
            sort,
            mode: ViewMode::Grid,
        }
    }

    #[test]
    fn text_query_selects_by_name() {
        let shown = project(&sample(), "char", &view(TypeFilter::All, SortKey::NumberAsc));
        assert_eq!(shown, vec![sample()[1].clone()]);
    }

    #[test]
    fn type_filter_selects_by_tag() {
        let shown = project(
            &sample(),
            "",
            &view(TypeFilter::Only(PokemonType::Fire), SortKey::NumberAsc),
        );
        assert_eq!(shown, vec![sample()[1].clone()]);
    }

    #[test]
    fn no_constraints_returns_everything_sorted() {
        let shown = project(&sample(), "", &view(TypeFilter::All, SortKey::NumberDesc));
        let names: Vec<_> = shown.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Charmander", "Bulbasaur"]);
    }

    #[test]
    fn projection_is_idempotent() {
        let items = vec![
            CollectionItem::new("a", "Zubat", "41", &["Poison"]),
            CollectionItem::new("b", "Ekans", "23", &["Poison"]),
            CollectionItem::new("c", "Oddish", "43", &["Grass", "Poison"]),
            CollectionItem::new("d", "Pidgey", "16", &["Normal", "Flying"]),
        ];
        let vs = view(TypeFilter::Only(PokemonType::Poison), SortKey::NameAsc);
        let once = project(&items, "a", &vs);
        assert_eq!(project(&once, "a", &vs), once);
    }

    #[test]
    fn name_sort_places_accented_names_in_alphabet_order() {
        let items = vec![
            CollectionItem::new("a", "Zubat", "41", &["Poison"]),
            CollectionItem::new("b", "Élekid", "239", &["Electric"]),
            CollectionItem::new("c", "Abra", "63", &["Psychic"]),
        ];
        let shown = project(&items, "", &crate::view::decode("sort=nameAsc"));
        let names: Vec<_> = shown.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Abra", "Élekid", "Zubat"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for sort in SortKey::ALL {
            assert!(project(&[], "anything", &view(TypeFilter::All, sort)).is_empty());
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let items = sample();
        let before = items.clone();
        let _ = project(&items, "", &view(TypeFilter::All, SortKey::NameDesc));
        assert_eq!(items, before);
    }
}
