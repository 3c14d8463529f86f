//! Comparators for the four sort keys.
//!
//! All sorting goes through `slice::sort_by`, which is stable, so equal keys
//! keep their input order in every direction.

use std::cmp::Ordering;

use feruca::Collator;

use crate::domain::CollectionItem;
use crate::view::SortKey;

/// Compares two names the way a human-facing list expects.
///
/// Uses the CLDR root collation, so accented letters sort with their base
/// letter and case only matters once the letters agree (lowercase first).
/// A final raw comparison keeps the order total.
///
/// ```
/// use std::cmp::Ordering;
/// use dexview::pipeline::collate;
///
/// assert_eq!(collate("abra", "Bulbasaur"), Ordering::Less);
/// assert_eq!(collate("eevee", "Eevee"), Ordering::Less);
/// assert_eq!(collate("Élekid", "Zubat"), Ordering::Less);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    collate_with(&mut Collator::default(), a, b)
}

fn collate_with(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator
        .collate(a, b)
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Numeric comparison of `number`, with unparsable values after every
/// parsable one regardless of direction.
fn compare_numbers(a: &CollectionItem, b: &CollectionItem, descending: bool) -> Ordering {
    match (a.numeric_number(), b.numeric_number()) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts `items` in place by `key`; `None` leaves the order untouched.
///
/// Name keys share one collator for the whole sort.
pub fn order(items: &mut [CollectionItem], key: Option<SortKey>) {
    let Some(key) = key else { return };
    match key {
        SortKey::NumberAsc => items.sort_by(|a, b| compare_numbers(a, b, false)),
        SortKey::NumberDesc => items.sort_by(|a, b| compare_numbers(a, b, true)),
        SortKey::NameAsc => {
            let mut collator = Collator::default();
            items.sort_by(|a, b| collate_with(&mut collator, &a.name, &b.name));
        }
        SortKey::NameDesc => {
            let mut collator = Collator::default();
            items.sort_by(|a, b| collate_with(&mut collator, &b.name, &a.name));
        }
    }
}
