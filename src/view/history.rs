//! Session history of visited locations.
//!
//! Push navigations (opening an item) add an entry and drop any
//! forward entries. Replace navigations (view-state edits) overwrite the
//! current entry, so back skips over filter and sort tweaks. Closing an
//! overlay steps back to the list it was opened from.

use super::route::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    pub fn replace(&mut self, location: Location) {
        self.entries[self.cursor] = location;
    }

    /// Records a navigation, pushing or replacing.
    pub fn record(&mut self, location: Location, replace: bool) {
        if replace {
            self.replace(location);
        } else {
            self.push(location);
        }
    }

    /// Records leaving a pushed entry for `location`.
    ///
    /// Steps back when the previous entry is `location`, so a later
    /// [`History::back`] does not return to the entry just left. Pushes
    /// `location` otherwise, e.g. when the session started on a detail page.
    pub fn leave(&mut self, location: Location) {
        let previous = self.cursor.checked_sub(1).map(|i| &self.entries[i]);
        if previous == Some(&location) {
            self.cursor -= 1;
        } else {
            self.push(location);
        }
    }

    /// Steps back, returning the new current location.
    pub fn back(&mut self) -> Option<&Location> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.current())
    }

    /// Steps forward, returning the new current location.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_does_not_grow_history() {
        let mut history = History::default();
        history.record(Location::parse("/pokemon?sort=nameAsc"), true);
        history.record(Location::parse("/pokemon?sort=nameDesc"), true);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().query, "sort=nameDesc");
        assert!(history.back().is_none());
    }

    #[test]
    fn back_and_forward_walk_pushed_entries() {
        let mut history = History::default();
        history.record(Location::parse("/pokemon/Eevee"), false);
        assert_eq!(history.back().map(ToString::to_string).as_deref(), Some("/pokemon"));
        assert_eq!(
            history.forward().map(ToString::to_string).as_deref(),
            Some("/pokemon/Eevee")
        );
        assert!(history.forward().is_none());
    }

    #[test]
    fn leaving_an_opened_entry_steps_back() {
        let mut history = History::new(Location::parse("/pokemon?type=Fire"));
        history.record(Location::parse("/pokemon/Charmander?type=Fire"), false);
        history.leave(Location::parse("/pokemon?type=Fire"));
        assert_eq!(history.current().to_string(), "/pokemon?type=Fire");
        assert!(history.back().is_none());
        assert_eq!(
            history.forward().map(ToString::to_string).as_deref(),
            Some("/pokemon/Charmander?type=Fire")
        );
    }

    #[test]
    fn leaving_a_deep_link_pushes_the_list() {
        let mut history = History::new(Location::parse("/pokemon/Eevee"));
        history.leave(Location::parse("/pokemon"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().to_string(), "/pokemon");
        assert_eq!(history.back().map(ToString::to_string).as_deref(), Some("/pokemon/Eevee"));
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = History::default();
        history.push(Location::parse("/pokemon/Eevee"));
        history.back();
        history.push(Location::parse("/pokemon/Pikachu"));
        assert_eq!(history.len(), 2);
        assert!(history.forward().is_none());
        assert_eq!(history.current().to_string(), "/pokemon/Pikachu");
    }
}
