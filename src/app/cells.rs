//! Independently owned UI state cells.
//!
//! Each cell has one writer (`toggle`) and any number of readers. They are
//! plain values passed to whoever needs them; nothing here is global.

use serde::{Deserialize, Serialize};

/// Whether the navigation panel is collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavCell {
    collapsed: bool,
}

impl NavCell {
    #[must_use]
    pub const fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        self.collapsed
    }
}

/// Color scheme mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses `dark` or `light` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeCell {
    mode: ThemeMode,
}

impl ThemeCell {
    #[must_use]
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Flips between dark and light.
    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_toggle_flips_collapsed() {
        let mut nav = NavCell::default();
        assert!(!nav.is_collapsed());
        nav.toggle();
        assert!(nav.is_collapsed());
        nav.toggle();
        assert!(!nav.is_collapsed());
    }

    #[test]
    fn theme_toggle_alternates_modes() {
        let mut theme = ThemeCell::default();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn theme_mode_parses_loosely() {
        assert_eq!(ThemeMode::parse(" Light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }
}
