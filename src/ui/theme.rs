//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in palettes (`dark` and `light`) match the viewer's design
//! tokens. A custom palette can be loaded from a TOML file and takes the place
//! of one of the built-ins.
//!
//! # TOML Format
//!
//! ```toml
//! name = "midnight"
//!
//! [colors]
//! header_fg = "#e6e7eb"
//! text_normal = "#e6e7eb"
//! text_dim = "#a8acb8"
//! border = "#232634"
//! accent = "#6dd5fa"
//! chip_fg = "#dfe3ee"
//! chip_bg = "#1a1c24"
//! pill_active_fg = "#0b0c10"
//! pill_active_bg = "#6dd5fa"
//! match_highlight_fg = "#0b0c10"
//! match_highlight_bg = "#9bd7ff"
//! error_fg = "#ff6b6b"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app::ThemeMode;
use crate::domain::{DexError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions as hex strings (e.g. `"#e6e7eb"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    pub text_normal: String,
    /// Secondary text (numbers, labels, footer).
    pub text_dim: String,
    pub border: String,
    /// Interactive accent (search bar, selection markers).
    pub accent: String,

    /// Type chip colors.
    pub chip_fg: String,
    pub chip_bg: String,

    /// Active nav pill colors.
    pub pill_active_fg: String,
    pub pill_active_bg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Error and alert text.
    pub error_fg: String,
}

impl Theme {
    #[must_use]
    pub fn builtin_dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ThemeColors {
                header_fg: "#e6e7eb".into(),
                text_normal: "#e6e7eb".into(),
                text_dim: "#a8acb8".into(),
                border: "#232634".into(),
                accent: "#6dd5fa".into(),
                chip_fg: "#dfe3ee".into(),
                chip_bg: "#1a1c24".into(),
                pill_active_fg: "#0b0c10".into(),
                pill_active_bg: "#3ca0d0".into(),
                match_highlight_fg: "#0b0c10".into(),
                match_highlight_bg: "#9bd7ff".into(),
                error_fg: "#ff6b6b".into(),
            },
        }
    }

    #[must_use]
    pub fn builtin_light() -> Self {
        Self {
            name: "light".to_string(),
            colors: ThemeColors {
                header_fg: "#171e2b".into(),
                text_normal: "#171e2b".into(),
                text_dim: "#5b6273".into(),
                border: "#d5dae3".into(),
                accent: "#3ca0d0".into(),
                chip_fg: "#171e2b".into(),
                chip_bg: "#e3e8f0".into(),
                pill_active_fg: "#f7f9fc".into(),
                pill_active_bg: "#3ca0d0".into(),
                match_highlight_fg: "#171e2b".into(),
                match_highlight_bg: "#9bd7ff".into(),
                error_fg: "#d64545".into(),
            },
        }
    }

    /// Returns the built-in palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::builtin_dark(),
            ThemeMode::Light => Self::builtin_light(),
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DexError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents).map_err(|e| DexError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB, falling back to white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for `hex`.
    ///
    /// ```
    /// use dexview::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// The dark and light palettes the theme toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themes {
    dark: Theme,
    light: Theme,
}

impl Default for Themes {
    fn default() -> Self {
        Self {
            dark: Theme::builtin_dark(),
            light: Theme::builtin_light(),
        }
    }
}

impl Themes {
    /// Replaces the palette used for `mode`.
    #[must_use]
    pub fn with_custom(mut self, mode: ThemeMode, theme: Theme) -> Self {
        match mode {
            ThemeMode::Dark => self.dark = theme,
            ThemeMode::Light => self.light = theme,
        }
        self
    }

    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn custom_theme_loads_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = toml::to_string(&Theme {
            name: "midnight".into(),
            ..Theme::builtin_dark()
        })
        .unwrap();
        file.write_all(body.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "midnight");

        let themes = Themes::default().with_custom(ThemeMode::Light, theme);
        assert_eq!(themes.get(ThemeMode::Light).name, "midnight");
        assert_eq!(themes.get(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn invalid_toml_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(DexError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(DexError::Theme(_))
        ));
    }
}
