//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes are TOML documents. Three are built in; a custom one can be
//! loaded from a file.
//!
//! # Built-in Themes
//!
//! - `signbridge`: Brand palette, warm dark tones (default)
//! - `catppuccin-mocha`: Dark theme with pastel accents
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f4efe6"
//! header_bg = "#3e1f0d"          # optional
//! tab_active_fg = "#3e1f0d"
//! tab_active_bg = "#b9b04a"
//! selection_fg = "#f4efe6"
//! selection_bg = "#d12318"
//! text_normal = "#ede6da"
//! text_dim = "#9c8f80"
//! border = "#5c3a22"
//! search_bar_border = "#d12318"
//! match_highlight_fg = "#3e1f0d"
//! match_highlight_bg = "#b9b04a"
//! empty_state_fg = "#b9b04a"
//! error_fg = "#d12318"
//! heading_fg = "#b9b04a"
//! tag_fg = "#c9a27e"
//! badge_easy = "#b9b04a"
//! badge_medium = "#e0a458"
//! badge_hard = "#d12318"
//! ```
//!
//! # Example
//!
//! ```
//! use signbridge::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(Theme::fg(&theme.colors.header_fg).starts_with("\u{1b}[38;2;"));
//! # let _ = styled;
//! ```

use crate::domain::error::{Result, SignBridgeError};
use crate::ui::viewmodel::DifficultyTier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "signbridge";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active page tab.
    pub tab_active_fg: String,
    pub tab_active_bg: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles and secondary info.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    /// Store failures.
    pub error_fg: String,

    /// Section headings of static copy and the detail panel.
    pub heading_fg: String,
    /// Category chips.
    pub tag_fg: String,

    /// Difficulty badge colours per tier. Unrecognised labels use `text_dim`.
    pub badge_easy: String,
    pub badge_medium: String,
    pub badge_hard: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "signbridge" => include_str!("../../themes/signbridge.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SignBridgeError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SignBridgeError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| SignBridgeError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Foreground colour of a difficulty badge.
    #[must_use]
    pub fn badge_color(&self, tier: DifficultyTier) -> &str {
        match tier {
            DifficultyTier::Easy => &self.colors.badge_easy,
            DifficultyTier::Medium => &self.colors.badge_medium,
            DifficultyTier::Hard => &self.colors.badge_hard,
            DifficultyTier::Other => &self.colors.text_dim,
        }
    }

    /// Converts a hex color to an RGB tuple, falling back to white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
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
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `signbridge` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the theme tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in signbridge theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in ["signbridge", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_colors_become_escapes() {
        assert_eq!(Theme::fg("#d12318"), "\u{1b}[38;2;209;35;24m");
        assert_eq!(Theme::bg("3e1f0d"), "\u{1b}[48;2;62;31;13m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn badge_colors_follow_tier() {
        let theme = Theme::default();
        assert_eq!(theme.badge_color(DifficultyTier::Hard), theme.colors.badge_hard);
        assert_eq!(theme.badge_color(DifficultyTier::Other), theme.colors.text_dim);
    }

    #[test]
    fn custom_theme_file_round_trips() {
        let theme = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn unreadable_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Theme::from_file(&missing), Err(SignBridgeError::Theme(_))));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "name = ").unwrap();
        assert!(matches!(Theme::from_file(&broken), Err(SignBridgeError::Theme(_))));
    }
}
