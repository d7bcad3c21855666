//! Color configuration and the shared palette.

use ratatui::style::{Color, Modifier, Style};

/// Muted text (hints, placeholders).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Section headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Disabled by the `--no-color` flag, `color = false` in the config file,
/// or the `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved setting and environment.
    ///
    /// `NO_COLOR` (any value) wins over an enabled setting.
    pub fn from_env_and_setting(color_setting: bool) -> Self {
        let enabled = color_setting && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used across the panes.
///
/// Without colors, highlights fall back to modifiers so the cursor stays
/// visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Header bar.
    pub header: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Border of unfocused panes.
    pub border: Style,
    /// Highlighted list row.
    pub highlight: Style,
    /// Tag chip.
    pub tag: Style,
    /// Tag chip under the tag cursor while the tag pane is focused.
    pub selected_tag: Style,
    /// Field labels in the detail pane.
    pub label: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Error status messages.
    pub error: Style,
    /// Informational status messages.
    pub info: Style,
}

impl Palette {
    /// Build the palette for a color configuration.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Yellow),
                border: Style::default().fg(Color::Gray),
                highlight: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                tag: Style::default().fg(Color::Green),
                selected_tag: Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                label: Style::default().fg(Color::Yellow),
                muted: MUTED_TEXT,
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                info: Style::default().fg(Color::Green),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                tag: Style::default(),
                selected_tag: Style::default().add_modifier(Modifier::REVERSED),
                label: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                info: Style::default(),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::new(true))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color)]
    fn color_config_respects_disabled_setting() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_setting(false);
        assert!(!config.colors_enabled(), "--no-color should disable colors");
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_setting(true);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR with any value should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_setting(true).colors_enabled());
    }

    #[test]
    fn palette_with_colors_sets_foregrounds() {
        let palette = Palette::new(ColorConfig::new(true));
        assert!(palette.tag.fg.is_some());
        assert!(palette.error.fg.is_some());
    }

    #[test]
    fn palette_without_colors_uses_modifiers_only() {
        let palette = Palette::new(ColorConfig::new(false));
        assert_eq!(palette.tag.fg, None);
        assert_eq!(palette.highlight.bg, None);
        assert!(palette.highlight.add_modifier.contains(Modifier::REVERSED));
    }
}
