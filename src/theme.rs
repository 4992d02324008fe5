//! Color theme system for jsonscope
//!
//! Two independent mechanisms, mirroring the tool's UI model:
//! - the page-wide dark/light scheme selected via the theme toggle, and
//! - the editor palette, which starts on a custom "hacker" look and follows
//!   the built-in dark/light pair once the toggle has been used.

use ratatui::style::Color;
use std::fmt;

/// Page-wide color theme, toggled at runtime (Ctrl+L).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark scheme (default)
    Dark,
    /// Light scheme
    Light,
}

impl Theme {
    /// Get the color scheme for this theme
    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Dark => ColorScheme::dark(),
            Theme::Light => ColorScheme::light(),
        }
    }

    /// The other theme, for the toggle action
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(anyhow::anyhow!(
                "Unknown theme '{s}'. Available: dark, light"
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// Color scheme for a theme
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Background color for normal content
    pub background: Color,
    /// Primary text color
    pub text: Color,
    /// Dimmed text color (for secondary info)
    pub text_dim: Color,
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocused_border: Color,
    /// Background for selected list items
    pub selection_bg: Color,
    /// Foreground for selected list items
    pub selection_fg: Color,
    /// Success alert color
    pub alert_success: Color,
    /// Error alert color
    pub alert_error: Color,
    /// Tree pane: object keys
    pub tree_key: Color,
    /// Tree pane: string literals
    pub tree_string: Color,
    /// Tree pane: number literals
    pub tree_number: Color,
    /// Tree pane: true/false/null
    pub tree_keyword: Color,
    /// Tree pane: brackets and toggle glyphs
    pub tree_punct: Color,
}

impl ColorScheme {
    /// Dark scheme (default) - subtle RGB tints over black
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            text_dim: Color::Gray,
            focus_border: Color::Yellow,
            unfocused_border: Color::Gray,
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            alert_success: Color::Green,
            alert_error: Color::Red,
            tree_key: Color::Rgb(180, 220, 230),
            tree_string: Color::Rgb(210, 230, 180),
            tree_number: Color::Rgb(230, 220, 180),
            tree_keyword: Color::Rgb(220, 210, 240),
            tree_punct: Color::Rgb(240, 240, 230),
        }
    }

    /// Light scheme - dark ink on a white page
    pub fn light() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            text_dim: Color::DarkGray,
            focus_border: Color::Blue,
            unfocused_border: Color::DarkGray,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            alert_success: Color::Rgb(0, 128, 0),
            alert_error: Color::Rgb(178, 34, 34),
            tree_key: Color::Rgb(0, 90, 130),
            tree_string: Color::Rgb(40, 110, 10),
            tree_number: Color::Rgb(150, 90, 0),
            tree_keyword: Color::Rgb(90, 50, 160),
            tree_punct: Color::Rgb(60, 60, 60),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Editor pane palette, applied to the text widget itself.
#[derive(Debug, Clone, Copy)]
pub struct EditorPalette {
    pub foreground: Color,
    pub background: Color,
    pub cursor: Color,
    pub line_number: Color,
    pub selection: Color,
}

impl EditorPalette {
    /// The custom startup palette: green-on-black terminal look.
    pub fn hacker() -> Self {
        Self {
            foreground: Color::Rgb(0x00, 0xFF, 0x66),
            background: Color::Black,
            cursor: Color::Rgb(0x00, 0xFF, 0x66),
            line_number: Color::Rgb(0x00, 0x7A, 0x33),
            selection: Color::Rgb(0x00, 0x33, 0x11),
        }
    }

    /// Built-in palette matching the page theme; used once the theme toggle
    /// has been pressed (the custom palette is never restored, like the
    /// original editor widget's theme switch).
    pub fn builtin(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                foreground: Color::Rgb(212, 212, 212),
                background: Color::Rgb(30, 30, 30),
                cursor: Color::Rgb(212, 212, 212),
                line_number: Color::Rgb(133, 133, 133),
                selection: Color::Rgb(38, 79, 120),
            },
            Theme::Light => Self {
                foreground: Color::Rgb(30, 30, 30),
                background: Color::White,
                cursor: Color::Rgb(30, 30, 30),
                line_number: Color::Rgb(110, 110, 110),
                selection: Color::Rgb(173, 214, 255),
            },
        }
    }
}
