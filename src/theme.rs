//! Color themes for the table browser, selectable via CLI flag.

use ratatui::style::Color;
use std::fmt;

/// Available color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Muted dark gray with a cyan accent (default)
    #[default]
    Slate,
    /// Classic DOS Blue - bright white on blue background
    DosBlue,
    /// Amber CRT - orange/amber text on black
    AmberCrt,
}

impl Theme {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "slate" => Ok(Theme::Slate),
            "dos" | "dosblue" | "dos-blue" => Ok(Theme::DosBlue),
            "amber" | "ambercrt" | "amber-crt" => Ok(Theme::AmberCrt),
            _ => Err(format!(
                "Unknown theme '{s}'. Available: slate, dos-blue, amber-crt"
            )),
        }
    }

    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Slate => ColorScheme::slate(),
            Theme::DosBlue => ColorScheme::dos_blue(),
            Theme::AmberCrt => ColorScheme::amber_crt(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Slate => write!(f, "slate"),
            Theme::DosBlue => write!(f, "dos-blue"),
            Theme::AmberCrt => write!(f, "amber-crt"),
        }
    }
}

/// Color scheme for a theme
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub background: Color,
    /// Primary text color
    pub text: Color,
    /// Dimmed text (hints, placeholder)
    pub text_dim: Color,
    /// Border color for the focused element
    pub focus_border: Color,
    pub unfocused_border: Color,
    /// Background/foreground of the highlighted table row
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Accent for the active sort column and key hints
    pub accent: Color,
    /// Blocking validation messages
    pub error: Color,
    /// Non-blocking validation messages
    pub warning: Color,
    /// Toast messages
    pub success: Color,
}

impl ColorScheme {
    pub fn slate() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            text_dim: Color::Gray,
            focus_border: Color::Cyan,
            unfocused_border: Color::DarkGray,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            accent: Color::Cyan,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
        }
    }

    pub fn dos_blue() -> Self {
        Self {
            background: Color::Blue,
            text: Color::White,
            text_dim: Color::LightBlue,
            focus_border: Color::Yellow,
            unfocused_border: Color::Cyan,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            accent: Color::LightCyan,
            error: Color::LightRed,
            warning: Color::Yellow,
            success: Color::LightGreen,
        }
    }

    pub fn amber_crt() -> Self {
        let amber = Color::Rgb(255, 176, 0);
        let amber_bright = Color::Rgb(255, 200, 100);
        let amber_dim = Color::Rgb(180, 120, 0);

        Self {
            background: Color::Black,
            text: amber,
            text_dim: amber_dim,
            focus_border: amber_bright,
            unfocused_border: amber_dim,
            selection_bg: amber,
            selection_fg: Color::Black,
            accent: amber_bright,
            error: Color::Red,
            warning: amber_bright,
            success: Color::Rgb(100, 255, 100),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::slate()
    }
}
