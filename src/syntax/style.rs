//! Presentation styles
//!
//! The highlighting core only produces [`Classification`]s. Colours are
//! resolved here, through a [`Theme`] lookup owned by the presentation layer.

use std::collections::HashMap;

use super::classification::Classification;

/// Display colors (ANSI 16-color palette plus true colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a colour name (`"blue"`, `"bright-red"`) or `#rrggbb`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let name = s.to_lowercase().replace(['-', '_', ' '], "");
        let color = match name.as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "brightblack" | "gray" | "grey" => Color::BrightBlack,
            "brightred" => Color::BrightRed,
            "brightgreen" => Color::BrightGreen,
            "brightyellow" => Color::BrightYellow,
            "brightblue" => Color::BrightBlue,
            "brightmagenta" => Color::BrightMagenta,
            "brightcyan" => Color::BrightCyan,
            "brightwhite" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Classification to style lookup table
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<Classification, Style>,
}

impl Theme {
    /// Theme with no styling at all
    pub fn plain() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Style for a classification; unclassified text is unstyled
    pub fn style(&self, classification: Option<Classification>) -> Style {
        classification
            .and_then(|c| self.styles.get(&c).copied())
            .unwrap_or_default()
    }

    /// Override the style of one classification
    pub fn set(&mut self, classification: Classification, style: Style) {
        self.styles.insert(classification, style);
    }

    /// Apply `name -> colour` overrides, returning the names that were ignored
    pub fn apply_overrides<'a>(
        &mut self,
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Vec<String> {
        let mut ignored = Vec::new();
        for (name, color) in overrides {
            match (Classification::from_name(name), Color::parse(color)) {
                (Some(classification), Some(color)) => {
                    let style = self.style(Some(classification)).with_fg(color);
                    self.set(classification, style);
                }
                _ => ignored.push(name.to_string()),
            }
        }
        ignored
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Self::plain();
        for classification in Classification::ALL {
            theme.set(classification, classification.default_style());
        }
        theme
    }
}
