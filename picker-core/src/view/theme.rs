//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants from the Catppuccin Mocha palette
//! (https://github.com/catppuccin/catppuccin), the palette names the header
//! color id can refer to, and [`HeaderStyle`].

use ratatui::style::{Color, Style};
use tracing::{debug, warn};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const BLUE: Color = Color::Rgb(137, 180, 250); // Blue
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

/// Header color used when a configured color id does not resolve.
pub const DEFAULT_HEADER_COLOR: Color = CYAN;

/// Resolve a palette color name (case-insensitive).
#[must_use]
pub fn color_by_id(id: &str) -> Option<Color> {
    let color = match id.trim().to_ascii_lowercase().as_str() {
        "background" | "base" => BACKGROUND,
        "current_line" | "surface" => CURRENT_LINE,
        "foreground" | "text" => FOREGROUND,
        "comment" | "overlay" => COMMENT,
        "blue" => BLUE,
        "cyan" | "sky" => CYAN,
        "green" => GREEN,
        "orange" | "peach" => ORANGE,
        "pink" => PINK,
        "purple" | "mauve" => PURPLE,
        "red" => RED,
        "yellow" => YELLOW,
        _ => return None,
    };
    Some(color)
}

/// Parse a raw `#RRGGBB` background value.
#[must_use]
pub fn parse_raw_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

/// Background of the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    background: Color,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            background: CURRENT_LINE,
        }
    }
}

impl HeaderStyle {
    /// Set a raw background value. `None` is ignored.
    pub fn set_header_background(&mut self, background: Option<Color>) {
        if let Some(color) = background {
            debug!("Header background set to {:?}", color);
            self.background = color;
        }
    }

    /// Set the background from a palette color id. An empty id is ignored;
    /// an unknown one falls back to [`DEFAULT_HEADER_COLOR`].
    pub fn set_header_background_id(&mut self, color_id: &str) {
        if color_id.trim().is_empty() {
            return;
        }

        match color_by_id(color_id) {
            Some(color) => self.background = color,
            None => {
                warn!(
                    "Unknown header color id {:?}, falling back to default",
                    color_id
                );
                self.background = DEFAULT_HEADER_COLOR;
            }
        }
    }

    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn style(&self) -> Style {
        Style::default().bg(self.background).fg(BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_background_is_ignored() {
        let mut header = HeaderStyle::default();
        header.set_header_background(None);
        assert_eq!(header.background(), CURRENT_LINE);

        header.set_header_background(Some(RED));
        assert_eq!(header.background(), RED);
    }

    #[test]
    fn test_color_id_resolution() {
        let mut header = HeaderStyle::default();

        header.set_header_background_id("");
        assert_eq!(header.background(), CURRENT_LINE);

        header.set_header_background_id("Purple");
        assert_eq!(header.background(), PURPLE);

        header.set_header_background_id("no-such-color");
        assert_eq!(header.background(), DEFAULT_HEADER_COLOR);
    }

    #[test]
    fn test_parse_raw_color() {
        assert_eq!(parse_raw_color("#1e1e2e"), Some(Color::Rgb(30, 30, 46)));
        assert_eq!(parse_raw_color("1e1e2e"), None);
        assert_eq!(parse_raw_color("#12345"), None);
        assert_eq!(parse_raw_color("#gggggg"), None);
    }
}
