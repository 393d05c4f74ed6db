use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::email::{Priority, Sentiment, Status};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0F, 0x11, 0x1A),
            text: Color::Rgb(0xC8, 0xCC, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4C, 0x9A, 0xFF),
            dim: Color::Rgb(0x7A, 0x80, 0x94),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            yellow: Color::Rgb(0xEA, 0xB3, 0x08),
            green: Color::Rgb(0x22, 0xC5, 0x5E),
            blue: Color::Rgb(0x3B, 0x82, 0xF6),
            purple: Color::Rgb(0x93, 0x33, 0xEA),
            selection_bg: Color::Rgb(0x1E, 0x2A, 0x44),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0F, 0x11, 0x1A),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from `[ui.colors]`, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "blue" => theme.blue = color,
                "purple" => theme.purple = color,
                "selection_bg" => theme.selection_bg = color,
                "search_match_bg" => theme.search_match_bg = color,
                "search_match_fg" => theme.search_match_fg = color,
                _ => {}
            }
        }

        theme
    }

    /// Badge color for a sentiment
    pub fn sentiment_color(&self, sentiment: Sentiment) -> Color {
        match sentiment {
            Sentiment::Positive => self.green,
            Sentiment::Negative => self.red,
            Sentiment::Neutral => self.blue,
        }
    }

    /// Badge color for a priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Urgent => self.red,
            Priority::Normal => self.yellow,
            Priority::Low => self.dim,
        }
    }

    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Pending => self.yellow,
            Status::Resolved => self.green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("red".into(), "not-a-color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Invalid values leave the default in place
        assert_eq!(theme.red, Theme::default().red);
    }

    #[test]
    fn test_sentiment_colors() {
        let theme = Theme::default();
        assert_eq!(theme.sentiment_color(Sentiment::Positive), theme.green);
        assert_eq!(theme.sentiment_color(Sentiment::Negative), theme.red);
        assert_eq!(theme.sentiment_color(Sentiment::Neutral), theme.blue);
    }

    #[test]
    fn test_priority_colors() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(Priority::Urgent), theme.red);
        assert_eq!(theme.priority_color(Priority::Normal), theme.yellow);
        assert_eq!(theme.priority_color(Priority::Low), theme.dim);
    }
}
