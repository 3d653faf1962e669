//! Colour palettes for the light and dark themes

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colours used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub warning: Color,
    pub positive: Color,
    pub selected_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                focus: Color::Blue,
                warning: Color::Red,
                positive: Color::Green,
                selected_bg: Color::LightBlue,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                focus: Color::Cyan,
                warning: Color::LightRed,
                positive: Color::LightGreen,
                selected_bg: Color::DarkGray,
            },
        }
    }

    /// Base style for plain text on the theme background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Border style, highlighted when the block has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_by_theme() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light, dark);
        assert_eq!(light.background, Color::White);
        assert_eq!(dark.background, Color::Black);
    }
}
