//! Color palette and shared styles (Kanagawa Wave subset).

pub mod colors {
    use ratatui::style::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
}

pub mod styles {
    use super::colors;
    use ratatui::style::{Modifier, Style};

    pub fn title() -> Style {
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    pub fn config_value() -> Style {
        Style::default().fg(colors::GREEN)
    }

    pub fn environment_value() -> Style {
        Style::default().fg(colors::YELLOW)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }
}
