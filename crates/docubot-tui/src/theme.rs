use ratatui::style::{Color, Modifier, Style};

use docubot_core::ThemeMode;

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
    pub tag_fg: Color,
    pub tag_bg: Color,
}

impl Theme {
    /// Palette for the stored mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme: white text, electric blue accents, dark blue header.
    pub fn dark() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            accent: Color::Rgb(60, 140, 255),
            error: Color::Rgb(255, 80, 80),
            success: Color::Rgb(0, 200, 80),
            spinner: Color::Rgb(60, 140, 255),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
            tag_fg: Color::Rgb(180, 210, 255),
            tag_bg: Color::Rgb(30, 50, 100),
        }
    }

    /// Light theme: dark text on the terminal's light background.
    pub fn light() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(50, 90, 180),
            border: Color::Rgb(150, 150, 160),
            text: Color::Black,
            dim: Color::Rgb(110, 110, 120),
            highlight_bg: Color::Rgb(210, 225, 250),
            accent: Color::Rgb(30, 90, 200),
            error: Color::Rgb(200, 30, 30),
            success: Color::Rgb(0, 140, 60),
            spinner: Color::Rgb(30, 90, 200),
            footer_fg: Color::Rgb(110, 110, 120),
            footer_bg: Color::Reset,
            tag_fg: Color::Rgb(20, 60, 140),
            tag_bg: Color::Rgb(205, 220, 250),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    /// Inline chip style for entity tags.
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag_fg).bg(self.tag_bg)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
