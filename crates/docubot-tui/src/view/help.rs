use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(64, 30, area);

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        // Navigation section
        section_header("Navigation", theme),
        key_line("Enter", "Open the demo (from the landing page)", theme),
        key_line("Esc", "Back to the landing page / close popup", theme),
        key_line("j / \u{2193}", "Scroll down", theme),
        key_line("k / \u{2191}", "Scroll up", theme),
        key_line("Ctrl+d / PgDn", "Page down", theme),
        key_line("Ctrl+u / PgUp", "Page up", theme),
        key_line("g / Home", "Go to top", theme),
        key_line("G / End", "Go to bottom", theme),
        Line::from(""),
        // Upload form
        section_header("Upload form (demo)", theme),
        key_line("o / a", "Choose a PDF file", theme),
        key_line("/ or i", "Edit the query", theme),
        key_line("m", "Toggle the custom NER model", theme),
        key_line("u / Enter", "Upload the selected PDF", theme),
        Line::from(""),
        // Results
        section_header("Results (demo)", theme),
        key_line("1", "Expand/collapse named entities", theme),
        key_line("2", "Expand/collapse relevant chunks", theme),
        key_line("3", "Expand/collapse summary", theme),
        Line::from(""),
        // Global
        section_header("Global", theme),
        key_line("t", "Switch between light and dark mode", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
        key_line("Ctrl+c", "Force quit", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<16}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}

/// Create a centered rectangle of the given width (columns) and height (rows).
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
