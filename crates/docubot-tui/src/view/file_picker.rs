use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::App;
use crate::view::truncate;

/// Render the file picker as a centered popup over the demo screen.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let picker = &app.file_picker;
    let area = f.area();

    // Don't render if terminal too small
    if area.width < 40 || area.height < 10 {
        return;
    }

    let width = area.width.saturating_sub(8).min(72);
    let height = area.height.saturating_sub(4).min(24);
    let popup = centered_rect(width, height, area);

    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Select a PDF ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Length(1), // current dir
        Constraint::Min(3),    // file list
        Constraint::Length(1), // footer
    ])
    .split(inner);

    // Current directory
    let dir_display = truncate(
        &picker.current_dir.display().to_string(),
        (chunks[0].width as usize).saturating_sub(4),
    );
    let dir_line = Line::from(vec![
        Span::styled(" \u{1F4C1} ", Style::default().fg(theme.accent)),
        Span::styled(dir_display, Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(dir_line), chunks[0]);

    // File list, scrolled so the cursor stays visible
    let visible_height = chunks[1].height as usize;
    let scroll_offset = if picker.cursor >= visible_height && visible_height > 0 {
        picker.cursor - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let (icon, style) = if entry.is_dir {
                ("\u{1F4C1} ", Style::default().fg(theme.accent))
            } else if entry.is_pdf {
                ("\u{1F4C4} ", Style::default().fg(theme.text))
            } else {
                ("  ", Style::default().fg(theme.dim))
            };

            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(&entry.name, style),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(theme.highlight_style());

    let adjusted_cursor = picker.cursor.saturating_sub(scroll_offset);
    let mut state = ListState::default();
    state.select(Some(adjusted_cursor));
    f.render_stateful_widget(list, chunks[1], &mut state);

    // Footer
    let footer = Line::from(vec![
        Span::styled(
            " j/k:navigate  Enter:open dir / select file  Esc:cancel",
            theme.footer_style(),
        ),
        Span::styled(
            "  (non-PDF files are rejected)",
            Style::default().fg(theme.dim).add_modifier(Modifier::DIM),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
