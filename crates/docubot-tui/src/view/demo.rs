use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, InputMode};
use crate::model::form::QUERY_PLACEHOLDER;
use crate::model::results::{ResultSection, ResultsPanel};
use crate::theme::Theme;
use crate::view::{spinner_char, truncate};

/// Render the demo screen into the given area.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(9), // upload form
        Constraint::Min(5),    // results
        Constraint::Length(1), // footer
    ])
    .split(area);

    render_header(f, chunks[0], app);
    render_form(f, chunks[1], app);
    render_results(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let header = Line::from(vec![
        Span::styled(" DOCUBOT ", theme.header_style()),
        Span::styled(
            " Docubot Demo",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);

    let toggle = Line::from(Span::styled(
        format!("t: {} ", app.theme_store.mode().toggle_label()),
        Style::default().fg(theme.dim),
    ))
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(toggle), area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    // Selected file
    let name_width = (area.width as usize).saturating_sub(22);
    match app.form.file_label() {
        Some(name) => lines.push(Line::from(vec![
            Span::styled("  \u{2713} ", Style::default().fg(theme.success)),
            Span::styled("Selected file: ", Style::default().fg(theme.dim)),
            Span::styled(
                truncate(&name, name_width),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ])),
        None => lines.push(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.dim)),
            Span::styled(
                "o",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to choose your PDF file", Style::default().fg(theme.dim)),
        ])),
    }

    // Query field with a block cursor while editing
    let editing = app.input_mode == InputMode::TextInput;
    if app.form.query.is_empty() && !editing {
        lines.push(Line::from(vec![
            Span::styled("  Query: ", Style::default().fg(theme.dim)),
            Span::styled(
                QUERY_PLACEHOLDER,
                Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
            ),
        ]));
    } else {
        let cursor = if editing { "\u{2588}" } else { "" };
        lines.push(Line::from(vec![
            Span::styled("  Query: ", Style::default().fg(theme.dim)),
            Span::styled(app.form.query.clone(), Style::default().fg(theme.text)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]));
    }

    // Custom model checkbox
    let checkbox = if app.form.use_custom_model {
        "[x]"
    } else {
        "[ ]"
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {checkbox} "), Style::default().fg(theme.accent)),
        Span::styled("Use custom NER model", Style::default().fg(theme.text)),
    ]));

    lines.push(Line::from(""));

    // Submit control, replaced by the spinner while an upload runs
    if app.form.uploading {
        lines.push(Line::from(Span::styled(
            format!("  {} Uploading...", spinner_char(app.tick)),
            Style::default()
                .fg(theme.spinner)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                " [u] Upload PDF ",
                Style::default()
                    .fg(theme.header_fg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    // Inline form error
    match &app.form.error {
        Some(msg) => lines.push(Line::from(Span::styled(
            format!("  \u{2717} {msg}"),
            theme.error_style(),
        ))),
        None => lines.push(Line::from("")),
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Upload "),
    );
    f.render_widget(form, area);
}

fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let border = app.theme.border_style();
    let lines = results_lines(&app.results, &app.theme);

    // Keep the last line reachable at the top of the viewport
    let max_scroll = lines.len().saturating_sub(1) as u16;
    app.results.scroll = app.results.scroll.min(max_scroll);

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Results "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.results.scroll, 0));
    f.render_widget(content, area);
}

/// Build the section lines for the current analysis.
///
/// A section shows up only when its data is non-empty; its number key
/// collapses the body but keeps the header.
fn results_lines(results: &ResultsPanel, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    if results.analysis.is_none() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Upload a PDF to see its analysis.",
            Style::default().fg(theme.dim),
        )));
        return lines;
    }

    for section in ResultSection::all() {
        if !results.eligible(section) {
            continue;
        }
        let marker = if results.expanded(section) {
            '\u{25BE}'
        } else {
            '\u{25B8}'
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} {}", marker, section.title()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", section.hotkey()),
                Style::default().fg(theme.dim),
            ),
        ]));
        if results.expanded(section) {
            section_body(&mut lines, results, section, theme);
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  The analysis came back empty.",
            Style::default().fg(theme.dim),
        )));
    }

    lines
}

fn section_body(
    lines: &mut Vec<Line<'static>>,
    results: &ResultsPanel,
    section: ResultSection,
    theme: &Theme,
) {
    let Some(analysis) = &results.analysis else {
        return;
    };
    match section {
        ResultSection::Entities => {
            for (label, values) in results.entity_rows() {
                let mut spans = vec![Span::styled(
                    format!("    {label}: "),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )];
                for value in values {
                    spans.push(Span::styled(format!(" {value} "), theme.tag_style()));
                    spans.push(Span::raw(" "));
                }
                lines.push(Line::from(spans));
            }
        }
        ResultSection::Chunks => {
            for (i, chunk) in analysis.relevant_chunks.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {}. ", i + 1), Style::default().fg(theme.dim)),
                    Span::styled(chunk.clone(), Style::default().fg(theme.text)),
                ]));
            }
        }
        ResultSection::Summary => {
            for sentence in &analysis.summary {
                lines.push(Line::from(vec![
                    Span::styled("    - ", Style::default().fg(theme.dim)),
                    Span::styled(sentence.clone(), Style::default().fg(theme.text)),
                ]));
            }
        }
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if app.input_mode == InputMode::TextInput {
        " Enter:submit  Esc:close query editor"
    } else {
        " o:file  /:query  m:model  u:upload  1/2/3:sections  t:theme  Esc:back  ?:help  q:quit"
    };
    let footer = Line::from(Span::styled(text, theme.footer_style()));
    f.render_widget(Paragraph::new(footer), area);

    // Service endpoint, right-aligned (painter's order: overwrites right side)
    let server = Line::from(Span::styled(
        format!("{} ", app.server),
        Style::default().fg(theme.dim),
    ))
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(server), area);
}
