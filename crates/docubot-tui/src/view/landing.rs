use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::theme::Theme;

const BANNER_ART: &[&str] = &[
    r" ____                       _             _   ",
    r"|  _ \   ___    ___  _   _ | |__    ___  | |_ ",
    r"| | | | / _ \  / __|| | | || '_ \  / _ \ | __|",
    r"| |_| || (_) || (__ | |_| || |_) || (_) || |_ ",
    r"|____/  \___/  \___| \__,_||_.__/  \___/  \__|",
];

const TAGLINE: &str = "Docubot is a lightweight, efficient, and interpretable PDF document \
analysis tool built for academic and technical materials.";

const CORE_FEATURES: &[&str] = &[
    "Automatic PDF parsing and entity extraction",
    "Summarization of academic and technical documents",
    "Highlighting of relevant content chunks",
    "Dark/light mode support for comfortable reading",
];

const METHODOLOGIES: &[&str] = &[
    "Named Entity Recognition (NER) using spaCy",
    "Text summarization with transformer-based models",
    "Chunking and relevance scoring for document sections",
    "Customizable pipelines for different document types",
];

/// Feature, what it does, and the NLP task behind it.
const HOW_IT_WORKS: &[(&str, &str, &str)] = &[
    ("PDF Upload", "Accepts and parses a PDF", "Preprocessing"),
    (
        "Named Entity Tagger",
        "Highlights key entities (e.g., people, dates)",
        "Named Entity Recognition",
    ),
    (
        "Document Search",
        "Allows users to ask factual questions",
        "Question Answering (extractive)",
    ),
    (
        "Summary Generator",
        "Returns top relevant sentences from a document",
        "Summarization (extractive)",
    ),
];

/// Render the landing screen into the given area.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(5),    // scrollable content
        Constraint::Length(1), // footer
    ])
    .split(area);

    render_header(f, chunks[0], app);
    render_content(f, chunks[1], app);
    render_footer(f, chunks[2], &app.theme);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let header = Line::from(vec![
        Span::styled(" DOCUBOT ", theme.header_style()),
        Span::styled(
            " PDF document analysis",
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);

    // Theme switch hint, right-aligned (painter's order: overwrites right side)
    let toggle = Line::from(Span::styled(
        format!("t: {} ", app.theme_store.mode().toggle_label()),
        Style::default().fg(theme.dim),
    ))
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(toggle), area);
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));

    // Skip the art if the terminal can't fit it
    if area.width >= 50 {
        for art_line in BANNER_ART {
            lines.push(
                Line::from(Span::styled(
                    *art_line,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
        }
        lines.push(Line::from(""));
    }

    lines.push(
        Line::from(Span::styled(
            "Welcome to Docubot",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(TAGLINE, Style::default().fg(theme.text)))
            .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    section_header(&mut lines, "Core Features", theme);
    for item in CORE_FEATURES {
        bullet_line(&mut lines, item, theme);
    }
    lines.push(Line::from(""));

    section_header(&mut lines, "Methodologies", theme);
    for item in METHODOLOGIES {
        bullet_line(&mut lines, item, theme);
    }
    lines.push(Line::from(""));

    section_header(&mut lines, "How Docubot Works", theme);
    lines.push(Line::from(Span::styled(
        format!("  {:<21}{:<48}{}", "Feature", "What It Does", "NLP Task"),
        Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", "\u{2500}".repeat(94)),
        Style::default().fg(theme.dim),
    )));
    for (feature, what, task) in HOW_IT_WORKS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {feature:<21}"),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{what:<48}"), Style::default().fg(theme.text)),
            Span::styled(*task, Style::default().fg(theme.dim)),
        ]));
    }
    lines.push(Line::from(""));

    section_header(&mut lines, "Ready to try Docubot?", theme);
    lines.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(theme.text)),
        Span::styled(
            "Enter",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to try the demo.", Style::default().fg(theme.text)),
    ]));

    let border = theme.border_style();

    // Keep the last line reachable at the top of the viewport
    let max_scroll = lines.len().saturating_sub(1) as u16;
    app.landing_scroll = app.landing_scroll.min(max_scroll);

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border))
        .wrap(Wrap { trim: false })
        .scroll((app.landing_scroll, 0));
    f.render_widget(content, area);
}

fn section_header<'a>(lines: &mut Vec<Line<'a>>, title: &'a str, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
}

fn bullet_line<'a>(lines: &mut Vec<Line<'a>>, text: &'a str, theme: &Theme) {
    lines.push(Line::from(vec![
        Span::styled("    \u{2022} ", Style::default().fg(theme.accent)),
        Span::styled(text, Style::default().fg(theme.text)),
    ]));
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Line::from(Span::styled(
        " Enter:demo  j/k:scroll  t:theme  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
