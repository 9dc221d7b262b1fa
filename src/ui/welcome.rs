use crate::constants::{SUGGESTED_QUESTIONS, WELCOME_GREETING};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Empty-conversation greeting with the suggested questions, shown until
/// the first message lands.
pub fn draw_welcome(f: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🌿".to_string(),
            Style::default().fg(Color::LightGreen),
        )),
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_GREETING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Como posso te ajudar?"),
        Line::from(""),
    ];

    for question in SUGGESTED_QUESTIONS {
        lines.push(Line::from(Span::styled(
            format!("🌿 {}", question),
            Style::default().fg(Color::LightGreen),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab preenche uma sugestão no campo de pergunta.",
        Style::default().fg(Color::DarkGray),
    )));

    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(welcome, area);
}
