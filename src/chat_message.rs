use crate::conversation::{Message, Sender};
use crate::markdown::render_markdown;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Turns one conversation entry into terminal lines: a timestamp header,
/// the body, and a closing bracket. Bot answers go through the markdown
/// renderer; user text is wrapped as-is and never markdown-interpreted.
///
/// Every produced line fits the area, so one logical line is one display
/// row and the scroll clamp in the chat view can count lines directly.
pub fn render_message(message: &Message, area: Rect) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(message.sender);
    let wrap_width = (area.width as usize).saturating_sub(4).max(10);

    let label = match message.sender {
        Sender::User => "você",
        Sender::Bot => "carbonito",
    };
    let timestamp = message.timestamp.format("%H:%M").to_string();
    lines.push(Line::from(vec![
        Span::styled("┌─ ".to_string(), style),
        Span::styled(label.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", timestamp), style.add_modifier(Modifier::DIM)),
    ]));

    match message.sender {
        Sender::User => {
            for wrapped in wrap(&message.text, wrap_width) {
                lines.push(Line::from(vec![
                    Span::styled("│ ".to_string(), style),
                    Span::styled(wrapped.to_string(), style),
                ]));
            }
        }
        Sender::Bot => {
            for body_line in render_markdown(&message.text) {
                for wrapped in wrap_styled_line(body_line, wrap_width) {
                    let mut spans = vec![Span::styled("│ ".to_string(), style)];
                    spans.extend(wrapped.spans);
                    lines.push(Line::from(spans));
                }
            }
        }
    }

    lines.push(Line::from(Span::styled("╰─".to_string(), style)));
    lines
}

/// Greedy word wrap that keeps each span's style. Words longer than the
/// width are hard-split so no produced line exceeds it.
fn wrap_styled_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for span in line.spans {
        let style = span.style;
        let mut buf = String::new();
        let mut buf_width = 0usize;

        for word in span.content.split_inclusive(' ') {
            let word_width = word.width();

            if word_width > width {
                // Overlong token (a URL, usually): split by character.
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + buf_width + ch_width > width
                        && current_width + buf_width > 0
                    {
                        if !buf.is_empty() {
                            current.push(Span::styled(std::mem::take(&mut buf), style));
                            buf_width = 0;
                        }
                        if !current.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current)));
                        }
                        current_width = 0;
                    }
                    buf.push(ch);
                    buf_width += ch_width;
                }
                continue;
            }

            if current_width + buf_width + word_width > width
                && current_width + buf_width > 0
            {
                if !buf.is_empty() {
                    let trimmed = buf.trim_end().to_string();
                    if !trimmed.is_empty() {
                        current.push(Span::styled(trimmed, style));
                    }
                    buf.clear();
                    buf_width = 0;
                }
                if !current.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                current_width = 0;
            }

            buf.push_str(word);
            buf_width += word_width;
        }

        if !buf.is_empty() {
            current_width += buf_width;
            current.push(Span::styled(buf, style));
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

fn base_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::User => Color::Rgb(255, 223, 128),
        Sender::Bot => Color::Rgb(144, 238, 144),
    })
}
