//! Renders the bot's markdown answers into styled ratatui lines.
//!
//! The service replies in GitHub-flavored markdown, pipe tables included,
//! so tables and strikethrough are enabled on the parser. User messages
//! never pass through here; they are displayed as plain text.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut state = RenderState::new();

    for event in Parser::new_ext(text, options) {
        state.handle_event(event);
    }

    state.finish()
}

struct RenderState {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    // Block context
    list_stack: Vec<Option<u64>>,
    blockquote_depth: usize,
    in_code_block: bool,
    code_buffer: String,
    // Tables are buffered as plain cells and laid out on TagEnd::Table.
    table_rows: Option<Vec<Vec<String>>>,
    current_cell: String,
    needs_blank: bool,
}

impl RenderState {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            spans: Vec::new(),
            style_stack: Vec::new(),
            list_stack: Vec::new(),
            blockquote_depth: 0,
            in_code_block: false,
            code_buffer: String::new(),
            table_rows: None,
            current_cell: String::new(),
            needs_blank: false,
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                if self.table_rows.is_some() {
                    self.current_cell.push_str(&code);
                } else {
                    self.spans.push(Span::styled(
                        code.to_string(),
                        Style::default().fg(Color::Rgb(209, 154, 102)),
                    ));
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if self.table_rows.is_some() {
                    self.current_cell.push(' ');
                } else {
                    self.flush_line();
                }
            }
            Event::Rule => {
                self.blank_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_blank = true;
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.spans.push(Span::styled(
                    marker.to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            Tag::Heading { level, .. } => {
                self.blank_line();
                self.style_stack.push(heading_style(level));
            }
            Tag::Emphasis => self.style_stack.push(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.style_stack.push(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self
                .style_stack
                .push(Style::default().add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { .. } => self.style_stack.push(
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Tag::BlockQuote(_) => {
                self.blank_line();
                self.blockquote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.blank_line();
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        self.lines.push(Line::from(Span::styled(
                            format!("▎ {}", lang),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.list_stack.len().saturating_sub(1);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.spans.push(Span::styled(
                    format!("{}{}", "  ".repeat(depth), marker),
                    Style::default().fg(Color::Rgb(144, 238, 144)),
                ));
            }
            Tag::Table(_) => {
                self.blank_line();
                self.table_rows = Some(Vec::new());
            }
            Tag::TableHead | Tag::TableRow => {
                if let Some(rows) = self.table_rows.as_mut() {
                    rows.push(Vec::new());
                }
            }
            Tag::TableCell => self.current_cell.clear(),
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                self.needs_blank = true;
            }
            TagEnd::Heading(_) => {
                self.style_stack.pop();
                self.flush_line();
                self.needs_blank = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.style_stack.pop();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.blockquote_depth = self.blockquote_depth.saturating_sub(1);
                self.needs_blank = true;
            }
            TagEnd::CodeBlock => {
                for code_line in self.code_buffer.lines() {
                    self.lines.push(Line::from(Span::styled(
                        format!("▎ {}", code_line),
                        Style::default().fg(Color::Rgb(209, 154, 102)),
                    )));
                }
                self.code_buffer.clear();
                self.in_code_block = false;
                self.needs_blank = true;
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.needs_blank = true;
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::TableCell => {
                let cell = std::mem::take(&mut self.current_cell);
                if let Some(row) = self.table_rows.as_mut().and_then(|rows| rows.last_mut()) {
                    row.push(cell.trim().to_string());
                }
            }
            TagEnd::Table => {
                if let Some(rows) = self.table_rows.take() {
                    self.emit_table(&rows);
                }
                self.needs_blank = true;
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.in_code_block {
            self.code_buffer.push_str(text);
        } else if self.table_rows.is_some() {
            self.current_cell.push_str(text);
        } else {
            self.spans
                .push(Span::styled(text.to_string(), self.current_style()));
        }
    }

    fn current_style(&self) -> Style {
        self.style_stack
            .iter()
            .fold(Style::default(), |acc, s| acc.patch(*s))
    }

    fn flush_line(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = Vec::new();
        if self.blockquote_depth > 0 {
            spans.push(Span::styled(
                "┃ ".repeat(self.blockquote_depth),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.append(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    fn blank_line(&mut self) {
        self.flush_line();
        if self.needs_blank && !self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }
        self.needs_blank = false;
    }

    /// Lays out a buffered table with column widths sized to the widest
    /// cell, header first, then a rule, then the body rows.
    fn emit_table(&mut self, rows: &[Vec<String>]) {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![0usize; columns];
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut rendered = String::new();
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    rendered.push_str(" │ ");
                }
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                rendered.push_str(cell);
                rendered.push_str(&" ".repeat(width.saturating_sub(cell.width())));
            }

            let style = if row_idx == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            self.lines.push(Line::from(Span::styled(rendered, style)));

            if row_idx == 0 {
                let mut rule = String::new();
                for (i, width) in widths.iter().enumerate() {
                    if i > 0 {
                        rule.push_str("─┼─");
                    }
                    rule.push_str(&"─".repeat(*width));
                }
                self.lines.push(Line::from(Span::styled(
                    rule,
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        self.lines
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let color = match level {
        HeadingLevel::H1 | HeadingLevel::H2 => Color::Rgb(144, 238, 144),
        _ => Color::Rgb(255, 223, 128),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    #[test]
    fn renders_heading_and_paragraph() {
        let lines = render_markdown("## Mercado de Carbono\n\nCréditos são negociáveis.");
        let text = all_text(&lines);
        assert!(text.contains(&"Mercado de Carbono".to_string()));
        assert!(text.contains(&"Créditos são negociáveis.".to_string()));
    }

    #[test]
    fn strong_text_is_bold() {
        let lines = render_markdown("o **Pantanal** preservado");
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "Pantanal")
            .expect("bold span present");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn renders_ordered_and_unordered_lists() {
        let lines = render_markdown("1. primeiro\n2. segundo\n\n- item");
        let text = all_text(&lines);
        assert!(text.iter().any(|l| l.starts_with("1. primeiro")));
        assert!(text.iter().any(|l| l.starts_with("2. segundo")));
        assert!(text.iter().any(|l| l.starts_with("• item")));
    }

    #[test]
    fn renders_pipe_table_with_aligned_columns() {
        let lines = render_markdown("| Bioma | Área |\n| --- | --- |\n| Pantanal | 150k |");
        let text = all_text(&lines);
        let header = text.iter().find(|l| l.contains("Bioma")).expect("header row");
        let body = text.iter().find(|l| l.contains("150k")).expect("body row");
        assert!(header.contains("│"));
        assert!(body.starts_with("Pantanal"));
        assert!(text.iter().any(|l| l.contains("┼")));
    }

    #[test]
    fn code_block_lines_are_prefixed() {
        let lines = render_markdown("```\nlet x = 1;\n```");
        let text = all_text(&lines);
        assert!(text.iter().any(|l| l.contains("▎ let x = 1;")));
    }

    #[test]
    fn blockquote_lines_are_prefixed() {
        let lines = render_markdown("> citação legal");
        let text = all_text(&lines);
        assert!(text.iter().any(|l| l.starts_with("┃ ")));
    }
}
