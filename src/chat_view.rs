use crate::app::App;
use crate::chat_message::render_message;
use crate::constants::INPUT_PLACEHOLDER;
use crate::ui::welcome::draw_welcome;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)])
        .split(size);

    let chat_vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    crate::ui::header::draw_header(f, chat_vertical_chunks[0]);

    let messages_area = chat_vertical_chunks[1];
    if app.conversation.is_empty() {
        draw_welcome(f, messages_area);
    } else {
        draw_messages(f, app, messages_area);
    }

    app.status_indicator.render(f, chat_vertical_chunks[2]);

    draw_input(f, app, chat_vertical_chunks[3]);
    crate::ui::footer::draw_footer(f, chat_vertical_chunks[4], app);
    draw_logs(f, app, horizontal_chunks[1], size);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.conversation.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, area));
    }

    // `render_message` pre-wraps to the area width, so one logical line is
    // one display row and the clamp below is exact. Wrapping again in the
    // widget would desync `scroll` offsets from the line count.
    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let msgs_para = Paragraph::new(lines).block(Block::default());
    f.render_widget(msgs_para.scroll((app.chat_scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input_line = if app.thinking {
        // Inert until the turn settles.
        Line::from(Span::styled(
            "→ aguardando resposta…",
            Style::default().fg(Color::DarkGray),
        ))
    } else if app.input.is_empty() {
        Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.input.clone(), Style::default().fg(Color::White)),
        ])
    };

    // Display columns, not chars: emoji and other wide glyphs count as 2.
    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.as_str().width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input_line).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );

    if !app.thinking {
        let cursor_x = area.x + 2 + text_width - scroll_offset;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect, size: Rect) {
    let vsep = "│".repeat(size.height as usize);
    f.render_widget(
        Paragraph::new(Span::raw(vsep)).style(Style::default().fg(Color::DarkGray)),
        Rect {
            x: area.x,
            y: area.y,
            width: 1,
            height: size.height,
        },
    );

    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .rev()
        .take(area.height as usize)
        .rev()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(
        logs_para,
        Rect {
            x: area.x + 2,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        },
    );
}

/// One full turn against the service: ask, then append exactly one bot
/// message, success or failure. `begin_turn` already recorded the user
/// message and raised the thinking flag before this task was spawned.
pub async fn chat_turn(app: Arc<Mutex<App>>, question: String) {
    let api = {
        let guard = app.lock().await;
        guard.api.clone()
    };

    let result = api.ask(&question).await;

    let mut guard = app.lock().await;
    guard.finish_turn(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::conversation::Sender;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut rows = Vec::new();
        for y in 0..buffer.area.height {
            let row: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            rows.push(row);
        }
        rows.join("\n")
    }

    #[test]
    fn auto_scroll_reaches_tail_of_long_answer() {
        let mut app = App::new(ApiClient::new("http://localhost/query"));
        app.input = "pergunta".to_string();
        app.begin_turn().expect("accepted");

        // One long prose paragraph: a single markdown line that only fits
        // the pane after pre-wrapping.
        let answer = format!("{} FIM_DA_RESPOSTA", "palavra ".repeat(120).trim());
        app.finish_turn(Ok(answer));

        let mut terminal = Terminal::new(TestBackend::new(40, 14)).expect("terminal");
        terminal.draw(|f| draw_chat(f, &mut app)).expect("draw");

        let screen = screen_text(&terminal);
        assert!(
            screen.contains("FIM_DA_RESPOSTA"),
            "tail of the answer is not visible after auto-scroll:\n{}",
            screen
        );
    }

    #[test]
    fn page_down_can_reach_the_bottom() {
        let mut app = App::new(ApiClient::new("http://localhost/query"));
        app.input = "pergunta".to_string();
        app.begin_turn().expect("accepted");
        app.finish_turn(Ok(format!("{} ÚLTIMA_LINHA", "texto ".repeat(150).trim())));

        // Scroll to the top, then page down well past the end; the clamp
        // must land exactly on the real bottom.
        app.chat_scroll = 0;
        for _ in 0..500 {
            app.scroll_down();
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 14)).expect("terminal");
        terminal.draw(|f| draw_chat(f, &mut app)).expect("draw");

        assert!(screen_text(&terminal).contains("ÚLTIMA_LINHA"));
    }

    async fn app_against(server: &MockServer) -> Arc<Mutex<App>> {
        let api = ApiClient::new(format!("{}/query", server.uri()));
        Arc::new(Mutex::new(App::new(api)))
    }

    #[tokio::test]
    async fn turn_settles_with_answer_from_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "X" })))
            .expect(1)
            .mount(&server)
            .await;

        let app = app_against(&server).await;
        let question = {
            let mut guard = app.lock().await;
            guard.input = "pergunta".to_string();
            guard.begin_turn().expect("accepted")
        };

        chat_turn(app.clone(), question).await;

        let guard = app.lock().await;
        assert_eq!(guard.conversation.len(), 2);
        assert_eq!(guard.conversation.messages()[1].sender, Sender::Bot);
        assert_eq!(guard.conversation.messages()[1].text, "X");
        assert!(!guard.thinking);
    }

    #[tokio::test]
    async fn turn_settles_with_error_message_on_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "detail": "bad input" })),
            )
            .mount(&server)
            .await;

        let app = app_against(&server).await;
        let question = {
            let mut guard = app.lock().await;
            guard.input = "pergunta".to_string();
            guard.begin_turn().expect("accepted")
        };

        chat_turn(app.clone(), question).await;

        let guard = app.lock().await;
        assert_eq!(guard.conversation.len(), 2);
        assert!(guard.conversation.messages()[1].text.contains("bad input"));
        assert!(!guard.thinking);
    }
}
