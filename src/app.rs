use crate::api::ApiClient;
use crate::constants::{SUGGESTED_QUESTIONS, TYPING_STATUS};
use crate::conversation::Conversation;
use crate::errors::CarbonitoResult;
use crate::log_view::LogView;
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Chat,
    About,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub screen: AppScreen,
    pub conversation: Conversation,
    pub input: String,
    pub chat_scroll: u16,
    pub thinking: bool,
    pub status_indicator: StatusIndicator,
    pub logs: LogView,
    pub suggestion_idx: Option<usize>,
    pub api: ApiClient,
}

impl App {
    pub fn new(api: ApiClient) -> App {
        App {
            screen: AppScreen::Chat,
            conversation: Conversation::new(),
            input: String::new(),
            chat_scroll: 0,
            thinking: false,
            status_indicator: StatusIndicator::new(),
            logs: LogView::new(),
            suggestion_idx: None,
            api,
        }
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    /// Tab cycles the suggested questions into the input buffer; the user
    /// still submits them through the normal path.
    pub fn cycle_suggestion(&mut self) {
        let next = match self.suggestion_idx {
            Some(idx) => (idx + 1) % SUGGESTED_QUESTIONS.len(),
            None => 0,
        };
        self.suggestion_idx = Some(next);
        self.input = SUGGESTED_QUESTIONS[next].to_string();
    }

    /// Start of a turn. Rejects empty input and rejects anything while a
    /// request is pending (the input is inert until the turn settles).
    /// On acceptance the user message is appended immediately and the
    /// trimmed question is handed back for the transport call.
    pub fn begin_turn(&mut self) -> Option<String> {
        if self.thinking {
            return None;
        }

        let question = self.input.trim().to_string();
        if question.is_empty() {
            return None;
        }

        self.conversation.push_user(question.clone());
        self.input.clear();
        self.suggestion_idx = None;
        self.thinking = true;
        self.status_indicator.set_thinking(true);
        self.status_indicator.set_status(TYPING_STATUS);
        self.scroll_to_bottom();
        self.logs.add(format!("pergunta enviada ({} chars)", question.len()));

        Some(question)
    }

    /// End of a turn: exactly one bot message per settle, success or not.
    pub fn finish_turn(&mut self, result: CarbonitoResult<String>) {
        let text = match result {
            Ok(answer) => {
                self.logs.add("resposta recebida");
                answer
            }
            Err(e) => {
                log::error!("turn failed: {}", e);
                self.logs.add(format!("erro: {}", e));
                e.user_message()
            }
        };

        self.conversation.push_bot(text);
        self.thinking = false;
        self.status_indicator.set_thinking(false);
        self.status_indicator.clear_status();
        self.scroll_to_bottom();
    }

    // Clamped to the real maximum during drawing.
    fn scroll_to_bottom(&mut self) {
        self.chat_scroll = u16::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Sender;
    use crate::errors::CarbonitoError;

    fn app() -> App {
        App::new(ApiClient::new("http://localhost/query"))
    }

    #[test]
    fn submit_appends_user_then_bot_message() {
        let mut app = app();
        app.input = "O que é carbono?".to_string();

        let question = app.begin_turn().expect("accepted");
        assert_eq!(question, "O que é carbono?");
        assert_eq!(app.conversation.len(), 1);
        assert_eq!(app.conversation.messages()[0].sender, Sender::User);
        assert!(app.thinking);
        assert!(app.input.is_empty());

        app.finish_turn(Ok("X".to_string()));
        assert_eq!(app.conversation.len(), 2);
        assert_eq!(app.conversation.messages()[1].sender, Sender::Bot);
        assert_eq!(app.conversation.messages()[1].text, "X");
        assert!(!app.thinking);
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let mut app = app();
        app.input = "   \n\t ".to_string();

        assert!(app.begin_turn().is_none());
        assert!(app.conversation.is_empty());
        assert!(!app.thinking);
    }

    #[test]
    fn input_is_inert_while_a_turn_is_pending() {
        let mut app = app();
        app.input = "primeira pergunta".to_string();
        app.begin_turn().expect("accepted");

        app.input = "segunda pergunta".to_string();
        assert!(app.begin_turn().is_none());
        assert_eq!(app.conversation.len(), 1);

        app.finish_turn(Ok("resposta".to_string()));
        assert!(app.begin_turn().is_some());
    }

    #[test]
    fn failed_turn_appends_error_as_bot_message() {
        let mut app = app();
        app.input = "pergunta".to_string();
        app.begin_turn().expect("accepted");

        app.finish_turn(Err(CarbonitoError::Api {
            status: 422,
            detail: "bad input".to_string(),
        }));

        assert_eq!(app.conversation.len(), 2);
        let bot = &app.conversation.messages()[1];
        assert_eq!(bot.sender, Sender::Bot);
        assert!(bot.text.contains("bad input"));
        assert!(!app.thinking);
    }

    #[test]
    fn suggestions_cycle_into_the_input() {
        let mut app = app();
        app.cycle_suggestion();
        assert_eq!(app.input, SUGGESTED_QUESTIONS[0]);
        app.cycle_suggestion();
        assert_eq!(app.input, SUGGESTED_QUESTIONS[1]);
    }
}
