use crate::app::{App, AppScreen};
use crate::chat_view::chat_turn;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn handle_key(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match app.screen {
        AppScreen::Chat => handle_chat_key(key, app, app_arc),
        AppScreen::About => handle_about_key(key, app),
        AppScreen::QuitConfirm => handle_quit_confirm_key(key, app),
        AppScreen::Quit => {}
    }
}

fn handle_chat_key(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Enter => {
            if let Some(question) = app.begin_turn() {
                let clone = app_arc.clone();
                tokio::spawn(async move {
                    chat_turn(clone, question).await;
                });
            }
        }
        KeyCode::Esc => app.screen = AppScreen::QuitConfirm,
        KeyCode::F(1) => app.screen = AppScreen::About,
        KeyCode::Tab => {
            if !app.thinking {
                app.cycle_suggestion();
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            if !app.thinking {
                app.input.pop();
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else if !app.thinking {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_about_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}

fn handle_quit_confirm_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crossterm::event::KeyEvent;

    fn setup() -> (Arc<Mutex<App>>, App) {
        let arc = Arc::new(Mutex::new(App::new(ApiClient::new("http://localhost/query"))));
        let app = App::new(ApiClient::new("http://localhost/query"));
        (arc, app)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_is_ignored_while_thinking() {
        let (arc, mut app) = setup();
        app.thinking = true;

        handle_key(press(KeyCode::Char('a')), &mut app, &arc);
        assert!(app.input.is_empty());

        handle_key(press(KeyCode::Backspace), &mut app, &arc);
        assert!(app.input.is_empty());
    }

    #[test]
    fn esc_asks_for_quit_confirmation() {
        let (arc, mut app) = setup();
        handle_key(press(KeyCode::Esc), &mut app, &arc);
        assert_eq!(app.screen, AppScreen::QuitConfirm);

        handle_key(press(KeyCode::Char('n')), &mut app, &arc);
        assert_eq!(app.screen, AppScreen::Chat);

        handle_key(press(KeyCode::Esc), &mut app, &arc);
        handle_key(press(KeyCode::Char('s')), &mut app, &arc);
        assert_eq!(app.screen, AppScreen::Quit);
    }

    #[test]
    fn f1_toggles_about_screen() {
        let (arc, mut app) = setup();
        handle_key(press(KeyCode::F(1)), &mut app, &arc);
        assert_eq!(app.screen, AppScreen::About);

        handle_key(press(KeyCode::F(1)), &mut app, &arc);
        assert_eq!(app.screen, AppScreen::Chat);
    }
}
