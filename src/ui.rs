// src/ui.rs

pub mod about;
pub mod footer;
pub mod header;
pub mod quit_confirm;
pub mod welcome;

use crate::app::{App, AppScreen};
use crate::chat_view::draw_chat;
use ratatui::Frame;

/// Top-level draw dispatch. The chat is always the backdrop; the about
/// dialog and the quit confirmation render as overlays on top of it.
pub fn draw(f: &mut Frame, app: &mut App) {
    draw_chat(f, app);

    match app.screen {
        AppScreen::About => about::draw_about(f),
        AppScreen::QuitConfirm => quit_confirm::draw_quit_confirm(f),
        AppScreen::Chat | AppScreen::Quit => {}
    }
}
