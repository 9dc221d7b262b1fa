use crate::app::{App, AppScreen};
use crate::constants::DISCLAIMER;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the key hints for the current screen plus the standing disclaimer
/// that answers should be double-checked.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    let instructions = match app.screen {
        AppScreen::Chat => {
            "Enter envia · Tab sugestão · PgUp/PgDn rola · F1 sobre · Esc sair"
        }
        AppScreen::About => "Esc fecha o diálogo.",
        AppScreen::QuitConfirm => "Pressione 's' para sair ou 'n' para cancelar.",
        AppScreen::Quit => "",
    };

    let hints = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hints, chunks[0]);

    let disclaimer = Paragraph::new(DISCLAIMER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(disclaimer, chunks[1]);
}
