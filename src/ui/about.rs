use crate::constants::ABOUT;
use crate::markdown::render_markdown;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered overlay with the "about the project" markdown.
pub fn draw_about(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sobre o Carbonito ")
        .style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let about = Paragraph::new(render_markdown(ABOUT)).wrap(Wrap { trim: false });
    f.render_widget(about, inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
