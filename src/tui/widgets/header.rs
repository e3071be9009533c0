use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Language;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, lang: Language) {
    let today = Local::now().format("%A, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  ♠ HyperSystem  ", theme::brand().add_modifier(Modifier::BOLD)),
        Span::styled("Business Health Check", theme::bold()),
    ]);

    let meta_line = Line::from(vec![
        Span::styled(lang.display_name(), theme::blue()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(today, theme::dim()),
    ]);

    let text = vec![title_line, Line::from(""), meta_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::brand())
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
