use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::InputField;
use crate::tui::theme;

/// The three numeric fields. `buffers` holds the raw text as typed, in
/// `InputField::all()` order.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    buffers: &[String; 3],
    active: InputField,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Your Club ", theme::blue()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    for (field, text) in InputField::all().iter().zip(buffers.iter()) {
        let is_active = focused && *field == active;
        lines.push(Line::from(Span::styled(
            format!("  {}", field.label().to_uppercase()),
            theme::dim(),
        )));

        let value_style = if is_active {
            theme::amber().add_modifier(Modifier::BOLD)
        } else {
            theme::bold()
        };
        let mut value = vec![
            Span::styled(if is_active { "  ▸ " } else { "    " }, theme::brand()),
            Span::styled(text.clone(), value_style),
        ];
        if is_active {
            value.push(Span::styled("█", theme::amber()));
        }
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Empty or invalid entries count as 0",
        theme::dim(),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
