use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::{CalculationResult, Language};
use crate::tui::theme;
use crate::utils::format::format_money;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    result: &CalculationResult,
    lang: Language,
    currency: &str,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    metric_card(
        frame,
        cards[0],
        " Hours Lost / Year ",
        format!("{}H", result.hours_per_year),
        theme::blue(),
    );
    metric_card(
        frame,
        cards[1],
        " Operating Risk ",
        format!("{}%", result.risk_percent),
        theme::amber(),
    );
    metric_card(
        frame,
        cards[2],
        " Growth Upside ",
        format!("{}%", result.growth_percent),
        theme::brand(),
    );

    let value_block = Block::default()
        .title(Span::styled(" Recoverable Value ", theme::brand()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::brand())
        .style(theme::surface());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_money(result.annual_money_value, currency, lang.per_year_suffix()),
            theme::brand().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Time your staff could spend on players instead of spreadsheets.",
            theme::dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] ", theme::brand()),
            Span::styled("try again    ", theme::dim()),
            Span::styled("[a] ", theme::brand()),
            Span::styled("start free trial", theme::dim()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(value_block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, rows[1]);
}

fn metric_card(frame: &mut Frame, area: Rect, title: &'static str, value: String, style: Style) {
    let block = Block::default()
        .title(Span::styled(title, style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Fall back to plain text when the card is too narrow for the big font
    let big_width = value.chars().count() as u16 * 4;
    if big_width <= inner.width && inner.height >= 4 {
        let big = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(style)
            .lines(vec![Line::from(value)])
            .build();
        let x_pad = (inner.width - big_width) / 2;
        let big_area = Rect {
            x: inner.x + x_pad,
            y: inner.y + inner.height.saturating_sub(4) / 2,
            width: big_width,
            height: 4.min(inner.height),
        };
        frame.render_widget(big, big_area);
    } else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}
