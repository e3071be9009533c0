use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::calculator::Stage;
use crate::tui::theme;

fn hints(stage: &Stage) -> &'static [(&'static str, &'static str)] {
    match stage {
        Stage::Input => &[
            ("[Space]", " check  "),
            ("[Tab]", " inputs  "),
            ("[c]", " calculate  "),
            ("[n]", " reset  "),
            ("[l]", " language  "),
            ("[?]", " help  "),
            ("[Esc]", " quit"),
        ],
        Stage::Calculating { .. } => &[("[Esc]", " quit")],
        Stage::Result(_) => &[
            ("[r]", " retry  "),
            ("[a]", " apply  "),
            ("[l]", " language  "),
            ("[Esc]", " quit"),
        ],
    }
}

pub fn render(frame: &mut Frame, area: Rect, stage: &Stage) {
    let mut spans = Vec::new();
    for (key, label) in hints(stage) {
        spans.push(Span::styled(*key, theme::brand()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
