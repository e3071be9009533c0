use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

use crate::models::lead::{back_label, thank_you_message, validate_email};
use crate::models::{Language, LeadForm};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;

// ─── Form steps ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Brand,
    Contact,
    Email,
    Phone,
    Address,
    Confirm,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Submitted,
    Cancelled,
}

// ─── Form state ──────────────────────────────────────────────────────────────

/// Step-by-step trial application. The filled form stays in memory.
pub struct LeadWizard {
    step: Step,
    input: String,
    error: Option<String>,
    form: LeadForm,
    lang: Language,
    outcome: Option<Outcome>,
    /// Set once the thank-you screen has been dismissed.
    closed: bool,
}

impl LeadWizard {
    pub fn new(lang: Language) -> Self {
        Self {
            step: Step::Brand,
            input: String::new(),
            error: None,
            form: LeadForm::default(),
            lang,
            outcome: None,
            closed: false,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the caller should tear the form down.
    pub fn is_finished(&self) -> bool {
        self.closed || self.outcome == Some(Outcome::Cancelled)
    }

    fn step_number(&self) -> usize {
        match self.step {
            Step::Brand => 1,
            Step::Contact => 2,
            Step::Email => 3,
            Step::Phone => 4,
            Step::Address => 5,
            Step::Confirm => 6,
            Step::Done => 7,
        }
    }

    const TOTAL_STEPS: usize = 6;

    fn field_mut(&mut self, step: Step) -> Option<&mut String> {
        match step {
            Step::Brand => Some(&mut self.form.brand),
            Step::Contact => Some(&mut self.form.contact),
            Step::Email => Some(&mut self.form.email),
            Step::Phone => Some(&mut self.form.phone),
            Step::Address => Some(&mut self.form.address),
            Step::Confirm | Step::Done => None,
        }
    }

    fn enter(&mut self, step: Step) {
        self.error = None;
        self.step = step;
        // Pre-fill with what was typed before
        let current = self.field_mut(step).map(|s| s.clone()).unwrap_or_default();
        self.input = current;
    }

    fn advance(&mut self) {
        let next = match self.step {
            Step::Brand => Step::Contact,
            Step::Contact => Step::Email,
            Step::Email => Step::Phone,
            Step::Phone => Step::Address,
            Step::Address => Step::Confirm,
            Step::Confirm | Step::Done => Step::Done,
        };
        self.enter(next);
    }

    fn go_back(&mut self) {
        let prev = match self.step {
            Step::Brand => {
                self.outcome = Some(Outcome::Cancelled);
                return;
            }
            Step::Contact => Step::Brand,
            Step::Email => Step::Contact,
            Step::Phone => Step::Email,
            Step::Address => Step::Phone,
            Step::Confirm => Step::Address,
            Step::Done => Step::Done,
        };
        self.enter(prev);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.step {
            Step::Brand | Step::Contact | Step::Phone | Step::Address => {
                self.handle_text_input(key, |s| {
                    if s.trim().is_empty() {
                        Err("This field is required".to_string())
                    } else {
                        Ok(())
                    }
                })
            }
            Step::Email => self.handle_text_input(key, |s| {
                validate_email(s).map_err(|e| e.to_string())
            }),
            Step::Confirm => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.submit(),
                KeyCode::Esc | KeyCode::Char('n') => self.go_back(),
                _ => {}
            },
            Step::Done => {
                self.closed = true;
            }
        }
    }

    fn handle_text_input<F>(&mut self, key: KeyEvent, validate: F)
    where
        F: Fn(&str) -> std::result::Result<(), String>,
    {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => {
                let val = self.input.trim().to_string();
                match validate(&val) {
                    Ok(()) => {
                        let step = self.step;
                        if let Some(field) = self.field_mut(step) {
                            *field = val;
                        }
                        self.advance();
                    }
                    Err(e) => {
                        self.error = Some(e);
                    }
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.form.validate() {
            Ok(()) => {
                log::info!("trial application captured for {:?}", self.form.brand);
                self.outcome = Some(Outcome::Submitted);
                self.enter(Step::Done);
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Draw the form as a centered modal over whatever is on screen.
pub fn draw(frame: &mut Frame, wizard: &LeadWizard) {
    let area = frame.area();

    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(area);

    let hchunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(64),
            Constraint::Min(0),
        ])
        .split(vchunks[1]);

    let box_area = hchunks[1];
    frame.render_widget(Clear, box_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::brand())
        .style(theme::surface())
        .title(Span::styled(
            "  Start Your Free Trial  ",
            theme::brand().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    frame.render_widget(outer_block, box_area);

    let inner = Rect {
        x: box_area.x + 2,
        y: box_area.y + 1,
        width: box_area.width.saturating_sub(4),
        height: box_area.height.saturating_sub(2),
    };

    match wizard.step {
        Step::Confirm => draw_confirm(frame, inner, wizard),
        Step::Done => draw_done(frame, inner, wizard.lang),
        _ => {
            draw_progress(frame, inner, wizard.step_number(), LeadWizard::TOTAL_STEPS);
            draw_text_step(frame, inner, wizard);
        }
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, current: usize, total: usize) {
    let mut spans = vec![Span::styled("  ", theme::dim())];
    for i in 1..=total {
        if i < current {
            spans.push(Span::styled("● ", theme::brand()));
        } else if i == current {
            spans.push(Span::styled("◉ ", theme::blue()));
        } else {
            spans.push(Span::styled("○ ", theme::dim()));
        }
    }
    let progress_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), progress_area);
}

fn draw_text_step(frame: &mut Frame, area: Rect, wizard: &LeadWizard) {
    let (title, hint) = match wizard.step {
        Step::Brand => ("Club / Brand Name", "e.g.  Ace High Poker Club"),
        Step::Contact => ("Contact Person", "Who should we talk to?"),
        Step::Email => ("Email", "Optional  ·  Enter to skip"),
        Step::Phone => ("Phone", "e.g.  0912-345-678"),
        Step::Address => ("Club Address", "City and street"),
        Step::Confirm | Step::Done => ("", ""),
    };

    let cursor = if wizard.input.chars().count() < 40 { "█" } else { "" };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, theme::brand().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(""),
    ];

    let input_style = if wizard.error.is_some() {
        theme::red()
    } else {
        theme::amber()
    };
    lines.push(Line::from(Span::styled(
        format!("  {}{}  ", wizard.input, cursor),
        input_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if let Some(err) = &wizard.error {
        lines.push(Line::from(Span::styled(format!("  ✗  {}", err), theme::red())));
    } else {
        lines.push(Line::from(Span::styled(hint, theme::dim())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter  next   ·   Esc  back",
        theme::dim(),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    let content_area = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    frame.render_widget(para, content_area);
}

fn draw_confirm(frame: &mut Frame, area: Rect, wizard: &LeadWizard) {
    let f = &wizard.form;
    let email = if f.email.is_empty() { "—" } else { f.email.as_str() };
    let row = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), theme::dim()),
            Span::styled(value.to_string(), theme::bold()),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Confirm Application",
            theme::brand().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Club", &f.brand),
        row("Contact", &f.contact),
        row("Email", email),
        row("Phone", &f.phone),
        row("Address", &f.address),
        Line::from(""),
    ];

    if let Some(err) = &wizard.error {
        lines.push(Line::from(Span::styled(format!("  ✗  {}", err), theme::red())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter  submit   ·   Esc  go back",
        theme::dim(),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn draw_done(frame: &mut Frame, area: Rect, lang: Language) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Thank You!",
            theme::brand().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(thank_you_message(lang), theme::bold())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("[any key]  {}", back_label(lang)),
            theme::dim(),
        )),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

// ─── Public entry point ──────────────────────────────────────────────────────

/// Run the form full-screen. Returns the submitted form, or None when the
/// user backed out.
pub fn run_lead_form_tui(lang: Language) -> Result<Option<LeadForm>> {
    let mut wizard = LeadWizard::new(lang);
    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_millis(250));

    let outcome: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(theme::base()), area);
            draw(frame, &wizard);
        }) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                wizard.handle_key(key);
                if wizard.is_finished() {
                    break Ok(());
                }
            }
            Ok(Event::Resize | Event::Tick) => {}
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    outcome?;

    Ok(match wizard.outcome() {
        Some(Outcome::Submitted) => Some(wizard.form().clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(wizard: &mut LeadWizard, code: KeyCode) {
        wizard.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(wizard: &mut LeadWizard, text: &str) {
        for c in text.chars() {
            press(wizard, KeyCode::Char(c));
        }
        press(wizard, KeyCode::Enter);
    }

    #[test]
    fn test_full_submission() {
        let mut w = LeadWizard::new(Language::En);
        type_text(&mut w, "Ace High");
        type_text(&mut w, "Lin");
        type_text(&mut w, "");
        type_text(&mut w, "0912345678");
        type_text(&mut w, "Taipei");
        assert_eq!(w.step, Step::Confirm);

        press(&mut w, KeyCode::Enter);
        assert_eq!(w.outcome(), Some(Outcome::Submitted));
        assert!(!w.is_finished());
        assert_eq!(w.form().brand, "Ace High");
        assert_eq!(w.form().email, "");

        press(&mut w, KeyCode::Char('x'));
        assert!(w.is_finished());
    }

    #[test]
    fn test_required_field_blocks_advance() {
        let mut w = LeadWizard::new(Language::ZhTw);
        type_text(&mut w, "   ");
        assert_eq!(w.step, Step::Brand);
        assert!(w.error.is_some());

        press(&mut w, KeyCode::Char('A'));
        assert!(w.error.is_none());
    }

    #[test]
    fn test_bad_email_blocks_advance() {
        let mut w = LeadWizard::new(Language::En);
        type_text(&mut w, "Club");
        type_text(&mut w, "Lin");
        type_text(&mut w, "not-an-email");
        assert_eq!(w.step, Step::Email);
        assert!(w.error.is_some());
    }

    #[test]
    fn test_back_restores_previous_value() {
        let mut w = LeadWizard::new(Language::En);
        type_text(&mut w, "Club");
        press(&mut w, KeyCode::Esc);
        assert_eq!(w.step, Step::Brand);
        assert_eq!(w.input, "Club");
    }

    #[test]
    fn test_escape_on_first_step_cancels() {
        let mut w = LeadWizard::new(Language::Ja);
        press(&mut w, KeyCode::Esc);
        assert_eq!(w.outcome(), Some(Outcome::Cancelled));
        assert!(w.is_finished());
    }
}
