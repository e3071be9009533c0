use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::calculator::catalog::pain_points;
use crate::calculator::{CalculatorSession, Stage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::{CalculatorInputs, InputField};
use crate::tui::events::{Event, EventHandler};
use crate::tui::lead_form::{self, LeadWizard};
use crate::tui::theme;
use crate::tui::widgets::{calculating, checklist, header, inputs, results, statusbar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Calculator,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Checklist,
    Inputs,
}

pub struct App {
    pub view: View,
    pub ctx: AppContext,
    pub session: CalculatorSession,
    pub focus: Focus,
    /// Position in the checklist's display order
    pub cursor: usize,
    pub active_field: InputField,
    /// Raw text of each numeric field, in `InputField::all()` order
    pub buffers: [String; 3],
    pub lead: Option<LeadWizard>,
    pub currency: String,
    pub should_quit: bool,
    spinner_frame: usize,
}

fn buffers_for(inputs: &CalculatorInputs) -> [String; 3] {
    InputField::all().map(|f| inputs.get(f).to_string())
}

fn field_index(field: InputField) -> usize {
    match field {
        InputField::Events => 0,
        InputField::Participants => 1,
        InputField::HourlyValue => 2,
    }
}

impl App {
    pub fn new(config: &AppConfig, ctx: AppContext) -> Self {
        let session = CalculatorSession::new(
            pain_points(ctx.language()),
            config.defaults,
            config.calculating_delay(),
        );
        App {
            view: View::Calculator,
            buffers: buffers_for(session.inputs()),
            ctx,
            session,
            focus: Focus::Checklist,
            cursor: 0,
            active_field: InputField::Events,
            lead: None,
            currency: config.general.currency.clone(),
            should_quit: false,
            spinner_frame: 0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.session.poll(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Some terminals also report release and repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.ctx.is_modal_open() {
            self.handle_modal_key(key);
            return;
        }

        match self.view {
            View::Calculator => self.handle_calculator_key(key, now),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let lang = self.ctx.language();
        let wizard = self.lead.get_or_insert_with(|| LeadWizard::new(lang));
        wizard.handle_key(key);
        if wizard.is_finished() {
            self.lead = None;
            self.ctx.close_trial();
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Calculator;
            }
            _ => {}
        }
    }

    fn handle_calculator_key(&mut self, key: KeyEvent, now: Instant) {
        match self.session.stage() {
            Stage::Input => self.handle_input_key(key, now),
            Stage::Calculating { .. } => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                }
            }
            Stage::Result(_) => self.handle_result_key(key),
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.session.retry();
            }
            KeyCode::Char('a') | KeyCode::Enter => {
                if self.session.apply(&mut self.ctx) {
                    self.lead = Some(LeadWizard::new(self.ctx.language()));
                }
            }
            KeyCode::Char('l') => self.cycle_language(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Checklist => Focus::Inputs,
                    Focus::Inputs => Focus::Checklist,
                };
            }
            KeyCode::Char('c') => {
                self.session.run(now);
            }
            _ => match self.focus {
                Focus::Checklist => self.handle_checklist_key(key),
                Focus::Inputs => self.handle_field_key(key, now),
            },
        }
    }

    fn handle_checklist_key(&mut self, key: KeyEvent) {
        let order = checklist::display_order(self.session.catalog());
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < order.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(&idx) = order.get(self.cursor) {
                    self.session.toggle(idx);
                }
            }
            KeyCode::Char('n') => self.remount(),
            KeyCode::Char('l') => self.cycle_language(),
            KeyCode::Char('?') => self.view = View::Help,
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent, now: Instant) {
        let field = self.active_field;
        let buffer = &mut self.buffers[field_index(field)];
        match key.code {
            KeyCode::Up => self.active_field = field.prev(),
            KeyCode::Down => self.active_field = field.next(),
            KeyCode::Enter => {
                self.session.run(now);
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.session.set_input_text(field, buffer);
            }
            KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && buffer.is_empty()) => {
                if *buffer == "0" {
                    buffer.clear();
                }
                buffer.push(c);
                self.session.set_input_text(field, buffer);
            }
            KeyCode::Char('?') => self.view = View::Help,
            _ => {}
        }
    }

    fn cycle_language(&mut self) {
        let lang = self.ctx.cycle_language();
        self.session.replace_catalog(pain_points(lang));
    }

    fn remount(&mut self) {
        self.session.remount();
        self.buffers = buffers_for(self.session.inputs());
        self.cursor = 0;
        self.focus = Focus::Checklist;
    }

    pub fn draw(&self, frame: &mut Frame, now: Instant) {
        match self.view {
            View::Calculator => self.draw_calculator(frame, now),
            View::Help => {
                self.draw_calculator(frame, now);
                self.draw_help_overlay(frame);
            }
        }

        if self.ctx.is_modal_open() {
            if let Some(wizard) = &self.lead {
                lead_form::draw(frame, wizard);
            }
        }
    }

    fn draw_calculator(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], self.ctx.language());
        statusbar::render(frame, outer_chunks[2], self.session.stage());

        let body = outer_chunks[1];
        match self.session.stage() {
            Stage::Input => self.draw_input(frame, body),
            Stage::Calculating { .. } => {
                calculating::render(frame, body, self.session.progress(now), self.spinner_frame)
            }
            Stage::Result(result) => {
                results::render(frame, body, result, self.ctx.language(), &self.currency)
            }
        }
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let order = checklist::display_order(self.session.catalog());
        checklist::render(
            frame,
            columns[0],
            self.session.catalog(),
            self.session.selection(),
            order.get(self.cursor).copied(),
            self.focus == Focus::Checklist,
        );

        inputs::render(
            frame,
            columns[1],
            &self.buffers,
            self.active_field,
            self.focus == Focus::Inputs,
        );
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[↑ ↓]        ", "Move through the checklist / fields"),
            ("[Space]      ", "Check or uncheck a pain point"),
            ("[Tab]        ", "Switch between checklist and inputs"),
            ("[0-9]        ", "Type into the focused number field"),
            ("[c] / Enter  ", "Calculate"),
            ("[r]          ", "Back to inputs from the results"),
            ("[a]          ", "Apply for a free trial"),
            ("[n]          ", "Start over"),
            ("[l]          ", "Switch language"),
            ("[?]          ", "Toggle help"),
            ("[Esc]        ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::brand().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, desc) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {}", key), theme::brand()),
                Span::styled(desc, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::brand()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::brand())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop. Leaving mid-calculation drops the pending run.
pub fn run(config: &AppConfig, ctx: AppContext) -> Result<()> {
    let mut app = App::new(config, ctx);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_millis(100));

    let outcome: Result<()> = loop {
        let now = Instant::now();
        if let Err(e) = terminal.draw(|frame| app.draw(frame, now)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key, Instant::now());
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Tick) => app.tick(Instant::now()),
            Ok(Event::Resize) => {}
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    outcome
}
