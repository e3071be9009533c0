use std::time::{Duration, Instant};

use crate::calculator::{compute, Catalog, SelectionSet};
use crate::context::AppContext;
use crate::models::{CalculationResult, CalculatorInputs, InputField};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Input,
    /// Waiting for `due` before the result is shown. Input is frozen.
    Calculating { due: Instant },
    Result(CalculationResult),
}

/// State owned by one mounted calculator: checklist, numbers, and the
/// input → calculating → result cycle.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    catalog: Catalog,
    selection: SelectionSet,
    inputs: CalculatorInputs,
    default_inputs: CalculatorInputs,
    stage: Stage,
    delay: Duration,
}

impl CalculatorSession {
    pub fn new(catalog: Catalog, inputs: CalculatorInputs, delay: Duration) -> Self {
        let weightless = catalog.weightless();
        if !weightless.is_empty() {
            log::warn!("pain points {:?} carry no weight and never affect results", weightless);
        }
        Self {
            selection: SelectionSet::for_catalog(&catalog),
            catalog,
            inputs,
            default_inputs: inputs,
            stage: Stage::Input,
            delay,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match &self.stage {
            Stage::Result(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_input(&self) -> bool {
        self.stage == Stage::Input
    }

    pub fn toggle(&mut self, idx: usize) {
        if self.is_input() {
            self.selection.toggle(idx);
        }
    }

    pub fn set_input_text(&mut self, field: InputField, text: &str) {
        if self.is_input() {
            self.inputs.set_text(field, text);
        }
    }

    /// Swap in a catalog for another language. Selections survive when the
    /// structure matches, which holds for the built-in catalogs.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        if catalog.len() != self.selection.len() {
            log::warn!(
                "catalog size changed ({} -> {}), clearing selection",
                self.selection.len(),
                catalog.len()
            );
            self.selection = SelectionSet::for_catalog(&catalog);
        }
        self.catalog = catalog;
    }

    /// Start a run. Returns false when not in the input stage.
    pub fn run(&mut self, now: Instant) -> bool {
        if !self.is_input() {
            return false;
        }
        log::info!("calculating with {} pain points selected", self.selection.count());
        self.stage = Stage::Calculating { due: now + self.delay };
        true
    }

    /// Finish a pending run once its delay has elapsed. Returns true when the
    /// stage changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.stage {
            Stage::Calculating { due } if now >= due => {
                let result = compute(&self.selection, &self.inputs, &self.catalog);
                log::info!(
                    "result: {}h/yr, risk {}%, growth {}%, value {}",
                    result.hours_per_year,
                    result.risk_percent,
                    result.growth_percent,
                    result.annual_money_value
                );
                self.stage = Stage::Result(result);
                true
            }
            _ => false,
        }
    }

    /// Back to input from the result screen, keeping selections and numbers.
    pub fn retry(&mut self) -> bool {
        if matches!(self.stage, Stage::Result(_)) {
            self.stage = Stage::Input;
            true
        } else {
            false
        }
    }

    /// Open the lead-capture form. Calculator state is left alone.
    pub fn apply(&self, ctx: &mut AppContext) -> bool {
        if matches!(self.stage, Stage::Result(_)) {
            ctx.open_trial();
            true
        } else {
            false
        }
    }

    /// Fresh mount: clears selections, restores the starting numbers and
    /// drops any pending run without producing a result.
    pub fn remount(&mut self) {
        if matches!(self.stage, Stage::Calculating { .. }) {
            log::debug!("abandoning pending calculation");
        }
        self.selection = SelectionSet::for_catalog(&self.catalog);
        self.inputs = self.default_inputs;
        self.stage = Stage::Input;
    }

    /// Fraction of the delay already elapsed, for the spinner.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.stage {
            Stage::Input => 0.0,
            Stage::Result(_) => 1.0,
            Stage::Calculating { due } => {
                if self.delay.is_zero() {
                    return 1.0;
                }
                let remaining = due.saturating_duration_since(now);
                1.0 - remaining.as_secs_f64() / self.delay.as_secs_f64()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::catalog::pain_points;
    use crate::models::Language;

    fn session() -> CalculatorSession {
        CalculatorSession::new(
            pain_points(Language::En),
            CalculatorInputs::default(),
            DEFAULT_DELAY,
        )
    }

    #[test]
    fn test_run_waits_for_delay() {
        let mut s = session();
        let t0 = Instant::now();
        s.toggle(0);
        assert!(s.run(t0));
        assert!(matches!(s.stage(), Stage::Calculating { .. }));

        assert!(!s.poll(t0 + Duration::from_millis(1499)));
        assert!(s.result().is_none());

        assert!(s.poll(t0 + DEFAULT_DELAY));
        assert_eq!(s.result().map(|r| r.hours_per_year), Some(20));
    }

    #[test]
    fn test_input_frozen_while_calculating() {
        let mut s = session();
        let t0 = Instant::now();
        s.run(t0);
        s.toggle(3);
        s.set_input_text(InputField::Events, "99");
        s.set_input_text(InputField::HourlyValue, "1");
        assert_eq!(s.selection().count(), 0);
        assert_eq!(*s.inputs(), CalculatorInputs::default());
        assert!(!s.run(t0));
        assert!(!s.retry());
    }

    #[test]
    fn test_retry_keeps_state() {
        let mut s = session();
        let t0 = Instant::now();
        s.toggle(7);
        s.set_input_text(InputField::Participants, "120");
        s.run(t0);
        s.poll(t0 + DEFAULT_DELAY);

        assert!(s.retry());
        assert!(s.is_input());
        assert!(s.selection().is_selected(7));
        assert_eq!(s.inputs().participants_per_event, 120);
    }

    #[test]
    fn test_apply_opens_modal_only_from_result() {
        let mut s = session();
        let mut ctx = AppContext::default();
        assert!(!s.apply(&mut ctx));
        assert!(!ctx.is_modal_open());

        let t0 = Instant::now();
        s.run(t0);
        s.poll(t0 + DEFAULT_DELAY);
        let before = s.result().cloned();
        assert!(s.apply(&mut ctx));
        assert!(ctx.is_modal_open());
        assert_eq!(s.result().cloned(), before);
    }

    #[test]
    fn test_remount_abandons_pending_run() {
        let mut s = session();
        let t0 = Instant::now();
        s.toggle(1);
        s.set_input_text(InputField::Events, "10");
        s.run(t0);
        s.remount();

        assert!(!s.poll(t0 + DEFAULT_DELAY * 2));
        assert!(s.is_input());
        assert_eq!(s.selection().count(), 0);
        assert_eq!(*s.inputs(), CalculatorInputs::default());
    }

    #[test]
    fn test_language_switch_keeps_selection() {
        let mut s = session();
        s.toggle(4);
        s.replace_catalog(pain_points(Language::Ja));
        assert!(s.selection().is_selected(4));
        assert_eq!(s.catalog().get(4).map(|p| p.risk_weight), Some(Some(2.0)));
    }

    #[test]
    fn test_progress() {
        let mut s = session();
        let t0 = Instant::now();
        assert_eq!(s.progress(t0), 0.0);
        s.run(t0);
        let half = s.progress(t0 + Duration::from_millis(750));
        assert!((half - 0.5).abs() < 1e-9);
        s.poll(t0 + DEFAULT_DELAY);
        assert_eq!(s.progress(t0), 1.0);
    }

    #[test]
    fn test_zero_delay_completes_on_first_poll() {
        let mut s = CalculatorSession::new(
            pain_points(Language::En),
            CalculatorInputs::default(),
            Duration::ZERO,
        );
        let t0 = Instant::now();
        s.run(t0);
        assert!(s.poll(t0));
        assert!(s.result().is_some());
    }
}
