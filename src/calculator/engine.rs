use crate::calculator::{Catalog, SelectionSet};
use crate::models::{CalculationResult, CalculatorInputs};

const BASE_RISK: f64 = 15.0;
const RISK_MULTIPLIER: f64 = 5.0;
const BASE_GROWTH: f64 = 5.0;
/// The "daily" accumulator is treated as recurring on each day of a 30-day month.
const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_YEAR: i64 = 12;

/// Turn the checked pain points and the business inputs into the four
/// headline numbers.
///
/// Pure and total: any integer inputs (negative ones included) produce a
/// result. Flags past the end of the catalog are ignored, and catalog
/// entries with no flag count as unchecked.
pub fn compute(
    selection: &SelectionSet,
    inputs: &CalculatorInputs,
    catalog: &Catalog,
) -> CalculationResult {
    let events = inputs.events_per_month as f64;
    let participants = inputs.participants_per_event as f64;

    let mut daily_minutes = 0.0;
    let mut monthly_minutes = 0.0;
    let mut risk_sum = 0.0;
    let mut growth_sum = 0.0;

    for idx in selection.selected() {
        let Some(p) = catalog.get(idx) else {
            continue;
        };
        if let Some(t) = p.minutes_per_event {
            daily_minutes += t * events;
        }
        if let Some(m) = p.minutes_per_participant {
            daily_minutes += m * participants;
        }
        if let Some(m) = p.minutes_per_month {
            monthly_minutes += m;
        }
        if let Some(r) = p.risk_weight {
            risk_sum += r;
        }
        if let Some(g) = p.growth_weight {
            growth_sum += g;
        }
    }

    let total_minutes = daily_minutes * DAYS_PER_MONTH + monthly_minutes;
    let hours_per_year = round_half_up(total_minutes / 60.0) as i64;

    log::debug!(
        "compute: {} selected, daily={} monthly={} risk={} growth={} -> {}h",
        selection.count(),
        daily_minutes,
        monthly_minutes,
        risk_sum,
        growth_sum,
        hours_per_year
    );

    CalculationResult {
        hours_per_year,
        risk_percent: format_one_decimal(BASE_RISK + risk_sum * RISK_MULTIPLIER),
        growth_percent: format_one_decimal(BASE_GROWTH + growth_sum),
        annual_money_value: hours_per_year
            .saturating_mul(inputs.hourly_value)
            .saturating_mul(MONTHS_PER_YEAR),
    }
}

/// Ties round toward positive infinity: 2.5 → 3, -2.5 → -2.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// One decimal digit, ties rounded away from zero on the exact binary value.
/// The sign is kept for any value below zero, so -0.04 gives "-0.0" while
/// -0.0 itself gives "0.0".
fn format_one_decimal(value: f64) -> String {
    let abs = value.abs();
    let frac = abs.fract();
    // x.25 and x.75 are the only exactly representable ties at one decimal;
    // `{:.1}` would send them to the even digit
    let digits = if frac == 0.25 || frac == 0.75 {
        let tenth = if frac == 0.25 { 3 } else { 8 };
        format!("{:.0}.{}", abs.trunc(), tenth)
    } else {
        format!("{:.1}", abs)
    };
    if value < 0.0 { format!("-{}", digits) } else { digits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::catalog::pain_points;
    use crate::models::{Language, PainGroup, PainPoint};

    fn inputs(events: i64, participants: i64, hourly: i64) -> CalculatorInputs {
        CalculatorInputs {
            events_per_month: events,
            participants_per_event: participants,
            hourly_value: hourly,
        }
    }

    #[test]
    fn test_nothing_selected_gives_baseline() {
        let catalog = pain_points(Language::En);
        let selection = SelectionSet::for_catalog(&catalog);
        for i in [inputs(4, 80, 180), inputs(0, 0, 0), inputs(1000, -3, 99)] {
            let r = compute(&selection, &i, &catalog);
            assert_eq!(r.hours_per_year, 0);
            assert_eq!(r.risk_percent, "15.0");
            assert_eq!(r.growth_percent, "5.0");
            assert_eq!(r.annual_money_value, 0);
        }
    }

    #[test]
    fn test_single_event_weighted_point() {
        let catalog = Catalog::new(vec![
            PainPoint::new(PainGroup::Operations, "silos").per_event(10.0).growth(2.0),
        ]);
        let selection = SelectionSet::from_flags(vec![true]);
        let r = compute(&selection, &inputs(4, 80, 180), &catalog);
        assert_eq!(r.hours_per_year, 20);
        assert_eq!(r.risk_percent, "15.0");
        assert_eq!(r.growth_percent, "7.0");
        assert_eq!(r.annual_money_value, 43_200);
    }

    #[test]
    fn test_monthly_and_risk_only() {
        let catalog = Catalog::new(vec![
            PainPoint::new(PainGroup::Growth, "reports").per_month(300.0),
            PainPoint::new(PainGroup::Control, "audit").risk(2.0),
        ]);
        let selection = SelectionSet::from_flags(vec![true, true]);
        for i in [inputs(4, 80, 180), inputs(0, 0, 50), inputs(31, 500, 1)] {
            let r = compute(&selection, &i, &catalog);
            assert_eq!(r.hours_per_year, 5);
            assert_eq!(r.risk_percent, "25.0");
            assert_eq!(r.growth_percent, "5.0");
            assert_eq!(r.annual_money_value, 5 * i.hourly_value * 12);
        }
    }

    #[test]
    fn test_full_catalog_regression() {
        // daily 844, monthly 450, 25770 minutes -> 429.5 hours
        let catalog = pain_points(Language::ZhTw);
        let mut selection = SelectionSet::for_catalog(&catalog);
        selection.select_all();
        let r = compute(&selection, &inputs(4, 80, 180), &catalog);
        assert_eq!(
            r,
            CalculationResult {
                hours_per_year: 430,
                risk_percent: "42.5".to_string(),
                growth_percent: "21.5".to_string(),
                annual_money_value: 928_800,
            }
        );
    }

    #[test]
    fn test_zero_volume_leaves_only_fixed_contributions() {
        let catalog = pain_points(Language::En);
        let mut selection = SelectionSet::for_catalog(&catalog);
        selection.select_all();
        let r = compute(&selection, &inputs(0, 0, 180), &catalog);
        // only the 300 + 150 monthly minutes remain
        assert_eq!(r.hours_per_year, 8);
        assert_eq!(r.risk_percent, "42.5");
        assert_eq!(r.growth_percent, "21.5");
        assert_eq!(r.annual_money_value, 8 * 180 * 12);
    }

    #[test]
    fn test_more_volume_never_lowers_hours() {
        let catalog = pain_points(Language::En);
        let selection = SelectionSet::from_indices(catalog.len(), &[0, 2, 4]).unwrap();
        let mut last = 0;
        for events in 0..20 {
            let r = compute(&selection, &inputs(events, 80, 180), &catalog);
            assert!(r.hours_per_year >= last);
            last = r.hours_per_year;
        }
        let mut last = 0;
        for players in (0..400).step_by(7) {
            let r = compute(&selection, &inputs(4, players, 180), &catalog);
            assert!(r.hours_per_year >= last);
            last = r.hours_per_year;
        }
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let catalog = pain_points(Language::Ja);
        let selection = SelectionSet::from_indices(catalog.len(), &[1, 5, 8]).unwrap();
        let i = inputs(6, 45, 220);
        assert_eq!(compute(&selection, &i, &catalog), compute(&selection, &i, &catalog));
    }

    #[test]
    fn test_negative_inputs_do_not_panic() {
        let catalog = pain_points(Language::En);
        let mut selection = SelectionSet::for_catalog(&catalog);
        selection.select_all();
        let r = compute(&selection, &inputs(-4, -80, -180), &catalog);
        // daily = -844, total = -25320 + 450 = -24870 -> -414.5 -> -414
        assert_eq!(r.hours_per_year, -414);
        assert_eq!(r.annual_money_value, -414 * -180 * 12);

        let huge = compute(&selection, &inputs(i64::MAX, i64::MAX, i64::MAX), &catalog);
        assert_eq!(huge.annual_money_value, i64::MAX);
    }

    #[test]
    fn test_mismatched_selection_length() {
        let catalog = pain_points(Language::En);
        let short = SelectionSet::from_flags(vec![true]);
        let long = SelectionSet::from_flags(vec![false; 12].into_iter().chain([true]).collect());
        assert_eq!(compute(&short, &inputs(4, 80, 180), &catalog).hours_per_year, 20);
        assert_eq!(compute(&long, &inputs(4, 80, 180), &catalog).hours_per_year, 0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(429.5), 430.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_whole_percentages_keep_one_decimal() {
        assert_eq!(format_one_decimal(15.0), "15.0");
        assert_eq!(format_one_decimal(7.5), "7.5");
        assert_eq!(format_one_decimal(-0.0), "0.0");
    }

    #[test]
    fn test_one_decimal_ties_round_away_from_zero() {
        assert_eq!(format_one_decimal(15.25), "15.3");
        assert_eq!(format_one_decimal(0.25), "0.3");
        assert_eq!(format_one_decimal(0.75), "0.8");
        assert_eq!(format_one_decimal(2.75), "2.8");
        assert_eq!(format_one_decimal(-2.25), "-2.3");
        // 0.35 is stored just below the tie
        assert_eq!(format_one_decimal(0.35), "0.3");
        assert_eq!(format_one_decimal(9.99), "10.0");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(format_one_decimal(-0.04), "-0.0");
        assert_eq!(format_one_decimal(-0.06), "-0.1");
    }

    #[test]
    fn test_fractional_weights_round_ties_up() {
        let catalog = Catalog::new(vec![
            PainPoint::new(PainGroup::Growth, "funnel").growth(10.25),
            PainPoint::new(PainGroup::Control, "cash").risk(0.05),
        ]);
        let selection = SelectionSet::from_flags(vec![true, true]);
        let r = compute(&selection, &inputs(4, 80, 180), &catalog);
        assert_eq!(r.growth_percent, "15.3");
        assert_eq!(r.risk_percent, "15.3");
    }
}
