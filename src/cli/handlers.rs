use anyhow::{Context, Result};
use serde::Serialize;

use crate::calculator::catalog::pain_points;
use crate::calculator::{compute, Catalog, SelectionSet};
use crate::cli::args::CalcArgs;
use crate::config::AppConfig;
use crate::models::{
    parse_soft, CalculationResult, CalculatorInputs, Language, PainGroup, PainPoint,
};
use crate::utils::format::format_money;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const BRAND: &str = "\x1b[38;2;0;230;118m";

// ─── Calc ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    language: Language,
    inputs: &'a CalculatorInputs,
    selected: Vec<usize>,
    result: &'a CalculationResult,
}

/// Resolve flags against the config defaults. Numeric flags never fail:
/// unparsable text becomes 0.
pub fn prepare_calc(
    args: &CalcArgs,
    config: &AppConfig,
    lang: Language,
) -> Result<(Catalog, SelectionSet, CalculatorInputs)> {
    let catalog = pain_points(lang);

    let mut inputs = config.defaults;
    if let Some(text) = &args.events {
        inputs.events_per_month = parse_soft(text);
    }
    if let Some(text) = &args.participants {
        inputs.participants_per_event = parse_soft(text);
    }
    if let Some(text) = &args.hourly {
        inputs.hourly_value = parse_soft(text);
    }

    let selection = if args.all {
        let mut s = SelectionSet::for_catalog(&catalog);
        s.select_all();
        s
    } else {
        SelectionSet::from_indices(catalog.len(), &args.select)
            .context("Invalid --select")?
    };

    Ok((catalog, selection, inputs))
}

pub fn handle_calc(args: &CalcArgs, config: &AppConfig, lang: Language) -> Result<()> {
    let (catalog, selection, inputs) = prepare_calc(args, config, lang)?;
    let result = compute(&selection, &inputs, &catalog);

    if args.json {
        let report = CalcReport {
            language: lang,
            inputs: &inputs,
            selected: selection.selected().collect(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println_colored!(BRAND, "  HyperSystem · Business Health Check");
    println!();

    if selection.count() == 0 {
        println_colored!(DIM, "  No pain points selected (use --select 0,4,7 or --all)");
    } else {
        for idx in selection.selected() {
            if let Some(p) = catalog.get(idx) {
                println_colored!(DIM, "  [{}] {:<10} {}", idx, p.group.display_name(), p.label);
            }
        }
    }

    println!();
    println_colored!(
        DIM,
        "  {} tournaments/month · {} players/tournament · {} per hour",
        inputs.events_per_month,
        inputs.participants_per_event,
        inputs.hourly_value
    );
    println!();
    println_colored!(BLUE, "  Hours lost      {:>10} H", result.hours_per_year);
    println_colored!(AMBER, "  Operating risk  {:>10} %", result.risk_percent);
    println_colored!(GREEN, "  Growth upside   {:>10} %", result.growth_percent);
    println!();
    println_colored!(
        BOLD,
        "  Recoverable value  {}",
        format_money(
            result.annual_money_value,
            &config.general.currency,
            lang.per_year_suffix()
        )
    );
    println!();
    println_colored!(DIM, "  Run `hypersystem apply` to start a free trial.");
    println!();
    Ok(())
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    index: usize,
    #[serde(flatten)]
    point: &'a PainPoint,
}

/// Areas to list: all of them, or the one named by `--group`.
fn catalog_groups(filter: Option<&str>) -> Result<Vec<PainGroup>> {
    match filter {
        Some(name) => Ok(vec![name.parse::<PainGroup>()?]),
        None => Ok(PainGroup::all().to_vec()),
    }
}

pub fn handle_catalog(lang: Language, group: Option<&str>, json: bool) -> Result<()> {
    let catalog = pain_points(lang);
    let groups = catalog_groups(group)?;

    if json {
        if group.is_none() {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        } else {
            let entries: Vec<CatalogEntry> = groups
                .iter()
                .flat_map(|g| catalog.grouped(*g))
                .map(|(index, point)| CatalogEntry { index, point })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        return Ok(());
    }

    println!();
    for group in groups {
        println_colored!(BRAND, "  {}", group.display_name());
        for (idx, p) in catalog.grouped(group) {
            println_colored!(BOLD, "  [{}] {}", idx, p.label);
            println_colored!(DIM, "      {}", p.weight_summary());
        }
        println!();
    }
    Ok(())
}

// ─── Apply ───────────────────────────────────────────────────────────────────

pub fn handle_apply(lang: Language) -> Result<()> {
    match crate::tui::lead_form::run_lead_form_tui(lang)? {
        Some(form) => {
            println!();
            println_colored!(BRAND, "  {}", form.brand);
            println_colored!(GREEN, "  {}", crate::models::lead::thank_you_message(lang));
            println!();
        }
        None => {
            println_colored!(DIM, "  Application cancelled.");
        }
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    if init {
        let path = AppConfig::default().save()?;
        println_colored!(GREEN, "  Wrote defaults to {}", path.display());
        return Ok(());
    }

    let path = AppConfig::config_path()?;
    println!();
    println_colored!(BRAND, "  Config: {}", path.display());
    if !path.exists() {
        println_colored!(DIM, "  (file not found, showing defaults)");
    }
    println!();
    print!("{}", toml::to_string_pretty(config).context("Serializing config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CalcArgs {
        CalcArgs {
            events: None,
            participants: None,
            hourly: None,
            select: vec![],
            all: false,
            json: false,
        }
    }

    #[test]
    fn test_prepare_uses_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.hourly_value = 300;
        let (catalog, selection, inputs) = prepare_calc(&args(), &config, Language::En).unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(selection.count(), 0);
        assert_eq!(inputs.events_per_month, 4);
        assert_eq!(inputs.hourly_value, 300);
    }

    #[test]
    fn test_prepare_coerces_bad_numbers_to_zero() {
        let mut a = args();
        a.events = Some("lots".to_string());
        a.participants = Some("-12".to_string());
        a.hourly = Some("200abc".to_string());
        let (_, _, inputs) = prepare_calc(&a, &AppConfig::default(), Language::En).unwrap();
        assert_eq!(inputs.events_per_month, 0);
        assert_eq!(inputs.participants_per_event, -12);
        assert_eq!(inputs.hourly_value, 200);
    }

    #[test]
    fn test_prepare_all_matches_full_catalog() {
        let mut a = args();
        a.all = true;
        let (catalog, selection, inputs) =
            prepare_calc(&a, &AppConfig::default(), Language::ZhCn).unwrap();
        let r = compute(&selection, &inputs, &catalog);
        assert_eq!(r.hours_per_year, 430);
        assert_eq!(r.annual_money_value, 928_800);
    }

    #[test]
    fn test_prepare_rejects_unknown_index() {
        let mut a = args();
        a.select = vec![2, 10];
        assert!(prepare_calc(&a, &AppConfig::default(), Language::En).is_err());
    }

    #[test]
    fn test_catalog_group_filter() {
        assert_eq!(catalog_groups(None).unwrap(), PainGroup::all().to_vec());
        assert_eq!(catalog_groups(Some("ops")).unwrap(), vec![PainGroup::Operations]);
        assert_eq!(catalog_groups(Some("Control")).unwrap(), vec![PainGroup::Control]);
        assert!(catalog_groups(Some("finance")).is_err());
    }

    #[test]
    fn test_catalog_entry_json_keeps_catalog_index() {
        let catalog = pain_points(Language::En);
        let (index, point) = catalog.grouped(PainGroup::Growth)[0];
        let value = serde_json::to_value(CatalogEntry { index, point }).unwrap();
        assert_eq!(value["index"], index);
        assert_eq!(value["group"], "growth");
        assert_eq!(value["label"], point.label.as_str());
    }
}
