use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PainGroup {
    Operations,
    Control,
    Growth,
}

impl PainGroup {
    pub fn all() -> [PainGroup; 3] {
        [PainGroup::Operations, PainGroup::Control, PainGroup::Growth]
    }

    /// Lowercase code, as written in JSON and accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PainGroup::Operations => "operations",
            PainGroup::Control => "control",
            PainGroup::Growth => "growth",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PainGroup::Operations => "Operations",
            PainGroup::Control => "Control",
            PainGroup::Growth => "Growth",
        }
    }
}

impl std::fmt::Display for PainGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PainGroup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ops" | "operations" => Ok(PainGroup::Operations),
            "control" => Ok(PainGroup::Control),
            "growth" => Ok(PainGroup::Growth),
            _ => {
                let codes: Vec<&str> = PainGroup::all().iter().map(|g| g.as_str()).collect();
                Err(anyhow::anyhow!(
                    "Unknown pain point group: {} (expected one of {})",
                    s,
                    codes.join(", ")
                ))
            }
        }
    }
}

/// One checklist entry. Each weight only counts when the entry is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub group: PainGroup,
    pub label: String,
    /// Minutes of manual work per scheduled event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_per_event: Option<f64>,
    /// Minutes of manual work per participant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_per_participant: Option<f64>,
    /// Fixed recurring minutes per month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_per_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_weight: Option<f64>,
}

impl PainPoint {
    pub fn new(group: PainGroup, label: impl Into<String>) -> Self {
        Self {
            group,
            label: label.into(),
            minutes_per_event: None,
            minutes_per_participant: None,
            minutes_per_month: None,
            risk_weight: None,
            growth_weight: None,
        }
    }

    pub fn per_event(mut self, minutes: f64) -> Self {
        self.minutes_per_event = Some(minutes);
        self
    }

    pub fn per_participant(mut self, minutes: f64) -> Self {
        self.minutes_per_participant = Some(minutes);
        self
    }

    pub fn per_month(mut self, minutes: f64) -> Self {
        self.minutes_per_month = Some(minutes);
        self
    }

    pub fn risk(mut self, weight: f64) -> Self {
        self.risk_weight = Some(weight);
        self
    }

    pub fn growth(mut self, weight: f64) -> Self {
        self.growth_weight = Some(weight);
        self
    }

    /// A pain point with no weight at all contributes nothing when selected.
    pub fn has_weight(&self) -> bool {
        self.minutes_per_event.is_some()
            || self.minutes_per_participant.is_some()
            || self.minutes_per_month.is_some()
            || self.risk_weight.is_some()
            || self.growth_weight.is_some()
    }

    /// Summary like "min/event 10 · growth 2" used by the catalog listing.
    pub fn weight_summary(&self) -> String {
        let parts = [
            ("min/event", self.minutes_per_event),
            ("min/player", self.minutes_per_participant),
            ("min/month", self.minutes_per_month),
            ("risk", self.risk_weight),
            ("growth", self.growth_weight),
        ];
        parts
            .iter()
            .filter_map(|(name, w)| w.map(|v| format!("{} {}", name, v)))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
