use serde::{Deserialize, Serialize};

fn default_events_per_month() -> i64 {
    4
}
fn default_participants_per_event() -> i64 {
    80
}
fn default_hourly_value() -> i64 {
    180
}

/// The three business numbers typed in next to the checklist.
///
/// Values are plain integers. Negative numbers are accepted and flow through
/// the arithmetic unchanged; nothing here rejects user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    #[serde(default = "default_events_per_month")]
    pub events_per_month: i64,
    #[serde(default = "default_participants_per_event")]
    pub participants_per_event: i64,
    #[serde(default = "default_hourly_value")]
    pub hourly_value: i64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            events_per_month: default_events_per_month(),
            participants_per_event: default_participants_per_event(),
            hourly_value: default_hourly_value(),
        }
    }
}

impl CalculatorInputs {
    pub fn get(&self, field: InputField) -> i64 {
        match field {
            InputField::Events => self.events_per_month,
            InputField::Participants => self.participants_per_event,
            InputField::HourlyValue => self.hourly_value,
        }
    }

    pub fn set(&mut self, field: InputField, value: i64) {
        match field {
            InputField::Events => self.events_per_month = value,
            InputField::Participants => self.participants_per_event = value,
            InputField::HourlyValue => self.hourly_value = value,
        }
    }

    /// Set a field from raw text, coercing anything unparsable to 0.
    pub fn set_text(&mut self, field: InputField, text: &str) {
        self.set(field, parse_soft(text));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Events,
    Participants,
    HourlyValue,
}

impl InputField {
    pub fn all() -> [InputField; 3] {
        [InputField::Events, InputField::Participants, InputField::HourlyValue]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::Events => "Tournaments / month",
            InputField::Participants => "Players / tournament",
            InputField::HourlyValue => "Hourly value",
        }
    }

    pub fn next(&self) -> InputField {
        match self {
            InputField::Events => InputField::Participants,
            InputField::Participants => InputField::HourlyValue,
            InputField::HourlyValue => InputField::Events,
        }
    }

    pub fn prev(&self) -> InputField {
        match self {
            InputField::Events => InputField::HourlyValue,
            InputField::Participants => InputField::Events,
            InputField::HourlyValue => InputField::Participants,
        }
    }
}

/// Lenient integer parse: optional sign then leading digits, rest ignored.
/// Empty or non-numeric text yields 0 instead of an error, and values past
/// the i64 range saturate.
pub fn parse_soft(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return 0;
    }

    let mut value: i64 = 0;
    for b in rest[..digits_len].bytes() {
        let d = i64::from(b - b'0');
        value = match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }

    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.events_per_month, 4);
        assert_eq!(inputs.participants_per_event, 80);
        assert_eq!(inputs.hourly_value, 180);
    }

    #[test]
    fn test_parse_soft_plain_numbers() {
        assert_eq!(parse_soft("42"), 42);
        assert_eq!(parse_soft("  7"), 7);
        assert_eq!(parse_soft("+12"), 12);
        assert_eq!(parse_soft("-5"), -5);
    }

    #[test]
    fn test_parse_soft_falls_back_to_zero() {
        assert_eq!(parse_soft(""), 0);
        assert_eq!(parse_soft("abc"), 0);
        assert_eq!(parse_soft("-"), 0);
        assert_eq!(parse_soft(".5"), 0);
    }

    #[test]
    fn test_parse_soft_ignores_trailing_text() {
        assert_eq!(parse_soft("12abc"), 12);
        assert_eq!(parse_soft("3.9"), 3);
        assert_eq!(parse_soft("1e3"), 1);
    }

    #[test]
    fn test_parse_soft_saturates() {
        assert_eq!(parse_soft("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_soft("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_set_text_coerces() {
        let mut inputs = CalculatorInputs::default();
        inputs.set_text(InputField::Participants, "oops");
        assert_eq!(inputs.participants_per_event, 0);
        inputs.set_text(InputField::HourlyValue, "250");
        assert_eq!(inputs.get(InputField::HourlyValue), 250);
    }

    #[test]
    fn test_field_cycle() {
        let f = InputField::Events;
        assert_eq!(f.next().next().next(), f);
        assert_eq!(f.prev(), InputField::HourlyValue);
    }
}
