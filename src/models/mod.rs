pub mod inputs;
pub mod language;
pub mod lead;
pub mod pain_point;
pub mod results;

pub use inputs::{parse_soft, CalculatorInputs, InputField};
pub use language::Language;
pub use lead::LeadForm;
pub use pain_point::{PainGroup, PainPoint};
pub use results::CalculationResult;
