pub mod catalog;
pub mod engine;
pub mod selection;
pub mod session;

pub use catalog::Catalog;
pub use engine::compute;
pub use selection::SelectionSet;
pub use session::{CalculatorSession, Stage};
