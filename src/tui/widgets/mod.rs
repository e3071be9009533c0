pub mod calculating;
pub mod checklist;
pub mod header;
pub mod inputs;
pub mod results;
pub mod statusbar;
