pub mod app;
pub mod events;
pub mod lead_form;
pub mod theme;
pub mod widgets;
