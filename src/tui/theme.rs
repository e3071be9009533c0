use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(5, 8, 23);
pub const SURFACE: Color = Color::Rgb(15, 23, 42);
pub const BORDER: Color = Color::Rgb(51, 65, 85);
pub const TEXT: Color = Color::Rgb(241, 245, 249);
pub const TEXT_DIM: Color = Color::Rgb(100, 116, 139);
pub const BRAND: Color = Color::Rgb(0, 230, 118);
pub const BLUE: Color = Color::Rgb(59, 130, 246);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const RED: Color = Color::Rgb(239, 68, 68);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn brand() -> Style {
    Style::default().fg(BRAND)
}

pub fn blue() -> Style {
    Style::default().fg(BLUE)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        brand()
    } else {
        Style::default().fg(BORDER)
    }
}
