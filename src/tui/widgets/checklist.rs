use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

use crate::calculator::{Catalog, SelectionSet};
use crate::models::PainGroup;
use crate::tui::theme;
use crate::utils::format::truncate_to_width;

fn group_style(group: PainGroup) -> Style {
    match group {
        PainGroup::Operations => theme::brand(),
        PainGroup::Control => theme::amber(),
        PainGroup::Growth => theme::blue(),
    }
}

/// Catalog indices in the order the checklist shows them: grouped by area.
pub fn display_order(catalog: &Catalog) -> Vec<usize> {
    PainGroup::all()
        .iter()
        .flat_map(|g| catalog.grouped(*g).into_iter().map(|(i, _)| i))
        .collect()
}

/// Row of a catalog entry in the rendered list, counting each group's
/// heading and trailing blank line.
fn list_row(catalog: &Catalog, target: usize) -> Option<usize> {
    let mut row = 0;
    for group in PainGroup::all() {
        let entries = catalog.grouped(group);
        if entries.is_empty() {
            continue;
        }
        row += 1;
        for (idx, _) in entries {
            if idx == target {
                return Some(row);
            }
            row += 1;
        }
        row += 1;
    }
    None
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    selection: &SelectionSet,
    cursor: Option<usize>,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Pain Points ({}/{}) ", selection.count(), catalog.len()),
            theme::brand(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    // borders + "  [x] " prefix
    let label_width = (area.width as usize).saturating_sub(10);

    let mut items: Vec<ListItem> = Vec::new();
    for group in PainGroup::all() {
        let entries = catalog.grouped(group);
        if entries.is_empty() {
            continue;
        }
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {}", group.display_name().to_uppercase()),
            group_style(group).add_modifier(Modifier::BOLD),
        ))));

        for (idx, p) in entries {
            let checked = selection.is_selected(idx);
            let is_cursor = focused && cursor == Some(idx);

            let (mark, mark_style) = if checked {
                ("[✓]", group_style(group).add_modifier(Modifier::BOLD))
            } else {
                ("[ ]", theme::dim())
            };

            let label_style = match (is_cursor, checked) {
                (true, _) => theme::bold().add_modifier(Modifier::REVERSED),
                (false, true) => theme::bold(),
                (false, false) => theme::dim(),
            };

            items.push(ListItem::new(Line::from(vec![
                Span::styled(if is_cursor { " ▸" } else { "  " }, theme::brand()),
                Span::styled(mark, mark_style),
                Span::raw(" "),
                Span::styled(truncate_to_width(&p.label, label_width), label_style),
            ])));
        }
        items.push(ListItem::new(Line::from("")));
    }

    // Keeps the cursor row scrolled into view on short terminals
    let mut state = ListState::default().with_selected(cursor.and_then(|c| list_row(catalog, c)));
    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut state);
}
