use super::centered;
use crate::domain_models::SUPPORTED_LANGUAGES;
use crate::state::LocaleState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// First-launch language list
pub fn render(state: &LocaleState, area: Rect, f: &mut Frame) {
    let rect = centered(area, 40, SUPPORTED_LANGUAGES.len() as u16 + 4);
    render_language_list(state, "Choose your language", rect, f);
}

/// Language list with the active language marked; shared with the profile modal
pub fn render_language_list(state: &LocaleState, title: &str, rect: Rect, f: &mut Frame) {
    let items: Vec<ListItem> = SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| {
            let marker = if lang.code == state.current { "●" } else { " " };
            ListItem::new(Line::from(format!(
                "{} {}  ({})",
                marker, lang.native_name, lang.code
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .title_bottom(" ↑/↓ move · Enter select "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(list, rect, &mut list_state);
}
