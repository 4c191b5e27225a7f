use super::centered;
use crate::domain_models::PreferenceTopic;
use crate::state::PreferenceState;
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TOPICS: [(PreferenceTopic, &str, &str); 2] = [
    (PreferenceTopic::Updates, "1", "Updates · news and events near you"),
    (PreferenceTopic::Jobs, "2", "Jobs · openings in your area"),
];

/// Preference picker
pub fn render(state: &PreferenceState, area: Rect, f: &mut Frame) {
    let mut lines = vec![Line::from("What would you like to see?".bold()), Line::from("")];

    for (topic, key, text) in TOPICS {
        let check = if state.is_selected(topic) { "[x]" } else { "[ ]" };
        lines.push(Line::from(format!("{} {}  {}", key, check, text)));
    }

    lines.push(Line::from(""));
    if state.nothing_selected {
        lines.push(Line::from("Pick at least one to continue".red()));
    } else {
        lines.push(Line::from("Enter to continue".dim()));
    }

    let rect = centered(area, 50, lines.len() as u16 + 2);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Preferences ")),
        rect,
    );
}
