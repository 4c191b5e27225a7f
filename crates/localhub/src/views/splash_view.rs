use crate::state::SplashState;
use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = "localhub";
const TAGLINE: &str = "What's happening around you";
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Splash screen with a FIGlet title and a spinner
pub fn render(state: &SplashState, area: Rect, f: &mut Frame) {
    // Dimmed once the fade-out window starts
    let accent = if state.fading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let mut lines = figlet_title()
        .into_iter()
        .map(|line| Line::from(Span::styled(line, accent)))
        .collect::<Vec<_>>();

    lines.push(Line::from(""));
    lines.push(Line::from(TAGLINE.italic()));
    lines.push(Line::from(""));

    let spinner = SPINNER[state.animation_frame % SPINNER.len()];
    lines.push(Line::from(Span::styled(spinner, accent)));

    let height = lines.len() as u16;
    let [_, content, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

fn figlet_title() -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| {
            font.convert(TITLE)
                .map(|figure| figure.to_string().lines().map(String::from).collect())
        })
        .unwrap_or_else(|| vec![TITLE.to_string()])
}
