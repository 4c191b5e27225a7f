//! Main tab navigation with overlays
//!
//! Stacking order, bottom to top: active tab, detail stack, profile,
//! notifications, search.

use super::centered;
use super::language_view::render_language_list;
use crate::domain_models::{DetailScreen, ModalKind, Tab};
use crate::state::{LocaleState, NavigationState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

pub fn render(state: &NavigationState, locale: &LocaleState, area: Rect, f: &mut Frame) {
    let [body, tab_bar, help] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    match state.detail_stack.last() {
        Some(screen) => render_detail(*screen, state.detail_stack.len(), body, f),
        None => render_tab(state.active_tab, body, f),
    }

    let titles: Vec<Line> = state
        .layout
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab)))
        .collect();
    let selected = state.layout.position(state.active_tab);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, tab_bar);

    f.render_widget(
        Paragraph::new(Line::from(
            "←/→ tabs · Enter open · p profile · n notifications · / search · c change preference · Esc back · q quit"
                .dim(),
        )),
        help,
    );

    for kind in [ModalKind::Profile, ModalKind::Notifications, ModalKind::Search] {
        if state.modals.is_open(kind) {
            render_modal(kind, locale, area, f);
        }
    }
}

fn tab_blurb(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "Highlights from around you",
        Tab::Jobs => "Openings posted nearby",
        Tab::Updates => "Local news and announcements",
        Tab::Events => "Upcoming events",
        Tab::Promotions => "Offers from local businesses",
        Tab::Search => "Search",
    }
}

fn render_tab(tab: Tab, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(tab_blurb(tab)),
        Line::from(""),
        Line::from("Press Enter to open the first item".dim()),
    ];
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", tab)),
        ),
        area,
    );
}

fn render_detail(screen: DetailScreen, depth: usize, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(format!("{}", screen).bold()),
        Line::from(""),
        Line::from(format!("{} screen(s) open · Esc to go back", depth).dim()),
    ];
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", screen)),
        ),
        area,
    );
}

fn render_modal(kind: ModalKind, locale: &LocaleState, area: Rect, f: &mut Frame) {
    match kind {
        ModalKind::Profile => {
            let rect = centered(area, 44, 14);
            f.render_widget(Clear, rect);
            let [languages, footer] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(rect);
            render_language_list(locale, "Profile · language", languages, f);
            f.render_widget(
                Paragraph::new("l log out · Esc close")
                    .block(Block::default().borders(Borders::ALL)),
                footer,
            );
        }
        ModalKind::Notifications => {
            let rect = centered(area, 44, 7);
            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(vec![Line::from("You're all caught up."), Line::from("")]).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Notifications "),
                ),
                rect,
            );
        }
        ModalKind::Search => {
            let rect = centered(area, 60, 5);
            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new("Search events, jobs and updates…".dim())
                    .block(Block::default().borders(Borders::ALL).title(" Search ")),
                rect,
            );
        }
    }
}
