//! Terminal views
//!
//! One full-screen view per bootstrap phase. Views are pure functions of the
//! state; they never dispatch.

use crate::domain_models::BootstrapPhase;
use crate::state::AppState;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::Frame;

mod auth_view;
mod language_view;
mod main_view;
mod preference_view;
mod splash_view;

/// Render the screen for the current bootstrap phase
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    match state.bootstrap.phase {
        BootstrapPhase::Splashing | BootstrapPhase::LoadingFlags => {
            splash_view::render(&state.splash, area, f)
        }
        BootstrapPhase::FirstLaunchOnboarding => language_view::render(&state.locale, area, f),
        BootstrapPhase::Unauthenticated => auth_view::render(&state.auth, area, f),
        BootstrapPhase::AwaitingPreference => {
            preference_view::render(&state.preference, area, f)
        }
        BootstrapPhase::Ready => {
            if let Some(navigation) = &state.navigation {
                main_view::render(navigation, &state.locale, area, f);
            }
        }
    }
}

/// Rectangle of the given size centered in `area`, clamped to it
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
