//! LoggingMiddleware - logs all actions for debugging

use super::{BoxFuture, Middleware};
use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            // Ticks arrive every frame during the splash
            if !matches!(action, Action::None | Action::Global(GlobalAction::Tick)) {
                log::debug!("Action: {:?} (phase {})", action, state.bootstrap.phase);
            }
            true
        })
    }
}
