//! SplashMiddleware - drives the splash timer
//!
//! On `Bootstrap::Start` a timer task is spawned that dispatches
//! `FadeOutStarted` once the visible window has elapsed and `Completed` at the
//! end of the fade. The task is aborted on quit and when the middleware is
//! dropped, so a torn-down store never receives a stale completion.

use super::{BoxFuture, Middleware};
use crate::actions::{Action, BootstrapAction, GlobalAction, SplashAction};
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use localhub_config::AppConfig;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct SplashMiddleware {
    visible: Duration,
    fade_out: Duration,
    timer: Option<JoinHandle<()>>,
}

impl SplashMiddleware {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            visible: config.splash_visible(),
            fade_out: config.splash_fade_out(),
            timer: None,
        }
    }

    fn start_timer(&mut self, dispatcher: &Dispatcher) {
        let visible = self.visible;
        let fade_out = self.fade_out;
        let dispatcher = dispatcher.clone();

        log::info!(
            "SplashMiddleware: starting timer ({}ms visible, {}ms fade)",
            visible.as_millis(),
            fade_out.as_millis()
        );

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(visible).await;
            dispatcher.dispatch(Action::Splash(SplashAction::FadeOutStarted));
            tokio::time::sleep(fade_out).await;
            dispatcher.dispatch(Action::Splash(SplashAction::Completed));
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                log::debug!("SplashMiddleware: cancelling splash timer");
            }
            timer.abort();
        }
    }
}

impl Drop for SplashMiddleware {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl Middleware for SplashMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                Action::Bootstrap(BootstrapAction::Start) => {
                    // The splash runs once per process
                    if self.timer.is_some() {
                        log::warn!("SplashMiddleware: bootstrap already started, ignoring");
                        return false;
                    }
                    self.start_timer(dispatcher);
                    true
                }
                Action::Global(GlobalAction::Quit) => {
                    self.cancel_timer();
                    true
                }
                _ => true,
            }
        })
    }
}
