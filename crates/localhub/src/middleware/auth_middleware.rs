//! AuthMiddleware - simulated login, sign-up and password reset
//!
//! There is no backend. A valid submit starts a timer that reports success
//! after the configured delay. Once authenticated, `isAuthenticated` is
//! written before the bootstrap re-resolves the flags.

use super::storage::write_or_log;
use super::{BoxFuture, Middleware};
use crate::actions::{Action, AuthAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{validate_form, AuthScreen};
use crate::state::AppState;
use localhub_config::AppConfig;
use localhub_store::{PreferenceStore, StoreKey, TRUE_VALUE};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct AuthMiddleware {
    store: Arc<dyn PreferenceStore>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl AuthMiddleware {
    pub fn new(store: Arc<dyn PreferenceStore>, config: &AppConfig) -> Self {
        Self {
            store,
            delay: config.auth_delay(),
            pending: None,
        }
    }

    fn simulate_request(&mut self, outcome: AuthAction, dispatcher: &Dispatcher) {
        let delay = self.delay;
        let dispatcher = dispatcher.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(Action::Auth(outcome));
        }));
    }
}

impl Drop for AuthMiddleware {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Middleware for AuthMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let phase = state.bootstrap.phase;
            let auth = &state.auth;

            match action {
                Action::Auth(AuthAction::Submit) if phase.is_auth_flow() && !auth.loading => {
                    if validate_form(auth.screen, &auth.form).is_err() {
                        // The reducer shows the error
                        return true;
                    }
                    match auth.screen {
                        AuthScreen::Login | AuthScreen::SignUp => {
                            log::info!("AuthMiddleware: signing in");
                            self.simulate_request(AuthAction::Authenticated, dispatcher);
                        }
                        AuthScreen::ForgotPassword => {
                            log::info!("AuthMiddleware: sending password reset");
                            self.simulate_request(AuthAction::PasswordResetSent, dispatcher);
                        }
                        AuthScreen::PasswordChanged => {}
                    }
                    true
                }

                Action::Auth(AuthAction::SocialLogin(platform))
                    if phase.is_auth_flow() && !auth.loading =>
                {
                    log::info!("AuthMiddleware: signing in with {}", platform);
                    self.simulate_request(AuthAction::Authenticated, dispatcher);
                    true
                }

                Action::Auth(AuthAction::Authenticated) => {
                    if !phase.is_auth_flow() {
                        log::warn!(
                            "AuthMiddleware: authentication finished in phase {}, ignoring",
                            phase
                        );
                        return false;
                    }
                    write_or_log(self.store.as_ref(), StoreKey::IsAuthenticated, TRUE_VALUE)
                        .await;
                    true
                }

                Action::Global(GlobalAction::Quit) => {
                    if let Some(pending) = self.pending.take() {
                        pending.abort();
                    }
                    true
                }

                _ => true,
            }
        })
    }
}
