//! PreferenceMiddleware - turns the picked topics into a stored preference

use super::storage::write_or_log;
use super::{BoxFuture, Middleware};
use crate::actions::{Action, PreferenceAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{BootstrapPhase, UserPreference};
use crate::state::AppState;
use localhub_store::{PreferenceStore, StoreKey};
use std::sync::Arc;

pub struct PreferenceMiddleware {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceMiddleware {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Middleware for PreferenceMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            if state.bootstrap.phase != BootstrapPhase::AwaitingPreference {
                return true;
            }

            match action {
                Action::Preference(PreferenceAction::Submit) => {
                    // An empty selection stays on screen with a hint
                    if let Some(preference) = UserPreference::from_topics(&state.preference.selected)
                    {
                        dispatcher.dispatch(Action::Preference(PreferenceAction::Selected(
                            preference,
                        )));
                    }
                    true
                }
                Action::Preference(PreferenceAction::Selected(preference)) => {
                    log::info!("PreferenceMiddleware: saving preference {}", preference);
                    write_or_log(
                        self.store.as_ref(),
                        StoreKey::UserPreference,
                        preference.as_str(),
                    )
                    .await;
                    true
                }
                _ => true,
            }
        })
    }
}
