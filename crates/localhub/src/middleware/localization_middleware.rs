//! LocalizationMiddleware - loads and persists the chosen language

use super::storage::{read_or_absent, write_or_log};
use super::{BoxFuture, Middleware};
use crate::actions::{Action, BootstrapAction, LocaleAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::find_language;
use crate::state::AppState;
use localhub_store::{PreferenceStore, StoreKey};
use std::sync::Arc;

pub struct LocalizationMiddleware {
    store: Arc<dyn PreferenceStore>,
    /// Set once the user picks a language; a late saved value must not
    /// override it
    user_selected: bool,
}

impl LocalizationMiddleware {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            user_selected: false,
        }
    }
}

impl Middleware for LocalizationMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                Action::Bootstrap(BootstrapAction::Start) => {
                    let store = self.store.clone();
                    let dispatcher = dispatcher.clone();
                    tokio::spawn(async move {
                        if let Some(code) = read_or_absent(store.as_ref(), StoreKey::UserLanguage).await
                        {
                            dispatcher.dispatch(Action::Locale(LocaleAction::Loaded(code)));
                        }
                    });
                    true
                }

                Action::Locale(LocaleAction::Loaded(code)) => {
                    if self.user_selected {
                        log::debug!(
                            "LocalizationMiddleware: ignoring saved language {}, user already chose",
                            code
                        );
                        return false;
                    }
                    true
                }

                Action::Locale(LocaleAction::Select(code)) => {
                    if find_language(code).is_none() {
                        // The reducer logs and ignores it
                        return true;
                    }
                    self.user_selected = true;
                    log::info!("LocalizationMiddleware: saving language {}", code);
                    write_or_log(self.store.as_ref(), StoreKey::UserLanguage, code).await;
                    true
                }

                _ => true,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support;
    use localhub_store::MemoryPreferenceStore;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_start_loads_saved_language() {
        let store = Arc::new(MemoryPreferenceStore::with_entries([("userLanguage", "ta")]));
        let mut middleware = LocalizationMiddleware::new(store);
        let (dispatcher, mut rx) = test_support::dispatcher();

        middleware
            .handle(
                &Action::Bootstrap(BootstrapAction::Start),
                &AppState::default(),
                &dispatcher,
            )
            .await;

        assert_eq!(
            rx.recv().await,
            Some(Action::Locale(LocaleAction::Loaded("ta".to_string())))
        );
    }

    #[tokio::test]
    async fn test_select_persists_supported_language() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut middleware = LocalizationMiddleware::new(store.clone());
        let (dispatcher, _rx) = test_support::dispatcher();
        let state = AppState::default();

        for code in ["xx", "mr"] {
            middleware
                .handle(
                    &Action::Locale(LocaleAction::Select(code.to_string())),
                    &state,
                    &dispatcher,
                )
                .await;
        }

        assert_eq!(
            store.get("userLanguage").await.unwrap().as_deref(),
            Some("mr")
        );
    }

    #[tokio::test]
    async fn test_saved_language_does_not_override_user_choice() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut middleware = LocalizationMiddleware::new(store);
        let (dispatcher, _rx) = test_support::dispatcher();
        let state = AppState::default();

        middleware
            .handle(
                &Action::Locale(LocaleAction::Select("hi".to_string())),
                &state,
                &dispatcher,
            )
            .await;
        let proceed = middleware
            .handle(
                &Action::Locale(LocaleAction::Loaded("te".to_string())),
                &state,
                &dispatcher,
            )
            .await;

        assert!(!proceed);
    }
}
