//! Bootstrap Middleware
//!
//! Performs the storage side of the bootstrap transitions:
//! - On entering `LoadingFlags`, reads the three flags concurrently and
//!   delivers them tagged with the transition number they were issued under
//! - On first launch, records `hasLaunched` before the result is delivered
//! - On logout, clears `isAuthenticated` before the phase changes

use super::storage::{read_flags, remove_or_log, write_or_log};
use super::{BoxFuture, Middleware};
use crate::actions::{Action, BootstrapAction, Event, NavigationAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::BootstrapPhase;
use crate::state::AppState;
use localhub_store::{PreferenceStore, StoreKey, TRUE_VALUE};
use std::sync::Arc;

pub struct BootstrapMiddleware {
    store: Arc<dyn PreferenceStore>,
}

impl BootstrapMiddleware {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    fn spawn_flag_reads(&self, seq: u64, dispatcher: &Dispatcher) {
        let store = self.store.clone();
        let dispatcher = dispatcher.clone();

        log::info!("BootstrapMiddleware: reading flags (seq {})", seq);

        tokio::spawn(async move {
            let flags = read_flags(store.as_ref()).await;

            if !flags.has_launched {
                log::info!("BootstrapMiddleware: first launch, recording hasLaunched");
                write_or_log(store.as_ref(), StoreKey::HasLaunched, TRUE_VALUE).await;
            }

            log::debug!("BootstrapMiddleware: flags {:?} (seq {})", flags, seq);
            dispatcher.dispatch(Action::Bootstrap(BootstrapAction::FlagsLoaded { seq, flags }));
        });
    }
}

impl Middleware for BootstrapMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                Action::Bootstrap(BootstrapAction::Start) => {
                    log::info!("BootstrapMiddleware: bootstrap starting");
                    true
                }

                Action::Event(Event::PhaseEntered {
                    phase: BootstrapPhase::LoadingFlags,
                    seq,
                }) => {
                    self.spawn_flag_reads(*seq, dispatcher);
                    true
                }

                Action::Navigation(NavigationAction::LogoutRequested)
                    if state.bootstrap.phase == BootstrapPhase::Ready =>
                {
                    log::info!("BootstrapMiddleware: logging out");
                    remove_or_log(self.store.as_ref(), StoreKey::IsAuthenticated).await;
                    dispatcher.dispatch(Action::Bootstrap(BootstrapAction::LoggedOut));
                    true
                }

                _ => true,
            }
        })
    }
}
