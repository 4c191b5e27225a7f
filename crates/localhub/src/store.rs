use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Store - holds application state and drives the Redux loop
///
/// ```text
/// Action → Middleware Chain → Reducer → State
///                ↑                        │
///                └──── Event::PhaseEntered┘
/// ```
///
/// Actions are processed one at a time. Anything dispatched while an action
/// is in flight, by middleware or by a spawned task, waits in the queue.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: UnboundedReceiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store. Middleware runs in insertion order.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through the middleware chain and the reducer
    ///
    /// Events only visit the middleware. When the reducer changes the
    /// bootstrap phase, `Event::PhaseEntered` is queued carrying the new
    /// transition number.
    pub async fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware
                .handle(&action, &self.state, &self.dispatcher)
                .await
            {
                should_reduce = false;
                break;
            }
        }

        if !should_reduce || matches!(action, Action::Event(_)) {
            return;
        }

        let previous_seq = self.state.bootstrap.seq;
        self.state = reduce(self.state.clone(), &action);

        if self.state.bootstrap.seq != previous_seq {
            self.dispatcher.dispatch(Action::event(Event::PhaseEntered {
                phase: self.state.bootstrap.phase,
                seq: self.state.bootstrap.seq,
            }));
        }
    }

    /// Process everything currently queued, including actions queued while
    /// draining. Returns the number of actions processed.
    pub async fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action).await;
            processed += 1;
        }
        processed
    }

    /// Wait for the next queued action and process it
    ///
    /// Returns `false` when no sender is left.
    pub async fn process_next(&mut self) -> bool {
        match self.action_rx.recv().await {
            Some(action) => {
                self.dispatch(action).await;
                true
            }
            None => false,
        }
    }

    /// Keep processing actions until `predicate` holds for the state
    pub async fn run_until<F>(&mut self, predicate: F)
    where
        F: Fn(&AppState) -> bool,
    {
        while !predicate(&self.state) {
            if !self.process_next().await {
                break;
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, SplashAction};
    use crate::domain_models::BootstrapPhase;
    use crate::middleware::BoxFuture;
    use std::sync::{Arc, Mutex};

    /// Records every action it sees
    struct Recorder {
        seen: Arc<Mutex<Vec<Action>>>,
        block: bool,
    }

    impl Middleware for Recorder {
        fn handle<'a>(
            &'a mut self,
            action: &'a Action,
            _state: &'a AppState,
            _dispatcher: &'a Dispatcher,
        ) -> BoxFuture<'a, bool> {
            Box::pin(async move {
                self.seen.lock().unwrap().push(action.clone());
                !self.block
            })
        }
    }

    fn recorder(block: bool) -> (Recorder, Arc<Mutex<Vec<Action>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Recorder {
                seen: seen.clone(),
                block,
            },
            seen,
        )
    }

    #[tokio::test]
    async fn test_dispatch_quit() {
        let mut store = Store::default();
        assert!(store.state().running);

        store.dispatch(Action::Global(GlobalAction::Quit)).await;
        assert!(!store.state().running);
    }

    #[tokio::test]
    async fn test_phase_change_emits_event() {
        let (middleware, seen) = recorder(false);
        let mut store = Store::default();
        store.add_middleware(middleware);

        store.dispatch(Action::Splash(SplashAction::Completed)).await;
        assert_eq!(store.process_pending().await, 1);

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen.last(),
            Some(&Action::event(Event::PhaseEntered {
                phase: BootstrapPhase::LoadingFlags,
                seq: 1,
            }))
        );
    }

    #[tokio::test]
    async fn test_no_event_without_phase_change() {
        let mut store = Store::default();
        store.dispatch(Action::Global(GlobalAction::Tick)).await;
        assert_eq!(store.process_pending().await, 0);
    }

    #[tokio::test]
    async fn test_blocking_middleware_skips_reducer() {
        let (middleware, _seen) = recorder(true);
        let mut store = Store::default();
        store.add_middleware(middleware);

        store.dispatch(Action::Global(GlobalAction::Quit)).await;
        assert!(store.state().running);
    }

    #[tokio::test]
    async fn test_run_until_processes_queued_actions() {
        let mut store = Store::default();
        store
            .dispatcher()
            .dispatch(Action::Splash(SplashAction::Completed));

        store
            .run_until(|state| state.bootstrap.phase == BootstrapPhase::LoadingFlags)
            .await;
        assert_eq!(store.state().bootstrap.seq, 1);
    }
}
