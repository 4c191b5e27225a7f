//! Dispatcher for middleware action dispatch
//!
//! Middleware and the tasks it spawns use the Dispatcher to queue follow-up
//! actions. Queued actions re-enter the middleware chain from the beginning
//! on the next turn of the store loop, never recursively.

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store loop
    ///
    /// Sending only fails once the store is gone, in which case there is
    /// nobody left to observe the action.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::debug!("Dispatcher: store closed, dropping {:?}", e.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use tokio::sync::mpsc;

    #[test]
    fn test_dispatch_queues_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(Action::Global(GlobalAction::Tick));
        dispatcher.dispatch(Action::None);

        assert_eq!(rx.try_recv().ok(), Some(Action::Global(GlobalAction::Tick)));
        assert_eq!(rx.try_recv().ok(), Some(Action::None));
    }

    #[test]
    fn test_dispatch_after_store_dropped_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        dispatcher.dispatch(Action::None);
    }
}
