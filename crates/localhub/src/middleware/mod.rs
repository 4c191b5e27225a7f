//! Middleware system for the Redux loop
//!
//! Middleware sits between action dispatch and reducer execution. Reducers
//! stay pure; everything touching storage or timers lives here.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect actions and the state they are about to be applied to
//! - Dispatch new actions (queued, never re-entrant)
//! - Await short storage writes or spawn background tasks
//! - Block actions from reaching the reducer

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use std::future::Future;
use std::pin::Pin;

mod auth_middleware;
mod bootstrap_middleware;
mod keyboard_middleware;
mod localization_middleware;
mod logging;
mod preference_middleware;
mod splash_middleware;
mod storage;

pub use auth_middleware::AuthMiddleware;
pub use bootstrap_middleware::BootstrapMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use localization_middleware::LocalizationMiddleware;
pub use logging::LoggingMiddleware;
pub use preference_middleware::PreferenceMiddleware;
pub use splash_middleware::SplashMiddleware;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Middleware trait - handles actions before they reach the reducer
///
/// # Returns
/// - `true`: continue to the next middleware and the reducer
/// - `false`: consume the action
pub trait Middleware: Send + Sync {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}
