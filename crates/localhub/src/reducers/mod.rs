//! Reducers
//!
//! Pure functions producing new state from current state + action.
//! `app_reducer` is the root and routes to the flow-specific reducers.

pub mod app_reducer;
pub mod auth_reducer;
pub mod bootstrap_reducer;
pub mod locale_reducer;
pub mod navigation_reducer;
pub mod preference_reducer;
pub mod splash_reducer;
