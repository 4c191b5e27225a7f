//! Main navigation actions

use crate::domain_models::{DetailScreen, ModalKind, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    SelectTab(Tab),
    NextTab,
    PreviousTab,
    OpenModal(ModalKind),
    CloseModal(ModalKind),
    PushDetail(DetailScreen),
    PopDetail,
    /// Close the topmost overlay or detail screen
    Close,
    /// Logout pressed in the profile modal
    LogoutRequested,
}
