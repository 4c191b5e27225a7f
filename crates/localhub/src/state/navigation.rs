//! Main navigation state
//!
//! Mounted once when the bootstrap reaches `Ready`. The preference is a
//! one-time snapshot: changing it means unmounting and mounting again.

use crate::domain_models::{derive_tab_layout, DetailScreen, ModalKind, Tab, TabLayout, UserPreference};

/// Independent visibility flags for the overlay modals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    pub profile: bool,
    pub notifications: bool,
    pub search: bool,
}

impl ModalVisibility {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Profile => self.profile,
            ModalKind::Notifications => self.notifications,
            ModalKind::Search => self.search,
        }
    }

    pub fn set(&mut self, kind: ModalKind, visible: bool) {
        match kind {
            ModalKind::Profile => self.profile = visible,
            ModalKind::Notifications => self.notifications = visible,
            ModalKind::Search => self.search = visible,
        }
    }

    /// Topmost open modal, in stacking order search > notifications > profile
    pub fn topmost(&self) -> Option<ModalKind> {
        [ModalKind::Search, ModalKind::Notifications, ModalKind::Profile]
            .into_iter()
            .find(|kind| self.is_open(*kind))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Preference snapshot taken at mount time
    pub preference: Option<UserPreference>,
    pub layout: TabLayout,
    pub active_tab: Tab,
    pub modals: ModalVisibility,
    pub detail_stack: Vec<DetailScreen>,
}

impl NavigationState {
    /// Build the main navigation for a preference snapshot
    pub fn mount(preference: Option<UserPreference>) -> Self {
        let layout = derive_tab_layout(preference);
        log::info!(
            "Navigation: mounted with preference {:?}, tabs {:?}",
            preference,
            layout.tabs()
        );
        Self {
            preference,
            layout,
            active_tab: Tab::Home,
            modals: ModalVisibility::default(),
            detail_stack: Vec::new(),
        }
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modals.set(kind, true);
    }

    /// Closing an already closed modal is a no-op
    pub fn close_modal(&mut self, kind: ModalKind) {
        self.modals.set(kind, false);
    }

    /// Select a tab. The Search tab opens the search modal instead.
    /// Tabs not in the layout are ignored.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.layout.contains(tab) {
            log::debug!("Navigation: tab {} not in layout, ignoring", tab);
            return;
        }
        if tab == Tab::Search {
            self.open_modal(ModalKind::Search);
        } else {
            self.active_tab = tab;
        }
    }

    /// Cycle through the non-search tabs
    pub fn step_tab(&mut self, delta: isize) {
        let tabs: Vec<Tab> = self
            .layout
            .tabs()
            .iter()
            .copied()
            .filter(|t| *t != Tab::Search)
            .collect();
        if tabs.is_empty() {
            return;
        }
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_tab = tabs[next];
    }

    pub fn push_detail(&mut self, screen: DetailScreen) {
        self.detail_stack.push(screen);
    }

    pub fn pop_detail(&mut self) -> Option<DetailScreen> {
        self.detail_stack.pop()
    }

    /// Close the topmost modal, otherwise pop the detail stack
    pub fn close_top(&mut self) {
        if let Some(kind) = self.modals.topmost() {
            self.close_modal(kind);
        } else {
            self.pop_detail();
        }
    }
}
