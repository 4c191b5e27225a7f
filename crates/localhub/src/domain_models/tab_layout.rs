//! Main navigation tab layout
//!
//! The tab set is derived from the user preference, never stored.

use crate::domain_models::user_preference::UserPreference;
use strum::{Display, EnumIter};

/// Bottom tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Tab {
    Home,
    Jobs,
    Updates,
    Events,
    Promotions,
    Search,
}

/// Overlay modals owned by the main navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ModalKind {
    Profile,
    Notifications,
    Search,
}

/// Screens pushed on top of the tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DetailScreen {
    EventDetail,
    JobDetail,
    UpdateDetail,
    PromotionDetail,
    Bookmarks,
    PaymentHistory,
}

impl DetailScreen {
    /// Detail screen opened from an item on the given tab
    pub fn for_tab(tab: Tab) -> Option<Self> {
        match tab {
            Tab::Events => Some(DetailScreen::EventDetail),
            Tab::Jobs => Some(DetailScreen::JobDetail),
            Tab::Updates | Tab::Home => Some(DetailScreen::UpdateDetail),
            Tab::Promotions => Some(DetailScreen::PromotionDetail),
            Tab::Search => None,
        }
    }
}

/// Ordered list of tabs shown in the tab bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayout {
    tabs: Vec<Tab>,
}

impl TabLayout {
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn contains(&self, tab: Tab) -> bool {
        self.tabs.contains(&tab)
    }

    pub fn position(&self, tab: Tab) -> Option<usize> {
        self.tabs.iter().position(|t| *t == tab)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Derive the tab layout from the user preference
///
/// `Jobs` swaps the Promotions tab for a Jobs tab; every other preference
/// (including none) keeps Promotions. Home, Updates, Events and Search are
/// always present.
pub fn derive_tab_layout(preference: Option<UserPreference>) -> TabLayout {
    let jobs_layout = preference == Some(UserPreference::Jobs);

    let mut tabs = vec![Tab::Home];
    if jobs_layout {
        tabs.push(Tab::Jobs);
    }
    tabs.push(Tab::Updates);
    tabs.push(Tab::Events);
    if !jobs_layout {
        tabs.push(Tab::Promotions);
    }
    tabs.push(Tab::Search);

    TabLayout { tabs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXED: [Tab; 4] = [Tab::Home, Tab::Updates, Tab::Events, Tab::Search];

    #[test]
    fn test_jobs_layout() {
        let layout = derive_tab_layout(Some(UserPreference::Jobs));
        assert_eq!(
            layout.tabs(),
            &[Tab::Home, Tab::Jobs, Tab::Updates, Tab::Events, Tab::Search]
        );
        assert!(!layout.contains(Tab::Promotions));
    }

    #[test]
    fn test_non_jobs_layouts_show_promotions() {
        for preference in [None, Some(UserPreference::Updates), Some(UserPreference::Both)] {
            let layout = derive_tab_layout(preference);
            assert_eq!(
                layout.tabs(),
                &[Tab::Home, Tab::Updates, Tab::Events, Tab::Promotions, Tab::Search],
                "preference: {:?}",
                preference
            );
            assert!(!layout.contains(Tab::Jobs));
        }
    }

    #[test]
    fn test_fixed_tabs_always_present() {
        let preferences = [
            None,
            Some(UserPreference::Updates),
            Some(UserPreference::Jobs),
            Some(UserPreference::Both),
        ];
        for preference in preferences {
            let layout = derive_tab_layout(preference);
            for tab in FIXED {
                assert!(layout.contains(tab), "{} missing for {:?}", tab, preference);
            }
            assert_eq!(layout.len(), 5);
        }
    }

    #[test]
    fn test_detail_for_tab() {
        assert_eq!(DetailScreen::for_tab(Tab::Jobs), Some(DetailScreen::JobDetail));
        assert_eq!(DetailScreen::for_tab(Tab::Search), None);
    }
}
