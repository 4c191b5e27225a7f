//! First-launch onboarding actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Leave language selection and move on
    Continue,
}
