//! Bootstrap phase transitions
//!
//! Every accepted transition goes through `BootstrapState::enter`, which bumps
//! the sequence number. Flag reads carry the sequence number they were issued
//! under, so a late result from a superseded transition is dropped here.

use crate::actions::{
    Action, AuthAction, BootstrapAction, OnboardingAction, PreferenceAction, SplashAction,
};
use crate::domain_models::{resolve_flags, BootstrapError, BootstrapPhase, Flags};
use crate::state::BootstrapState;

pub fn reduce(mut state: BootstrapState, action: &Action) -> BootstrapState {
    let phase = state.phase;

    match action {
        Action::Splash(SplashAction::Completed) if phase == BootstrapPhase::Splashing => {
            state.enter(BootstrapPhase::LoadingFlags);
        }

        Action::Bootstrap(BootstrapAction::FlagsLoaded { seq, flags }) => {
            if *seq != state.seq || phase != BootstrapPhase::LoadingFlags {
                log::warn!(
                    "Bootstrap: discarding flags: {}",
                    BootstrapError::StaleTransition {
                        issued: *seq,
                        current: state.seq,
                    }
                );
                return state;
            }

            state.flags = state.merge_session(*flags);
            let next = resolve_flags(&state.flags);
            if next == BootstrapPhase::FirstLaunchOnboarding {
                // hasLaunched has been written by the reader before delivery
                state.session.launched = true;
            }
            state.enter(next);
        }

        Action::Onboarding(OnboardingAction::Continue)
            if phase == BootstrapPhase::FirstLaunchOnboarding =>
        {
            state.flags = Flags {
                has_launched: true,
                ..state.flags
            };
            let next = resolve_flags(&state.flags);
            state.enter(next);
        }

        Action::Auth(AuthAction::Authenticated) if phase.is_auth_flow() => {
            state.session.launched = true;
            state.session.authenticated = true;
            state.flags.has_launched = true;
            state.flags.is_authenticated = true;
            state.enter(BootstrapPhase::LoadingFlags);
        }

        Action::Preference(PreferenceAction::Selected(preference))
            if phase == BootstrapPhase::AwaitingPreference =>
        {
            state.flags.preference = Some(*preference);
            let next = resolve_flags(&state.flags);
            state.enter(next);
        }

        Action::Preference(PreferenceAction::Revisit) if phase == BootstrapPhase::Ready => {
            state.enter(BootstrapPhase::AwaitingPreference);
        }

        Action::Bootstrap(BootstrapAction::LoggedOut) if phase == BootstrapPhase::Ready => {
            state.session.authenticated = false;
            state.flags.is_authenticated = false;
            state.enter(BootstrapPhase::Unauthenticated);
        }

        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::UserPreference;
    use pretty_assertions::assert_eq;

    fn after_splash() -> BootstrapState {
        reduce(
            BootstrapState::default(),
            &Action::Splash(SplashAction::Completed),
        )
    }

    fn flags_loaded(seq: u64, flags: Flags) -> Action {
        Action::Bootstrap(BootstrapAction::FlagsLoaded { seq, flags })
    }

    const AUTHENTICATED: Flags = Flags {
        has_launched: true,
        is_authenticated: true,
        preference: None,
    };

    #[test]
    fn test_initial_phase_is_splashing() {
        let state = BootstrapState::default();
        assert_eq!(state.phase, BootstrapPhase::Splashing);
        assert_eq!(state.seq, 0);
    }

    #[test]
    fn test_splash_never_branches_on_flags() {
        // Flags delivered during the splash are ignored
        let state = reduce(BootstrapState::default(), &flags_loaded(0, AUTHENTICATED));
        assert_eq!(state.phase, BootstrapPhase::Splashing);

        let state = after_splash();
        assert_eq!(state.phase, BootstrapPhase::LoadingFlags);
        assert_eq!(state.seq, 1);
    }

    #[test]
    fn test_splash_completes_only_once() {
        let state = after_splash();
        let state = reduce(state, &Action::Splash(SplashAction::Completed));
        assert_eq!(state.phase, BootstrapPhase::LoadingFlags);
        assert_eq!(state.seq, 1);
    }

    #[test]
    fn test_first_launch_marks_session() {
        let state = after_splash();
        let state = reduce(state, &flags_loaded(1, Flags::default()));

        assert_eq!(state.phase, BootstrapPhase::FirstLaunchOnboarding);
        assert!(state.session.launched);
    }

    #[test]
    fn test_stale_flags_are_discarded() {
        // seq 1: LoadingFlags, seq 2: Unauthenticated, seq 3: LoadingFlags after auth
        let state = after_splash();
        let state = reduce(
            state,
            &flags_loaded(
                1,
                Flags {
                    has_launched: true,
                    ..Flags::default()
                },
            ),
        );
        let state = reduce(state, &Action::Auth(AuthAction::Authenticated));
        assert_eq!(state.seq, 3);

        let fresh = reduce(
            state.clone(),
            &flags_loaded(
                3,
                Flags {
                    preference: Some(UserPreference::Both),
                    ..AUTHENTICATED
                },
            ),
        );

        // A late result of the first read (seq 1) arrives after seq 3 was applied
        let with_stale = reduce(fresh.clone(), &flags_loaded(1, Flags::default()));
        assert_eq!(with_stale, fresh);
        assert_eq!(with_stale.phase, BootstrapPhase::Ready);

        // Same result arriving before the fresh one is dropped too
        let stale_first = reduce(state, &flags_loaded(1, Flags::default()));
        assert_eq!(stale_first.phase, BootstrapPhase::LoadingFlags);
        assert_eq!(stale_first.seq, 3);
    }

    #[test]
    fn test_continue_from_first_launch() {
        let state = reduce(after_splash(), &flags_loaded(1, Flags::default()));
        let state = reduce(state, &Action::Onboarding(OnboardingAction::Continue));

        assert_eq!(state.phase, BootstrapPhase::Unauthenticated);
        assert!(state.flags.has_launched);
    }

    #[test]
    fn test_continue_ignored_elsewhere() {
        let state = after_splash();
        let state = reduce(state, &Action::Onboarding(OnboardingAction::Continue));
        assert_eq!(state.phase, BootstrapPhase::LoadingFlags);
    }

    #[test]
    fn test_session_overrides_failed_reads_after_auth() {
        let state = reduce(
            after_splash(),
            &flags_loaded(
                1,
                Flags {
                    has_launched: true,
                    ..Flags::default()
                },
            ),
        );
        let state = reduce(state, &Action::Auth(AuthAction::Authenticated));

        // Storage failed: every flag reads as absent
        let state = reduce(state, &flags_loaded(3, Flags::default()));
        assert_eq!(state.phase, BootstrapPhase::AwaitingPreference);
    }

    #[test]
    fn test_preference_selected_reaches_ready() {
        let state = reduce(after_splash(), &flags_loaded(1, AUTHENTICATED));
        assert_eq!(state.phase, BootstrapPhase::AwaitingPreference);

        let state = reduce(
            state,
            &Action::Preference(PreferenceAction::Selected(UserPreference::Jobs)),
        );
        assert_eq!(state.phase, BootstrapPhase::Ready);
        assert_eq!(state.flags.preference, Some(UserPreference::Jobs));
    }

    #[test]
    fn test_logged_out_returns_to_unauthenticated() {
        let ready = Flags {
            preference: Some(UserPreference::Updates),
            ..AUTHENTICATED
        };
        let state = reduce(after_splash(), &flags_loaded(1, ready));
        let state = reduce(state, &Action::Bootstrap(BootstrapAction::LoggedOut));

        assert_eq!(state.phase, BootstrapPhase::Unauthenticated);
        assert!(!state.flags.is_authenticated);
        assert!(!state.session.authenticated);
    }

    #[test]
    fn test_logged_out_only_leaves_ready() {
        let state = reduce(after_splash(), &flags_loaded(1, AUTHENTICATED));
        assert_eq!(state.phase, BootstrapPhase::AwaitingPreference);

        let after = reduce(state.clone(), &Action::Bootstrap(BootstrapAction::LoggedOut));
        assert_eq!(after, state);
    }

    #[test]
    fn test_every_transition_bumps_seq() {
        let mut state = BootstrapState::default();
        let actions = [
            Action::Splash(SplashAction::Completed),
            flags_loaded(1, Flags::default()),
            Action::Onboarding(OnboardingAction::Continue),
            Action::Auth(AuthAction::Authenticated),
            flags_loaded(4, Flags::default()),
            Action::Preference(PreferenceAction::Selected(UserPreference::Both)),
        ];
        for (i, action) in actions.iter().enumerate() {
            state = reduce(state, action);
            assert_eq!(state.seq, i as u64 + 1, "after {:?}", action);
        }
        assert_eq!(state.phase, BootstrapPhase::Ready);
    }
}
