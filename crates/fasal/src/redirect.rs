//! Redirect-if-unauthenticated as an explicit transition handler.

use crate::routes::NavIntent;
use crate::session::AuthStatus;

/// Remembers the last observed [`AuthStatus`] and asks for a redirect to the
/// entry route each time the status changes into `Unauthenticated`.
///
/// Repeating the same status is a no-op, and `Loading` never redirects.
#[derive(Debug, Clone, Default)]
pub struct RedirectGuard {
    last: Option<AuthStatus>,
}

impl RedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, status: AuthStatus) -> Option<NavIntent> {
        if self.last == Some(status) {
            return None;
        }
        self.last = Some(status);

        match status {
            AuthStatus::Unauthenticated => {
                tracing::debug!("session is signed out, redirecting to entry");
                Some(NavIntent::entry())
            }
            AuthStatus::Loading | AuthStatus::Authenticated => None,
        }
    }

    pub fn last(&self) -> Option<AuthStatus> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn first_unauthenticated_observation_redirects() {
        let mut guard = RedirectGuard::new();
        let intent = guard.observe(AuthStatus::Unauthenticated).unwrap();
        assert_eq!(intent.path(), routes::ENTRY);
    }

    #[test]
    fn repeated_unauthenticated_renders_redirect_once() {
        let mut guard = RedirectGuard::new();
        let intents: Vec<_> = (0..4)
            .filter_map(|_| guard.observe(AuthStatus::Unauthenticated))
            .collect();
        assert_eq!(intents, vec![NavIntent::entry()]);
    }

    #[test]
    fn loading_never_redirects() {
        let mut guard = RedirectGuard::new();
        assert_eq!(guard.observe(AuthStatus::Loading), None);
        assert_eq!(guard.observe(AuthStatus::Loading), None);
        assert_eq!(guard.last(), Some(AuthStatus::Loading));
    }

    #[test]
    fn loading_then_signed_out_redirects() {
        let mut guard = RedirectGuard::new();
        assert_eq!(guard.observe(AuthStatus::Loading), None);
        assert_eq!(
            guard.observe(AuthStatus::Unauthenticated),
            Some(NavIntent::entry())
        );
    }

    #[test]
    fn signing_out_after_authentication_redirects() {
        let mut guard = RedirectGuard::new();
        assert_eq!(guard.observe(AuthStatus::Authenticated), None);
        assert_eq!(
            guard.observe(AuthStatus::Unauthenticated),
            Some(NavIntent::entry())
        );
    }

    #[test]
    fn each_new_transition_into_signed_out_redirects_again() {
        let mut guard = RedirectGuard::new();
        let statuses = [
            AuthStatus::Unauthenticated,
            AuthStatus::Loading,
            AuthStatus::Unauthenticated,
            AuthStatus::Unauthenticated,
        ];
        let count = statuses
            .into_iter()
            .filter_map(|status| guard.observe(status))
            .count();
        assert_eq!(count, 2);
    }
}
