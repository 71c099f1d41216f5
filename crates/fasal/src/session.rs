//! The session the home dashboard observes.
//!
//! The session is owned by the session provider in the frontend. Pages only ever
//! see a read-only [`Session`] value and re-render when it changes.

use serde::{Deserialize, Serialize};

/// Display metadata for the signed-in user. This is what gets persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl User {
    /// Build a user from free-form input, treating a blank name as no name.
    pub fn named(display_name: &str) -> Self {
        let trimmed = display_name.trim();
        Self {
            display_name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

/// Exactly one of loading, unauthenticated or authenticated holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(User),
}

/// The part of a [`Session`] the redirect logic reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthStatus {
    Loading,
    Unauthenticated,
    Authenticated,
}

impl Session {
    pub fn status(&self) -> AuthStatus {
        match self {
            Session::Loading => AuthStatus::Loading,
            Session::Unauthenticated => AuthStatus::Unauthenticated,
            Session::Authenticated(_) => AuthStatus::Authenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The user's display name, if one is set and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.user()
            .and_then(|user| user.display_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Flag-shaped view of a session, as an auth context would publish it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl From<SessionSnapshot> for Session {
    fn from(snapshot: SessionSnapshot) -> Self {
        if snapshot.is_loading {
            Session::Loading
        } else if snapshot.is_authenticated {
            Session::Authenticated(snapshot.user.unwrap_or_default())
        } else {
            Session::Unauthenticated
        }
    }
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            is_loading: session.is_loading(),
            is_authenticated: session.is_authenticated(),
            user: session.user().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flag_dominates_the_other_fields() {
        let snapshot = SessionSnapshot {
            is_loading: true,
            is_authenticated: true,
            user: Some(User::named("Asha")),
        };
        assert_eq!(Session::from(snapshot), Session::Loading);
    }

    #[test]
    fn authenticated_without_user_gets_an_empty_user() {
        let snapshot = SessionSnapshot {
            is_loading: false,
            is_authenticated: true,
            user: None,
        };
        let session = Session::from(snapshot);
        assert_eq!(session, Session::Authenticated(User::default()));
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn unauthenticated_drops_a_stale_user() {
        let snapshot = SessionSnapshot {
            is_loading: false,
            is_authenticated: false,
            user: Some(User::named("Asha")),
        };
        let session = Session::from(snapshot);
        assert_eq!(session, Session::Unauthenticated);
        assert!(session.user().is_none());
    }

    #[test]
    fn snapshot_reads_camel_case_json() {
        let json = r#"{"isLoading":false,"isAuthenticated":true,"user":{"displayName":"Asha"}}"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();
        let session = Session::from(snapshot);
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert_eq!(session.display_name(), Some("Asha"));
    }

    #[test]
    fn missing_snapshot_fields_default_to_signed_out() {
        let snapshot: SessionSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(Session::from(snapshot), Session::Unauthenticated);
    }

    #[test]
    fn stored_user_omits_absent_display_name() {
        let json = serde_json::to_string(&User::default()).unwrap();
        assert_eq!(json, "{}");
        let user: User = serde_json::from_str(r#"{"displayName":"Ravi"}"#).unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Ravi"));
    }

    #[test]
    fn blank_names_are_treated_as_absent() {
        assert_eq!(User::named("   ").display_name, None);
        assert_eq!(User::named(" Asha ").display_name.as_deref(), Some("Asha"));

        let session = Session::Authenticated(User {
            display_name: Some(String::new()),
        });
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn snapshot_round_trips_the_state() {
        let session = Session::Authenticated(User::named("Asha"));
        let snapshot = SessionSnapshot::from(&session);
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.is_loading);
        assert_eq!(Session::from(snapshot), session);
    }
}
