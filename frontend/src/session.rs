//! Who is logged in, and the token that proves it.
//!
//! A [`Session`] is created once at the root of the app and handed down
//! through a Yew context. It owns the handle to persistent storage so that
//! every transition keeps the `token`/`user` keys in step with the
//! in-memory [`AuthState`].

use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::models::UserProfile;
use crate::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Anonymous,
    Authenticated { token: String, user: UserProfile },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

pub enum SessionAction {
    Login { token: String, user: UserProfile },
    Logout,
}

#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn KeyValueStore>,
    state: AuthState,
}

/// What views pull out of the context.
pub type SessionContext = UseReducerHandle<Session>;

impl Session {
    /// Rehydrates whatever a previous visit left in storage.
    pub fn restore(storage: Rc<dyn KeyValueStore>) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());

        let state = match token {
            None => {
                // A leftover user without a token is as unusable as the
                // reverse; keep the two keys in step.
                clear(storage.as_ref());
                AuthState::Anonymous
            }
            Some(token) => {
                let user = storage
                    .get(USER_KEY)
                    .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok());

                match user {
                    Some(user) => AuthState::Authenticated { token, user },
                    None => {
                        log::warn!("Discarding stored token without a readable user profile");
                        clear(storage.as_ref());
                        AuthState::Anonymous
                    }
                }
            }
        };

        Session { storage, state }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.state {
            AuthState::Authenticated { user, .. } => Some(user),
            AuthState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token, .. } => Some(token),
            AuthState::Anonymous => None,
        }
    }

    fn with_state(&self, state: AuthState) -> Self {
        Session {
            storage: Rc::clone(&self.storage),
            state,
        }
    }
}

fn clear(storage: &dyn KeyValueStore) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login { token, user } => {
                if let Err(e) = self.storage.set(TOKEN_KEY, &token) {
                    log::warn!("{}", e);
                }
                match serde_json::to_string(&user) {
                    Ok(raw) => {
                        if let Err(e) = self.storage.set(USER_KEY, &raw) {
                            log::warn!("{}", e);
                        }
                    }
                    Err(e) => log::warn!("Unable to serialize user profile: {}", e),
                }
                log::info!("Signed in as {}", user.email);
                Rc::new(self.with_state(AuthState::Authenticated { token, user }))
            }
            SessionAction::Logout => {
                clear(self.storage.as_ref());
                log::info!("Signed out");
                Rc::new(self.with_state(AuthState::Anonymous))
            }
        }
    }
}

// Storage handles have no meaningful equality, and re-rendering on every
// auth transition is all consumers need.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn ada() -> UserProfile {
        UserProfile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            profile_image_url: None,
        }
    }

    fn stored_user() -> String {
        serde_json::to_string(&ada()).unwrap()
    }

    #[test]
    fn empty_storage_is_anonymous() {
        let session = Session::restore(Rc::new(MemoryStore::new()));
        assert_eq!(session.state(), &AuthState::Anonymous);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn restores_token_and_user() {
        let user = stored_user();
        let store = Rc::new(MemoryStore::with(&[(TOKEN_KEY, "t0k3n"), (USER_KEY, user.as_str())]));
        let session = Session::restore(store);

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t0k3n"));
        assert_eq!(session.user(), Some(&ada()));
    }

    #[test]
    fn blank_token_is_anonymous() {
        let user = stored_user();
        let store = Rc::new(MemoryStore::with(&[(TOKEN_KEY, "  "), (USER_KEY, user.as_str())]));
        assert!(!Session::restore(store.clone()).is_authenticated());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn user_without_token_is_cleared() {
        let user = stored_user();
        let store = Rc::new(MemoryStore::with(&[(USER_KEY, user.as_str()), ("theme", "dark")]));
        assert!(!Session::restore(store.clone()).is_authenticated());
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_user_clears_both_keys() {
        let store = Rc::new(MemoryStore::with(&[(TOKEN_KEY, "t0k3n"), (USER_KEY, "{not json")]));
        let session = Session::restore(store.clone());

        assert_eq!(session.state(), &AuthState::Anonymous);
        assert!(store.is_empty());
    }

    #[test]
    fn login_persists_both_keys() {
        let store = Rc::new(MemoryStore::new());
        let session = Rc::new(Session::restore(store.clone()));

        let session = session.reduce(SessionAction::Login {
            token: "fresh".to_string(),
            user: ada(),
        });

        assert!(session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("fresh"));
        let persisted: UserProfile =
            serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted, ada());

        // A fresh load sees the same session.
        assert_eq!(Session::restore(store).state(), session.state());
    }

    #[test]
    fn logout_clears_persisted_keys() {
        let user = stored_user();
        let store = Rc::new(MemoryStore::with(&[
            (TOKEN_KEY, "t0k3n"),
            (USER_KEY, user.as_str()),
            ("theme", "dark"),
        ]));
        let session = Rc::new(Session::restore(store.clone()));

        let session = session.reduce(SessionAction::Logout);

        assert_eq!(session.state(), &AuthState::Anonymous);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(!Session::restore(store).is_authenticated());
    }

    #[test]
    fn logout_sends_protected_pages_back_to_login() {
        use crate::routes::{guard, Outcome, Route};

        let user = stored_user();
        let store = Rc::new(MemoryStore::with(&[(TOKEN_KEY, "t0k3n"), (USER_KEY, user.as_str())]));
        let session = Rc::new(Session::restore(store.clone()));
        assert_eq!(guard(Route::Income, session.state()), Outcome::Render(Route::Income));

        let session = session.reduce(SessionAction::Logout);

        assert!(store.is_empty());
        assert_eq!(guard(Route::Income, session.state()), Outcome::Redirect(Route::Login));
        let reloaded = Session::restore(store);
        assert_eq!(guard(Route::Income, reloaded.state()), Outcome::Redirect(Route::Login));
    }
}
