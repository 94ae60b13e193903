use yew_router::prelude::*;

use crate::session::AuthState;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/signup")]
    SignUp,
    #[at("/dashboard")]
    Dashboard,
    #[at("/income")]
    Income,
    #[at("/expense")]
    Expense,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// `/` never renders anything itself, it only forwards.
    Entry,
    /// Login and sign-up, pointless once signed in.
    PublicOnly,
    Protected,
    Open,
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Route::Root => Access::Entry,
            Route::Login | Route::SignUp => Access::PublicOnly,
            Route::Dashboard | Route::Income | Route::Expense => Access::Protected,
            Route::NotFound => Access::Open,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Render(Route),
    Redirect(Route),
}

/// Decides what navigating to `route` should do for the given session.
///
/// This runs synchronously on every render of the router, so a logout
/// anywhere in the tree immediately bounces protected pages to login.
pub fn guard(route: Route, auth: &AuthState) -> Outcome {
    let signed_in = auth.is_authenticated();

    match (route.access(), signed_in) {
        (Access::Entry, true) => Outcome::Redirect(Route::Dashboard),
        (Access::Entry, false) => Outcome::Redirect(Route::Login),
        (Access::Protected, false) => Outcome::Redirect(Route::Login),
        (Access::PublicOnly, true) => Outcome::Redirect(Route::Dashboard),
        (Access::Protected, true) | (Access::PublicOnly, false) | (Access::Open, _) => {
            Outcome::Render(route)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn signed_in() -> AuthState {
        AuthState::Authenticated {
            token: "t".to_string(),
            user: UserProfile {
                full_name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                profile_image_url: None,
            },
        }
    }

    const PROTECTED: [Route; 3] = [Route::Dashboard, Route::Income, Route::Expense];

    #[test]
    fn anonymous_users_are_sent_to_login_from_protected_pages() {
        for route in PROTECTED {
            assert_eq!(
                guard(route, &AuthState::Anonymous),
                Outcome::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn signed_in_users_see_protected_pages() {
        for route in PROTECTED {
            assert_eq!(guard(route.clone(), &signed_in()), Outcome::Render(route));
        }
    }

    #[test]
    fn root_forwards_based_on_session() {
        assert_eq!(guard(Route::Root, &signed_in()), Outcome::Redirect(Route::Dashboard));
        assert_eq!(
            guard(Route::Root, &AuthState::Anonymous),
            Outcome::Redirect(Route::Login)
        );
    }

    #[test]
    fn auth_pages_bounce_signed_in_users() {
        assert_eq!(guard(Route::Login, &signed_in()), Outcome::Redirect(Route::Dashboard));
        assert_eq!(guard(Route::SignUp, &signed_in()), Outcome::Redirect(Route::Dashboard));
        assert_eq!(
            guard(Route::SignUp, &AuthState::Anonymous),
            Outcome::Render(Route::SignUp)
        );
    }

    #[test]
    fn not_found_renders_for_everyone() {
        assert_eq!(
            guard(Route::NotFound, &AuthState::Anonymous),
            Outcome::Render(Route::NotFound)
        );
        assert_eq!(guard(Route::NotFound, &signed_in()), Outcome::Render(Route::NotFound));
    }

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/expense"), Some(Route::Expense));
        assert_eq!(Route::Income.to_path(), "/income");
    }
}
