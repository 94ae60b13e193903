use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{guard, Outcome, Route};
use crate::session::{AuthState, Session, SessionContext};
use crate::storage;
use crate::toast::ToastProvider;
use crate::views::{
    DashboardLayout, DashboardPage, ExpensePage, IncomePage, LoginPage, NotFoundPage, SignUpPage,
};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(|| Session::restore(storage::browser_store()));

    html! {
        <ContextProvider<SessionContext> context={session}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<SessionContext>>
    }
}

fn switch(route: Route) -> Html {
    html! { <Guarded {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: Route,
}

/// Re-evaluates access whenever the session changes, not just on
/// navigation.
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let session = use_context::<SessionContext>();
    let anonymous = AuthState::Anonymous;
    let auth = session.as_ref().map(|s| s.state()).unwrap_or(&anonymous);

    match guard(props.route.clone(), auth) {
        Outcome::Redirect(to) => {
            log::debug!("{:?} -> {:?}", props.route, to);
            html! { <Redirect<Route> {to} /> }
        }
        Outcome::Render(route) => page(route),
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Dashboard => html! { <DashboardLayout><DashboardPage /></DashboardLayout> },
        Route::Income => html! { <DashboardLayout><IncomePage /></DashboardLayout> },
        Route::Expense => html! { <DashboardLayout><ExpensePage /></DashboardLayout> },
        Route::Root | Route::NotFound => html! { <NotFoundPage /> },
    }
}
