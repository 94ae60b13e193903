use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{icon_hand_coins, icon_layout_dashboard, icon_log_out, icon_receipt, icon_user};
use crate::routes::Route;
use crate::session::{SessionAction, SessionContext};

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        icon: icon_layout_dashboard,
    },
    NavItem {
        label: "Income",
        route: Route::Income,
        icon: icon_hand_coins,
    },
    NavItem {
        label: "Expenses",
        route: Route::Expense,
        icon: icon_receipt,
    },
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-[#060606] text-white overflow-hidden">
            <Sidebar />
            <main class="flex-1 flex flex-col min-w-0">
                <Header />
                <section class="flex-1 overflow-y-auto p-4 md:p-8 bg-[#0b0b0b]">
                    { for props.children.iter() }
                </section>
            </main>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let session = use_context::<SessionContext>();
    let user = session.as_ref().and_then(|s| s.user().cloned());

    let name = user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default();
    let avatar = user.as_ref().and_then(|u| u.avatar().map(str::to_string));

    html! {
        <header class="h-16 flex justify-end items-center px-8 bg-[#0b0b0b] border-b border-gray-800 shrink-0">
            <div class="flex items-center gap-3">
                <span class="text-sm font-medium hidden sm:block">{ name }</span>
                if let Some(url) = avatar {
                    <img src={url} alt="avatar" class="w-9 h-9 rounded-full object-cover border border-gray-700" />
                } else {
                    <div class="w-9 h-9 bg-gray-800 rounded-full flex items-center justify-center border border-gray-700">
                        { icon_user() }
                    </div>
                }
            </div>
        </header>
    }
}

#[function_component(Sidebar)]
fn sidebar() -> Html {
    let session = use_context::<SessionContext>();
    let current = use_route::<Route>();

    // The route guard notices the anonymous session on the next render and
    // sends us to login.
    let on_logout = Callback::from(move |_: MouseEvent| match &session {
        Some(session) => session.dispatch(SessionAction::Logout),
        None => log::warn!("Logout requested without a session"),
    });

    html! {
        <aside class="w-64 bg-[#121212] border-r border-gray-800 flex flex-col shrink-0">
            <div class="p-6 text-xl font-bold text-[#875cf5]">{"ExpenseTracker"}</div>

            <nav class="flex-1 px-4 space-y-2 overflow-y-auto">
                { for NAV_ITEMS.iter().map(|item| {
                    let is_active = current.as_ref() == Some(&item.route);
                    let class_name = if is_active {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-colors bg-[#875cf5] text-white"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-colors text-gray-400 hover:bg-gray-800"
                    };

                    html! {
                        <Link<Route> to={item.route.clone()} classes={class_name}>
                            { (item.icon)() }
                            <span>{ item.label }</span>
                        </Link<Route>>
                    }
                }) }
            </nav>

            <div class="p-4 border-t border-gray-800">
                <button onclick={on_logout} class="flex items-center gap-3 px-4 py-3 text-red-500 hover:bg-red-500/10 w-full rounded-xl transition-all">
                    { icon_log_out() }{"Logout"}
                </button>
            </div>
        </aside>
    }
}

/// Centered card used by the login and sign-up pages.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-[#f5f3ff] px-4">
            <div class="w-full max-w-xl bg-white rounded-2xl shadow-lg p-8">
                <h2 class="text-lg font-medium text-black mb-6">{"Expense Tracker"}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
