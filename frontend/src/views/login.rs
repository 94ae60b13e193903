use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::fields::bind_input;
use super::layout::AuthLayout;
use crate::api::use_api_client;
use crate::error::AppError;
use crate::forms::LoginForm;
use crate::models::{AuthResponse, LoginRequest};
use crate::routes::Route;
use crate::session::{SessionAction, SessionContext};

const LOGIN_PATH: &str = "/auth/login";

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let client = use_api_client();
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(AppError::from(err).user_message("Login failed.")));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match client.post::<LoginRequest, AuthResponse>(LOGIN_PATH, &request).await {
                    Ok(auth) => {
                        if let Some(session) = &session {
                            session.dispatch(SessionAction::Login {
                                token: auth.token,
                                user: auth.user,
                            });
                        }
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) if e.is_aborted() => {}
                    Err(e) => {
                        log::warn!("Login failed: {}", e);
                        error.set(Some(e.user_message("Login failed. Check your credentials.")));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <AuthLayout>
            <h3 class="text-xl font-semibold text-black">{"Welcome Back"}</h3>
            <p class="text-xs text-slate-700 mt-[5px] mb-6">{"Please enter your details to log in"}</p>

            <form class="space-y-4" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label class="text-[13px] text-slate-800">{"Email Address"}</label>
                    <input
                        type="text"
                        placeholder="john@example.com"
                        class="w-full px-4 py-3 bg-slate-100 border border-slate-200 rounded-lg text-sm text-black outline-none focus:ring-2 focus:ring-[#875cf5]"
                        value={form.email.clone()}
                        oninput={bind_input(&form, |f, v| f.email = v)}
                    />
                </div>
                <div class="space-y-1">
                    <label class="text-[13px] text-slate-800">{"Password"}</label>
                    <input
                        type="password"
                        placeholder="Minimum 8 Characters"
                        class="w-full px-4 py-3 bg-slate-100 border border-slate-200 rounded-lg text-sm text-black outline-none focus:ring-2 focus:ring-[#875cf5]"
                        value={form.password.clone()}
                        oninput={bind_input(&form, |f, v| f.password = v)}
                    />
                </div>

                if let Some(msg) = &*error {
                    <p class="text-red-500 text-xs pb-2.5">{ msg.clone() }</p>
                }

                <button
                    type="submit"
                    disabled={*loading}
                    class="w-full bg-[#875cf5] text-white py-3 rounded-lg font-semibold hover:opacity-90 transition-opacity disabled:opacity-50"
                >
                    { if *loading { "Logging in..." } else { "LOGIN" } }
                </button>

                <p class="text-[13px] text-slate-800 mt-3">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::SignUp} classes="font-medium text-[#875cf5] underline">{"SignUp"}</Link<Route>>
                </p>
            </form>
        </AuthLayout>
    }
}
