use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};
use yew::prelude::*;
use yew_router::prelude::*;

use super::fields::bind_input;
use super::layout::AuthLayout;
use crate::api::{use_api_client, ApiClient};
use crate::components::ProfilePhotoSelector;
use crate::error::{ApiError, AppError};
use crate::forms::SignUpForm;
use crate::models::{AuthResponse, RegisterRequest, UploadResponse};
use crate::routes::Route;
use crate::session::{SessionAction, SessionContext};

const UPLOAD_PATH: &str = "/auth/upload-image";
const REGISTER_PATH: &str = "/auth/register";

/// Multipart body carrying the photo under the `image` field.
fn photo_form(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Request("unable to create form".to_string()))?;
    form.append_with_blob("image", file)
        .map_err(|_| ApiError::Request(format!("unable to attach {}", file.name())))?;
    Ok(form)
}

/// Uploads the photo first, if there is one, then creates the account.
async fn register(
    client: &ApiClient,
    mut request: RegisterRequest,
    photo: Option<File>,
) -> Result<AuthResponse, ApiError> {
    if let Some(file) = photo {
        let uploaded: UploadResponse = client.upload(UPLOAD_PATH, photo_form(&file)?).await?;
        request.profile_image_url = uploaded.image_url;
    }
    client.post(REGISTER_PATH, &request).await
}

#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let client = use_api_client();
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();
    let form = use_state(SignUpForm::default);
    let photo = use_state(|| None::<File>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_photo = {
        let photo = photo.clone();
        Callback::from(move |file: Option<File>| photo.set(file))
    };

    let on_submit = {
        let form = form.clone();
        let photo = photo.clone();
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
                    error.set(Some(AppError::from(err).user_message("Registration failed.")));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let photo = (*photo).clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match register(&client, request, photo).await {
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
                        log::warn!("Registration failed: {}", e);
                        error.set(Some(e.user_message("Registration failed.")));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let input_class = "w-full px-4 py-3 bg-slate-100 border border-slate-200 rounded-lg text-sm text-black outline-none focus:ring-2 focus:ring-[#875cf5]";

    html! {
        <AuthLayout>
            <h3 class="text-xl font-semibold text-black">{"Create an Account"}</h3>
            <p class="text-xs text-slate-700 mt-[5px] mb-6">{"Join us today by entering your details below"}</p>

            <form onsubmit={on_submit}>
                <ProfilePhotoSelector image={(*photo).clone()} on_change={on_photo} />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="space-y-1">
                        <label class="text-[13px] text-slate-800">{"Full Name"}</label>
                        <input
                            type="text"
                            placeholder="John"
                            class={input_class}
                            value={form.full_name.clone()}
                            oninput={bind_input(&form, |f, v| f.full_name = v)}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[13px] text-slate-800">{"Email Address"}</label>
                        <input
                            type="text"
                            placeholder="john@example.com"
                            class={input_class}
                            value={form.email.clone()}
                            oninput={bind_input(&form, |f, v| f.email = v)}
                        />
                    </div>
                    <div class="space-y-1 md:col-span-2">
                        <label class="text-[13px] text-slate-800">{"Password"}</label>
                        <input
                            type="password"
                            placeholder="Minimum 8 Characters"
                            class={input_class}
                            value={form.password.clone()}
                            oninput={bind_input(&form, |f, v| f.password = v)}
                        />
                    </div>

                    if let Some(msg) = &*error {
                        <p class="text-red-500 text-xs pb-2.5 md:col-span-2">{ msg.clone() }</p>
                    }

                    <button
                        type="submit"
                        disabled={*loading}
                        class="md:col-span-2 w-full bg-[#875cf5] text-white py-3 rounded-lg font-semibold hover:opacity-90 transition-opacity disabled:opacity-50"
                    >
                        { if *loading { "Creating account..." } else { "SIGN UP" } }
                    </button>

                    <p class="text-[13px] text-slate-800 mt-3 md:col-span-2">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="font-medium text-[#875cf5] underline">{"LogIn"}</Link<Route>>
                    </p>
                </div>
            </form>
        </AuthLayout>
    }
}
