use web_sys::{File, HtmlInputElement, Url};
use yew::prelude::*;

use super::icons::{icon_trash, icon_upload, icon_user};

#[derive(Properties, PartialEq)]
pub struct ProfilePhotoSelectorProps {
    pub image: Option<File>,
    pub on_change: Callback<Option<File>>,
}

/// Round avatar picker with a local preview of the chosen file.
#[function_component(ProfilePhotoSelector)]
pub fn profile_photo_selector(props: &ProfilePhotoSelectorProps) -> Html {
    let preview = use_state(|| None::<String>);

    // Free the object URL whenever the preview is replaced or the
    // component goes away.
    {
        let current = (*preview).clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(url) = current {
                        let _ = Url::revoke_object_url(&url);
                    }
                }
            },
            (*preview).clone(),
        );
    }

    let on_select = {
        let preview = preview.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            if let Some(file) = file {
                match Url::create_object_url_with_blob(&file) {
                    Ok(url) => preview.set(Some(url)),
                    Err(_) => log::warn!("Unable to preview {}", file.name()),
                }
                on_change.emit(Some(file));
            }
        })
    };

    let on_remove = {
        let preview = preview.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            preview.set(None);
            on_change.emit(None);
        })
    };

    html! {
        <div class="flex justify-center mb-6">
            if props.image.is_none() {
                <label class="w-20 h-20 flex items-center justify-center bg-purple-100 text-[#875cf5] rounded-full relative cursor-pointer">
                    { icon_user() }
                    <span class="w-8 h-8 flex items-center justify-center bg-[#875cf5] text-white rounded-full absolute -bottom-1 -right-1">
                        { icon_upload() }
                    </span>
                    <input type="file" accept="image/*" class="hidden" onchange={on_select} />
                </label>
            } else {
                <div class="relative">
                    <img src={(*preview).clone().unwrap_or_default()} alt="profile photo" class="w-20 h-20 rounded-full object-cover" />
                    <button type="button" onclick={on_remove} class="w-8 h-8 flex items-center justify-center bg-red-500 text-white rounded-full absolute -bottom-1 -right-1">
                        { icon_trash() }
                    </button>
                </div>
            }
        </div>
    }
}
