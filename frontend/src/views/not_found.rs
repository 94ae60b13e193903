use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-[#0b0b0b] text-white">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-gray-400">{"This page does not exist."}</p>
            <Link<Route> to={Route::Root} classes="text-[#875cf5] underline">{"Go home"}</Link<Route>>
        </div>
    }
}
