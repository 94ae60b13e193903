//! Reading values out of form events.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Callback that copies an `<input>`'s value into one field of a form held
/// in `state`.
pub fn bind_input<F: Clone + 'static>(
    state: &UseStateHandle<F>,
    apply: fn(&mut F, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*state).clone();
        apply(&mut next, input_value(e));
        state.set(next);
    })
}

pub fn bind_textarea<F: Clone + 'static>(
    state: &UseStateHandle<F>,
    apply: fn(&mut F, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*state).clone();
        apply(&mut next, textarea_value(e));
        state.set(next);
    })
}

pub fn bind_select<F: Clone + 'static>(
    state: &UseStateHandle<F>,
    apply: fn(&mut F, String),
) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let mut next = (*state).clone();
        apply(&mut next, select_value(e));
        state.set(next);
    })
}
