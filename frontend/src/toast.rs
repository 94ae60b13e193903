//! Transient notifications shown in the bottom-right corner.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 3_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.items.push(Toast {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.items.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

/// Handle views use to raise notifications. Outside a [`ToastProvider`]
/// messages only reach the log.
#[derive(Clone, Default, PartialEq)]
pub struct Notifier {
    dispatcher: Option<UseReducerDispatcher<Toasts>>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push(kind, message)),
            None => log::info!("toast ({:?}): {}", kind, message),
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let notifier = Notifier {
        dispatcher: Some(toasts.dispatcher()),
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
                { for toasts.items.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={{
                        let toasts = toasts.clone();
                        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
                    }} />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let class = match props.toast.kind {
        ToastKind::Success => "px-4 py-3 rounded-xl shadow-lg text-sm font-medium bg-white text-green-700 border border-green-200",
        ToastKind::Error => "px-4 py-3 rounded-xl shadow-lg text-sm font-medium bg-white text-red-600 border border-red-200",
    };

    html! {
        <div class={class} role="status">{ &props.toast.message }</div>
    }
}
