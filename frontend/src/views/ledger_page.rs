//! Everything the income and expense pages share: the request handle that
//! loads, creates and deletes entries, and the page shell around the
//! resource-specific form fields.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api_client;
use crate::components::icons::{icon_download, icon_plus_circle};
use crate::components::{EntryList, EntryRow};
use crate::error::{AppError, ValidationError};
use crate::format::format_money;
use crate::ledger::{RemoteLedger, Resource};
use crate::reconcile::{self, LedgerAction, LedgerState, MutationGate, Sequence};
use crate::toast::{use_notifier, Notifier};

pub type Dispatcher<R> = UseReducerDispatcher<LedgerState<<R as Resource>::Entry>>;

/// Messages shown for a resource's operations.
pub struct Messages {
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub confirm_delete: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

/// Issues requests for one resource on behalf of a page.
///
/// Every request takes a fresh generation from the page's [`Sequence`], so
/// a list that arrives after a newer request was issued is dropped by the
/// reducer.
pub struct LedgerHandle<R: Resource> {
    ledger: RemoteLedger<R>,
    gate: MutationGate,
    sequence: Sequence,
    state: Dispatcher<R>,
    notifier: Notifier,
    messages: &'static Messages,
}

impl<R: Resource> Clone for LedgerHandle<R> {
    fn clone(&self) -> Self {
        LedgerHandle {
            ledger: self.ledger.clone(),
            gate: self.gate.clone(),
            sequence: self.sequence.clone(),
            state: self.state.clone(),
            notifier: self.notifier.clone(),
            messages: self.messages,
        }
    }
}

impl<R: Resource> LedgerHandle<R> {
    /// Fetches the full list. Skipped while a mutation is outstanding,
    /// since that mutation ends with a refetch of its own.
    pub fn load(&self) {
        if self.gate.is_busy() {
            log::debug!("Not reloading {} during a mutation", R::PATH);
            return;
        }

        let generation = self.sequence.next();
        self.state.dispatch(LedgerAction::Fetching(generation));

        let ledger = self.ledger.clone();
        let state = self.state.clone();
        let notifier = self.notifier.clone();
        let messages = self.messages;
        spawn_local(async move {
            match reconcile::fetch(&ledger).await {
                Ok(entries) => state.dispatch(LedgerAction::Loaded(generation, entries)),
                Err(e) if e.is_aborted() => {}
                Err(e) => {
                    log::warn!("Loading {} failed: {}", R::PATH, e);
                    state.dispatch(LedgerAction::FetchFailed(generation));
                    notifier.error(messages.load_failed);
                }
            }
        });
    }

    /// Sends `draft` and replaces the list with the server's afterwards.
    /// `on_saved` runs only when the entry was created.
    pub fn create(&self, draft: R::Draft, on_saved: Callback<()>) {
        let ticket = match self.gate.begin() {
            Ok(ticket) => ticket,
            Err(e) => {
                self.notifier.error(e.user_message(self.messages.create_failed));
                return;
            }
        };

        let generation = self.sequence.next();
        self.state.dispatch(LedgerAction::Submitting(generation));

        let ledger = self.ledger.clone();
        let state = self.state.clone();
        let notifier = self.notifier.clone();
        let messages = self.messages;
        spawn_local(async move {
            let result = reconcile::create(&ledger, ticket, &draft).await;
            if report(&result, &notifier, messages.created, messages.create_failed) {
                on_saved.emit(());
            }
            if !matches!(&result, Err(e) if e.is_aborted()) {
                state.dispatch(LedgerAction::settle(generation, result));
            }
        });
    }

    /// Asks for confirmation, then deletes `id` and refetches.
    pub fn delete(&self, id: String) {
        if !confirm(self.messages.confirm_delete) {
            return;
        }
        let ticket = match self.gate.begin() {
            Ok(ticket) => ticket,
            Err(e) => {
                self.notifier.error(e.user_message(self.messages.delete_failed));
                return;
            }
        };

        let generation = self.sequence.next();
        self.state.dispatch(LedgerAction::Submitting(generation));

        let ledger = self.ledger.clone();
        let state = self.state.clone();
        let notifier = self.notifier.clone();
        let messages = self.messages;
        spawn_local(async move {
            let result = reconcile::remove(&ledger, ticket, &id).await;
            report(&result, &notifier, messages.deleted, messages.delete_failed);
            if !matches!(&result, Err(e) if e.is_aborted()) {
                state.dispatch(LedgerAction::settle(generation, result));
            }
        });
    }

    /// Reports a form that failed validation before anything was sent.
    pub fn reject(&self, err: ValidationError) {
        self.notifier
            .error(AppError::from(err).user_message(self.messages.create_failed));
    }
}

/// State and request handle for a ledger page. The list is fetched once on
/// mount.
#[hook]
pub fn use_ledger<R: Resource>(
    messages: &'static Messages,
) -> (UseReducerHandle<LedgerState<R::Entry>>, LedgerHandle<R>) {
    let client = use_api_client();
    let notifier = use_notifier();
    let state = use_reducer(LedgerState::<R::Entry>::default);
    let gate = use_memo(|_| MutationGate::new(), ());
    let sequence = use_memo(|_| Sequence::new(), ());

    let handle = LedgerHandle {
        ledger: RemoteLedger::new(client),
        gate: (*gate).clone(),
        sequence: (*sequence).clone(),
        state: state.dispatcher(),
        notifier,
        messages,
    };

    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                handle.load();
                || ()
            },
            (),
        );
    }

    (state, handle)
}

/// Raises the right toast. Returns whether the mutation itself went
/// through, even if the refetch afterwards did not.
fn report<T>(
    result: &Result<T, AppError>,
    notifier: &Notifier,
    success: &str,
    failure: &str,
) -> bool {
    match result {
        Ok(_) => {
            notifier.success(success);
            true
        }
        Err(e) if e.is_aborted() => false,
        Err(e @ AppError::Refresh(_)) => {
            log::warn!("{}", e);
            notifier.error(e.user_message(failure));
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            notifier.error(e.user_message(failure));
            false
        }
    }
}

/// Asks before deleting. Without a window there is nobody to ask.
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Opens the spreadsheet export in a new tab.
fn open_download(resource: &str) {
    let url = crate::config::download_url(resource);
    match web_sys::window() {
        Some(window) => {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                log::warn!("Unable to open {}", url);
            }
        }
        None => log::warn!("No window to open {}", url),
    }
}

fn accent_text(accent: &str, extra: &str) -> String {
    format!("{} text-{}-500", extra, accent).trim().to_string()
}

fn submit_class(accent: &str) -> String {
    format!(
        "w-full bg-{0}-600 hover:bg-{0}-700 text-white py-3 rounded-xl font-semibold transition disabled:opacity-50",
        accent
    )
}

#[derive(Properties, PartialEq)]
pub struct LedgerShellProps {
    pub title: &'static str,
    pub total_label: &'static str,
    pub total: f64,
    /// Path segment used for the export, e.g. `income`.
    pub resource: &'static str,
    /// Tailwind color stem, e.g. `green` or `red`.
    pub accent: &'static str,
    pub form_title: &'static str,
    pub list_title: &'static str,
    pub empty_label: &'static str,
    pub description_placeholder: &'static str,

    pub amount: String,
    pub date: String,
    pub description: String,
    pub on_amount: Callback<InputEvent>,
    pub on_date: Callback<InputEvent>,
    pub on_description: Callback<InputEvent>,
    pub on_submit: Callback<SubmitEvent>,

    pub rows: Vec<EntryRow>,
    pub loading: bool,
    pub submitting: bool,
    pub stale: bool,
    pub on_delete: Callback<String>,
    pub on_retry: Callback<()>,

    /// Fields that only this resource has, placed above the amount.
    pub children: Children,
}

/// Header with total and export, the add form, and the entry list.
#[function_component(LedgerShell)]
pub fn ledger_shell(props: &LedgerShellProps) -> Html {
    let resource = props.resource;
    let on_export = Callback::from(move |_: MouseEvent| open_download(resource));
    let input_class = "w-full p-3 bg-[#1a1a1a] border border-gray-700 rounded-xl text-white outline-none";

    html! {
        <div class="max-w-6xl mx-auto space-y-8">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-white">{ props.title }</h1>
                    <p class="text-gray-400 mt-1">
                        { props.total_label }{": "}
                        <span class={accent_text(props.accent, "font-semibold")}>{ format_money(props.total) }</span>
                    </p>
                </div>
                <button
                    onclick={on_export}
                    class="flex items-center gap-2 bg-[#121212] border border-gray-700 px-5 py-2.5 rounded-xl hover:bg-gray-800 transition text-gray-200 font-medium"
                >
                    { icon_download() }{"Export Excel"}
                </button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-12 gap-8">
                <div class="lg:col-span-4">
                    <form onsubmit={props.on_submit.clone()} class="bg-[#121212] p-6 rounded-2xl border border-gray-800 space-y-4">
                        <h2 class="flex items-center gap-2 text-lg font-semibold text-white">
                            <span class={accent_text(props.accent, "")}>{ icon_plus_circle() }</span>{ props.form_title }
                        </h2>

                        { for props.children.iter() }

                        <div class="grid grid-cols-2 gap-3">
                            <div>
                                <label class="block text-sm text-gray-400 mb-1">{"Amount"}</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    placeholder="0.00"
                                    class={input_class}
                                    value={props.amount.clone()}
                                    oninput={props.on_amount.clone()}
                                />
                            </div>
                            <div>
                                <label class="block text-sm text-gray-400 mb-1">{"Date"}</label>
                                <input
                                    type="date"
                                    class={input_class}
                                    value={props.date.clone()}
                                    oninput={props.on_date.clone()}
                                />
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-1">{"Description"}</label>
                            <textarea
                                placeholder={props.description_placeholder}
                                class={classes!(input_class, "h-24")}
                                value={props.description.clone()}
                                oninput={props.on_description.clone()}
                            />
                        </div>

                        <button
                            type="submit"
                            disabled={props.submitting}
                            class={submit_class(props.accent)}
                        >
                            { if props.submitting { "Saving..." } else { props.form_title } }
                        </button>
                    </form>
                </div>

                <div class="lg:col-span-8 bg-[#121212] p-6 rounded-2xl border border-gray-800">
                    <h2 class="text-lg font-semibold text-white mb-4">{ props.list_title }</h2>
                    <EntryList
                        rows={props.rows.clone()}
                        loading={props.loading}
                        busy={props.submitting}
                        stale={props.stale}
                        empty_label={props.empty_label}
                        accent={props.accent}
                        on_delete={props.on_delete.clone()}
                        on_retry={props.on_retry.clone()}
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_drives_every_colored_class() {
        assert_eq!(accent_text("green", "font-semibold"), "font-semibold text-green-500");
        assert_eq!(accent_text("red", ""), "text-red-500");

        let class = submit_class("red");
        assert!(class.starts_with("w-full bg-red-600 hover:bg-red-700 "));
        assert!(class.ends_with("disabled:opacity-50"));
        assert!(!class.contains("green"));
    }

    #[test]
    fn saved_but_unrefreshed_still_counts_as_saved() {
        use crate::error::ApiError;

        let notifier = Notifier::default();
        let ok: Result<(), AppError> = Ok(());
        assert!(report(&ok, &notifier, "saved", "failed"));

        let refresh = Err::<(), _>(AppError::Refresh(ApiError::Network("offline".into())));
        assert!(report(&refresh, &notifier, "saved", "failed"));

        let rejected = Err::<(), _>(AppError::Request(ApiError::Rejected("no".into())));
        assert!(!report(&rejected, &notifier, "saved", "failed"));

        let aborted = Err::<(), _>(AppError::Request(ApiError::Aborted));
        assert!(!report(&aborted, &notifier, "saved", "failed"));
    }
}
