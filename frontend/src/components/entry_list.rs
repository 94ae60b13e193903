use yew::prelude::*;

use super::icons::{icon_refresh, icon_trash};

/// A ledger entry, already formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub id: String,
    pub title: String,
    pub detail: Option<String>,
    pub tag: String,
    pub date: String,
    pub amount: String,
}

impl EntryRow {
    fn initial(&self) -> String {
        self.tag
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryListProps {
    pub rows: Vec<EntryRow>,
    pub loading: bool,
    /// Deletes and retries are disabled while a mutation is outstanding.
    pub busy: bool,
    pub stale: bool,
    pub empty_label: &'static str,
    /// Tailwind color stem, e.g. `green` or `red`.
    pub accent: &'static str,
    pub on_delete: Callback<String>,
    pub on_retry: Callback<()>,
}

#[function_component(EntryList)]
pub fn entry_list(props: &EntryListProps) -> Html {
    let stale_banner = if props.stale {
        let on_retry = props.on_retry.clone();
        html! {
            <div class="flex items-center justify-between px-4 py-3 mb-3 rounded-xl bg-yellow-500/10 text-yellow-400 text-sm">
                <span>{"This list may be out of date."}</span>
                <button
                    class="flex items-center gap-1 font-semibold disabled:opacity-40"
                    disabled={props.busy}
                    onclick={Callback::from(move |_| on_retry.emit(()))}
                >
                    { icon_refresh() }{"Retry"}
                </button>
            </div>
        }
    } else {
        html! {}
    };

    let body = if props.loading {
        html! { <p class="py-10 text-center text-gray-500 animate-pulse">{"Loading..."}</p> }
    } else if props.rows.is_empty() {
        html! { <p class="py-10 text-center text-gray-500">{ props.empty_label }</p> }
    } else {
        html! {
            <div class="divide-y divide-gray-800">
                { for props.rows.iter().map(|row| {
                    let on_delete = props.on_delete.clone();
                    let id = row.id.clone();
                    html! {
                        <div key={row.id.clone()} class="flex items-center justify-between py-4 group">
                            <div class="flex items-center gap-4">
                                <div class={format!("w-10 h-10 rounded-full flex items-center justify-center font-bold bg-{0}-500/10 text-{0}-500", props.accent)}>
                                    { row.initial() }
                                </div>
                                <div>
                                    <p class="font-semibold text-white">{ &row.title }</p>
                                    <div class="flex items-center gap-2 text-xs text-gray-400">
                                        <span>{ &row.date }</span>
                                        <span class="px-2 py-0.5 bg-gray-800 rounded-full">{ &row.tag }</span>
                                    </div>
                                    if let Some(detail) = &row.detail {
                                        <p class="text-xs text-gray-500 mt-1">{ detail }</p>
                                    }
                                </div>
                            </div>
                            <div class="flex items-center gap-4">
                                <span class={format!("font-bold text-{}-500", props.accent)}>{ &row.amount }</span>
                                <button
                                    class="p-2 text-gray-500 hover:text-red-500 rounded-lg disabled:opacity-40"
                                    disabled={props.busy}
                                    title="Delete"
                                    onclick={Callback::from(move |_| on_delete.emit(id.clone()))}
                                >
                                    { icon_trash() }
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <>
            { stale_banner }
            { body }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_comes_from_tag() {
        let row = EntryRow {
            id: "1".to_string(),
            title: "Groceries".to_string(),
            detail: None,
            tag: "food".to_string(),
            date: "Mar 1, 2024".to_string(),
            amount: "- $10.00".to_string(),
        };
        assert_eq!(row.initial(), "F");

        let untagged = EntryRow { tag: String::new(), ..row };
        assert_eq!(untagged.initial(), "");
    }
}
