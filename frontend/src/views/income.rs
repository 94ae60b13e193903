use yew::prelude::*;

use super::fields::{bind_input, bind_select, bind_textarea};
use super::ledger_page::{use_ledger, LedgerShell, Messages};
use crate::components::EntryRow;
use crate::format::{format_date, format_signed};
use crate::forms::{today, IncomeForm, INCOME_CATEGORIES};
use crate::ledger::Incomes;
use crate::models::Income;

static MESSAGES: Messages = Messages {
    load_failed: "Failed to load income records",
    created: "Income added successfully!",
    create_failed: "Error adding income",
    confirm_delete: "Are you sure you want to delete this record?",
    deleted: "Record deleted",
    delete_failed: "Delete failed",
};

pub fn income_row(income: &Income) -> EntryRow {
    EntryRow {
        id: income.id.clone(),
        title: if income.source.trim().is_empty() {
            income.category.clone()
        } else {
            income.source.clone()
        },
        detail: income.description.clone().filter(|d| !d.trim().is_empty()),
        tag: income.category.clone(),
        date: format_date(income.date),
        amount: format_signed(income.amount, true),
    }
}

#[function_component(IncomePage)]
pub fn income_page() -> Html {
    let (state, ledger) = use_ledger::<Incomes>(&MESSAGES);
    let form = use_state(|| IncomeForm::new(today()));

    let on_submit = {
        let ledger = ledger.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(draft) => {
                    let form = form.clone();
                    ledger.create(draft, Callback::from(move |_| form.set(IncomeForm::new(today()))));
                }
                Err(err) => ledger.reject(err),
            }
        })
    };
    let on_delete = {
        let ledger = ledger.clone();
        Callback::from(move |id: String| ledger.delete(id))
    };
    let on_retry = Callback::from(move |_: ()| ledger.load());

    let rows: Vec<EntryRow> = state.entries.iter().map(income_row).collect();

    html! {
        <LedgerShell
            title="Income"
            total_label="Total earned"
            total={state.total()}
            resource="income"
            accent="green"
            form_title="Add Income"
            list_title="Income History"
            empty_label="No income recorded yet."
            description_placeholder="Optional note"
            amount={form.amount.clone()}
            date={form.date.clone()}
            description={form.description.clone()}
            on_amount={bind_input(&form, |f, v| f.amount = v)}
            on_date={bind_input(&form, |f, v| f.date = v)}
            on_description={bind_textarea(&form, |f, v| f.description = v)}
            {on_submit}
            {rows}
            loading={state.is_loading()}
            submitting={state.is_submitting()}
            stale={state.stale}
            {on_delete}
            {on_retry}
        >
            <div>
                <label class="block text-sm text-gray-400 mb-1">{"Source"}</label>
                <input
                    type="text"
                    placeholder="e.g. Freelance Project"
                    class="w-full p-3 bg-[#1a1a1a] border border-gray-700 rounded-xl text-white outline-none focus:ring-2 focus:ring-green-500"
                    value={form.source.clone()}
                    oninput={bind_input(&form, |f, v| f.source = v)}
                />
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">{"Category"}</label>
                <select
                    class="w-full p-3 bg-[#1a1a1a] border border-gray-700 rounded-xl text-white outline-none"
                    onchange={bind_select(&form, |f, v| f.category = v)}
                >
                    { for INCOME_CATEGORIES.iter().map(|cat| html! {
                        <option value={*cat} selected={form.category == *cat}>{ *cat }</option>
                    }) }
                </select>
            </div>
        </LedgerShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn row_falls_back_to_category_without_source() {
        let income = Income {
            id: "i1".to_string(),
            source: " ".to_string(),
            category: "Gift".to_string(),
            amount: 1500.0,
            date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            description: Some(String::new()),
        };
        let row = income_row(&income);
        assert_eq!(row.title, "Gift");
        assert_eq!(row.detail, None);
        assert_eq!(row.amount, "+ $1,500.00");
        assert_eq!(row.date, "Dec 25, 2024");
    }
}
