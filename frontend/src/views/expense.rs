use yew::prelude::*;

use super::fields::{bind_input, bind_select, bind_textarea};
use super::ledger_page::{use_ledger, LedgerShell, Messages};
use crate::components::EntryRow;
use crate::format::{format_date, format_signed};
use crate::forms::{today, ExpenseForm, EXPENSE_CATEGORIES};
use crate::ledger::Expenses;
use crate::models::Expense;

static MESSAGES: Messages = Messages {
    load_failed: "Could not load expenses",
    created: "Expense recorded",
    create_failed: "Error saving expense",
    confirm_delete: "Delete this expense?",
    deleted: "Entry deleted",
    delete_failed: "Delete failed",
};

pub fn expense_row(expense: &Expense) -> EntryRow {
    let description = expense
        .description
        .clone()
        .filter(|d| !d.trim().is_empty());

    EntryRow {
        id: expense.id.clone(),
        title: description.unwrap_or_else(|| expense.category.clone()),
        detail: None,
        tag: expense.category.clone(),
        date: format_date(expense.date),
        amount: format_signed(expense.amount, false),
    }
}

#[function_component(ExpensePage)]
pub fn expense_page() -> Html {
    let (state, ledger) = use_ledger::<Expenses>(&MESSAGES);
    let form = use_state(|| ExpenseForm::new(today()));

    let on_submit = {
        let ledger = ledger.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(draft) => {
                    let form = form.clone();
                    ledger.create(draft, Callback::from(move |_| form.set(ExpenseForm::new(today()))));
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

    let rows: Vec<EntryRow> = state.entries.iter().map(expense_row).collect();

    html! {
        <LedgerShell
            title="Expenses"
            total_label="Total spent"
            total={state.total()}
            resource="expense"
            accent="red"
            form_title="Add Expense"
            list_title="Recent Expenses"
            empty_label="No expenses yet."
            description_placeholder="What was it for?"
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
                <label class="block text-sm text-gray-400 mb-1">{"Category"}</label>
                <select
                    class="w-full p-3 bg-[#1a1a1a] border border-gray-700 rounded-xl text-white outline-none focus:ring-2 focus:ring-red-500"
                    onchange={bind_select(&form, |f, v| f.category = v)}
                >
                    <option value="" selected={form.category.is_empty()}>{"Select a category"}</option>
                    { for EXPENSE_CATEGORIES.iter().map(|cat| html! {
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
    fn row_titles_by_description_then_category() {
        let mut expense = Expense {
            id: "e1".to_string(),
            category: "Food".to_string(),
            amount: 12.5,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: Some("Lunch".to_string()),
        };
        let row = expense_row(&expense);
        assert_eq!(row.title, "Lunch");
        assert_eq!(row.tag, "Food");
        assert_eq!(row.amount, "- $12.50");

        expense.description = None;
        assert_eq!(expense_row(&expense).title, "Food");
    }
}
