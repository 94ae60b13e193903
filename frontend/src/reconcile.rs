//! Keeping a cached ledger list in line with the server.
//!
//! The list a view holds is only ever a snapshot. Every successful create
//! or delete is followed by a full refetch, and the snapshot is replaced
//! wholesale with what the server returns. Nothing is patched locally.

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::error::AppError;
use crate::ledger::{self, Entry, LedgerApi};

#[derive(Clone, Debug, PartialEq)]
pub struct LedgerState<T> {
    pub entries: Vec<T>,
    pub loading: bool,
    /// A create or delete is outstanding. Only a settle action clears it.
    pub submitting: bool,
    /// The last refetch failed, so `entries` may not match the server.
    pub stale: bool,
    /// Newest request generation seen. Results from older requests are
    /// dropped.
    generation: u64,
}

impl<T> Default for LedgerState<T> {
    fn default() -> Self {
        LedgerState {
            entries: Vec::new(),
            loading: true,
            submitting: false,
            stale: false,
            generation: 0,
        }
    }
}

impl<T: Entry> LedgerState<T> {
    pub fn total(&self) -> f64 {
        ledger::total(&self.entries)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn is_current(&self, generation: u64) -> bool {
        generation >= self.generation
    }
}

/// Every action that carries a list, or reports on fetching one, is tagged
/// with the generation its request was issued under.
pub enum LedgerAction<T> {
    Fetching(u64),
    Loaded(u64, Vec<T>),
    FetchFailed(u64),
    Submitting(u64),
    Saved(u64, Vec<T>),
    MutationFailed(u64),
    RefreshFailed(u64),
}

impl<T> LedgerAction<T> {
    /// Maps the result of [`create`] or [`remove`] onto the state machine.
    pub fn settle(generation: u64, result: Result<Vec<T>, AppError>) -> Self {
        match result {
            Ok(entries) => LedgerAction::Saved(generation, entries),
            Err(AppError::Refresh(_)) => LedgerAction::RefreshFailed(generation),
            Err(_) => LedgerAction::MutationFailed(generation),
        }
    }
}

impl<T: Entry> Reducible for LedgerState<T> {
    type Action = LedgerAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LedgerAction::Fetching(generation) => {
                next.generation = next.generation.max(generation);
                next.loading = true;
            }
            LedgerAction::Submitting(generation) => {
                next.generation = next.generation.max(generation);
                next.submitting = true;
            }
            LedgerAction::Loaded(generation, entries) => {
                if !self.is_current(generation) {
                    log::debug!("Dropping list from superseded request {}", generation);
                    return self;
                }
                next.entries = entries;
                next.loading = false;
                next.stale = false;
            }
            LedgerAction::FetchFailed(generation) => {
                if !self.is_current(generation) {
                    return self;
                }
                next.loading = false;
                next.stale = true;
            }
            LedgerAction::Saved(generation, entries) => {
                next.submitting = false;
                if self.is_current(generation) {
                    next.entries = entries;
                    next.loading = false;
                    next.stale = false;
                }
            }
            LedgerAction::MutationFailed(generation) => {
                next.submitting = false;
                // A load superseded by this mutation will never land, so
                // the list is unknown rather than merely unchanged.
                if self.is_current(generation) && next.loading {
                    next.loading = false;
                    next.stale = true;
                }
            }
            LedgerAction::RefreshFailed(generation) => {
                next.submitting = false;
                if self.is_current(generation) {
                    next.loading = false;
                    next.stale = true;
                }
            }
        }
        Rc::new(next)
    }
}

/// Hands out increasing request generations for one view.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    last: Rc<Cell<u64>>,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence::default()
    }

    pub fn next(&self) -> u64 {
        let generation = self.last.get() + 1;
        self.last.set(generation);
        generation
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.last, &other.last)
    }
}

/// Allows one mutation at a time per view.
///
/// Rendered state lags behind clicks, so a second submit can arrive before
/// `submitting` shows in the view. The gate is shared mutable state and
/// closes synchronously.
#[derive(Clone, Debug, Default)]
pub struct MutationGate {
    busy: Rc<Cell<bool>>,
}

impl PartialEq for MutationGate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.busy, &other.busy)
    }
}

/// Held for the duration of a mutation; reopens the gate on drop.
pub struct Ticket {
    busy: Rc<Cell<bool>>,
}

impl Drop for Ticket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

impl MutationGate {
    pub fn new() -> Self {
        MutationGate::default()
    }

    /// Closes the gate, or fails with [`AppError::Busy`] if it already is.
    pub fn begin(&self) -> Result<Ticket, AppError> {
        if self.busy.replace(true) {
            return Err(AppError::Busy);
        }
        Ok(Ticket {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

pub async fn fetch<A: LedgerApi>(api: &A) -> Result<Vec<A::Entry>, AppError> {
    Ok(api.list().await?)
}

/// Creates an entry and returns the server's list afterwards. The gate
/// stays closed until the refetch has finished.
pub async fn create<A: LedgerApi>(
    api: &A,
    ticket: Ticket,
    draft: &A::Draft,
) -> Result<Vec<A::Entry>, AppError> {
    let _ticket = ticket;
    api.create(draft).await?;
    api.list().await.map_err(AppError::Refresh)
}

/// Deletes an entry and returns the server's list afterwards.
pub async fn remove<A: LedgerApi>(
    api: &A,
    ticket: Ticket,
    id: &str,
) -> Result<Vec<A::Entry>, AppError> {
    let _ticket = ticket;
    api.delete(id).await?;
    api.list().await.map_err(AppError::Refresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Expense, ExpenseDraft};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
    }

    fn expense(id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            category: "Food".to_string(),
            amount,
            date: day(),
            description: None,
        }
    }

    fn draft(amount: f64) -> ExpenseDraft {
        ExpenseDraft {
            category: "Transport".to_string(),
            amount,
            date: day(),
            description: None,
        }
    }

    /// In-memory stand-in for the expense endpoints.
    #[derive(Default)]
    struct FakeLedger {
        rows: RefCell<Vec<Expense>>,
        next_id: Cell<u32>,
        calls: RefCell<Vec<&'static str>>,
        fail_list: Cell<bool>,
        fail_delete: Cell<bool>,
    }

    impl FakeLedger {
        fn with(rows: Vec<Expense>) -> Self {
            FakeLedger {
                rows: RefCell::new(rows),
                next_id: Cell::new(100),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl LedgerApi for FakeLedger {
        type Entry = Expense;
        type Draft = ExpenseDraft;

        async fn list(&self) -> Result<Vec<Expense>, ApiError> {
            self.calls.borrow_mut().push("list");
            if self.fail_list.get() {
                return Err(ApiError::Network("offline".to_string()));
            }
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, draft: &ExpenseDraft) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("create");
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.rows.borrow_mut().push(Expense {
                id: id.to_string(),
                category: draft.category.clone(),
                amount: draft.amount,
                date: draft.date,
                description: draft.description.clone(),
            });
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("delete");
            if self.fail_delete.get() {
                return Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.rows.borrow_mut().retain(|e| e.id != id);
            Ok(())
        }
    }

    fn apply(state: LedgerState<Expense>, action: LedgerAction<Expense>) -> LedgerState<Expense> {
        (*Rc::new(state).reduce(action)).clone()
    }

    /// Runs a complete mount fetch and returns the resulting state.
    async fn mounted(api: &FakeLedger, seq: &Sequence) -> LedgerState<Expense> {
        let generation = seq.next();
        let state = apply(LedgerState::default(), LedgerAction::Fetching(generation));
        apply(state, LedgerAction::Loaded(generation, fetch(api).await.unwrap()))
    }

    fn ids(state: &LedgerState<Expense>) -> Vec<&str> {
        state.entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[tokio::test]
    async fn delete_refetches_and_drops_the_entry() {
        let api = FakeLedger::with(vec![expense("1", 10.0), expense("2", 20.0)]);
        let gate = MutationGate::new();
        let seq = Sequence::new();
        let state = mounted(&api, &seq).await;
        assert_eq!(state.total(), 30.0);

        let generation = seq.next();
        let state = apply(state, LedgerAction::Submitting(generation));
        let result = remove(&api, gate.begin().unwrap(), "1").await;
        let state = apply(state, LedgerAction::settle(generation, result));

        assert_eq!(ids(&state), vec!["2"]);
        assert_eq!(state.total(), 20.0);
        assert_eq!(api.calls(), vec!["list", "delete", "list"]);
        assert!(!gate.is_busy());
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn create_reflects_new_entry_exactly_once() {
        let api = FakeLedger::with(vec![expense("1", 10.0)]);
        let gate = MutationGate::new();
        let seq = Sequence::new();
        let state = mounted(&api, &seq).await;

        let generation = seq.next();
        let state = apply(state, LedgerAction::Submitting(generation));
        assert!(state.is_submitting());

        let result = create(&api, gate.begin().unwrap(), &draft(5.5)).await;
        let state = apply(state, LedgerAction::settle(generation, result));

        let created: Vec<_> = state.entries.iter().filter(|e| e.id == "100").collect();
        assert_eq!(created.len(), 1);
        assert_eq!(state.entries.len(), 2);
        assert!(!state.is_submitting());
        assert!(!state.is_loading());
        assert_eq!(api.calls(), vec!["list", "create", "list"]);
    }

    #[tokio::test]
    async fn late_mount_load_cannot_replace_list_after_create() {
        let api = FakeLedger::with(vec![expense("1", 10.0)]);
        let gate = MutationGate::new();
        let seq = Sequence::new();

        // Mount fetch goes out and is answered, but its result is delivered
        // only after the user has already submitted.
        let mount = seq.next();
        let state = apply(LedgerState::default(), LedgerAction::Fetching(mount));
        let early = fetch(&api).await.unwrap();

        let save = seq.next();
        let state = apply(state, LedgerAction::Submitting(save));
        let result = create(&api, gate.begin().unwrap(), &draft(5.0)).await;
        let state = apply(state, LedgerAction::settle(save, result));
        assert_eq!(ids(&state), vec!["1", "100"]);

        let state = apply(state, LedgerAction::Loaded(mount, early));
        assert_eq!(ids(&state), vec!["1", "100"]);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn failed_mutation_after_superseded_load_marks_list_stale() {
        let api = FakeLedger::with(vec![expense("1", 10.0)]);
        api.fail_delete.set(true);
        let gate = MutationGate::new();
        let seq = Sequence::new();

        let mount = seq.next();
        let state = apply(LedgerState::default(), LedgerAction::Fetching(mount));
        let save = seq.next();
        let state = apply(state, LedgerAction::Submitting(save));
        let result = remove(&api, gate.begin().unwrap(), "1").await;
        let state = apply(state, LedgerAction::settle(save, result));

        assert!(!state.is_loading());
        assert!(!state.is_submitting());
        assert!(state.stale);
    }

    #[test]
    fn fetching_keeps_an_outstanding_mutation_submitting() {
        let seq = Sequence::new();
        let state = apply(LedgerState::default(), LedgerAction::Loaded(seq.next(), Vec::new()));

        let save = seq.next();
        let state = apply(state, LedgerAction::Submitting(save));
        let retry = seq.next();
        let state = apply(state, LedgerAction::Fetching(retry));
        assert!(state.is_submitting());

        let state = apply(state, LedgerAction::Loaded(retry, vec![expense("1", 3.0)]));
        assert!(state.is_submitting());
        assert_eq!(ids(&state), vec!["1"]);

        let state = apply(state, LedgerAction::MutationFailed(save));
        assert!(!state.is_submitting());
        assert_eq!(ids(&state), vec!["1"]);
    }

    #[tokio::test]
    async fn failed_delete_keeps_snapshot() {
        let api = FakeLedger::with(vec![expense("1", 10.0)]);
        api.fail_delete.set(true);
        let gate = MutationGate::new();
        let seq = Sequence::new();
        let before = mounted(&api, &seq).await;

        let generation = seq.next();
        let submitting = apply(before.clone(), LedgerAction::Submitting(generation));
        let result = remove(&api, gate.begin().unwrap(), "1").await;
        assert!(matches!(result, Err(AppError::Request(ApiError::Server { status: 500, .. }))));

        let after = apply(submitting, LedgerAction::settle(generation, result));
        assert_eq!(after.entries, before.entries);
        assert!(!after.stale);
        assert!(!after.is_submitting());
        assert_eq!(api.calls(), vec!["list", "delete"]);
    }

    #[tokio::test]
    async fn failed_refetch_marks_list_stale() {
        let api = FakeLedger::with(vec![expense("1", 10.0)]);
        let gate = MutationGate::new();
        let seq = Sequence::new();
        let state = mounted(&api, &seq).await;

        api.fail_list.set(true);
        let generation = seq.next();
        let state = apply(state, LedgerAction::Submitting(generation));
        let result = create(&api, gate.begin().unwrap(), &draft(1.0)).await;
        assert!(matches!(result, Err(AppError::Refresh(_))));

        let state = apply(state, LedgerAction::settle(generation, result));
        assert!(state.stale);
        assert!(!state.is_submitting());
        assert_eq!(ids(&state), vec!["1"]);

        api.fail_list.set(false);
        let retry = seq.next();
        let state = apply(state, LedgerAction::Fetching(retry));
        let state = apply(state, LedgerAction::Loaded(retry, fetch(&api).await.unwrap()));
        assert!(!state.stale);
        assert_eq!(state.entries.len(), 2);
    }

    #[tokio::test]
    async fn gate_admits_one_mutation_at_a_time() {
        let api = FakeLedger::with(vec![expense("1", 10.0)]);
        let gate = MutationGate::new();
        let ticket = gate.begin().unwrap();

        assert!(gate.is_busy());
        assert!(matches!(gate.begin(), Err(AppError::Busy)));
        assert!(api.calls().is_empty());

        let entries = remove(&api, ticket, "1").await.unwrap();
        assert!(entries.is_empty());
        assert!(!gate.is_busy());
        assert!(gate.begin().is_ok());
    }

    #[test]
    fn initial_fetch_failure_stops_loading() {
        let state = LedgerState::<Expense>::default();
        assert!(state.is_loading());

        let state = apply(state, LedgerAction::FetchFailed(1));
        assert!(!state.is_loading());
        assert!(state.stale);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn sequence_is_shared_between_clones() {
        let seq = Sequence::new();
        let other = seq.clone();
        assert_eq!(seq.next(), 1);
        assert_eq!(other.next(), 2);
        assert_eq!(seq, other);
    }
}
