//! The income and expense collections, as seen from the client.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{check_ack, open_envelope, ApiClient};
use crate::error::ApiError;
use crate::models::{Ack, Envelope, Expense, ExpenseDraft, Income, IncomeDraft};

/// One row of a ledger list.
pub trait Entry: Clone + PartialEq + 'static {
    fn amount(&self) -> f64;
}

impl Entry for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Entry for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Describes a server-side collection and the types that flow through it.
pub trait Resource: 'static {
    type Entry: Entry + DeserializeOwned;
    type Draft: Serialize + Clone + 'static;

    /// Path segment under the API base, e.g. `income`.
    const PATH: &'static str;
}

pub struct Incomes;

impl Resource for Incomes {
    type Entry = Income;
    type Draft = IncomeDraft;
    const PATH: &'static str = "income";
}

pub struct Expenses;

impl Resource for Expenses {
    type Entry = Expense;
    type Draft = ExpenseDraft;
    const PATH: &'static str = "expense";
}

/// The three calls a ledger view makes.
#[allow(async_fn_in_trait)]
pub trait LedgerApi {
    type Entry: Entry;
    type Draft;

    async fn list(&self) -> Result<Vec<Self::Entry>, ApiError>;
    async fn create(&self, draft: &Self::Draft) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// [`LedgerApi`] backed by the REST API.
pub struct RemoteLedger<R> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> RemoteLedger<R> {
    pub fn new(client: ApiClient) -> Self {
        RemoteLedger {
            client,
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for RemoteLedger<R> {
    fn clone(&self) -> Self {
        RemoteLedger {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> LedgerApi for RemoteLedger<R> {
    type Entry = R::Entry;
    type Draft = R::Draft;

    async fn list(&self) -> Result<Vec<R::Entry>, ApiError> {
        let envelope: Envelope<Vec<R::Entry>> =
            self.client.get(&format!("{}/get", R::PATH)).await?;
        open_envelope(envelope)
    }

    async fn create(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let ack: Ack = self.client.post(&format!("{}/add", R::PATH), draft).await?;
        check_ack(ack)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let ack: Ack = self.client.delete(&format!("{}/{}", R::PATH, id)).await?;
        check_ack(ack)
    }
}

pub fn total<E: Entry>(entries: &[E]) -> f64 {
    entries.iter().map(Entry::amount).sum()
}
