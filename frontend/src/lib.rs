//! Browser frontend for the expense tracker: session handling, guarded
//! routing, and the income, expense and dashboard views.

pub mod api;
pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod ledger;
pub mod models;
pub mod reconcile;
pub mod routes;
pub mod session;
pub mod storage;
pub mod toast;
pub mod views;

pub use app::App;
