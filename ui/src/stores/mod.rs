//! Reactive state containers for the wallet panels.
//!
//! Every store is a plain struct with its own actions, so it can be used and
//! tested without a Dioxus runtime. The UI holds each one in a [`Signal`] and
//! shares them through the [`Stores`] context.

pub mod account;
pub mod add_funds;
pub mod app;
pub mod calc;
pub mod error;
pub mod history;
pub mod login;

use dioxus::prelude::*;
use serde::Serialize;

pub use account::AccountStore;
pub use add_funds::AddFundsStore;
pub use app::AppStore;
pub use calc::CalcStore;
pub use error::StoreError;
pub use history::HistoryItem;
pub use history::HistoryStore;
pub use login::LoginStore;

/// All application stores, provided once at the root of the component tree.
///
/// Signals are `Copy`, so handlers capture this by value.
#[derive(Clone, Copy)]
pub struct Stores {
    pub app: Signal<AppStore>,
    pub login: Signal<LoginStore>,
    pub add_funds: Signal<AddFundsStore>,
    pub calc: Signal<CalcStore>,
    pub account: Signal<AccountStore>,
    pub history: Signal<HistoryStore>,
}

/// Serializes a store snapshot for logging.
pub fn snapshot_json<T: Serialize>(store: &T) -> String {
    serde_json::to_string(store).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
