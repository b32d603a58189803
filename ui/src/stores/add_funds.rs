use serde::Serialize;

use super::StoreError;

/// State backing the deposit dialog.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AddFundsStore {
    pub form: bool,
    pub amount: Option<f64>,
    pub loading: bool,
    pub error: Option<StoreError>,
    pub server_error: Option<StoreError>,
    pub dialog: bool,
    pub success: bool,
}

impl AddFundsStore {
    pub fn reset(&mut self) {
        *self = Self::default();
        dioxus_logger::tracing::debug!("add_funds: reset");
    }
}
