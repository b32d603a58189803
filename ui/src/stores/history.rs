use dioxus::core::Task;
use serde::Serialize;

use super::StoreError;

/// One transaction row, exactly as the backend sent it.
pub type HistoryItem = serde_json::Value;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Paginated transaction history view state.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryStore {
    pub loading: bool,
    pub items: Vec<HistoryItem>,
    pub error: Option<StoreError>,
    pub search: Option<String>,
    /// Number of pages reported by the backend.
    pub length: u32,
    pub page_size: u32,
    pub page: u32,
    /// Pending debounced search, if any.
    #[serde(skip)]
    pub timeout: Option<Task>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            loading: true,
            items: Vec::new(),
            error: None,
            search: None,
            length: 1,
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
            timeout: None,
        }
    }
}

impl HistoryStore {
    /// Stores a new debounce task, cancelling the one it replaces.
    pub fn replace_timeout(&mut self, task: Task) {
        self.cancel_timeout();
        self.timeout = Some(task);
    }

    /// Cancels the pending debounce task. Does nothing if none is pending.
    pub fn cancel_timeout(&mut self) {
        if let Some(task) = self.timeout.take() {
            task.cancel();
        }
    }

    pub fn reset(&mut self) {
        self.cancel_timeout();
        *self = Self::default();
        dioxus_logger::tracing::debug!("history: reset");
    }
}
