//! Application-wide configuration.

use serde::Serialize;

/// Name of the environment variable holding the API root URL.
pub const API_ROOT_VAR: &str = "API_ROOT";

/// Holds the root URL that the HTTP client prefixes to every request.
///
/// An empty root means requests go to the origin that served the page. For
/// standalone development point it at the backend, eg
/// `API_ROOT=http://localhost:8080`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppStore {
    pub root: String,
}

impl AppStore {
    /// Reads the API root from the environment.
    ///
    /// Priority: runtime `API_ROOT` (native targets), then `API_ROOT` at
    /// compile time (the only option in wasm builds), then the empty string.
    pub fn from_env() -> Self {
        let root = std::env::var(API_ROOT_VAR)
            .ok()
            .or_else(|| option_env!("API_ROOT").map(str::to_string))
            .unwrap_or_default();
        Self { root }
    }

    pub fn reset(&mut self) {
        *self = Self::from_env();
    }
}
