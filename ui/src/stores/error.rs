//! The opaque error value that stores hold for display.

use serde::Serialize;

/// An error reported to a store by the code that talks to the backend.
///
/// Stores never interpret it. They only keep it around so a panel can show
/// the message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl From<&str> for StoreError {
    fn from(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        // alternate formatting keeps the context chain
        Self(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn displays_message_verbatim() {
        let err = StoreError::new("insufficient funds");
        assert_eq!(err.to_string(), "insufficient funds");
        assert_eq!(err.message(), "insufficient funds");
    }

    #[test]
    fn keeps_anyhow_context_chain() {
        let res: anyhow::Result<()> = Err(anyhow::anyhow!("connection refused"));
        let err: StoreError = res.context("fetching balance").unwrap_err().into();
        assert_eq!(err.message(), "fetching balance: connection refused");
    }
}
