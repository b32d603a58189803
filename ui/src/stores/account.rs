use serde::Serialize;

use super::StoreError;

/// Balance panel state.
///
/// `balance` is NaN while unknown (not fetched yet, or the session expired).
/// No `PartialEq`: NaN would make two fresh stores compare unequal.
#[derive(Clone, Debug, Serialize)]
pub struct AccountStore {
    pub balance: f64,
    pub need_login: bool,
    pub loading: bool,
    pub error: Option<StoreError>,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self {
            balance: f64::NAN,
            need_login: false,
            loading: true,
            error: None,
        }
    }
}

impl AccountStore {
    /// Forgets the balance and asks the user to log in again.
    pub fn require_login(&mut self) {
        self.need_login = true;
        self.balance = f64::NAN;
        self.loading = true;
        self.error = None;
        dioxus_logger::tracing::debug!("account: login required");
    }

    pub fn login(&mut self) {
        self.need_login = false;
    }

    pub fn start_load(&mut self) {
        self.loading = true;
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
        self.error = None;
    }

    pub fn end_load(&mut self) {
        self.loading = false;
    }

    pub fn set_error(&mut self, err: impl Into<StoreError>) {
        let err = err.into();
        dioxus_logger::tracing::warn!("account: {}", err);
        self.error = Some(err);
    }

    /// `true` once a balance has been stored.
    pub fn has_balance(&self) -> bool {
        !self.balance.is_nan()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_initial(account: &AccountStore) {
        assert!(account.balance.is_nan());
        assert!(!account.need_login);
        assert!(account.loading);
        assert_eq!(account.error, None);
    }

    #[test]
    fn starts_without_balance() {
        let account = AccountStore::default();
        assert_initial(&account);
        assert!(!account.has_balance());
    }

    #[test]
    fn require_login_clears_balance() {
        let mut account = AccountStore::default();
        account.set_balance(42.5);
        account.end_load();
        account.set_error("timeout");

        account.require_login();

        assert!(account.need_login);
        assert!(account.balance.is_nan());
        assert!(account.loading);
        assert_eq!(account.error, None);
    }

    #[test]
    fn login_clears_need_login() {
        let mut account = AccountStore::default();
        account.require_login();
        account.login();
        assert!(!account.need_login);
    }

    #[test]
    fn set_balance_clears_error() {
        let mut account = AccountStore::default();
        account.set_error(StoreError::new("unauthorized"));
        account.set_balance(10.0);
        assert_eq!(account.balance, 10.0);
        assert_eq!(account.error, None);
        assert!(account.has_balance());
    }

    #[test]
    fn set_balance_accepts_nan() {
        let mut account = AccountStore::default();
        account.set_balance(3.0);
        account.set_balance(f64::NAN);
        assert!(!account.has_balance());
    }

    #[test]
    fn load_flags_have_no_ordering() {
        let mut account = AccountStore::default();
        account.end_load();
        account.end_load();
        assert!(!account.loading);
        account.start_load();
        account.start_load();
        assert!(account.loading);
    }

    #[test]
    fn set_error_keeps_balance() {
        let mut account = AccountStore::default();
        account.set_balance(7.0);
        account.set_error(anyhow::anyhow!("server unavailable"));
        assert_eq!(account.balance, 7.0);
        assert_eq!(
            account.error.as_ref().map(StoreError::message),
            Some("server unavailable")
        );
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut account = AccountStore::default();
        account.login();
        account.set_balance(99.0);
        account.end_load();
        account.set_error("boom");
        account.reset();
        assert_initial(&account);
    }
}
