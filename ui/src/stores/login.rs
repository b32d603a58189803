use serde::Serialize;

use super::StoreError;

/// State backing the login / create account form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginStore {
    /// Whether the form currently passes its field rules.
    pub form: bool,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
    /// `true` while the form is in "create account" mode.
    pub create_account: bool,
    pub logging_in: bool,
    pub server_error: Option<StoreError>,
}

impl LoginStore {
    /// Switches between login and account creation.
    ///
    /// Password fields are always cleared so a typed password never carries
    /// over to the other mode.
    pub fn toggle_account_create(&mut self) {
        self.password = None;
        self.password_confirm = None;
        self.create_account = !self.create_account;
        dioxus_logger::tracing::debug!("login: create_account={}", self.create_account);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        dioxus_logger::tracing::debug!("login: reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginStore {
        LoginStore {
            form: true,
            email: Some("alice@example.com".to_string()),
            password: Some("hunter2".to_string()),
            password_confirm: Some("hunter2".to_string()),
            create_account: false,
            logging_in: true,
            server_error: Some(StoreError::new("bad credentials")),
        }
    }

    #[test]
    fn toggle_flips_mode_and_clears_passwords() {
        let mut login = filled();

        login.toggle_account_create();
        assert!(login.create_account);
        assert_eq!(login.password, None);
        assert_eq!(login.password_confirm, None);

        login.password = Some("again".to_string());
        login.password_confirm = Some("again".to_string());
        login.toggle_account_create();
        assert!(!login.create_account);
        assert_eq!(login.password, None);
        assert_eq!(login.password_confirm, None);
    }

    #[test]
    fn toggle_leaves_other_fields_alone() {
        let mut login = filled();
        login.toggle_account_create();
        assert_eq!(login.email.as_deref(), Some("alice@example.com"));
        assert!(login.form);
        assert!(login.logging_in);
        assert!(login.server_error.is_some());
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut login = filled();
        login.toggle_account_create();
        login.reset();
        assert_eq!(login, LoginStore::default());
        assert!(!login.form);
        assert!(!login.create_account);
        assert_eq!(login.email, None);
    }
}
