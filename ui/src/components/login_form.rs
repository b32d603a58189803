//=============================================================================
// File: src/components/login_form.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_stores::use_stores;
use crate::stores::LoginStore;
use dioxus::prelude::*;

/// Field rules for the login form. Sets `form` on the store.
fn validate(login: &mut LoginStore) {
    let filled = |f: &Option<String>| f.as_deref().is_some_and(|s| !s.is_empty());
    let email_ok = login.email.as_deref().is_some_and(|e| e.contains('@'));
    login.form = email_ok
        && filled(&login.password)
        && (!login.create_account || login.password == login.password_confirm);
}

#[component]
pub fn LoginForm() -> Element {
    let stores = use_stores();
    let mut login = stores.login;

    let state = login.read().clone();
    let title = if state.create_account {
        "Create Account"
    } else {
        "Log In"
    };
    let toggle_text = if state.create_account {
        "Already have an account? Log in"
    } else {
        "No account yet? Create one"
    };

    rsx! {
        Card {
            h3 { "{title}" }
            Input {
                label: "Email",
                name: "email",
                input_type: "email",
                value: state.email.clone().unwrap_or_default(),
                on_input: move |v: String| {
                    let mut l = login.write();
                    l.email = Some(v);
                    validate(&mut l);
                },
            }
            Input {
                label: "Password",
                name: "password",
                input_type: "password",
                value: state.password.clone().unwrap_or_default(),
                on_input: move |v: String| {
                    let mut l = login.write();
                    l.password = Some(v);
                    validate(&mut l);
                },
            }
            if state.create_account {
                Input {
                    label: "Confirm Password",
                    name: "password_confirm",
                    input_type: "password",
                    value: state.password_confirm.clone().unwrap_or_default(),
                    on_input: move |v: String| {
                        let mut l = login.write();
                        l.password_confirm = Some(v);
                        validate(&mut l);
                    },
                }
            }
            if let Some(err) = &state.server_error {
                p { class: "pico-color-red-500", "{err}" }
            }
            Button {
                disabled: !state.form,
                busy: state.logging_in,
                on_click: move |_| {
                    // the request itself is made by the HTTP layer watching this flag
                    let mut l = login.write();
                    l.server_error = None;
                    l.logging_in = true;
                    dioxus_logger::tracing::info!("login submitted, create_account={}", l.create_account);
                },
                "{title}"
            }
            p {
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        let mut l = login.write();
                        l.toggle_account_create();
                        validate(&mut l);
                    },
                    "{toggle_text}"
                }
            }
        }
    }
}
