//=============================================================================
// File: src/screens/index.rs
//=============================================================================
use crate::components::add_funds_dialog::AddFundsDialog;
use crate::components::balance_card::BalanceCard;
use crate::components::calculator::Calculator;
use crate::components::history_table::HistoryTable;
use crate::components::login_form::LoginForm;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::hooks::use_stores::use_stores;
use crate::stores::snapshot_json;
use dioxus::prelude::*;

/// The only page: balance, calculator and history, or the login form when
/// the session has expired.
#[allow(non_snake_case)]
#[component]
pub fn Index() -> Element {
    let stores = use_stores();
    let mut account = stores.account;
    let mut login = stores.login;
    let mut history = stores.history;

    use_hook(|| {
        dioxus_logger::tracing::info!("index mounted, account: {}", snapshot_json(&*account.peek()));
    });

    let need_login = account.read().need_login;

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li { strong { "Wallet" } }
                    }
                    ul {
                        if !need_login {
                            li {
                                Button {
                                    button_type: ButtonType::Contrast,
                                    outline: true,
                                    on_click: move |_| {
                                        login.write().reset();
                                        history.write().reset();
                                        account.write().require_login();
                                    },
                                    "Log Out"
                                }
                            }
                        }
                    }
                }
            }
            if need_login {
                LoginForm {}
            } else {
                Grid {
                    BalanceCard {}
                    Calculator {}
                }
                HistoryTable {}
                AddFundsDialog {}
            }
        }
    }
}
