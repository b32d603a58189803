//=============================================================================
// File: src/components/balance_card.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_stores::use_stores;
use dioxus::prelude::*;

#[component]
pub fn BalanceCard() -> Element {
    let stores = use_stores();
    let account = stores.account;
    let mut add_funds = stores.add_funds;

    let state = account.read().clone();
    let balance_text = format!("{:.2}", state.balance);

    rsx! {
        Card {
            h3 { "Current Balance" }
            if state.need_login {
                p { "Log in to see your balance." }
            } else if let Some(err) = &state.error {
                p { "Failed to load balance: {err}" }
            } else if state.loading || !state.has_balance() {
                p { "Loading balance..." }
                progress {}
            } else {
                p { "{balance_text}" }
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| {
                        let mut funds = add_funds.write();
                        funds.reset();
                        funds.dialog = true;
                    },
                    "Add Funds"
                }
            }
        }
    }
}
