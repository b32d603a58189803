//=============================================================================
// File: src/components/add_funds_dialog.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::hooks::use_stores::use_stores;
use crate::stores::AddFundsStore;
use crate::stores::StoreError;
use dioxus::prelude::*;

/// Parses the amount field and updates `amount`, `error` and `form`.
fn set_amount(funds: &mut AddFundsStore, input: &str) {
    let input = input.trim();
    if input.is_empty() {
        funds.amount = None;
        funds.error = None;
        funds.form = false;
        return;
    }
    match input.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => {
            funds.amount = Some(amount);
            funds.error = None;
            funds.form = true;
        }
        Ok(_) => {
            funds.amount = None;
            funds.error = Some(StoreError::new("Amount must be positive"));
            funds.form = false;
        }
        Err(_) => {
            funds.amount = None;
            funds.error = Some(StoreError::new("Not a number"));
            funds.form = false;
        }
    }
}

#[component]
pub fn AddFundsDialog() -> Element {
    let stores = use_stores();
    let mut add_funds = stores.add_funds;

    let state = add_funds.read().clone();
    let amount_text = state.amount.map(|a| a.to_string()).unwrap_or_default();

    rsx! {
        Modal {
            open: state.dialog,
            title: "Add Funds",
            on_close: move |_| add_funds.write().reset(),
            if state.success {
                p { "Funds added." }
                Button {
                    on_click: move |_| add_funds.write().reset(),
                    "Done"
                }
            } else {
                Input {
                    label: "Amount",
                    name: "amount",
                    input_type: "number",
                    value: amount_text,
                    disabled: state.loading,
                    on_input: move |v: String| set_amount(&mut add_funds.write(), &v),
                }
                if let Some(err) = &state.error {
                    small { "{err}" }
                }
                if let Some(err) = &state.server_error {
                    p { "Deposit failed: {err}" }
                }
                footer {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: state.loading,
                        on_click: move |_| add_funds.write().reset(),
                        "Cancel"
                    }
                    Button {
                        disabled: !state.form,
                        busy: state.loading,
                        on_click: move |_| {
                            let mut funds = add_funds.write();
                            funds.server_error = None;
                            funds.loading = true;
                            dioxus_logger::tracing::info!("deposit submitted: {:?}", funds.amount);
                        },
                        "Deposit"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_makes_form_valid() {
        let mut funds = AddFundsStore::default();
        set_amount(&mut funds, " 12.50 ");
        assert_eq!(funds.amount, Some(12.5));
        assert_eq!(funds.error, None);
        assert!(funds.form);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        let mut funds = AddFundsStore::default();
        set_amount(&mut funds, "0");
        assert_eq!(funds.amount, None);
        assert!(funds.error.is_some());
        assert!(!funds.form);

        set_amount(&mut funds, "ten");
        assert_eq!(funds.error, Some(StoreError::new("Not a number")));
        assert!(!funds.form);
    }

    #[test]
    fn empty_input_clears_error() {
        let mut funds = AddFundsStore::default();
        set_amount(&mut funds, "-3");
        set_amount(&mut funds, "");
        assert_eq!(funds.error, None);
        assert_eq!(funds.amount, None);
        assert!(!funds.form);
    }
}
