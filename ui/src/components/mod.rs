//! Shared components. `pico` holds the generic Pico.css building blocks, the
//! rest are the wallet panels, each backed by one store.
pub mod add_funds_dialog;
pub mod balance_card;
pub mod calculator;
pub mod history_table;
pub mod login_form;
pub mod pico;
