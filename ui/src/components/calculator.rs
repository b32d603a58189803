//=============================================================================
// File: src/components/calculator.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_stores::use_stores;
use crate::stores::CalcStore;
use crate::stores::StoreError;
use dioxus::prelude::*;

const DIGITS: [char; 11] = ['7', '8', '9', '4', '5', '6', '1', '2', '3', '0', '.'];
const OPS: [&str; 4] = ["+", "-", "×", "÷"];

fn apply(lhs: f64, op: &str, rhs: f64) -> Option<f64> {
    match op {
        "+" => Some(lhs + rhs),
        "-" => Some(lhs - rhs),
        "×" => Some(lhs * rhs),
        "÷" if rhs != 0.0 => Some(lhs / rhs),
        _ => None,
    }
}

fn fmt_num(n: f64) -> String {
    // drops the trailing ".0" of whole numbers
    format!("{}", n)
}

/// Folds `cur` into `res` using the pending operator.
fn fold(calc: &mut CalcStore) {
    let Ok(rhs) = calc.cur.parse::<f64>() else {
        return;
    };
    match calc.res {
        None => calc.res = Some(rhs),
        Some(lhs) if !calc.op.is_empty() => match apply(lhs, &calc.op, rhs) {
            Some(v) => calc.res = Some(v),
            None => calc.error = Some(StoreError::new("Cannot divide by zero")),
        },
        Some(_) => calc.res = Some(rhs),
    }
}

fn press_digit(calc: &mut CalcStore, digit: char) {
    if calc.overwrite {
        calc.cur.clear();
        calc.res = None;
        calc.overwrite = false;
    }
    if digit == '.' && calc.cur.contains('.') {
        return;
    }
    calc.cur.push(digit);
    calc.clear = true;
    calc.error = None;
    calc.text = match calc.res {
        Some(res) if !calc.op.is_empty() => format!("{} {} {}", fmt_num(res), calc.op, calc.cur),
        _ => calc.cur.clone(),
    };
}

fn press_op(calc: &mut CalcStore, op: &str) {
    calc.overwrite = false;
    fold(calc);
    if calc.res.is_none() {
        return;
    }
    calc.op = op.to_string();
    calc.cur.clear();
    calc.clear = true;
    calc.text = format!("{} {}", calc.res.map(fmt_num).unwrap_or_default(), calc.op);
}

fn press_equals(calc: &mut CalcStore) {
    if calc.op.is_empty() {
        return;
    }
    fold(calc);
    if let Some(res) = calc.res {
        calc.cur = fmt_num(res);
        calc.text = calc.cur.clone();
    }
    calc.op.clear();
    calc.overwrite = true;
}

#[component]
pub fn Calculator() -> Element {
    let stores = use_stores();
    let mut calc = stores.calc;

    let state = calc.read().clone();
    let display = if state.text.is_empty() {
        "0".to_string()
    } else {
        state.text.clone()
    };

    rsx! {
        Card {
            h3 { "Calculator" }
            input {
                r#type: "text",
                readonly: true,
                value: "{display}",
            }
            if let Some(err) = &state.error {
                small { "{err}" }
            }
            if state.more_funds {
                p { "Not enough funds for this amount." }
            }
            div {
                class: "grid",
                for op in OPS {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: state.loading,
                        on_click: move |_| press_op(&mut calc.write(), op),
                        "{op}"
                    }
                }
            }
            div {
                class: "grid",
                for digit in DIGITS {
                    Button {
                        button_type: ButtonType::Contrast,
                        outline: true,
                        disabled: state.loading,
                        on_click: move |_| press_digit(&mut calc.write(), digit),
                        "{digit}"
                    }
                }
            }
            div {
                class: "grid",
                Button {
                    button_type: ButtonType::Secondary,
                    disabled: !state.clear,
                    on_click: move |_| {
                        let mut c = calc.write();
                        c.clear_calc();
                        c.text.clear();
                    },
                    "C"
                }
                Button {
                    disabled: state.loading,
                    on_click: move |_| press_equals(&mut calc.write()),
                    "="
                }
            }
        }
    }
}
