//=============================================================================
// File: src/components/history_table.rs
//=============================================================================
use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_stores::use_stores;
use crate::stores::HistoryItem;
use crate::stores::HistoryStore;
use dioxus::prelude::*;
use std::time::Duration;

/// How long typing must pause before the search is applied.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

const COLUMNS: [(&str, &str); 3] = [("date", "Date"), ("description", "Description"), ("amount", "Amount")];

/// Renders one field of a backend row as display text.
fn cell(item: &HistoryItem, key: &str) -> String {
    match item.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Moves `delta` pages, staying within `1..=length`. Returns `false` when
/// the page did not change.
fn turn_page(history: &mut HistoryStore, delta: i64) -> bool {
    let last = i64::from(history.length.max(1));
    let target = (i64::from(history.page) + delta).clamp(1, last);
    if target == i64::from(history.page) {
        return false;
    }
    // clamped to 1..=u32 length above
    history.page = target as u32;
    history.loading = true;
    true
}

#[component]
pub fn HistoryTable() -> Element {
    let stores = use_stores();
    let mut history = stores.history;

    let state = history.read().clone();
    let rows: Vec<Vec<String>> = state
        .items
        .iter()
        .map(|item| COLUMNS.iter().map(|(key, _)| cell(item, key)).collect())
        .collect();

    rsx! {
        Card {
            h3 { "History" }
            Input {
                label: "Search",
                name: "search",
                input_type: "search",
                value: state.search.clone().unwrap_or_default(),
                on_input: move |v: String| {
                    history.write().search = if v.is_empty() { None } else { Some(v) };
                    let task = spawn(async move {
                        compat::sleep(SEARCH_DEBOUNCE).await;
                        let mut h = history.write();
                        h.timeout = None;
                        h.page = 1;
                        h.loading = true;
                        dioxus_logger::tracing::debug!("history search: {:?}", h.search);
                    });
                    history.write().replace_timeout(task);
                },
            }
            if let Some(err) = &state.error {
                p { "Failed to load history: {err}" }
            } else if state.loading && state.items.is_empty() {
                p { "Loading..." }
                progress {}
            } else if state.items.is_empty() {
                p { "No transactions." }
            } else {
                table {
                    thead { tr {
                        for (_, title) in COLUMNS {
                            th { "{title}" }
                        }
                    }}
                    tbody {
                        for row in rows {
                            tr {
                                for text in row {
                                    td { "{text}" }
                                }
                            }
                        }
                    }
                }
            }
            nav {
                ul {
                    li {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            disabled: state.page <= 1,
                            on_click: move |_| {
                                turn_page(&mut history.write(), -1);
                            },
                            "Previous"
                        }
                    }
                    li { "Page {state.page} of {state.length}" }
                    li {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            disabled: state.page >= state.length,
                            on_click: move |_| {
                                turn_page(&mut history.write(), 1);
                            },
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_renders_strings_numbers_and_gaps() {
        let row = json!({"date": "2024-03-01", "amount": 12.5, "description": null});
        assert_eq!(cell(&row, "date"), "2024-03-01");
        assert_eq!(cell(&row, "amount"), "12.5");
        assert_eq!(cell(&row, "description"), "");
        assert_eq!(cell(&row, "missing"), "");
    }

    #[test]
    fn turn_page_stays_in_range() {
        let mut history = HistoryStore {
            length: 3,
            loading: false,
            ..Default::default()
        };
        assert!(!turn_page(&mut history, -1));
        assert_eq!(history.page, 1);
        assert!(!history.loading);

        assert!(turn_page(&mut history, 5));
        assert_eq!(history.page, 3);
        assert!(history.loading);

        assert!(!turn_page(&mut history, 1));
        assert!(turn_page(&mut history, -1));
        assert_eq!(history.page, 2);
    }
}
