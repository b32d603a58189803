// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
pub mod router;
mod screens;
pub mod stores;

use hooks::use_stores::use_stores_provider;
use router::Route;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // stores must exist above the router so every page sees the same ones
    use_stores_provider();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        // path history (the dioxus web default); only "/" is routed so a
        // hash-based history would resolve the same page
        Router::<Route> {}
    }
}
