//! The route table.

use dioxus::prelude::*;

use crate::screens::index::Index;

/// Every page of the app. Only the index page exists.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Index {},
}
