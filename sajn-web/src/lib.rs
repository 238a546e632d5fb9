//! sajn-web - Embed demo web app
//!
//! Two pages share one configuration model:
//! - `/` configures the widget, previews it and logs its callbacks
//! - `/embed` renders only the widget, full viewport, for share links

pub mod components;
pub mod frame;
pub mod pages;
pub mod query;

use dioxus::prelude::*;
use pages::{DemoPage, EmbedPage};
use query::ConfigQuery;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:..query")]
    DemoPage { query: ConfigQuery },
    #[route("/embed?:..query")]
    EmbedPage { query: ConfigQuery },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
