#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod components;

mod home;
use home::PortfolioPage;

const ICON_FONT: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ICON_FONT }
        style { "{common::style::PORTFOLIO_STYLES}" }
        PortfolioPage {}
    }
}
