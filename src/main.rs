use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod config;
mod error;

mod domain {
    pub mod entities {
        pub mod account;
        pub mod catalog;
        pub mod review_board;
        pub mod slider;
    }
}

mod usecase {
    pub mod ports {
        pub mod catalog;
        pub mod notifier;
        pub mod review;
    }
    pub mod services {
        pub mod catalog_service;
        pub mod review_service;
    }
}

mod infra {
    pub mod http {
        pub mod catalog;
        pub mod client;
        pub mod review;
    }
}

mod platform {
    pub mod current;
    #[cfg(feature = "desktop")]
    pub mod desktop {
        pub mod dialog;
    }
    #[cfg(not(any(feature = "web", feature = "desktop")))]
    pub mod headless;
    #[cfg(feature = "web")]
    pub mod web {
        pub mod browser;
    }
}

mod ui {
    pub mod admin;
    pub mod elements;
    pub mod location;
    pub mod pages;
    pub mod slider;
    pub mod state {
        pub mod app_state;
    }
}


use crate::config::AppConfig;
use crate::ui::pages::{Add, Admin, Index, NavBar, Search};
use crate::ui::state::app_state::AppServices;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Index {},
        #[route("/admin")]
        Admin {},
        #[route("/add")]
        Add {},
        #[route("/search")]
        Search {},
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger should only be initialised once");

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("失物招領")),
        )
        .launch(App);

    #[cfg(not(all(feature = "desktop", not(feature = "web"))))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::load().map_err(|err| format!("{err:#}")));

    match config {
        Ok(config) => rsx! { Shell { config } },
        Err(err) => rsx! {
            div {
                p { "無法載入設定：{err}" }
            }
        },
    }
}

#[component]
fn Shell(config: AppConfig) -> Element {
    use_context_provider(|| AppServices::new(config.clone()));

    rsx! { Router::<Route> {} }
}
