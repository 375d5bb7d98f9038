use dioxus::prelude::*;

use crate::ui::admin::BulkApprovalPanel;
use crate::ui::location::{LostItemForm, LostItemFormMode};
use crate::ui::slider::FormSlider;
use crate::Route;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav {
            class: "navbar navbar-expand bg-light px-3 gap-3",
            Link { to: Route::Index {}, class: "navbar-brand", "失物招領" }
            Link { to: Route::Search {}, "找尋失物" }
            Link { to: Route::Add {}, "刊登失物" }
            Link { to: Route::Admin {}, "帳號審核" }
        }
        Outlet::<Route> {}
    }
}

#[component]
pub fn Index() -> Element {
    rsx! { FormSlider {} }
}

#[component]
pub fn Admin() -> Element {
    rsx! { BulkApprovalPanel {} }
}

#[component]
pub fn Add() -> Element {
    rsx! { LostItemForm { mode: LostItemFormMode::Add } }
}

#[component]
pub fn Search() -> Element {
    rsx! { LostItemForm { mode: LostItemFormMode::Search } }
}
