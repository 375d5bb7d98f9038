use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::domain::entities::slider::{slide_offset, SlideOffset, SlideTarget};
use crate::error::UiError;
use crate::ui::elements::{use_mounted_element, MountedElement};
use crate::ui::state::app_state::AppServices;

/// Slides the login/register container to `target` (`"register"` or anything
/// else for login), measuring the panel width on every call.
pub fn switch_form(
    target: &str,
    container: MountedElement,
    panel: MountedElement,
    offset: Signal<SlideOffset>,
) {
    let target = SlideTarget::parse(target);
    spawn(async move {
        if let Err(err) = apply_slide(target, container, panel, offset).await {
            warn!("無法切換表單：{err}");
        }
    });
}

pub async fn apply_slide(
    target: SlideTarget,
    container: MountedElement,
    panel: MountedElement,
    mut offset: Signal<SlideOffset>,
) -> Result<SlideOffset, UiError> {
    container.get()?;
    let width = panel.width().await?;
    let next = slide_offset(target, width);
    offset.set(next);
    Ok(next)
}

#[component]
pub fn FormSlider() -> Element {
    let offset = use_signal(SlideOffset::default);
    let mut container = use_mounted_element("#sliderWrapper");
    let mut panel = use_mounted_element(".form-slide");
    let transform = offset().transform();

    rsx! {
        div {
            class: "container py-4",
            style: "max-width: 480px;",
            div {
                class: "d-flex gap-2 mb-3",
                button {
                    class: "btn btn-outline-primary flex-fill",
                    onclick: move |_| switch_form("login", container, panel, offset),
                    "登入"
                }
                button {
                    class: "btn btn-outline-primary flex-fill",
                    onclick: move |_| switch_form("register", container, panel, offset),
                    "註冊"
                }
            }
            div {
                style: "overflow: hidden;",
                div {
                    id: "sliderWrapper",
                    style: "display: flex; transition: transform 0.4s ease; transform: {transform};",
                    onmounted: move |event| container.on_mounted(event),
                    div {
                        class: "form-slide",
                        style: "flex: 0 0 100%;",
                        onmounted: move |event| panel.on_mounted(event),
                        LoginForm {}
                    }
                    div {
                        class: "form-slide",
                        style: "flex: 0 0 100%;",
                        RegisterForm {}
                    }
                }
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let services = use_context::<AppServices>();
    let action = services.form_action(&services.paths().login);

    rsx! {
        form {
            action: "{action}",
            method: "post",
            class: "d-flex flex-column gap-2",
            h4 { "會員登入" }
            input { r#type: "email", name: "email", class: "form-control", placeholder: "電子郵件", required: true }
            input { r#type: "password", name: "password", class: "form-control", placeholder: "密碼", required: true }
            button { r#type: "submit", class: "btn btn-primary", "登入" }
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let services = use_context::<AppServices>();
    let action = services.form_action(&services.paths().register);

    rsx! {
        form {
            action: "{action}",
            method: "post",
            class: "d-flex flex-column gap-2",
            h4 { "註冊帳號" }
            input { name: "username", class: "form-control", placeholder: "名稱", required: true }
            input { r#type: "email", name: "email", class: "form-control", placeholder: "電子郵件", required: true }
            input { r#type: "password", name: "password", class: "form-control", placeholder: "密碼", required: true }
            input { name: "contact", class: "form-control", placeholder: "聯絡方式" }
            input { name: "address", class: "form-control", placeholder: "地址" }
            p { class: "text-muted small mb-0", "註冊後需經管理員審核才能登入" }
            button { r#type: "submit", class: "btn btn-success", "送出註冊" }
        }
    }
}
