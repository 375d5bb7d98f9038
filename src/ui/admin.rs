use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::domain::entities::account::{AccountId, ReviewDecision};
use crate::domain::entities::review_board::{ReviewBoard, ReviewCard};
use crate::platform::current::PlatformNotifier;
use crate::ui::state::app_state::{AppServices, ReviewState};
use crate::usecase::services::review_service::{ReviewService, SubmitStart};

#[component]
pub fn BulkApprovalPanel() -> Element {
    let services = use_context::<AppServices>();
    let state = ReviewState::new();
    let ReviewState {
        mut board,
        busy,
        mut loading,
        mut status,
    } = state;

    let services_for_load = services.clone();
    use_future(move || {
        let services = services_for_load.clone();
        async move {
            let service = ReviewService::new(services.review_gateway(), PlatformNotifier);
            match service.load_pending().await {
                Ok(accounts) => {
                    *status.write() = format!("待審核帳號 {} 筆", accounts.len());
                    *board.write() = ReviewBoard::new(accounts);
                }
                Err(err) => {
                    error!("載入待審核帳號失敗: {err}");
                    *status.write() = format!("載入待審核帳號失敗：{err}");
                }
            }
            *loading.write() = false;
        }
    });

    let services_for_pass = services.clone();
    let services_for_fail = services.clone();
    let cards = board.read().cards().to_vec();
    let no_cards = board.read().is_empty();
    let checked_count = board.read().checked_count();

    rsx! {
        div {
            class: "container py-3",
            div {
                class: "d-flex flex-wrap gap-2 mb-3",
                button {
                    class: "btn btn-outline-secondary btn-check-all",
                    onclick: move |_| board.write().check_all(),
                    "全部勾選"
                }
                button {
                    class: "btn btn-outline-secondary btn-uncheck-all",
                    onclick: move |_| board.write().uncheck_all(),
                    "全部取消"
                }
                button {
                    class: "btn btn-success btn-agree",
                    disabled: busy().is_active(),
                    onclick: move |_| submit_review(ReviewDecision::Pass, state, services_for_pass.clone()),
                    "{ReviewDecision::Pass.button_label()}"
                }
                button {
                    class: "btn btn-danger btn-disagree",
                    disabled: busy().is_active(),
                    onclick: move |_| submit_review(ReviewDecision::Fail, state, services_for_fail.clone()),
                    "{ReviewDecision::Fail.button_label()}"
                }
            }
            p { class: "text-muted small", "{status}（已勾選 {checked_count} 筆）" }
            if loading() {
                p { "載入中..." }
            } else if no_cards {
                p { "目前沒有待審核的帳號" }
            }
            div {
                class: "row g-3",
                for card in cards {
                    AccountCard {
                        key: "{card.account.id}",
                        card: card.clone(),
                        on_toggle: move |(id, checked): (AccountId, bool)| {
                            board.write().set_checked(&id, checked);
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn AccountCard(card: ReviewCard, on_toggle: EventHandler<(AccountId, bool)>) -> Element {
    let element_id = card.element_id();
    let account = card.account.clone();
    let contact = account.contact.clone().unwrap_or_default();
    let address = account.address.clone().unwrap_or_default();

    rsx! {
        div {
            class: "col-12",
            div {
                class: "card",
                div {
                    class: "card-body d-flex gap-3 align-items-start",
                    input {
                        r#type: "checkbox",
                        class: "form-check-input",
                        id: "{element_id}",
                        checked: card.checked,
                        onchange: move |event: FormEvent| {
                            on_toggle.call((account.id.clone(), event.checked()));
                        },
                    }
                    label {
                        r#for: "{element_id}",
                        h5 { class: "card-title mb-1", "{card.account.username}" }
                        p { class: "mb-0", "電子郵件：{card.account.email}" }
                        p { class: "mb-0", "聯絡方式：{contact}" }
                        p { class: "mb-0", "地址：{address}" }
                    }
                }
            }
        }
    }
}

/// Ignored while a previous submission is still in flight.
fn submit_review(decision: ReviewDecision, state: ReviewState, services: AppServices) {
    let ReviewState {
        mut board,
        mut busy,
        mut status,
        ..
    } = state;

    let selection = board.read().selection();
    let start = busy.write().begin(&selection);
    match start {
        SubmitStart::Ignored => return,
        SubmitStart::EmptySelection => {}
        SubmitStart::Started => {
            *status.write() = format!("正在送出 {} 筆帳號", selection.len());
        }
    }

    spawn(async move {
        let service = ReviewService::new(services.review_gateway(), PlatformNotifier);
        let mut removed = 0;
        let outcome = service
            .submit(decision, &selection, |outcome| {
                removed = board.write().apply(outcome);
            })
            .await;
        *status.write() = outcome.status_line(removed);
        if start == SubmitStart::Started {
            busy.write().finish();
        }
    });
}
