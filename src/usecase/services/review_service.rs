use dioxus::logger::tracing::{info, warn};

use crate::domain::entities::account::{AccountSelection, PendingAccount, ReviewDecision};
use crate::domain::entities::review_board::ReviewBoard;
use crate::error::ClientError;
use crate::usecase::ports::notifier::Notifier;
use crate::usecase::ports::review::ReviewGateway;

pub const SELECTION_REQUIRED: &str = "請先勾選帳號";
const FAILURE_PREFIX: &str = "操作失敗: ";
const MISSING_MESSAGE: &str = "未提供錯誤訊息";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    EmptySelection,
    Completed {
        decision: ReviewDecision,
        selection: AccountSelection,
    },
    Refused {
        message: String,
    },
    Failed {
        error: ClientError,
    },
}

impl ReviewOutcome {
    pub fn notice(&self) -> String {
        match self {
            ReviewOutcome::EmptySelection => SELECTION_REQUIRED.to_string(),
            ReviewOutcome::Completed { decision, .. } => decision.success_message().to_string(),
            ReviewOutcome::Refused { message } => format!("{FAILURE_PREFIX}{message}"),
            ReviewOutcome::Failed { error } => format!("{FAILURE_PREFIX}{error}"),
        }
    }

    pub fn status_line(&self, removed: usize) -> String {
        match self {
            ReviewOutcome::EmptySelection => "尚未勾選任何帳號".to_string(),
            ReviewOutcome::Completed { decision, .. } => {
                format!("{}，共 {removed} 筆", decision.success_message())
            }
            ReviewOutcome::Refused { .. } | ReviewOutcome::Failed { .. } => self.notice(),
        }
    }
}

/// Whether a review request is still outstanding for a panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight(bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStart {
    /// A previous request has not answered yet; the click is dropped.
    Ignored,
    EmptySelection,
    Started,
}

impl InFlight {
    pub fn is_active(self) -> bool {
        self.0
    }

    /// An empty selection never marks the panel busy.
    pub fn begin(&mut self, selection: &AccountSelection) -> SubmitStart {
        if self.0 {
            return SubmitStart::Ignored;
        }
        if selection.is_empty() {
            return SubmitStart::EmptySelection;
        }
        self.0 = true;
        SubmitStart::Started
    }

    pub fn finish(&mut self) {
        self.0 = false;
    }
}

impl ReviewBoard {
    /// Removes the submitted cards when the backend accepted the decision.
    pub fn apply(&mut self, outcome: &ReviewOutcome) -> usize {
        match outcome {
            ReviewOutcome::Completed { selection, .. } => self.remove_cards(selection),
            _ => 0,
        }
    }
}

pub struct ReviewService<G, N> {
    gateway: G,
    notifier: N,
}

impl<G, N> ReviewService<G, N>
where
    G: ReviewGateway,
    N: Notifier,
{
    pub fn new(gateway: G, notifier: N) -> Self {
        Self { gateway, notifier }
    }

    pub async fn load_pending(&self) -> Result<Vec<PendingAccount>, ClientError> {
        self.gateway.pending_accounts().await
    }

    /// Sends `selection` to the endpoint for `decision`.
    ///
    /// `apply` sees the outcome before the user is notified, so the removed
    /// cards are already gone when the confirmation shows up. An empty
    /// selection never reaches the gateway.
    pub async fn submit<F>(
        &self,
        decision: ReviewDecision,
        selection: &AccountSelection,
        apply: F,
    ) -> ReviewOutcome
    where
        F: FnOnce(&ReviewOutcome),
    {
        let outcome = if selection.is_empty() {
            ReviewOutcome::EmptySelection
        } else {
            match self.gateway.submit(decision, selection.ids()).await {
                Ok(result) if result.success => {
                    info!(?decision, count = selection.len(), "review submitted");
                    ReviewOutcome::Completed {
                        decision,
                        selection: selection.clone(),
                    }
                }
                Ok(result) => {
                    let message = result
                        .message
                        .unwrap_or_else(|| MISSING_MESSAGE.to_string());
                    warn!(?decision, %message, "review refused by server");
                    ReviewOutcome::Refused { message }
                }
                Err(error) => {
                    warn!(?decision, %error, "review request failed");
                    ReviewOutcome::Failed { error }
                }
            }
        };

        apply(&outcome);
        self.notifier.notify(&outcome.notice());
        outcome
    }
}
