use crate::domain::entities::account::{AccountId, ApprovalResult, PendingAccount, ReviewDecision};
use crate::error::ClientError;

#[allow(async_fn_in_trait)]
pub trait ReviewGateway {
    async fn pending_accounts(&self) -> Result<Vec<PendingAccount>, ClientError>;

    async fn submit(
        &self,
        decision: ReviewDecision,
        ids: &[AccountId],
    ) -> Result<ApprovalResult, ClientError>;
}
