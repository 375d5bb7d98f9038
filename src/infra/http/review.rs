use crate::config::EndpointPaths;
use crate::domain::entities::account::{
    AccountId, ApprovalResult, PendingAccount, ReviewDecision, ReviewPayload,
};
use crate::error::ClientError;
use crate::infra::http::client::ApiClient;
use crate::usecase::ports::review::ReviewGateway;

#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    pub client: ApiClient,
    pub paths: EndpointPaths,
}

impl HttpReviewGateway {
    fn decision_path(&self, decision: ReviewDecision) -> &str {
        match decision {
            ReviewDecision::Pass => &self.paths.passed,
            ReviewDecision::Fail => &self.paths.failed,
        }
    }
}

impl ReviewGateway for HttpReviewGateway {
    async fn pending_accounts(&self) -> Result<Vec<PendingAccount>, ClientError> {
        self.client.get_json(&self.paths.pending).await
    }

    async fn submit(
        &self,
        decision: ReviewDecision,
        ids: &[AccountId],
    ) -> Result<ApprovalResult, ClientError> {
        let payload = ReviewPayload { ids };
        self.client
            .post_json(self.decision_path(decision), &payload)
            .await
    }
}
