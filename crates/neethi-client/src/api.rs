//! The backend as the app layer sees it

use neethi_core::{
    CaseStatusResponse, ChatReply, ConnectReply, EligibilityForm, EligibilityVerdict,
    HealthStatus, LawyerId, LawyerListing, NjdgResponse,
};

use crate::error::ClientError;

/// One async method per backend endpoint
///
/// Every call is a single attempt. Implementations must not retry, cache,
/// or impose their own timeouts.
#[trait_variant::make(LegalServices: Send)]
pub trait LocalLegalServices {
    /// `POST /chat`
    async fn chat(&self, message: &str) -> Result<ChatReply, ClientError>;

    /// `GET /case-status/{cnr}`
    async fn case_status(&self, cnr: &str) -> Result<CaseStatusResponse, ClientError>;

    /// `GET /tele-law/lawyers`
    async fn lawyers(&self) -> Result<LawyerListing, ClientError>;

    /// `POST /tele-law/connect/{id}`
    async fn connect(&self, id: &LawyerId) -> Result<ConnectReply, ClientError>;

    /// `POST /legal-aid/check`
    async fn check_eligibility(
        &self,
        form: &EligibilityForm,
    ) -> Result<EligibilityVerdict, ClientError>;

    /// `GET /njdg/stats`
    async fn njdg_stats(&self) -> Result<NjdgResponse, ClientError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}
