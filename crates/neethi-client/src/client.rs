//! `reqwest` implementation of [`LegalServices`]

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use neethi_core::{
    CaseStatusResponse, ChatReply, ChatRequest, ConnectReply, EligibilityForm,
    EligibilityVerdict, HealthStatus, LawyerId, LawyerListing, NjdgResponse,
};

use crate::api::LegalServices;
use crate::endpoints;
use crate::error::ClientError;

/// Backend origin used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client bound to one backend origin
#[derive(Debug, Clone)]
pub struct HttpLegalServices {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLegalServices {
    /// Create a client for `base_url`, e.g. `http://localhost:8000`
    ///
    /// A trailing slash is dropped so paths can always start with `/`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        url::Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request and decode the JSON body as `T`
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%method, %url, "backend request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%method, %url, error = %e, "backend unreachable");
                return Err(e.into());
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(%method, %url, status = status.as_u16(), "backend returned error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%method, %url, error = %e, "backend body did not match expected shape");
            ClientError::from(e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request_json::<T, ()>(Method::GET, path, None).await
    }
}

impl LegalServices for HttpLegalServices {
    async fn chat(&self, message: &str) -> Result<ChatReply, ClientError> {
        let body = ChatRequest::new(message);
        self.request_json(Method::POST, endpoints::CHAT, Some(&body))
            .await
    }

    async fn case_status(&self, cnr: &str) -> Result<CaseStatusResponse, ClientError> {
        self.get(&endpoints::case_status(cnr)).await
    }

    async fn lawyers(&self) -> Result<LawyerListing, ClientError> {
        self.get(endpoints::LAWYERS).await
    }

    async fn connect(&self, id: &LawyerId) -> Result<ConnectReply, ClientError> {
        self.request_json::<_, ()>(Method::POST, &endpoints::connect(id), None)
            .await
    }

    async fn check_eligibility(
        &self,
        form: &EligibilityForm,
    ) -> Result<EligibilityVerdict, ClientError> {
        self.request_json(Method::POST, endpoints::LEGAL_AID_CHECK, Some(form))
            .await
    }

    async fn njdg_stats(&self) -> Result<NjdgResponse, ClientError> {
        self.get(endpoints::NJDG_STATS).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get(endpoints::HEALTH).await
    }
}
