//! Test utilities for code that talks to the backend
//!
//! - [`FakeBackend`] implements [`LegalServices`] in-process with scripted
//!   results and records every call.
//! - [`MockHttpServer`] is a local HTTP/1.1 stub on `127.0.0.1` for driving
//!   the real [`HttpLegalServices`](crate::HttpLegalServices) end to end.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use neethi_core::{
    CaseStatusResponse, ChatReply, ConnectReply, EligibilityForm, EligibilityVerdict,
    HealthStatus, LawyerId, LawyerListing, NjdgResponse,
};

use crate::api::LegalServices;
use crate::error::ClientError;

// ─────────────────────────────────────────────────────────────────────────────
// FakeBackend
// ─────────────────────────────────────────────────────────────────────────────

/// Failure a [`FakeBackend`] endpoint should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFailure {
    Network,
    Status(u16),
    Malformed,
}

impl FakeFailure {
    fn into_error(self) -> ClientError {
        match self {
            FakeFailure::Network => ClientError::network("connection refused"),
            FakeFailure::Status(status) => ClientError::Status {
                status,
                body: String::new(),
            },
            FakeFailure::Malformed => ClientError::MalformedResponse(
                serde_json::from_str::<serde_json::Value>("{")
                    .expect_err("truncated JSON never parses"),
            ),
        }
    }
}

type Scripted<T> = Result<T, FakeFailure>;

/// A call the fake received, with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    Chat(String),
    CaseStatus(String),
    Lawyers,
    Connect(LawyerId),
    CheckEligibility(EligibilityForm),
    NjdgStats,
    Health,
}

/// In-process backend with scripted replies
///
/// Endpoints that were not scripted fail with a network error.
#[derive(Debug)]
pub struct FakeBackend {
    chat: Scripted<ChatReply>,
    case_status: HashMap<String, Scripted<CaseStatusResponse>>,
    case_delays: HashMap<String, Duration>,
    lawyers: Scripted<LawyerListing>,
    connect: Scripted<ConnectReply>,
    eligibility: Scripted<EligibilityVerdict>,
    njdg: Scripted<NjdgResponse>,
    health: Scripted<HealthStatus>,
    calls: Mutex<Vec<FakeCall>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            chat: Err(FakeFailure::Network),
            case_status: HashMap::new(),
            case_delays: HashMap::new(),
            lawyers: Err(FakeFailure::Network),
            connect: Err(FakeFailure::Network),
            eligibility: Err(FakeFailure::Network),
            njdg: Err(FakeFailure::Network),
            health: Err(FakeFailure::Network),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chat(mut self, result: Scripted<ChatReply>) -> Self {
        self.chat = result;
        self
    }

    /// Script the response for one CNR; other CNRs fail with a network error
    pub fn with_case(mut self, cnr: &str, result: Scripted<CaseStatusResponse>) -> Self {
        self.case_status.insert(cnr.to_string(), result);
        self
    }

    /// Delay the case-status reply for `cnr`
    pub fn with_case_delay(mut self, cnr: &str, delay: Duration) -> Self {
        self.case_delays.insert(cnr.to_string(), delay);
        self
    }

    pub fn with_lawyers(mut self, result: Scripted<LawyerListing>) -> Self {
        self.lawyers = result;
        self
    }

    pub fn with_connect(mut self, result: Scripted<ConnectReply>) -> Self {
        self.connect = result;
        self
    }

    pub fn with_eligibility(mut self, result: Scripted<EligibilityVerdict>) -> Self {
        self.eligibility = result;
        self
    }

    pub fn with_njdg(mut self, result: Scripted<NjdgResponse>) -> Self {
        self.njdg = result;
        self
    }

    pub fn with_health(mut self, result: Scripted<HealthStatus>) -> Self {
        self.health = result;
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: FakeCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

fn replay<T: Clone>(scripted: &Scripted<T>) -> Result<T, ClientError> {
    scripted.clone().map_err(FakeFailure::into_error)
}

impl LegalServices for FakeBackend {
    async fn chat(&self, message: &str) -> Result<ChatReply, ClientError> {
        self.record(FakeCall::Chat(message.to_string()));
        replay(&self.chat)
    }

    async fn case_status(&self, cnr: &str) -> Result<CaseStatusResponse, ClientError> {
        self.record(FakeCall::CaseStatus(cnr.to_string()));
        if let Some(delay) = self.case_delays.get(cnr) {
            tokio::time::sleep(*delay).await;
        }
        match self.case_status.get(cnr) {
            Some(scripted) => replay(scripted),
            None => Err(FakeFailure::Network.into_error()),
        }
    }

    async fn lawyers(&self) -> Result<LawyerListing, ClientError> {
        self.record(FakeCall::Lawyers);
        replay(&self.lawyers)
    }

    async fn connect(&self, id: &LawyerId) -> Result<ConnectReply, ClientError> {
        self.record(FakeCall::Connect(id.clone()));
        replay(&self.connect)
    }

    async fn check_eligibility(
        &self,
        form: &EligibilityForm,
    ) -> Result<EligibilityVerdict, ClientError> {
        self.record(FakeCall::CheckEligibility(form.clone()));
        replay(&self.eligibility)
    }

    async fn njdg_stats(&self) -> Result<NjdgResponse, ClientError> {
        self.record(FakeCall::NjdgStats);
        replay(&self.njdg)
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.record(FakeCall::Health);
        replay(&self.health)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MockHttpServer
// ─────────────────────────────────────────────────────────────────────────────

/// A canned reply for one method and path
#[derive(Debug, Clone)]
pub struct ScriptedResponse {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl ScriptedResponse {
    pub fn json(method: &str, path: &str, status: u16, body: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

/// A request the stub received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Local HTTP stub serving [`ScriptedResponse`]s
///
/// Unscripted paths get a 404. Every connection is closed after one
/// response. The accept loop stops when the server is dropped.
pub struct MockHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockHttpServer {
    /// Bind to an ephemeral port and start serving
    ///
    /// # Panics
    /// Panics if the loopback listener cannot be bound.
    pub async fn start(script: Vec<ScriptedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let script = Arc::new(script);

        let recorded = requests.clone();
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let script = script.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let _ = serve_one(stream, &script, &recorded).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// `http://127.0.0.1:<port>`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_one(
    stream: TcpStream,
    script: &[ScriptedResponse],
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await?;

    if let Ok(mut requests) = recorded.lock() {
        requests.push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let (status, payload) = script
        .iter()
        .find(|r| r.method.eq_ignore_ascii_case(&method) && r.path == path)
        .map(|r| (r.status, r.body.as_str()))
        .unwrap_or((404, r#"{"detail":"Not Found"}"#));

    let response = format!(
        "HTTP/1.1 {} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
