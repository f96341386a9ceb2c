use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct HfClientConfig {
    pub api_token: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for HfClientConfig {
    fn default() -> Self {
        Self {
            api_token: std::env::var("HF_API_TOKEN").ok(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: std::env::var("YTB_SUMMARIZER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HfClientConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(base) = std::env::var("HF_BASE_URL") {
            cfg.base_url = base;
        }
        if let Ok(timeout) = std::env::var("HF_TIMEOUT_SECS") {
            if let Ok(parsed) = timeout.parse::<u64>() {
                cfg.timeout = Duration::from_secs(parsed);
            }
        }
        cfg
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// One summarization call: the text plus its length bounds in model tokens.
/// Decoding is always deterministic (`do_sample: false`) so identical inputs
/// and bounds reproduce identical summaries.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRequest {
    pub text: String,
    pub min_length: usize,
    pub max_length: usize,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, request: SummaryRequest) -> Result<String, HfError>;
}

#[derive(Clone)]
pub struct HfClient {
    http: HttpClient,
    cfg: HfClientConfig,
}

impl HfClient {
    pub fn new(cfg: HfClientConfig) -> Result<Self, HfError> {
        if cfg.api_token.is_none() {
            return Err(HfError::MissingApiToken);
        }
        let http = HttpClient::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(HfError::http)?;
        Ok(Self { http, cfg })
    }

    pub fn model(&self) -> &str {
        &self.cfg.model
    }

    fn resolve_api_token(&self) -> Result<String, HfError> {
        if let Some(token) = &self.cfg.api_token {
            return Ok(token.clone());
        }
        std::env::var("HF_API_TOKEN").map_err(|_| HfError::MissingApiToken)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.model
        )
    }

    fn build_api_request(&self, req: &SummaryRequest) -> ApiSummaryRequest {
        ApiSummaryRequest {
            inputs: req.text.clone(),
            parameters: ApiSummaryParameters {
                min_length: req.min_length,
                max_length: req.max_length,
                do_sample: false,
            },
            options: ApiOptions {
                wait_for_model: true,
            },
        }
    }
}

#[async_trait]
impl Summarizer for HfClient {
    async fn summarize(&self, request: SummaryRequest) -> Result<String, HfError> {
        if request.text.trim().is_empty() {
            return Err(HfError::EmptyInput);
        }

        let api_token = self.resolve_api_token()?;
        let api_request = self.build_api_request(&request);
        let endpoint = self.endpoint();

        let response = self
            .http
            .post(endpoint)
            .bearer_auth(api_token)
            .json(&api_request)
            .send()
            .await
            .map_err(HfError::http)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(HfError::http)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorEnvelope>(&bytes)
                .map(|env| env.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(HfError::Api { status, message });
        }

        let parsed: Vec<ApiSummaryItem> =
            serde_json::from_slice(&bytes).map_err(HfError::Decode)?;

        parsed
            .into_iter()
            .next()
            .map(|item| item.summary_text)
            .ok_or(HfError::EmptyResponse)
    }
}

#[derive(Debug)]
pub enum HfError {
    MissingApiToken,
    EmptyInput,
    EmptyResponse,
    Http(reqwest::Error),
    Timeout,
    Api { status: StatusCode, message: String },
    MockQueueEmpty,
    Decode(serde_json::Error),
}

impl HfError {
    fn http(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HfError::Timeout
        } else {
            HfError::Http(err)
        }
    }

    /// Fatal errors abort the whole run; everything else is recovered as a
    /// per-chunk placeholder.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HfError::MissingApiToken)
    }
}

impl std::fmt::Display for HfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HfError::MissingApiToken => write!(f, "HF_API_TOKEN is not set"),
            HfError::EmptyInput => write!(f, "summarization requires non-empty input"),
            HfError::EmptyResponse => write!(f, "model returned no summary"),
            HfError::Http(err) => write!(f, "http error: {err}"),
            HfError::Timeout => write!(f, "request timed out"),
            HfError::Api { status, message } => write!(f, "api error {status}: {message}"),
            HfError::MockQueueEmpty => write!(f, "mock summarizer response queue is empty"),
            HfError::Decode(err) => write!(f, "decode error: {err}"),
        }
    }
}

impl std::error::Error for HfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HfError::Http(err) => Some(err),
            HfError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ApiSummaryRequest {
    inputs: String,
    parameters: ApiSummaryParameters,
    options: ApiOptions,
}

#[derive(Debug, Clone, Serialize)]
struct ApiSummaryParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ApiOptions {
    wait_for_model: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiSummaryItem {
    summary_text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorEnvelope {
    error: String,
}

#[derive(Debug, Default)]
pub struct MockSummarizer {
    responses: Mutex<VecDeque<Result<String, HfError>>>,
    calls: Mutex<Vec<SummaryRequest>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, resp: Result<String, HfError>) {
        self.responses.lock().unwrap().push_back(resp);
    }

    pub fn calls(&self) -> Vec<SummaryRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, request: SummaryRequest) -> Result<String, HfError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(HfError::MockQueueEmpty))
    }
}
