use application::{ApplicationForm, SubmitResponse};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

pub const LOADING_MESSAGE: &str = "Submitting... Please wait.";
pub const NETWORK_FAILURE: &str = "Failed to submit application. Please try again.";
pub const ERROR_VIEW: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Response(String),
}

/// Why Agree did nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("the application was already submitted")]
    AlreadySubmitted,

    #[error("applications can only be submitted from the review step")]
    NotOnReviewStep,
}

#[async_trait]
pub trait SubmitClient: Send + Sync {
    async fn submit(&self, form: &ApplicationForm) -> Result<SubmitResponse, SubmitError>;
}

/// Posts the snapshot to `{base}/submit`. Any status code with a JSON body is a
/// response; the body's `success` flag decides the outcome.
pub struct HttpSubmitClient {
    client: Client,
    endpoint: String,
}

impl HttpSubmitClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/submit", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitClient for HttpSubmitClient {
    async fn submit(&self, form: &ApplicationForm) -> Result<SubmitResponse, SubmitError> {
        let response = self.client.post(&self.endpoint).json(form).send().await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| SubmitError::Response(e.to_string()))
    }
}
