use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::mail::{Email, MailError, Transport};

/// Transactional email over HTTP: one JSON POST per message, bearer key auth.
pub struct ApiTransport {
    client: Client,
    url: String,
    key: String,
}

#[derive(Serialize)]
struct ApiEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<ApiAttachment<'a>>,
}

#[derive(Serialize)]
struct ApiAttachment<'a> {
    filename: &'a str,
    content: String,
    content_type: &'a str,
    content_id: &'a str,
}

impl<'a> From<&'a Email> for ApiEmail<'a> {
    fn from(email: &'a Email) -> Self {
        let attachments = email
            .inline_image
            .iter()
            .map(|image| ApiAttachment {
                filename: &image.filename,
                content: STANDARD.encode(&image.data),
                content_type: &image.content_type,
                content_id: &image.content_id,
            })
            .collect();

        Self {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            attachments,
        }
    }
}

impl ApiTransport {
    pub fn new(url: &str, key: &str) -> Self {
        info!("Mail API configured at {url}");

        Self {
            client: Client::new(),
            url: url.to_string(),
            key: key.to_string(),
        }
    }
}

#[async_trait]
impl Transport for ApiTransport {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.key)
            .json(&ApiEmail::from(email))
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();

        Err(MailError::Rejected {
            status: Some(status.as_u16()),
            detail,
        })
    }
}
