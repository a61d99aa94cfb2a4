//! # Mail
//!
//! One outbound email per accepted application.
//!
//! Delivery goes through a [`Transport`], picked once at startup:
//!
//! - [`SmtpTransport`](crate::smtp::SmtpTransport): STARTTLS relay with credentials
//! - [`ApiTransport`](crate::api::ApiTransport): transactional email HTTP API
//!
//! Both get the same [`Email`]: HTML body plus at most one inline image, the
//! applicant's signature, referenced from the template as `cid:` + [`SIGNATURE_CID`].
//!
//! Sends are at-most-once. A failed send is reported to the caller and logged,
//! never retried or queued.
use async_trait::async_trait;
use thiserror::Error;

pub const SIGNATURE_FILENAME: &str = "signature.png";
pub const SIGNATURE_CID: &str = "signature@tenant-application";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub filename: String,
    pub content_id: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub inline_image: Option<InlineImage>,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    /// The provider answered and refused the message.
    #[error("mail provider rejected message ({status:?}): {detail}")]
    Rejected { status: Option<u16>, detail: String },

    #[error("mail transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, email: &Email) -> Result<(), MailError>;
}
