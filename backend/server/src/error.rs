use application::{Field, SubmitResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::mail::MailError;

pub const SUBMIT_FAILED: &str = "Failed to submit application.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload(String),

    #[error("Missing form data.")]
    MissingField(Field),

    #[error("Invalid signature image.")]
    InvalidSignature(#[from] base64::DecodeError),

    #[error("Email template unavailable: {0}")]
    Template(#[source] std::io::Error),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_)
            | AppError::MissingField(_)
            | AppError::InvalidSignature(_)
            | AppError::Mail(MailError::Rejected { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::MalformedPayload(detail) => {
                SubmitResponse::failure(self.to_string()).with_error(json!(detail))
            }
            AppError::MissingField(field) => {
                warn!("Rejected submission without {field}");
                SubmitResponse::failure(self.to_string())
            }
            AppError::InvalidSignature(_) => SubmitResponse::failure(self.to_string()),
            AppError::Mail(MailError::Rejected { status, detail }) => {
                SubmitResponse::failure(SUBMIT_FAILED)
                    .with_error(json!({ "status": status, "detail": detail }))
            }
            _ => SubmitResponse::failure(SUBMIT_FAILED),
        };

        if status.is_server_error() || matches!(self, AppError::Mail(_)) {
            error!("An error occurred: {self}");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingField(Field::FullName).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Mail(MailError::Rejected {
                status: Some(550),
                detail: "mailbox unavailable".into(),
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Mail(MailError::Transport("connection reset".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Template(std::io::Error::from(std::io::ErrorKind::NotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
