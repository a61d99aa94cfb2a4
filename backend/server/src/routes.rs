use std::sync::Arc;

use application::{ApplicationForm, Field, SubmitResponse, response::SUBMITTED};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use crate::{
    config::Config,
    error::AppError,
    mail::Email,
    signature::decode_signature,
    state::AppState,
    template::{render, unmatched_tokens},
};

pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ApplicationForm>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(form) = payload.map_err(|rejection| AppError::MalformedPayload(rejection.body_text()))?;

    let applicant = form
        .get(Field::FullName)
        .ok_or(AppError::MissingField(Field::FullName))?;

    let template = tokio::fs::read_to_string(&state.config.email_template)
        .await
        .map_err(AppError::Template)?;

    let email = compose_email(&state.config, &template, &form)?;

    info!(
        applicant,
        signature = email.inline_image.is_some(),
        transport = state.transport.name(),
        "Dispatching application"
    );

    state.transport.send(&email).await?;

    info!("Application from {applicant} delivered to {}", email.to);

    Ok(Json(SubmitResponse::success(SUBMITTED)))
}

pub fn compose_email(
    config: &Config,
    template: &str,
    form: &ApplicationForm,
) -> Result<Email, AppError> {
    let full_name = form
        .get(Field::FullName)
        .ok_or(AppError::MissingField(Field::FullName))?;

    let unmatched = unmatched_tokens(template);
    if !unmatched.is_empty() {
        warn!("Template tokens left unreplaced: {}", unmatched.join(", "));
    }

    let html = render(template, form);

    let inline_image = match form.get(Field::Signature) {
        Some(signature) => decode_signature(signature)?,
        None => None,
    };

    Ok(Email {
        from: config.sender.clone(),
        to: config.receiver.clone(),
        subject: format!("New Tenant Application from {full_name}"),
        html,
        inline_image,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use base64::{Engine, engine::general_purpose::STANDARD};

    use super::*;
    use crate::config::MailConfig;

    fn config() -> Config {
        Config {
            port: 0,
            template_dir: PathBuf::from("templates"),
            email_template: PathBuf::from("templates/email.html"),
            sender: "applications@example.com".into(),
            receiver: "manager@example.com".into(),
            mail: MailConfig::Smtp {
                host: "localhost".into(),
                port: 587,
                password: "unused".into(),
            },
        }
    }

    #[test]
    fn test_compose_without_signature() {
        let form = ApplicationForm::new().with_field(Field::FullName, "Jane Doe");
        let email = compose_email(&config(), "<p>{{fullName}}</p>", &form).unwrap();

        assert_eq!(email.from, "applications@example.com");
        assert_eq!(email.subject, "New Tenant Application from Jane Doe");
        assert_eq!(email.html, "<p>Jane Doe</p>");
        assert!(email.inline_image.is_none());
    }

    #[test]
    fn test_compose_attaches_decoded_signature() {
        let payload = STANDARD.encode(b"signature-bytes");
        let form = ApplicationForm::new()
            .with_field(Field::FullName, "Jane Doe")
            .with_field(Field::Signature, format!("data:image/png;base64,{payload}"));

        let email = compose_email(&config(), "", &form).unwrap();
        let image = email.inline_image.unwrap();

        assert_eq!(image.data, b"signature-bytes");
        assert_eq!(image.content_type, "image/png");
    }

    #[test]
    fn test_compose_rejects_bad_signature() {
        let form = ApplicationForm::new()
            .with_field(Field::FullName, "Jane Doe")
            .with_field(Field::Signature, "data:image/png;base64,%%%");

        assert!(matches!(
            compose_email(&config(), "", &form),
            Err(AppError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_compose_requires_full_name() {
        let form = ApplicationForm::new().with_field(Field::Married, "yes");

        assert!(matches!(
            compose_email(&config(), "", &form),
            Err(AppError::MissingField(Field::FullName))
        ));
    }
}
