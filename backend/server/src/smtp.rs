use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;

use crate::mail::{Email, MailError, Transport};

pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Result<Self, MailError> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        info!("SMTP relay configured for {host}:{port}");

        Ok(Self { mailer })
    }
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|e| MailError::InvalidAddress(format!("{address}: {e}")))
}

/// HTML body alone, or `multipart/related` when the signature rides along.
pub fn build_message(email: &Email) -> Result<Message, MailError> {
    let builder = Message::builder()
        .from(mailbox(&email.from)?)
        .to(mailbox(&email.to)?)
        .subject(email.subject.clone());

    let html = SinglePart::html(email.html.clone());

    let message = match &email.inline_image {
        Some(image) => {
            let content_type = ContentType::parse(&image.content_type)
                .map_err(|e| MailError::Build(e.to_string()))?;
            let inline = Attachment::new_inline(image.content_id.clone())
                .body(image.data.clone(), content_type);

            builder.multipart(MultiPart::related().singlepart(html).singlepart(inline))
        }
        None => builder.singlepart(html),
    };

    message.map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Transport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = build_message(email)?;

        self.mailer.send(message).await.map_err(|e| {
            if e.is_permanent() {
                MailError::Rejected {
                    status: e.status().and_then(|code| code.to_string().parse().ok()),
                    detail: e.to_string(),
                }
            } else {
                MailError::Transport(e.to_string())
            }
        })?;

        Ok(())
    }
}
