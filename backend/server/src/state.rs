use std::sync::Arc;

use super::{
    api::ApiTransport,
    config::{Config, MailConfig},
    error::AppError,
    mail::Transport,
    smtp::SmtpTransport,
};

pub struct AppState {
    pub config: Config,
    pub transport: Arc<dyn Transport>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let transport: Arc<dyn Transport> = match &config.mail {
            MailConfig::Smtp {
                host,
                port,
                password,
            } => Arc::new(SmtpTransport::new(host, *port, &config.sender, password)?),
            MailConfig::Api { url, key } => Arc::new(ApiTransport::new(url, key)),
        };

        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Arc<Self> {
        Arc::new(Self { config, transport })
    }
}
