use std::{env, fmt::Display, fs::read_to_string, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

pub struct Config {
    pub port: u16,
    pub template_dir: PathBuf,
    pub email_template: PathBuf,
    pub sender: String,
    pub receiver: String,
    pub mail: MailConfig,
}

pub enum MailConfig {
    Smtp {
        host: String,
        port: u16,
        password: String,
    },
    Api {
        url: String,
        key: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Smtp,
    Api,
}

impl FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smtp" => Ok(TransportKind::Smtp),
            "api" => Ok(TransportKind::Api),
            other => Err(format!("unknown mail transport '{other}', expected smtp or api")),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let mail = match try_load::<TransportKind>("MAIL_TRANSPORT", "smtp")? {
            TransportKind::Smtp => MailConfig::Smtp {
                host: try_load("SMTP_HOST", "localhost")?,
                port: try_load("SMTP_PORT", "587")?,
                password: read_secret("APP_PASSWORD")?,
            },
            TransportKind::Api => MailConfig::Api {
                url: try_load("MAIL_API_URL", DEFAULT_API_URL)?,
                key: read_secret("MAIL_API_KEY")?,
            },
        };

        Ok(Self {
            port: try_load("RUST_PORT", "5001")?,
            template_dir: try_load("TEMPLATE_DIR", "templates")?,
            email_template: try_load("EMAIL_TEMPLATE", "templates/email.html")?,
            sender: require("SENDER_EMAIL")?,
            receiver: require("RECEIVER_EMAIL")?,
            mail,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid {key} value: {e}")))
}

fn require(key: &str) -> Result<String, AppError> {
    var(key).ok_or_else(|| AppError::Config(format!("{key} must be set")))
}

/// Docker secret first, then the environment.
fn read_secret(secret_name: &str) -> Result<String, AppError> {
    let path = format!("/run/secrets/{secret_name}");

    match read_to_string(&path) {
        Ok(secret) => Ok(secret.trim().to_string()),
        Err(e) => {
            warn!("Failed to read {secret_name} from file: {e}, falling back to environment");
            require(secret_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_kind_parsing() {
        assert_eq!("smtp".parse::<TransportKind>(), Ok(TransportKind::Smtp));
        assert_eq!(" API ".parse::<TransportKind>(), Ok(TransportKind::Api));
        assert!("sendmail".parse::<TransportKind>().is_err());
    }

    #[test]
    fn test_try_load_falls_back_to_default() {
        let port: u16 = try_load("TENANT_TEST_UNSET_PORT", "5001").unwrap();
        assert_eq!(port, 5001);
    }

    #[test]
    fn test_try_load_rejects_garbage() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("TENANT_TEST_BAD_PORT", "not-a-port") };

        let result = try_load::<u16>("TENANT_TEST_BAD_PORT", "5001");
        assert!(matches!(result, Err(AppError::Config(message)) if message.contains("TENANT_TEST_BAD_PORT")));
    }

    #[test]
    fn test_secret_falls_back_to_environment() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("TENANT_TEST_SECRET", "  hunter2 ") };
        assert_eq!(read_secret("TENANT_TEST_SECRET").unwrap(), "  hunter2 ");

        assert!(read_secret("TENANT_TEST_MISSING_SECRET").is_err());
    }
}
