use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub account_sid: String,
    pub auth_token: String,
    pub sms_from: String,
    pub sms_api_base: String,
}

impl AppConfig {
    /// Loads configuration from the environment. The provider credentials,
    /// outbound sender number and database URL are required; a missing value
    /// is a fatal startup error.
    pub fn from_env() -> Result<Self, String> {
        let port = env::var("CONNECTOR_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let host = env::var("CONNECTOR_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let database_url = require_env("CONNECTOR_DATABASE_URL")?;
        let account_sid = require_env("CONNECTOR_ACCOUNT_SID")?;
        let auth_token = require_env("CONNECTOR_AUTH_TOKEN")?;
        let sms_from = require_env("CONNECTOR_SMS_FROM")?;

        let sms_api_base = env::var("CONNECTOR_SMS_API_BASE")
            .unwrap_or_else(|_| "https://api.twilio.com".to_string());

        info!("Configuration loaded:");
        info!("  Host: {host}");
        info!("  Port: {port}");
        info!("  Database URL: {database_url}");
        info!("  SMS sender: {sms_from}");
        info!("  SMS API base: {sms_api_base}");

        Ok(Self {
            port,
            host,
            database_url,
            account_sid,
            auth_token,
            sms_from,
            sms_api_base,
        })
    }
}

fn require_env(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("Missing required environment variable: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing() {
        let err = require_env("CONNECTOR_NONEXISTENT_VAR").unwrap_err();
        assert!(err.contains("CONNECTOR_NONEXISTENT_VAR"));
    }

    #[test]
    fn test_port_parsing() {
        assert_eq!("8080".parse::<u16>().unwrap_or(8000), 8080);
        assert_eq!("invalid".parse::<u16>().unwrap_or(8000), 8000);
    }
}
