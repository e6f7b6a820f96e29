//! Runtime configuration, loaded from the environment.
//!
//! Every sink is optional: the service computes and returns results even
//! when no CRM or email provider is configured, it just logs and skips the
//! corresponding delivery.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// HTTP server bind settings.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// HubSpot CRM credentials. The access token drives the API path; portal and
/// form IDs enable the public form-submission fallback.
#[derive(Debug, Clone)]
pub struct HubspotSettings {
    pub access_token: Option<SecretString>,
    pub portal_id: Option<String>,
    pub form_guid: Option<String>,
}

impl HubspotSettings {
    pub fn api_configured(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn form_configured(&self) -> bool {
        self.portal_id.is_some() && self.form_guid.is_some()
    }
}

/// Transactional email provider settings.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub api_key: Option<SecretString>,
    pub endpoint: String,
    pub from_address: String,
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub hubspot: HubspotSettings,
    pub email: EmailSettings,
}

impl Settings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        Ok(Self {
            server: ServerSettings { host, port },
            hubspot: HubspotSettings {
                access_token: get("HUBSPOT_ACCESS_TOKEN").map(SecretString::from),
                portal_id: get("HUBSPOT_PORTAL_ID"),
                form_guid: get("HUBSPOT_FORM_GUID"),
            },
            email: EmailSettings {
                api_key: get("EMAIL_API_KEY").map(SecretString::from),
                endpoint: get("EMAIL_API_ENDPOINT")
                    .unwrap_or_else(|| "https://api.resend.com/emails".to_string()),
                from_address: get("EMAIL_FROM")
                    .unwrap_or_else(|| "results@hawaiibusinessgrowth.com".to_string()),
            },
        })
    }
}
