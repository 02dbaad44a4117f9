use crate::server::error::config::ConfigError;

/// Minimum length of the session signing secret in bytes.
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Default session lifetime in hours.
pub const DEFAULT_SESSION_MAX_AGE_HOURS: i64 = 24;

/// Longest accepted session lifetime in hours (10 years).
pub const MAX_SESSION_MAX_AGE_HOURS: i64 = 87_600;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration read from the environment.
pub struct Config {
    /// Base URL of the marketplace REST API
    pub marketplace_api_url: String,
    /// HMAC secret for signing session tokens
    pub session_secret: String,
    /// Lifetime of a session from login, in hours
    pub session_max_age_hours: i64,
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Optional contact email appended to the marketplace `User-Agent`
    pub contact_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let require =
            |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let marketplace_api_url = require("MARKETPLACE_API_URL")?;
        if !(marketplace_api_url.starts_with("http://")
            || marketplace_api_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidEnvValue {
                var: "MARKETPLACE_API_URL".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let session_secret = require("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            });
        }

        let session_max_age_hours = match get("SESSION_MAX_AGE_HOURS") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(hours) if (1..=MAX_SESSION_MAX_AGE_HOURS).contains(&hours) => hours,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_MAX_AGE_HOURS".to_string(),
                        reason: format!(
                            "expected between 1 and {} hours, got {:?}",
                            MAX_SESSION_MAX_AGE_HOURS, value
                        ),
                    })
                }
            },
            None => DEFAULT_SESSION_MAX_AGE_HOURS,
        };

        Ok(Self {
            marketplace_api_url: marketplace_api_url.trim_end_matches('/').to_string(),
            session_secret,
            session_max_age_hours,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            contact_email: get("CONTACT_EMAIL"),
        })
    }

    /// `User-Agent` for marketplace requests, including the contact email when set.
    pub fn user_agent(&self) -> String {
        let base = crate::marketplace::DEFAULT_USER_AGENT;

        match &self.contact_email {
            Some(email) => format!("{} ({})", base, email),
            None => base.to_string(),
        }
    }
}
