//! Frontend configuration

use crate::error::CoreResult;
use crate::validation::{ValidateConfig, validators};
use config::ConfigError;
use serde::{Deserialize, Serialize};

/// Settings shared by the request client and the page utilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Path prefix appended to the origin for every API call
    pub api_prefix: String,

    /// Page to navigate to when the user is not logged in
    pub login_page: String,

    /// How long a toast notification stays on screen
    pub notification_duration_ms: u32,

    /// User agent sent by the HTTP client
    pub user_agent: String,
}

impl FrontendConfig {
    /// Default API prefix
    pub const DEFAULT_API_PREFIX: &'static str = "/api";

    /// Default login page
    pub const DEFAULT_LOGIN_PAGE: &'static str = "login.html";

    /// Default toast lifetime
    pub const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 3_000;

    /// Load configuration with defaults and `OCEANVIEW_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn from_env() -> CoreResult<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("api_prefix", defaults.api_prefix)?
            .set_default("login_page", defaults.login_page)?
            .set_default(
                "notification_duration_ms",
                i64::from(defaults.notification_duration_ms),
            )?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(config::Environment::with_prefix("OCEANVIEW"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(
            api_prefix = %config.api_prefix,
            login_page = %config.login_page,
            "Loaded frontend configuration"
        );
        Ok(config)
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_prefix: Self::DEFAULT_API_PREFIX.to_string(),
            login_page: Self::DEFAULT_LOGIN_PAGE.to_string(),
            notification_duration_ms: Self::DEFAULT_NOTIFICATION_DURATION_MS,
            user_agent: concat!("oceanview-frontend/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ValidateConfig for FrontendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validators::validate_path_prefix(&self.api_prefix, "api_prefix")?;
        validators::validate_not_empty(&self.login_page, "login_page")?;
        validators::validate_range(
            self.notification_duration_ms,
            1,
            60_000,
            "notification_duration_ms",
        )?;
        validators::validate_not_empty(&self.user_agent, "user_agent")?;
        Ok(())
    }
}
