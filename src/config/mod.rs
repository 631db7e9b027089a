#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::DEFAULT_BASE_URL;
use crate::core::{ConfigProvider, Credentials};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use toml_config::TomlConfig;

/// Effective settings after merging flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    /// Flags win over the file; the file wins over built-in defaults.
    pub fn resolve<C: ConfigProvider>(flags: &C, file: Option<&TomlConfig>) -> Self {
        let base_url = flags
            .base_url()
            .or_else(|| file.and_then(|f| f.base_url()))
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        Self {
            base_url,
            credentials: file.and_then(|f| f.credentials()),
            verbose: flags.verbose() || file.is_some_and(|f| f.verbose()),
            json_logs: flags.json_logs() || file.is_some_and(|f| f.json_logs()),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(credentials) = &self.credentials {
            credentials.validate()?;
        }
        Ok(())
    }
}
