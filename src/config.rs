use config::{
    Config as ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::Deserialize;
use std::env;
use zeno_contact::{Catalog, FormSettings};
use zeno_notification::EmailConfig;
use zeno_portfolio::Portfolio;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub portfolio: Portfolio,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Contact form options and toast copy for one deployment.
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// `studio` or `placeholder`
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Replaces the preset's budget bands when set.
    #[serde(default)]
    pub budgets: Option<Vec<String>>,
    #[serde(default = "default_response_window")]
    pub response_window: String,
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            budgets: None,
            response_window: default_response_window(),
            fallback_email: default_fallback_email(),
        }
    }
}

impl ContactConfig {
    pub fn catalog(&self) -> Option<Catalog> {
        let mut catalog = Catalog::preset(&self.preset)?;
        if let Some(budgets) = &self.budgets {
            catalog.budgets = budgets.clone();
        }

        Some(catalog)
    }

    pub fn settings(&self) -> FormSettings {
        FormSettings {
            response_window: self.response_window.to_owned(),
            fallback_email: self.fallback_email.to_owned(),
        }
    }
}

fn default_preset() -> String {
    "studio".to_string()
}

fn default_response_window() -> String {
    "24 hours".to_string()
}

fn default_fallback_email() -> String {
    "hello@zenocreatives.com".to_string()
}

/// Where `zeno send` posts submissions.
#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    #[serde(default = "default_relay_url")]
    pub url: String,
    #[serde(default)]
    pub anon_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: default_relay_url(),
            anon_key: None,
        }
    }
}

fn default_relay_url() -> String {
    "http://127.0.0.1:3000/send-contact-email".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ZENO__EMAIL__RECIPIENT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = defaults()?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ZENO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Defaults overlaid with an inline TOML document. No environment lookup.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.recipient.trim().is_empty() {
            return Err("Email recipient must not be empty".to_string());
        }
        if self.email.from_address.trim().is_empty() {
            return Err("Email from_address must not be empty".to_string());
        }
        if self.contact.catalog().is_none() {
            return Err(format!(
                "Unknown contact preset '{}', expected 'studio' or 'placeholder'",
                self.contact.preset
            ));
        }
        Ok(())
    }
}

fn defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
    ConfigBuilder::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .set_default("email.transport", "resend")?
        .set_default("email.from_address", "onboarding@resend.dev")?
        .set_default("email.recipient", "hello@zenocreatives.com")?
        .set_default("email.brand", "The Zeno Creatives")
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeno_notification::Transport;
    use zeno_portfolio::VideoStrategy;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.email.transport, Transport::Resend);
        assert_eq!(config.email.brand, "The Zeno Creatives");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.contact.catalog(), Some(Catalog::studio()));
        assert_eq!(config.portfolio.strategy, VideoStrategy::Hosted);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let config = Config::from_toml("[server]\nport = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_recipient() {
        let config = Config::from_toml("[email]\nrecipient = \"  \"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_transport_rejected() {
        assert!(Config::from_toml("[email]\ntransport = \"pigeon\"").is_err());
    }

    #[test]
    fn test_validation_unknown_preset() {
        let config = Config::from_toml("[contact]\npreset = \"agency\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_budget_override() {
        let config = Config::from_toml(
            r#"
[contact]
preset = "placeholder"
budgets = ["Small", "Large"]
fallback_email = "studio@example.com"
"#,
        )
        .unwrap();

        let catalog = config.contact.catalog().unwrap();
        assert_eq!(catalog.budgets, vec!["Small", "Large"]);
        assert_eq!(catalog.project_types, Catalog::placeholder().project_types);
        assert_eq!(config.contact.settings().fallback_email, "studio@example.com");
    }
}
