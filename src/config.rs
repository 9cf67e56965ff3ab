use config::Config;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::cli::CliArgs;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub amazon: AmazonConfig,
    #[validate(nested)]
    pub scrape: ScrapeConfig,
    #[validate(nested)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AmazonConfig {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ScrapeConfig {
    #[validate(length(min = 1, message = "At least one category is required"))]
    pub categories: Vec<String>,
    #[serde(default = "default_webdriver_url")]
    #[validate(url(message = "Invalid WebDriver URL"))]
    pub webdriver_url: String,
    #[serde(default)]
    pub headless: bool,
    #[serde(default = "default_element_timeout")]
    pub element_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct OutputConfig {
    #[validate(length(min = 1, message = "Output basename cannot be empty"))]
    pub basename: String,
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_element_timeout() -> u64 {
    10
}

impl AppConfig {
    pub fn load_with_cli_args(cli_args: &CliArgs) -> Result<Self, AppError> {
        let mut builder =
            Config::builder().add_source(config::File::with_name("config").required(false));

        if let Some(config_path) = &cli_args.config {
            builder = builder.add_source(config::File::from(config_path.as_path()));
        }

        if let Some(output) = &cli_args.output {
            builder = builder.set_override("output.basename", output.as_str())?;
        }
        if let Some(url) = &cli_args.webdriver_url {
            builder = builder.set_override("scrape.webdriver_url", url.as_str())?;
        }
        if cli_args.headless {
            builder = builder.set_override("scrape.headless", true)?;
        }
        if let Some(timeout) = cli_args.element_timeout {
            builder = builder.set_override("scrape.element_timeout_secs", timeout)?;
        }

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        Validate::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            amazon: AmazonConfig {
                email: "user@example.com".to_string(),
                password: "hunter2".to_string(),
            },
            scrape: ScrapeConfig {
                categories: vec!["electronics".to_string()],
                webdriver_url: default_webdriver_url(),
                headless: true,
                element_timeout_secs: default_element_timeout(),
            },
            output: OutputConfig {
                basename: "amazon_products".to_string(),
            },
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_bad_email() {
        let mut c = config();
        c.amazon.email = "not-an-email".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_empty_categories() {
        let mut c = config();
        c.scrape.categories.clear();
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_empty_basename() {
        let mut c = config();
        c.output.basename.clear();
        assert!(c.validate().is_err());
    }
}
