use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output base name; results land in <basename>.csv and <basename>.json
    #[arg(short, long, value_name = "BASENAME")]
    pub output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// WebDriver endpoint to connect to
    #[arg(long, value_name = "URL")]
    pub webdriver_url: Option<String>,

    /// Run the browser in headless mode
    #[arg(long)]
    pub headless: bool,

    /// Per-wait ceiling for page elements, in seconds (default from config: 10)
    #[arg(long, value_name = "SECS")]
    pub element_timeout: Option<u64>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Valid levels are: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        if self.element_timeout == Some(0) {
            return Err("element-timeout must be greater than 0".to_string());
        }

        if let Some(output) = &self.output {
            if output.is_empty() {
                return Err("output basename cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            output: None,
            log_level: "info".to_string(),
            webdriver_url: None,
            headless: false,
            element_timeout: None,
        }
    }

    #[test]
    fn default_args_are_valid() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut a = args();
        a.log_level = "verbose".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut a = args();
        a.element_timeout = Some(0);
        assert!(a.validate().is_err());
    }
}
