mod extractor;
mod login;

use std::time::Duration;

use fantoccini::{Client, ClientBuilder};
use serde_json::json;

use crate::config::{AmazonConfig, ScrapeConfig};
use crate::error::AppError;
use crate::models::Product;
use extractor::CategoryExtractor;

const BEST_SELLERS_URL: &str = "https://www.amazon.com/bestsellers";

/// Owns the one WebDriver session used for the whole run.
pub struct Scraper {
    client: Client,
    credentials: AmazonConfig,
    element_timeout: Duration,
}

impl Scraper {
    pub async fn new(
        credentials: AmazonConfig,
        settings: &ScrapeConfig,
    ) -> Result<Self, AppError> {
        let mut builder = ClientBuilder::native();
        if settings.headless {
            let mut caps = serde_json::map::Map::new();
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new", "--disable-gpu"] }),
            );
            builder.capabilities(caps);
        }

        let client = builder.connect(&settings.webdriver_url).await?;

        Ok(Self {
            client,
            credentials,
            element_timeout: Duration::from_secs(settings.element_timeout_secs),
        })
    }

    pub async fn login(&self) -> Result<(), AppError> {
        login::automated_login(&self.client, &self.credentials, self.element_timeout).await
    }

    /// Scrapes one Best Sellers category listing, page by page.
    pub async fn scrape_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        self.client
            .goto(&format!("{BEST_SELLERS_URL}/{category}"))
            .await?;

        let extractor = CategoryExtractor::new(&self.client, self.element_timeout);
        extractor.extract().await
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        self.client.close().await?;
        Ok(())
    }
}
