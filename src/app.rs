use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::Product;
use crate::output::DataStore;
use crate::progress::ProgressTracker;
use crate::scraping::Scraper;

pub struct App {
    config: AppConfig,
    progress: ProgressTracker,
    store: DataStore,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let store = DataStore::new(config.output.clone());

        Self {
            config,
            progress: ProgressTracker::new(),
            store,
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        self.progress.start("Initializing browser");
        let scraper = Scraper::new(self.config.amazon.clone(), &self.config.scrape).await?;

        // The session is released however the pipeline ends.
        let result = self.run_pipeline(&scraper).await;
        if let Err(e) = scraper.shutdown().await {
            warn!(error = %e, "failed to close browser session");
        }

        match &result {
            Ok(()) => self.progress.complete("Done"),
            Err(_) => self.progress.abandon("Run failed"),
        }

        result
    }

    async fn run_pipeline(&self, scraper: &Scraper) -> Result<(), AppError> {
        self.progress.update("Logging in");
        scraper.login().await?;

        let products = self.scrape_categories(scraper).await?;

        self.progress.update("Writing output");
        let paths = self.store.write(&products)?;
        info!(
            csv = %paths.csv.display(),
            json = %paths.json.display(),
            records = products.len(),
            "output written"
        );

        Ok(())
    }

    async fn scrape_categories(&self, scraper: &Scraper) -> Result<Vec<Product>, AppError> {
        let mut all_products = Vec::new();

        for category in &self.config.scrape.categories {
            self.progress.update(&format!("Scraping {category}"));

            let products = scraper.scrape_category(category).await?;
            info!(category, kept = products.len(), "category complete");
            all_products.extend(products);

            // Randomized pause between category loads.
            let delay = Duration::from_secs_f64(rand::thread_rng().gen_range(2.0..5.0));
            tokio::time::sleep(delay).await;
        }

        Ok(all_products)
    }
}
