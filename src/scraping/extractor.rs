use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::Product;

const RESULT_BLOCKS: Locator<'static> =
    Locator::XPath("//div[@data-component-type='s-search-result']");
const NAME: Locator<'static> = Locator::XPath(".//h2/a");
const PRICE: Locator<'static> = Locator::XPath(".//span[contains(@class, 'a-offscreen')]");
const DISCOUNT: Locator<'static> = Locator::XPath(".//span[contains(@class, 'a-color-price')]");
const NEXT_PAGE: Locator<'static> = Locator::Css("a.s-pagination-next");

const DISABLED_CLASS: &str = "s-pagination-disabled";

/// Collection stops at the first page boundary at or past this many
/// qualifying records, so the final page may overshoot it.
const MAX_PRODUCTS: usize = 1500;

/// Walks one category listing page by page, keeping only records that
/// clear the discount threshold.
pub struct CategoryExtractor<'a> {
    client: &'a Client,
    element_timeout: Duration,
}

impl<'a> CategoryExtractor<'a> {
    pub fn new(client: &'a Client, element_timeout: Duration) -> Self {
        Self {
            client,
            element_timeout,
        }
    }

    pub async fn extract(&self) -> Result<Vec<Product>, AppError> {
        let mut products = Vec::new();
        let mut page = 1usize;

        loop {
            self.client
                .wait()
                .at_most(self.element_timeout)
                .for_element(RESULT_BLOCKS)
                .await?;

            let blocks = self.client.find_all(RESULT_BLOCKS).await?;
            debug!(page, blocks = blocks.len(), "extracting result blocks");

            for block in &blocks {
                match self.extract_product(block).await {
                    Ok(Some(product)) => products.push(product),
                    Ok(None) => {}
                    Err(e) => warn!(page, error = %e, "skipping product block"),
                }
            }

            if cap_reached(products.len()) {
                debug!(collected = products.len(), "product cap reached");
                break;
            }

            match self.next_page_control().await? {
                Some(control) => {
                    control.click().await?;
                    page += 1;
                }
                None => break,
            }
        }

        Ok(products)
    }

    /// Extracts one result block. Returns None when the record does not
    /// clear the discount threshold or its discount text does not parse.
    async fn extract_product(&self, block: &Element) -> Result<Option<Product>, AppError> {
        let name = block.find(NAME).await?.text().await?;
        let price = block.find(PRICE).await?.text().await?;
        let discount = block.find(DISCOUNT).await?.text().await?;

        let product = Product::new(name, price, discount);
        Ok(product.qualifies().then_some(product))
    }

    /// Returns the clickable next-page control, or None at end of data.
    async fn next_page_control(&self) -> Result<Option<Element>, AppError> {
        let control = self.client.find_all(NEXT_PAGE).await?.into_iter().next();

        let state = match &control {
            Some(c) => Some((
                c.attr("aria-disabled").await?,
                c.attr("class").await?.unwrap_or_default(),
            )),
            None => None,
        };

        if is_end_of_data(state.as_ref().map(|(aria, class)| (aria.as_deref(), class.as_str()))) {
            return Ok(None);
        }

        Ok(control)
    }
}

/// Collection is only cut off at page boundaries, so a full page
/// extracted just before this check may carry the total past the cap.
fn cap_reached(count: usize) -> bool {
    count >= MAX_PRODUCTS
}

/// An absent or disabled next-page control means end of data. The state
/// is the control's (aria-disabled, class) attributes when present.
fn is_end_of_data(control: Option<(Option<&str>, &str)>) -> bool {
    match control {
        None => true,
        Some((aria_disabled, class)) => {
            aria_disabled.is_some_and(|v| v.eq_ignore_ascii_case("true"))
                || has_disabled_class(class)
        }
    }
}

fn has_disabled_class(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|class| class == DISABLED_CLASS)
}
