use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed cutoff: a product is kept only when its parsed discount
/// percentage is strictly greater than this.
pub const DISCOUNT_THRESHOLD: f64 = 50.0;

/// One scraped product, fields kept as the raw text the listing showed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub discount: String,
}

impl Product {
    pub fn new(name: String, price: String, discount: String) -> Self {
        Self {
            name,
            price,
            discount,
        }
    }

    /// First number found in the discount text, e.g. "60% off" -> 60.0,
    /// "Save 33.5%" -> 33.5. None when no number is present.
    pub fn discount_percentage(&self) -> Option<f64> {
        let text = self.discount.trim().trim_end_matches('%');
        if text.is_empty() {
            return None;
        }

        if let Ok(re) = Regex::new(r"\d+\.\d+|\d+") {
            if let Some(m) = re.find(text) {
                return m.as_str().parse().ok();
            }
        }
        None
    }

    /// Whether this record clears the discount threshold. Records whose
    /// discount text does not parse are never kept.
    pub fn qualifies(&self) -> bool {
        matches!(self.discount_percentage(), Some(pct) if pct > DISCOUNT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(discount: &str) -> Product {
        Product::new("Widget".into(), "$9.99".into(), discount.into())
    }

    #[test]
    fn parses_integer_discount() {
        assert_eq!(product("60% off").discount_percentage(), Some(60.0));
    }

    #[test]
    fn parses_decimal_discount() {
        assert_eq!(product("Save 33.5%").discount_percentage(), Some(33.5));
    }

    #[test]
    fn parses_bare_percentage() {
        assert_eq!(product("55%").discount_percentage(), Some(55.0));
    }

    #[test]
    fn no_number_yields_none() {
        assert_eq!(product("Deal of the day").discount_percentage(), None);
        assert_eq!(product("").discount_percentage(), None);
        assert_eq!(product("   ").discount_percentage(), None);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(product("60% off").qualifies());
        assert!(!product("50% off").qualifies());
        assert!(!product("20% off").qualifies());
    }

    #[test]
    fn unparseable_discount_never_qualifies() {
        assert!(!product("limited time offer").qualifies());
    }
}
