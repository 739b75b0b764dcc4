//! HTTP stock probe implementation
//!
//! Fetches the product page over plain HTTP (pincode passed as a query
//! parameter) and classifies purchasability from page signals, checked in
//! order:
//!
//! 1. a danger alert containing "Sold Out"            -> out-of-stock
//! 2. an "Add to Cart" button that is not disabled    -> in-stock
//! 3. "not deliverable" / "not available at" copy     -> out-of-stock
//! 4. no positive signal                              -> out-of-stock

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::domain::model::StockStatus;
use crate::domain::ports::StockProbe;
use crate::error::ProbeError;

/// How far past an alert tag opening we look for its "Sold Out" text
const ALERT_TEXT_WINDOW: usize = 600;

/// Compiled page-signal patterns
pub struct PageSignals {
    danger_alert: Regex,
    sold_out: Regex,
    button: Regex,
    add_to_cart: Regex,
    disabled: Regex,
    undeliverable: Regex,
}

impl PageSignals {
    pub fn new() -> Self {
        Self {
            danger_alert: Regex::new(r#"(?i)class="[^"]*\balert-danger\b[^"]*""#)
                .expect("valid regex"),
            sold_out: Regex::new(r"(?i)sold\s*out").expect("valid regex"),
            button: Regex::new(r"(?is)<button\b([^>]*)>(.*?)</button>").expect("valid regex"),
            add_to_cart: Regex::new(r"(?i)add\s+to\s+cart").expect("valid regex"),
            disabled: Regex::new(r"(?i)\bdisabled\b").expect("valid regex"),
            undeliverable: Regex::new(r"(?i)not\s+deliverable|not\s+available\s+at")
                .expect("valid regex"),
        }
    }

    /// Classify a fetched product page.
    pub fn classify(&self, html: &str) -> StockStatus {
        // Negative signal first: an explicit Sold Out alert wins even when a
        // (disabled) Add to Cart button is still in the markup.
        for alert in self.danger_alert.find_iter(html) {
            let window_end = (alert.end() + ALERT_TEXT_WINDOW).min(html.len());
            // Clamp to a char boundary so slicing can't panic on multibyte pages
            let window_end = (0..=window_end)
                .rev()
                .find(|&i| html.is_char_boundary(i))
                .unwrap_or(alert.end());
            if self.sold_out.is_match(&html[alert.end()..window_end]) {
                tracing::debug!("detected Sold Out alert");
                return StockStatus::OutOfStock;
            }
        }

        for button in self.button.captures_iter(html) {
            let attrs = &button[1];
            let label = &button[2];
            if self.add_to_cart.is_match(label) && !self.disabled.is_match(attrs) {
                tracing::debug!("Add to Cart button is enabled");
                return StockStatus::InStock;
            }
        }

        if self.undeliverable.is_match(html) {
            tracing::debug!("detected not-deliverable copy");
            return StockStatus::OutOfStock;
        }

        tracing::debug!("no positive in-stock signal, defaulting to out-of-stock");
        StockStatus::OutOfStock
    }
}

impl Default for PageSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Probe that reads stock status straight from the shop's product page
pub struct HttpStockProbe {
    http: Client,
    product_url: String,
    pincode: String,
    signals: PageSignals,
}

impl HttpStockProbe {
    pub fn new(product_url: String, pincode: String) -> Self {
        Self {
            http: Client::new(),
            product_url,
            pincode,
            signals: PageSignals::new(),
        }
    }
}

#[async_trait]
impl StockProbe for HttpStockProbe {
    async fn current_status(&self) -> Result<StockStatus, ProbeError> {
        tracing::debug!(url = %self.product_url, pincode = %self.pincode, "fetching product page");

        let response = self
            .http
            .get(&self.product_url)
            .query(&[("pincode", self.pincode.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(self.signals.classify(&body))
    }
}
