use std::env;
use std::path::PathBuf;

const DEFAULT_PRODUCT_URL: &str =
    "https://shop.amul.com/en/product/amul-high-protein-buttermilk-200-ml-or-pack-of-30";

#[derive(Clone)]
pub struct Config {
    /// Product page the probe fetches
    pub product_url: String,
    /// Product name used in the alert email subject
    pub product_name: String,
    /// Delivery pincode sent with the probe
    pub pincode: String,
    /// File holding the last observed status
    pub state_file: PathBuf,
    /// Hard per-request cutoff, in seconds
    pub request_timeout_secs: u64,
    pub smtp: SmtpSettings,
}

#[derive(Clone)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    /// SMTP username and From address; alerts are disabled when unset
    pub sender: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            product_url: env::var("PRODUCT_URL")
                .unwrap_or_else(|_| DEFAULT_PRODUCT_URL.to_string()),
            product_name: env::var("PRODUCT_NAME")
                .unwrap_or_else(|_| "Amul High Protein Buttermilk".to_string()),
            pincode: env::var("PINCODE").unwrap_or_else(|_| "560060".to_string()),
            state_file: env::var("STATE_FILE")
                .unwrap_or_else(|_| "/tmp/shelfwatch_stock_status.txt".to_string())
                .into(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(180),
            smtp: SmtpSettings {
                server: env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                port: env::var("SMTP_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(587),
                sender: env::var("SENDER_EMAIL").ok(),
                password: env::var("SENDER_PASSWORD").ok(),
                recipient: env::var("RECIPIENT_EMAIL").ok(),
            },
        }
    }

    /// Check if restock alerts are fully configured
    pub fn alerts_enabled(&self) -> bool {
        self.smtp.sender.is_some() && self.smtp.password.is_some() && self.smtp.recipient.is_some()
    }
}
