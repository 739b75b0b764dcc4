//! Notifier port trait

use async_trait::async_trait;

use crate::error::NotifyError;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell the recipient the product is purchasable again.
    async fn notify_back_in_stock(
        &self,
        product_name: &str,
        product_url: &str,
    ) -> Result<(), NotifyError>;
}
