//! SMTP notifier implementation
//!
//! Sends the restock alert email through an SMTP relay with STARTTLS.
//! When sender credentials or the recipient are not configured the notifier
//! is constructed in a disabled state: notifying then fails with
//! `NotifyError::NotConfigured` and the checker logs it and moves on.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpSettings;
use crate::domain::ports::Notifier;
use crate::error::NotifyError;

struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

pub struct SmtpNotifier {
    mailer: Option<Mailer>,
}

impl SmtpNotifier {
    /// Build a notifier from SMTP settings.
    ///
    /// Missing credentials produce a disabled notifier rather than an error;
    /// malformed addresses and an unreachable relay config are errors.
    pub fn from_settings(settings: &SmtpSettings) -> Result<Self, NotifyError> {
        let (sender, password, recipient) = match (
            settings.sender.as_deref(),
            settings.password.as_deref(),
            settings.recipient.as_deref(),
        ) {
            (Some(sender), Some(password), Some(recipient)) => (sender, password, recipient),
            _ => {
                tracing::warn!(
                    "SENDER_EMAIL, SENDER_PASSWORD or RECIPIENT_EMAIL unset, restock alerts disabled"
                );
                return Ok(Self { mailer: None });
            }
        };

        let from: Mailbox = sender.parse()?;
        let to: Mailbox = recipient.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
            .port(settings.port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        Ok(Self {
            mailer: Some(Mailer {
                transport,
                from,
                to,
            }),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_back_in_stock(
        &self,
        product_name: &str,
        product_url: &str,
    ) -> Result<(), NotifyError> {
        let mailer = self.mailer.as_ref().ok_or_else(|| {
            NotifyError::NotConfigured("sender credentials or recipient unset".to_string())
        })?;

        let message = Message::builder()
            .from(mailer.from.clone())
            .to(mailer.to.clone())
            .subject(format!("Stock Alert: {} is back in stock!", product_name))
            .body(format!(
                "The product ({}) is now in stock at: {}\n\n\
                 This is an automated notification. Please check the website to confirm.",
                product_name, product_url
            ))?;

        mailer.transport.send(message).await?;
        tracing::info!(to = %mailer.to, "restock alert sent");
        Ok(())
    }
}
