pub mod mailer;

pub use mailer::SmtpNotifier;
