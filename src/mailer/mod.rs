//! Outgoing mail.
//!
//! `Mailer` abstracts the delivery of one composed message. Production uses
//! `SmtpMailer`; tests swap in the doubles from `mock`.

#[cfg(test)]
pub mod mock;
mod smtp;

use async_trait::async_trait;
use thiserror::Error;
use crate::models::email::OutgoingEmail;
pub use smtp::SmtpMailer;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("invalid recipient address {address:?}: {source}")]
    InvalidRecipient {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message and return its `Message-ID`.
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError>;
}
