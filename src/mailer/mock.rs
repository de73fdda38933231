//! Test doubles for [`Mailer`].

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use super::{MailError, Mailer};
use crate::models::email::OutgoingEmail;

/// Accepts every message and keeps a copy for assertions.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(format!("<mock-{}@urbanstay.test>", sent.len()))
    }
}

/// Rejects every delivery and counts the attempts.
#[derive(Clone, Default)]
pub struct FailingMailer {
    attempts: Arc<Mutex<usize>>,
}

impl FailingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        *self.attempts.lock().unwrap() += 1;
        // lettre's SMTP errors cannot be built outside the crate, so the
        // failure is modelled as the relay refusing the recipient.
        let source = "relay rejected recipient"
            .parse::<lettre::Address>()
            .unwrap_err();
        Err(MailError::InvalidRecipient {
            address: email.to.clone(),
            source,
        })
    }
}
