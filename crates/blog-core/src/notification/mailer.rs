//! Mail transports

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::info;

/// A plain-text email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers emails
pub trait Mailer: Send + Sync {
    fn send(&self, email: &Email) -> Result<()>;
}

/// Writes emails to the log instead of sending them
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, email: &Email) -> Result<()> {
        info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            "Sending email:\n{}",
            email.body
        );
        Ok(())
    }
}

/// Keeps sent emails in memory
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<Email>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails sent so far, oldest first
    pub fn sent(&self) -> Vec<Email> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, email: &Email) -> Result<()> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| BlogError::Mail("Mailbox lock poisoned".to_string()))?;
        sent.push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_email() -> Email {
        Email {
            from: "noreply@example.com".to_string(),
            to: "lea@example.com".to_string(),
            subject: "Hello".to_string(),
            body: "Body".to_string(),
        }
    }

    #[test]
    fn test_memory_mailer_records() {
        let mailer = MemoryMailer::new();
        assert!(mailer.sent().is_empty());

        mailer.send(&create_test_email()).unwrap();
        assert_eq!(mailer.sent(), vec![create_test_email()]);
    }

    #[test]
    fn test_log_mailer_succeeds() {
        assert!(LogMailer.send(&create_test_email()).is_ok());
    }
}
