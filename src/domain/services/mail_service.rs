use async_trait::async_trait;

use crate::domain::error::MailError;

/// Hands the activation mail to the transport. Success means the transport
/// accepted the message, not that it reached a mailbox.
#[async_trait]
pub trait ActivationMailer {
    async fn send_account_activation(&self, email: &str, token: &str) -> Result<(), MailError>;
}
