use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::domain::{error::MailError, services::mail_service::ActivationMailer};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);
const ACTIVATION_SUBJECT: &str = "Account Activation";

#[derive(Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

/// Mailer backed by an HTTP mail-provider API. The request timeout bounds
/// how long a registration can stay blocked on the transport.
#[derive(Clone)]
pub struct HttpApiMailer {
    client: Client,
    api_url: String,
    sender: String,
}

impl HttpApiMailer {
    pub fn new(api_url: String, sender: String) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| MailError(e.to_string()))?;

        Ok(Self {
            client,
            api_url,
            sender,
        })
    }
}

#[async_trait]
impl ActivationMailer for HttpApiMailer {
    async fn send_account_activation(&self, email: &str, token: &str) -> Result<(), MailError> {
        let request = SendMailRequest {
            from: &self.sender,
            to: email,
            subject: ACTIVATION_SUBJECT,
            html: format!("Token is {token}"),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| MailError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailError(format!("mail API responded with {status}")));
        }

        debug!(to = email, "activation e-mail handed to transport");
        Ok(())
    }
}
