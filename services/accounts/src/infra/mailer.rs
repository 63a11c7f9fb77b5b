use anyhow::Context as _;

use crate::delivery::{Mailer, OtpEmail};

/// Mail-API client: posts JSON to an HTTP relay endpoint.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender: String,
}

impl HttpMailer {
    pub fn new(api_url: String, api_key: String, sender: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            sender,
        }
    }
}

impl Mailer for HttpMailer {
    async fn send_otp(&self, email: &OtpEmail) -> anyhow::Result<()> {
        let body = serde_json::json!({
            "from": self.sender,
            "to": email.recipient,
            "subject": "Your one-time code",
            "text": format!(
                "Your one-time code is {}. It expires in 5 minutes.",
                email.code
            ),
        });
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("post otp email to mail api")?;
        response
            .error_for_status()
            .context("mail api rejected the message")?;
        Ok(())
    }
}
