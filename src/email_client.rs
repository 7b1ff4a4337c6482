use crate::domain::ContactEmail;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    recipient: ContactEmail,
    api_key: Option<Secret<String>>,
}

#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error("No API key is configured for the email service")]
    MissingApiKey,
    #[error("The email service rejected the message with status {status}")]
    Rejected { status: StatusCode, payload: String },
    #[error("Failed to reach the email service")]
    Request(#[from] reqwest::Error),
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        recipient: ContactEmail,
        api_key: Option<Secret<String>>,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url,
            sender,
            recipient,
            api_key: api_key.filter(|key| !key.expose_secret().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends `html_content` to the site owner. On success the raw response
    /// payload of the email service is handed back.
    pub async fn send_email(
        &self,
        reply_to: &ContactEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<String, EmailClientError> {
        let api_key = self.api_key.as_ref().ok_or(EmailClientError::MissingApiKey)?;

        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: [self.recipient.as_ref()],
            subject,
            html: html_content,
            reply_to: reply_to.as_ref(),
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            return Err(EmailClientError::Rejected { status, payload });
        }
        Ok(response.text().await?)
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}
