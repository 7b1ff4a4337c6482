use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use std::fmt::Formatter;

use crate::domain::{
    ContactEmail, ContactMessage, ContactName, ContactSubmission, MISSING_REQUIRED_FIELDS,
};
use crate::email_client::{EmailClient, EmailClientError};

#[derive(serde::Deserialize)]
pub struct ContactFormData {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = String;

    // Presence of every required field is checked before the email format.
    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactName::parse(form.name.unwrap_or_default())?;
        let message = ContactMessage::parse(form.message.unwrap_or_default())?;
        let email = form
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| MISSING_REQUIRED_FIELDS.to_string())?;
        let email = ContactEmail::parse(email)?;
        let subject = form.subject.filter(|subject| !subject.is_empty());
        Ok(ContactSubmission {
            name,
            email,
            subject,
            message,
        })
    }
}

#[derive(serde::Serialize)]
struct ContactResponse<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> ContactResponse<'a> {
    fn success(message: &'a str) -> Self {
        Self {
            success: true,
            message: Some(message),
            error: None,
        }
    }

    fn failure(error: &'a str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("The request body is not a valid contact form")]
    MalformedRequest(#[source] serde_json::Error),
    #[error("{0}")]
    ValidationError(String),
    #[error("The email service is not configured")]
    ConfigurationError,
    #[error("The email service did not accept the message")]
    DeliveryError(#[source] EmailClientError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ContactError {
    /// What the caller gets to see. Operational failures stay generic.
    fn public_message(&self) -> &str {
        match self {
            ContactError::ValidationError(message) => message,
            ContactError::ConfigurationError => {
                "Email service not configured. Please contact the administrator."
            }
            ContactError::DeliveryError(_) => "Failed to send email. Please try again later.",
            ContactError::MalformedRequest(_) | ContactError::UnexpectedError(_) => {
                "An unexpected error occurred. Please try again later."
            }
        }
    }
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::MalformedRequest(_)
            | ContactError::ConfigurationError
            | ContactError::DeliveryError(_)
            | ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(ContactResponse::failure(self.public_message()))
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(body, email_client),
    fields(
        sender_name = tracing::field::Empty,
        sender_email = tracing::field::Empty
    )
)]
pub async fn send_email(
    body: Result<web::Bytes, actix_web::Error>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    // An oversized or unreadable body still gets a JSON answer.
    let body = body.map_err(|e| {
        ContactError::UnexpectedError(anyhow::anyhow!("Failed to read the request body: {}", e))
    })?;
    let form: ContactFormData =
        serde_json::from_slice(&body).map_err(ContactError::MalformedRequest)?;
    let submission: ContactSubmission = form.try_into().map_err(ContactError::ValidationError)?;

    let span = tracing::Span::current();
    span.record("sender_name", &tracing::field::display(&submission.name));
    span.record("sender_email", &tracing::field::display(&submission.email));

    let receipt = deliver(&email_client, &submission).await?;
    tracing::info!(receipt = %receipt, "Email sent successfully");

    Ok(HttpResponse::Ok().json(ContactResponse::success("Email sent successfully")))
}

/// Refuses without touching the network when no API key is configured.
#[tracing::instrument(
    name = "Sending the submission to the site owner",
    skip(email_client, submission)
)]
async fn deliver(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<String, ContactError> {
    email_client
        .send_email(&submission.email, &submission.subject(), &submission.html_body())
        .await
        .map_err(|e| match e {
            EmailClientError::MissingApiKey => {
                tracing::error!("The email service API key is not configured");
                ContactError::ConfigurationError
            }
            EmailClientError::Rejected { status, payload } => {
                tracing::error!(
                    status = %status,
                    payload = %payload,
                    "The email service rejected the message"
                );
                ContactError::DeliveryError(EmailClientError::Rejected { status, payload })
            }
            EmailClientError::Request(e) => ContactError::UnexpectedError(
                anyhow::Error::new(e).context("Failed to reach the email service"),
            ),
        })
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
