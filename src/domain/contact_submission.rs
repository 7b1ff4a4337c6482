use crate::domain::{ContactEmail, ContactMessage, ContactName};

pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: Option<String>,
    pub message: ContactMessage,
}

impl ContactSubmission {
    /// The subject line of the outbound notification.
    pub fn subject(&self) -> String {
        match self.subject.as_deref() {
            Some(subject) if !subject.is_empty() => subject.to_string(),
            _ => format!("New message from {}", self.name),
        }
    }

    /// HTML notification for the site owner. Submitted values are
    /// interpolated as-is.
    pub fn html_body(&self) -> String {
        let subject_line = match self.subject.as_deref() {
            Some(subject) if !subject.is_empty() => format!(
                r#"<p style="margin: 10px 0;"><strong>Subject:</strong> {}</p>"#,
                subject
            ),
            _ => String::new(),
        };

        format!(
            r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #6366f1;">New Contact Form Submission</h2>
  <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p style="margin: 10px 0;"><strong>Name:</strong> {name}</p>
    <p style="margin: 10px 0;"><strong>Email:</strong> {email}</p>
    {subject_line}
  </div>
  <div style="margin: 20px 0;">
    <h3 style="color: #374151;">Message:</h3>
    <p style="white-space: pre-wrap; line-height: 1.6;">{message}</p>
  </div>
  <hr style="border: none; border-top: 1px solid #e5e7eb; margin: 20px 0;">
  <p style="color: #6b7280; font-size: 14px;">
    This email was sent from your portfolio contact form.
  </p>
</div>
"#,
            name = self.name,
            email = self.email,
            subject_line = subject_line,
            message = self.message.as_ref(),
        )
    }
}
