mod contact_email;
mod contact_message;
mod contact_name;
mod contact_submission;

pub use contact_email::ContactEmail;
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_submission::ContactSubmission;

/// Reported when any of name, email or message is empty or absent.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
/// Reported when the email does not look like `local-part@domain.tld`.
pub const INVALID_EMAIL_ADDRESS: &str = "Invalid email address";
