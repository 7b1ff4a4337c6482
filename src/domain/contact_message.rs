use crate::domain::MISSING_REQUIRED_FIELDS;

#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, String> {
        if s.is_empty() {
            Err(MISSING_REQUIRED_FIELDS.to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
