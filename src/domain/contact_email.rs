use crate::domain::INVALID_EMAIL_ADDRESS;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern is a valid regex")
});

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Deliberately loose: something before the `@`, a dot somewhere after
    /// it, and no whitespace or second `@` anywhere.
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        if EMAIL_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(INVALID_EMAIL_ADDRESS.to_string())
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
