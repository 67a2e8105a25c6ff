//! Auth Models

use std::fmt::{Debug, Formatter, Result as FmtResult};

use serde::Serialize;

const REDACTED: &str = "<redacted>";

/// Login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plain password, redacted from `Debug`.
    pub password: String,
}

impl Credentials {
    /// Login form for `email`.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Account creation form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Account email, unique per shop.
    pub email: String,
    /// Plain password, redacted from `Debug`.
    pub password: String,

    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    /// Newsletter opt-in.
    pub newsletter: bool,
}

impl Debug for Registration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Registration")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("birthday", &self.birthday)
            .field("newsletter", &self.newsletter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.test", "hunter2"));

        assert!(rendered.contains("a@b.test"), "{rendered}");
        assert!(!rendered.contains("hunter2"), "{rendered}");
    }
}
