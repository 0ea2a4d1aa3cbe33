use serde::{Deserialize, Serialize};

use crate::common::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Subject)
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contact page form contents. Nothing here leaves the browser.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Required fields left empty, in form order. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
        .into_iter()
        .filter(|f| f.is_required() && self.field(*f).is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Validates and, on success, clears every field.
    /// A rejected form is left untouched so the user can fix it.
    pub fn submit(&mut self) -> Result<ContactAcknowledgement, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        let submitted = std::mem::take(self);

        Ok(ContactAcknowledgement {
            name: submitted.name,
            email: submitted.email,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAcknowledgement {
    pub name: String,
    pub email: String,
}

impl ContactAcknowledgement {
    pub fn message(&self) -> String {
        format!(
            "Thank you for your message, {}! We'll get back to you at {} within 24 hours.",
            self.name, self.email
        )
    }
}

/// Alert above the contact form. Acknowledges a single submit and is
/// dismissed by the next edit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ContactNotice {
    #[default]
    Hidden,
    Sent(String),
    Rejected(String),
}

impl ContactNotice {
    pub fn from_submit(outcome: &Result<ContactAcknowledgement, ContactError>) -> Self {
        match outcome {
            Ok(ack) => Self::Sent(ack.message()),
            Err(err) => Self::Rejected(err.to_string()),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Returns whether anything was hidden.
    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.is_visible();
        *self = Self::Hidden;
        was_visible
    }
}
