//! Contact handoff. The form is never delivered by this service: it becomes a
//! `mailto:` link that the visitor's own mail client opens.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Recipient email not configured")]
    RecipientMissing,
}

pub fn subject_for(form: &ContactForm) -> String {
    format!("Portfolio Contact from {}", form.name)
}

pub fn body_for(form: &ContactForm) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name, form.email, form.message
    )
}

/// Sender addresses only need an `@`; anything stricter is the mail client's job.
fn is_plausible_email(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@')
}

/// Builds the `mailto:` target for `form`, addressed to `recipient`.
pub fn build_mailto(recipient: &str, form: &ContactForm) -> Result<String, ContactError> {
    if !is_plausible_email(&form.email) {
        return Err(ContactError::InvalidEmail);
    }
    if recipient.trim().is_empty() {
        return Err(ContactError::RecipientMissing);
    }

    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject_for(form)),
        urlencoding::encode(&body_for(form)),
    ))
}
