//! Contact form validation and the mailto handoff.

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::notify::{Notifier, Severity};

/// Delay between handing the message to the mail client and resetting the
/// form.
pub const RESET_DELAY_MS: u32 = 1000;
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Whitespace counts as filled in; only empty fields are missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = Field::ALL.into_iter().find(|field| self.get(*field).is_empty()) {
            return Err(ValidationError::MissingField(field));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn compose(to: &str, draft: &FormDraft) -> Self {
        Self {
            to: to.to_string(),
            subject: draft.subject.clone(),
            body: format!(
                "Name: {}\nEmail: {}\nSubject: {}\nMessage: {}\n",
                draft.name, draft.email, draft.subject, draft.message
            ),
        }
    }

    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Hands a composed message to whatever mail client the platform has.
/// There is no way to find out whether anything was actually sent.
#[cfg_attr(test, mockall::automock)]
pub trait MailHandoff {
    fn hand_off(&self, href: &str);
}

pub struct FormSubmitter<'a> {
    contact: &'a str,
    mail: &'a dyn MailHandoff,
    notifier: &'a dyn Notifier,
}

impl<'a> FormSubmitter<'a> {
    pub fn new(contact: &'a str, mail: &'a dyn MailHandoff, notifier: &'a dyn Notifier) -> Self {
        Self {
            contact,
            mail,
            notifier,
        }
    }

    /// Validates the draft and hands it off. On failure the user is told
    /// why and nothing is sent.
    pub fn submit(&self, draft: &FormDraft) -> Result<MailtoLink, ValidationError> {
        if let Err(err) = draft.validate() {
            warn!("Contact form rejected: {:?}", err);
            self.notifier.notify(&err.to_string(), Severity::Error);
            return Err(err);
        }

        let link = MailtoLink::compose(self.contact, draft);
        info!("Handing contact message to the mail client");
        self.mail.hand_off(&link.href());
        Ok(link)
    }

    /// Clears the draft after a handoff and confirms it to the user.
    pub fn complete(&self, draft: &mut FormDraft) {
        *draft = FormDraft::default();
        self.notifier.notify(SUCCESS_MESSAGE, Severity::Success);
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::interactions::notify::MockNotifier;

    fn filled() -> FormDraft {
        FormDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_empty_subject_reports_missing_field_once() {
        let mut mail = MockMailHandoff::new();
        mail.expect_hand_off().times(0);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq("Please fill in all fields"), eq(Severity::Error))
            .times(1)
            .return_const(());

        let draft = FormDraft {
            subject: String::new(),
            ..filled()
        };
        let result = FormSubmitter::new("support@litenode.net", &mail, &notifier).submit(&draft);

        assert_eq!(result, Err(ValidationError::MissingField(Field::Subject)));
    }

    #[test]
    fn test_bad_email_reports_invalid_email_once() {
        let mut mail = MockMailHandoff::new();
        mail.expect_hand_off().times(0);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq("Please enter a valid email address"), eq(Severity::Error))
            .times(1)
            .return_const(());

        let draft = FormDraft {
            email: "not-an-email".to_string(),
            ..filled()
        };
        let result = FormSubmitter::new("support@litenode.net", &mail, &notifier).submit(&draft);

        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_valid_form_hands_off_then_resets() {
        let mut seq = Sequence::new();
        let mut mail = MockMailHandoff::new();
        mail.expect_hand_off()
            .withf(|href: &str| href.starts_with("mailto:support@litenode.net?subject=Hello%20there&body="))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(SUCCESS_MESSAGE), eq(Severity::Success))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut draft = filled();
        let submitter = FormSubmitter::new("support@litenode.net", &mail, &notifier);
        let link = submitter.submit(&draft).unwrap();
        submitter.complete(&mut draft);

        assert_eq!(link.subject, "Hello there");
        assert_eq!(draft, FormDraft::default());
    }

    #[test]
    fn test_missing_field_is_checked_before_email() {
        let draft = FormDraft {
            name: String::new(),
            email: "nope".to_string(),
            ..filled()
        };

        assert_eq!(draft.validate(), Err(ValidationError::MissingField(Field::Name)));
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("a.b+c@sub.example.io", true)]
    #[case("not-an-email", false)]
    #[case("ada@example", false)]
    #[case("ada @example.com", false)]
    #[case("@example.com", false)]
    fn test_is_valid_email(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn test_mailto_body_is_encoded() {
        let link = MailtoLink::compose("support@litenode.net", &filled());

        assert_eq!(
            link.body,
            "Name: Ada\nEmail: ada@example.com\nSubject: Hello there\nMessage: Let's build something.\n"
        );
        assert!(link.href().contains("body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com"));
    }
}
