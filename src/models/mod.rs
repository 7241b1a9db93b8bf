use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const MAX_TITLE_LENGTH: usize = 50;
pub(crate) const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created_at: String,
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Input-time failures. Caught before any gateway call.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("note title and body cannot be empty")]
    EmptyNote,
    #[error("note title is longer than 50 characters")]
    TitleTooLong,
    #[error("name, email and password are required")]
    MissingField,
    #[error("password and confirmation do not match")]
    PasswordMismatch,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns the title the field should hold after an edit: the proposed
/// value when it fits, otherwise the current one.
pub(crate) fn accept_title_input(current: &str, proposed: &str) -> String {
    if char_len(proposed) <= MAX_TITLE_LENGTH {
        proposed.to_string()
    } else {
        current.to_string()
    }
}

pub(crate) fn remaining_title_chars(title: &str) -> usize {
    MAX_TITLE_LENGTH.saturating_sub(char_len(title))
}

/// A note ready to be created.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewNote {
    title: String,
    body: String,
}

impl NewNote {
    pub fn new(title: &str, body: &str) -> Result<Self, ValidationError> {
        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(ValidationError::EmptyNote);
        }
        if char_len(title) > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong);
        }
        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }
}

/// Account details accepted by the registration form.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    name: String,
    email: String,
    password: String,
}

impl Registration {
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if char_len(password) < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_contract_deserialize() {
        let json = r#"{
            "id": "notes-jT-jjsyz61J8XKiI",
            "title": "Welcome to Notes, Dimas!",
            "body": "Welcome to Notes! This is your first note.",
            "owner": "user-XWWp8Xa0Idw-tDs9",
            "archived": false,
            "createdAt": "2022-07-28T10:03:12.594Z"
        }"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.id, "notes-jT-jjsyz61J8XKiI");
        assert_eq!(note.created_at, "2022-07-28T10:03:12.594Z");
        assert!(!note.archived);
        assert_eq!(note.owner.as_deref(), Some("user-XWWp8Xa0Idw-tDs9"));
    }

    #[test]
    fn test_note_missing_title_defaults_to_empty() {
        let json = r#"{"id":"n1","body":"b","archived":true,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.title, "");
        assert!(note.archived);
    }

    #[test]
    fn test_title_exactly_at_limit_is_accepted() {
        let fifty = "a".repeat(MAX_TITLE_LENGTH);
        assert_eq!(accept_title_input("", &fifty), fifty);
        assert_eq!(remaining_title_chars(&fifty), 0);
        assert!(NewNote::new(&fifty, "body").is_ok());
    }

    #[test]
    fn test_title_one_over_limit_is_rejected() {
        let fifty = "a".repeat(MAX_TITLE_LENGTH);
        let fifty_one = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(accept_title_input(&fifty, &fifty_one), fifty);
        assert_eq!(
            NewNote::new(&fifty_one, "body"),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        let title = "é".repeat(MAX_TITLE_LENGTH);
        assert_eq!(accept_title_input("", &title), title);
        assert_eq!(remaining_title_chars("héllo"), MAX_TITLE_LENGTH - 5);
    }

    #[test]
    fn test_new_note_rejects_blank_fields() {
        assert_eq!(NewNote::new("", "body"), Err(ValidationError::EmptyNote));
        assert_eq!(NewNote::new("  ", "body"), Err(ValidationError::EmptyNote));
        assert_eq!(NewNote::new("title", ""), Err(ValidationError::EmptyNote));
    }

    #[test]
    fn test_new_note_serializes_title_and_body() {
        let n = NewNote::new("Hi", "<b>World</b>").expect("valid");
        let v = serde_json::to_value(&n).expect("should serialize");
        assert_eq!(v, serde_json::json!({"title": "Hi", "body": "<b>World</b>"}));
    }

    #[test]
    fn test_registration_validation_order() {
        assert_eq!(
            Registration::new("", "a@x.com", "secret1", "secret1"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            Registration::new("Ann", "a@x.com", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            Registration::new("Ann", "a@x.com", "short", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        let r = Registration::new(" Ann ", "ann@x.com ", "secret1", "secret1").expect("valid");
        assert_eq!(r.name(), "Ann");
        assert_eq!(r.email(), "ann@x.com");
    }

    #[test]
    fn test_credentials_trim_email_only() {
        let c = Credentials::new(" ann@x.com ", " pw ");
        assert_eq!(c.email, "ann@x.com");
        assert_eq!(c.password, " pw ");
    }
}
