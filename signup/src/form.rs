use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the registration form.
///
/// The declaration order is the order in which the form is laid out, and the
/// order in which errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    FullName,
    Email,
    Password,
    ConfirmPassword,
    AcceptedTerms,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Username,
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::AcceptedTerms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::AcceptedTerms => "acceptedTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An edit of one of the text fields of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Username(String),
    FullName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            Self::Username(_) => Field::Username,
            Self::FullName(_) => Field::FullName,
            Self::Email(_) => Field::Email,
            Self::Password(_) => Field::Password,
            Self::ConfirmPassword(_) => Field::ConfirmPassword,
        }
    }
}

/// All the values the user typed in the registration form, at one point in time.
///
/// A snapshot is never mutated in place: every edit produces a new one.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub accepted_terms: bool,
}

impl FormSnapshot {
    /// Returns a copy of this snapshot with the given edit applied.
    pub fn edited(&self, edit: FieldEdit) -> Self {
        let mut snapshot = self.clone();
        match edit {
            FieldEdit::Username(v) => snapshot.username = v,
            FieldEdit::FullName(v) => snapshot.full_name = v,
            FieldEdit::Email(v) => snapshot.email = v,
            FieldEdit::Password(v) => snapshot.password = v,
            FieldEdit::ConfirmPassword(v) => snapshot.confirm_password = v,
        }
        snapshot
    }

    /// Returns a copy of this snapshot with the terms acceptance set.
    pub fn with_accepted_terms(&self, accepted: bool) -> Self {
        Self {
            accepted_terms: accepted,
            ..self.clone()
        }
    }

    /// The text value of a field, `None` for the terms checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::AcceptedTerms => None,
        }
    }
}

impl fmt::Debug for FormSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSnapshot")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"REDACTED")
            .field("confirm_password", &"REDACTED")
            .field("accepted_terms", &self.accepted_terms)
            .finish()
    }
}
