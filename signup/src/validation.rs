use std::collections::BTreeMap;
use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::{Field, FormSnapshot};

pub const USERNAME_REQUIRED: &str = "username required";
pub const NAME_REQUIRED: &str = "name required";
pub const EMAIL_REQUIRED: &str = "email required";
pub const EMAIL_INVALID: &str = "invalid email";
pub const PASSWORD_REQUIRED: &str = "password required";
pub const PASSWORDS_MISMATCH: &str = "passwords do not match";
pub const TERMS_REQUIRED: &str = "must accept terms of use";

// Something, '@', something, '.', something. Not anchored.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("hardcoded pattern"));

/// Which message an email field gets when it is both empty and malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailPrecedence {
    /// Both checks run and the shape check, evaluated last, wins.
    #[default]
    Shape,
    /// The shape check only runs on a non-empty value.
    Required,
}

/// How an email address is checked once it is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailCheck {
    /// Minimal structural shape, `a@b.c`.
    #[default]
    Pattern,
    /// RFC 5322 address with a top level domain.
    Rfc,
}

impl EmailCheck {
    pub fn accepts(&self, email: &str) -> bool {
        match self {
            Self::Pattern => EMAIL_SHAPE.is_match(email),
            Self::Rfc => EmailAddress::parse_with_options(
                email,
                email_address::Options::default().with_required_tld(),
            )
            .is_ok(),
        }
    }
}

/// Tunables of the rule table. The default is the plain rule table: no
/// minimum password length and the shape check winning on the email field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default)]
    pub email_precedence: EmailPrecedence,
    #[serde(default)]
    pub email_check: EmailCheck,
    #[serde(default)]
    pub min_password_length: Option<usize>,
}

/// Current validation failures, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message of a field, replacing any previous one.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Validate a snapshot with the default rules.
pub fn validate(form: &FormSnapshot) -> ErrorMap {
    validate_with(form, &ValidationRules::default())
}

pub fn validate_with(form: &FormSnapshot, rules: &ValidationRules) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.username.is_empty() {
        errors.set(Field::Username, USERNAME_REQUIRED);
    }

    if form.full_name.is_empty() {
        errors.set(Field::FullName, NAME_REQUIRED);
    }

    if form.email.is_empty() {
        errors.set(Field::Email, EMAIL_REQUIRED);
    }
    let check_shape = match rules.email_precedence {
        EmailPrecedence::Shape => true,
        EmailPrecedence::Required => !form.email.is_empty(),
    };
    if check_shape && !rules.email_check.accepts(&form.email) {
        errors.set(Field::Email, EMAIL_INVALID);
    }

    if form.password.is_empty() {
        errors.set(Field::Password, PASSWORD_REQUIRED);
    } else if let Some(min) = rules.min_password_length {
        if form.password.chars().count() < min {
            errors.set(
                Field::Password,
                format!("password must be at least {} characters", min),
            );
        }
    }

    if form.password != form.confirm_password {
        errors.set(Field::ConfirmPassword, PASSWORDS_MISMATCH);
    }

    if !form.accepted_terms {
        errors.set(Field::AcceptedTerms, TERMS_REQUIRED);
    }

    log::debug!(
        "Form validated with {} error(s): {:?}",
        errors.len(),
        errors.fields().collect::<Vec<_>>()
    );

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldEdit;

    fn valid_form() -> FormSnapshot {
        FormSnapshot {
            username: "joe".to_string(),
            full_name: "Joe Doe".to_string(),
            email: "joe@x.com".to_string(),
            password: "Abc123".to_string(),
            confirm_password: "Abc123".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn empty_form() {
        let errors = validate(&FormSnapshot::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![
                Field::Username,
                Field::FullName,
                Field::Email,
                Field::Password,
                Field::AcceptedTerms
            ]
        );
        assert_eq!(errors.get(Field::Username), Some(USERNAME_REQUIRED));
        assert_eq!(errors.get(Field::FullName), Some(NAME_REQUIRED));
        // The shape check runs last and an empty string does not have the shape.
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(errors.get(Field::AcceptedTerms), Some(TERMS_REQUIRED));
        assert!(!errors.contains(Field::ConfirmPassword));
    }

    #[test]
    fn valid_form_has_no_error() {
        let form = valid_form();
        let errors = validate(&form);
        assert!(errors.is_empty(), "{:?}", errors);
        // Validation does not touch its input and is repeatable.
        assert_eq!(form, valid_form());
        assert_eq!(validate(&form), errors);
    }

    #[test]
    fn password_mismatch() {
        let form = valid_form()
            .edited(FieldEdit::Password("secret1".to_string()))
            .edited(FieldEdit::ConfirmPassword("secret2".to_string()));
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORDS_MISMATCH));

        let form = valid_form().edited(FieldEdit::ConfirmPassword(String::new()));
        assert_eq!(
            validate(&form).get(Field::ConfirmPassword),
            Some(PASSWORDS_MISMATCH)
        );
    }

    #[test]
    fn email_shape() {
        let with_email =
            |email: &str| validate(&valid_form().edited(FieldEdit::Email(email.to_string())));

        assert_eq!(with_email("bad-email").get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(with_email("joe@x").get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(with_email("@x.com").get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(with_email("joe@.com").get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(with_email("joe@x.").get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(with_email("joe @x.com").get(Field::Email), Some(EMAIL_INVALID));

        assert!(with_email("joe@x.com").is_empty());
        // The pattern is searched, not anchored.
        assert!(with_email("my mail: joe@x.com please").is_empty());
        assert!(with_email("a@b@c.d").is_empty());
        // Only Unicode white space breaks the shape, a BOM does not.
        assert!(with_email("a\u{FEFF}@b.c").is_empty());
    }

    #[test]
    fn email_required_precedence() {
        let rules = ValidationRules {
            email_precedence: EmailPrecedence::Required,
            ..Default::default()
        };
        let form = valid_form().edited(FieldEdit::Email(String::new()));
        assert_eq!(validate(&form).get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(
            validate_with(&form, &rules).get(Field::Email),
            Some(EMAIL_REQUIRED)
        );

        let form = valid_form().edited(FieldEdit::Email("bad-email".to_string()));
        assert_eq!(
            validate_with(&form, &rules).get(Field::Email),
            Some(EMAIL_INVALID)
        );
    }

    #[test]
    fn email_rfc_check() {
        let rules = ValidationRules {
            email_check: EmailCheck::Rfc,
            ..Default::default()
        };
        let form = valid_form().edited(FieldEdit::Email("joe@example.org".to_string()));
        assert!(validate_with(&form, &rules).is_empty());

        // Has the loose shape, but is not a single address.
        let form = valid_form().edited(FieldEdit::Email("my mail: joe@x.com".to_string()));
        assert!(validate(&form).is_empty());
        assert_eq!(
            validate_with(&form, &rules).get(Field::Email),
            Some(EMAIL_INVALID)
        );
    }

    #[test]
    fn minimum_password_length() {
        let rules = ValidationRules {
            min_password_length: Some(6),
            ..Default::default()
        };
        let form = valid_form()
            .edited(FieldEdit::Password("abc".to_string()))
            .edited(FieldEdit::ConfirmPassword("abc".to_string()));
        assert!(validate(&form).is_empty());
        assert_eq!(
            validate_with(&form, &rules).get(Field::Password),
            Some("password must be at least 6 characters")
        );

        let form = valid_form()
            .edited(FieldEdit::Password(String::new()))
            .edited(FieldEdit::ConfirmPassword(String::new()));
        assert_eq!(
            validate_with(&form, &rules).get(Field::Password),
            Some(PASSWORD_REQUIRED)
        );

        assert!(validate_with(&valid_form(), &rules).is_empty());
    }

    #[test]
    fn error_map_serializes_by_field_name() {
        let errors = validate(&valid_form().with_accepted_terms(false));
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"acceptedTerms":"must accept terms of use"}"#
        );
    }
}
