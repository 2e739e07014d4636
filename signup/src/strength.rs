use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum number of characters for a password to be rated above weak.
pub const MIN_RATED_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Weak => write!(f, "weak"),
            Self::Medium => write!(f, "medium"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

/// Rate a password from its shape only.
///
/// At least 6 characters with an uppercase letter and a digit is strong, at
/// least 6 characters is medium, anything shorter (the empty password
/// included) is weak.
pub fn classify(password: &str) -> StrengthLevel {
    let long_enough = password.chars().count() >= MIN_RATED_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_digit {
        StrengthLevel::Strong
    } else if long_enough {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    }
}

/// The level shown next to the password input: [`StrengthLevel::None`] while
/// the input is empty, the [`classify`] result otherwise.
pub fn indicator(password: &str) -> StrengthLevel {
    if password.is_empty() {
        StrengthLevel::None
    } else {
        classify(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("Abc123"), StrengthLevel::Strong);
        assert_eq!(classify("abcdef"), StrengthLevel::Medium);
        assert_eq!(classify("ab1"), StrengthLevel::Weak);
        assert_eq!(classify(""), StrengthLevel::Weak);

        // Uppercase and digit are not enough without the length.
        assert_eq!(classify("Ab1"), StrengthLevel::Weak);
        // Length and digit without uppercase.
        assert_eq!(classify("abc123"), StrengthLevel::Medium);
        // Length and uppercase without digit.
        assert_eq!(classify("Abcdef"), StrengthLevel::Medium);
        // Non ASCII letters are neither uppercase nor digits for the rating.
        assert_eq!(classify("Éééé٣٣"), StrengthLevel::Medium);
    }

    #[test]
    fn length_counts_characters() {
        // 5 characters, 10 bytes.
        assert_eq!(classify("ééééé"), StrengthLevel::Weak);
        assert_eq!(classify("éééééA1"), StrengthLevel::Strong);
        // Characters outside the BMP count once.
        assert_eq!(classify("😀😀😀"), StrengthLevel::Weak);
        assert_eq!(classify("😀😀😀😀😀😀"), StrengthLevel::Medium);
    }

    #[test]
    fn test_indicator() {
        assert_eq!(indicator(""), StrengthLevel::None);
        assert_eq!(indicator("a"), StrengthLevel::Weak);
        assert_eq!(indicator("Abc123"), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Medium.to_string(), "medium");
    }
}
