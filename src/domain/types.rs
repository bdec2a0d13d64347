//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., URL-safe slugs, digit-only
//! phone numbers, validated URLs) so that once a value reaches the domain layer
//! it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use phonenumber::parse;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided slug contained characters that are not URL-safe.
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Strips every character that is not an ASCII digit.
///
/// `"+39 378 011 1216"` becomes `"393780111216"`.
pub fn normalize_phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Business name shown in the page header and the message greeting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Constructs a trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Ok(Self(NonEmptyString::new(value)?.into_inner()))
    }

    /// Two-letter avatar initials: first letters of the first two words, or the
    /// first two characters of a single word, uppercased.
    pub fn initials(&self) -> String {
        let mut words = self.0.split_whitespace();
        match (words.next(), words.next()) {
            (Some(first), Some(second)) => first
                .chars()
                .take(1)
                .chain(second.chars().take(1))
                .collect::<String>()
                .to_uppercase(),
            _ => self.0.chars().take(2).collect::<String>().to_uppercase(),
        }
    }
}

string_newtype_impls!(DisplayName);

/// URL path segment identifying a business profile.
///
/// Comparison is exact: no case folding is applied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileSlug(String);

impl ProfileSlug {
    /// Accepts ASCII alphanumerics, `-` and `_` only.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let slug = NonEmptyString::new(value)?.into_inner();
        if slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            Ok(Self(slug))
        } else {
            Err(TypeConstraintError::InvalidSlug(slug))
        }
    }
}

string_newtype_impls!(ProfileSlug);

/// WhatsApp destination number kept as international digits only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct WhatsAppPhone(String);

impl WhatsAppPhone {
    /// Strips formatting and checks that the digits parse as an international number.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let digits = normalize_phone_digits(&value.into());
        if digits.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        parse(None, format!("+{digits}")).map_err(|_| TypeConstraintError::InvalidPhone)?;
        Ok(Self(digits))
    }
}

string_newtype_impls!(WhatsAppPhone);

const DEFAULT_THEME_HEX: &str = "#2563eb";

const THEME_HEX: &[(&str, &str)] = &[
    ("blue-600", "#2563eb"),
    ("emerald-600", "#059669"),
    ("violet-600", "#7c3aed"),
    ("amber-600", "#d97706"),
];

/// Symbolic theme colour token such as `blue-600`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(String);

impl ThemeColor {
    /// Constructs a trimmed, non-empty token.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Ok(Self(NonEmptyString::new(value)?.into_inner()))
    }

    /// Hex colour for inline styles; unknown tokens map to the default blue.
    pub fn hex(&self) -> &'static str {
        THEME_HEX
            .iter()
            .find(|(token, _)| *token == self.0)
            .map(|(_, hex)| *hex)
            .unwrap_or(DEFAULT_THEME_HEX)
    }
}

string_newtype_impls!(ThemeColor);

fn validated_url(value: String) -> Result<String, TypeConstraintError> {
    let url = NonEmptyString::new(value)?;
    if url.as_str().validate_url() {
        Ok(url.into_inner())
    } else {
        Err(TypeConstraintError::InvalidUrl)
    }
}

/// Public URL of a photo hosted by the image service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoUrl(String);

impl PhotoUrl {
    /// Ensures a trimmed, well-formed URL.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Ok(Self(validated_url(value.into())?))
    }
}

string_newtype_impls!(PhotoUrl);

/// Logo image shown in the page header.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct LogoUrl(String);

impl LogoUrl {
    /// Ensures a trimmed, well-formed URL.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Ok(Self(validated_url(value.into())?))
    }
}

string_newtype_impls!(LogoUrl);
