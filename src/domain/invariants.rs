// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Declaration Invariants
//!
//! Every raw declaration value passes through these functions before any
//! business logic sees it. Declarations arrive untyped (`serde_json::Value`)
//! and leave as typed values or as a [`ValidationError`].
//!
//! # Invariant Categories
//!
//! 1. **Type Invariants**: the raw value has the expected JSON type
//! 2. **Identity Invariants**: the namevar matches the singleton sentinel
//! 3. **Presence Invariants**: required properties are supplied, unknown
//!    ones are not
//! 4. **Syntax Invariants**: property values parse (see [`MacAddress`])
//!
//! All functions are pure: no I/O, no mutation, deterministic.
//!
//! [`MacAddress`]: crate::domain::MacAddress

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The only legal name for a VARP settings resource
pub const SINGLETON_NAME: &str = "settings";

/// Field name of the identity parameter
pub const NAME_FIELD: &str = "name";

/// Field name of the lifecycle parameter
pub const ENSURE_FIELD: &str = "ensure";

/// Field name of the virtual MAC address property
pub const MAC_ADDRESS_FIELD: &str = "mac_address";

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Taxonomy of validation failures, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    NotAString,
    InvalidIdentity,
    MissingRequiredProperty,
    MalformedAddress,
    InvalidEnsure,
    UnknownProperty,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotAString => "not_a_string",
            Self::InvalidIdentity => "invalid_identity",
            Self::MissingRequiredProperty => "missing_required_property",
            Self::MalformedAddress => "malformed_address",
            Self::InvalidEnsure => "invalid_ensure",
            Self::UnknownProperty => "unknown_property",
        };
        f.write_str(s)
    }
}

/// Validation error with context
///
/// Every variant names the offending field. Variants raised against a
/// supplied value carry that value verbatim so the catalog compiler can
/// report it without re-reading the declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Raw value was not a JSON string
    #[error("value {value} is invalid, must be a String.")]
    NotAString { field: &'static str, value: Value },

    /// Namevar was a string but not the singleton sentinel
    #[error("value {value:?} is invalid, namevar must be '{expected}'.")]
    InvalidIdentity { value: String, expected: &'static str },

    /// Property required by `ensure => present` was not supplied
    #[error("{field} is required when ensure is present")]
    MissingRequiredProperty { field: &'static str },

    /// Property could not be parsed as a 48-bit hardware address
    #[error("value {value:?} is invalid, must be a mac address.")]
    MalformedAddress { field: &'static str, value: String },

    /// Ensure value was a string outside `present`/`absent`
    #[error("invalid value {value:?} for ensure, valid values are present, absent")]
    InvalidEnsure { value: String },

    /// Declaration names a property the resource type does not have
    #[error("no parameter named '{field}'")]
    UnknownProperty { field: String },
}

impl ValidationError {
    /// Taxonomy kind of this error
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NotAString { .. } => ValidationErrorKind::NotAString,
            Self::InvalidIdentity { .. } => ValidationErrorKind::InvalidIdentity,
            Self::MissingRequiredProperty { .. } => ValidationErrorKind::MissingRequiredProperty,
            Self::MalformedAddress { .. } => ValidationErrorKind::MalformedAddress,
            Self::InvalidEnsure { .. } => ValidationErrorKind::InvalidEnsure,
            Self::UnknownProperty { .. } => ValidationErrorKind::UnknownProperty,
        }
    }

    /// Name of the declaration field that failed
    pub fn field(&self) -> &str {
        match self {
            Self::NotAString { field, .. }
            | Self::MissingRequiredProperty { field }
            | Self::MalformedAddress { field, .. } => *field,
            Self::InvalidIdentity { .. } => NAME_FIELD,
            Self::InvalidEnsure { .. } => ENSURE_FIELD,
            Self::UnknownProperty { field } => field.as_str(),
        }
    }
}

/// Require a raw value to be a string
pub fn require_string<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or_else(|| ValidationError::NotAString {
        field,
        value: value.clone(),
    })
}

/// Validate the namevar of a VARP settings resource
///
/// # Rules
/// - Must be a string
/// - Must equal [`SINGLETON_NAME`]; the setting is global to the switch, so
///   exactly one declaration of it may exist
pub fn validate_name(value: &Value) -> Result<String, ValidationError> {
    let name = require_string(NAME_FIELD, value)?;

    if name != SINGLETON_NAME {
        return Err(ValidationError::InvalidIdentity {
            value: name.to_string(),
            expected: SINGLETON_NAME,
        });
    }

    Ok(name.to_string())
}

/// Validate a raw MAC address value before canonicalization
///
/// # Rules
/// - Must be a string; syntax is checked by the canonicalizer
pub fn validate_mac_input(value: &Value) -> Result<String, ValidationError> {
    require_string(MAC_ADDRESS_FIELD, value).map(str::to_string)
}

/// Require a property that `ensure => present` depends on
pub fn require_property<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a Value, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingRequiredProperty { field }),
        Some(value) => Ok(value),
    }
}

/// Reject any property outside `known`
///
/// Keys are checked in sorted order, so the first unknown key reported is
/// deterministic.
pub fn reject_unknown_properties(
    properties: &Map<String, Value>,
    known: &[&str],
) -> ValidationResult {
    match properties.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::UnknownProperty { field: key.clone() }),
        None => Ok(()),
    }
}
