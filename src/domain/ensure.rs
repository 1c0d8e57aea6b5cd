// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ensure Parameter
//!
//! Declared existence of a resource. For a global setting "absent" means
//! the device is left at its default, not that anything is deleted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::invariants::{require_string, ValidationError, ENSURE_FIELD};

/// Declared lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    /// The setting is configured on the device
    #[default]
    Present,
    /// The setting is reset to the device default
    Absent,
}

impl Ensure {
    /// Canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Parse a raw declaration value; a missing value means `present`
    pub fn from_value(value: Option<&Value>) -> Result<Self, ValidationError> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Ok(Self::default());
        };

        match require_string(ENSURE_FIELD, value)? {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(ValidationError::InvalidEnsure {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn test_ensure_defaults_to_present() {
        assert_eq!(Ensure::from_value(None).unwrap(), Ensure::Present);
        assert_eq!(Ensure::from_value(Some(&Value::Null)).unwrap(), Ensure::Present);
    }

    #[test]
    fn test_ensure_parsing() {
        assert_eq!(Ensure::from_value(Some(&json!("present"))).unwrap(), Ensure::Present);
        assert_eq!(Ensure::from_value(Some(&json!("absent"))).unwrap(), Ensure::Absent);
    }

    #[test]
    fn test_ensure_rejects_unknown_values() {
        let err = Ensure::from_value(Some(&json!("purged"))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnsure);
        assert_eq!(err.field(), "ensure");

        let err = Ensure::from_value(Some(&json!(true))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::NotAString);
    }

    #[test]
    fn test_ensure_serde() {
        assert_eq!(serde_json::to_string(&Ensure::Absent).unwrap(), "\"absent\"");
        let ensure: Ensure = serde_json::from_str("\"present\"").unwrap();
        assert_eq!(ensure, Ensure::Present);
    }
}
