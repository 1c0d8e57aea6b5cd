// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw Resource Declaration
//!
//! A declaration as handed over by the catalog compiler: already parsed,
//! not yet validated. Every field is an untyped JSON value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped `(name, ensure, properties)` tuple
///
/// ```rust
/// use cim_infrastructure_varp::domain::Declaration;
///
/// let declaration: Declaration = serde_json::from_str(
///     r#"{"name": "settings", "mac_address": "001c.7300.0099"}"#,
/// ).unwrap();
/// assert!(declaration.ensure.is_none());
/// assert!(declaration.property("mac_address").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Namevar; missing deserializes to `null`
    #[serde(default)]
    pub name: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensure: Option<Value>,

    /// Every other key of the declaration
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Declaration {
    pub fn new(name: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_ensure(mut self, ensure: impl Into<Value>) -> Self {
        self.ensure = Some(ensure.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
