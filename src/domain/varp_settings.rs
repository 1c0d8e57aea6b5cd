// Copyright (c) 2025 - Cowboy AI, Inc.
//! VARP Settings Resource Descriptor
//!
//! The validated, canonical form of an `eos_varp` declaration. This is the
//! value the catalog holds and the convergence engine diffs against the
//! provider's readback.
//!
//! # Invariants
//! - `name` is always [`SINGLETON_NAME`]
//! - A MAC address exists if and only if `ensure` is `present`
//! - The MAC address is canonical (six lowercase octets, colon-separated)
//! - Immutable after construction; an update is a new descriptor

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::declaration::Declaration;
use super::ensure::Ensure;
use super::invariants::{
    reject_unknown_properties, require_property, validate_mac_input, validate_name,
    ValidationError, MAC_ADDRESS_FIELD, SINGLETON_NAME,
};
use super::network::MacAddress;
use crate::state_machine::VarpState;

/// Switch-wide virtual-ARP settings
///
/// # Examples
///
/// ```rust
/// use cim_infrastructure_varp::domain::{build_descriptor, Ensure};
/// use serde_json::json;
///
/// let settings = build_descriptor(
///     &json!("settings"),
///     Ensure::Present,
///     Some(&json!("001c.7300.0099")),
/// ).unwrap();
/// assert_eq!(settings.mac_address().unwrap().canonical(), "00:1c:73:00:00:99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VarpSettings {
    name: String,
    #[serde(flatten)]
    state: VarpState,
}

impl VarpSettings {
    /// Property keys a declaration may carry besides `name` and `ensure`
    pub const PROPERTY_FIELDS: &'static [&'static str] = &[MAC_ADDRESS_FIELD];

    /// Descriptor for a device configured with `mac_address`
    pub fn present(mac_address: MacAddress) -> Self {
        Self {
            name: SINGLETON_NAME.to_string(),
            state: VarpState::Present { mac_address },
        }
    }

    /// Descriptor for a device left at its default
    pub fn absent() -> Self {
        Self {
            name: SINGLETON_NAME.to_string(),
            state: VarpState::Absent,
        }
    }

    /// Validate and canonicalize a raw declaration
    pub fn from_declaration(declaration: &Declaration) -> Result<Self, ValidationError> {
        // Identity short-circuits before ensure is looked at
        validate_name(&declaration.name)?;
        reject_unknown_properties(&declaration.properties, Self::PROPERTY_FIELDS)?;
        let ensure = Ensure::from_value(declaration.ensure.as_ref())?;
        build_descriptor(
            &declaration.name,
            ensure,
            declaration.property(MAC_ADDRESS_FIELD),
        )
    }

    /// Identity key, stable for the lifetime of the catalog
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ensure(&self) -> Ensure {
        self.state.ensure()
    }

    /// Canonical MAC address; always `None` when ensure is absent
    pub fn mac_address(&self) -> Option<&MacAddress> {
        self.state.mac_address()
    }

    /// Desired lifecycle state
    pub fn state(&self) -> VarpState {
        self.state
    }
}

/// Assemble a descriptor from validated parts
///
/// Identity is checked first. With `ensure => present` the MAC is required,
/// type-checked and canonicalized in that order; with `ensure => absent` it
/// is ignored entirely.
pub fn build_descriptor(
    name: &Value,
    ensure: Ensure,
    raw_mac: Option<&Value>,
) -> Result<VarpSettings, ValidationError> {
    let name = validate_name(name)?;

    let state = match ensure {
        Ensure::Absent => {
            if raw_mac.is_some() {
                debug!("Ignoring mac_address on absent eos_varp declaration");
            }
            VarpState::Absent
        }
        Ensure::Present => {
            let raw = require_property(MAC_ADDRESS_FIELD, raw_mac)?;
            let input = validate_mac_input(raw)?;
            let mac_address = MacAddress::new(&input)?;
            debug!(input = %input, canonical = %mac_address, "Canonicalized mac_address");
            VarpState::Present { mac_address }
        }
    };

    Ok(VarpSettings { name, state })
}
