// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Type Contract
//!
//! A resource type turns raw declarations into immutable descriptors and
//! compares descriptors with provider readbacks. Types are registered
//! explicitly in a [`ResourceTypeRegistry`]; nothing is discovered.
//!
//! [`ResourceTypeRegistry`]: crate::registry::ResourceTypeRegistry

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::declaration::Declaration;
use super::ensure::Ensure;
use super::invariants::{
    reject_unknown_properties, require_property, validate_mac_input, validate_name,
    ValidationError, ValidationResult, MAC_ADDRESS_FIELD, NAME_FIELD,
};
use super::varp_settings::VarpSettings;
use crate::state_machine::{Change, StateMachine, VarpState};

/// Read-only view the convergence engine needs of any descriptor
pub trait ResourceDescriptor {
    /// Identity key within the resource type
    fn name(&self) -> &str;

    fn ensure(&self) -> Ensure;
}

impl ResourceDescriptor for VarpSettings {
    fn name(&self) -> &str {
        VarpSettings::name(self)
    }

    fn ensure(&self) -> Ensure {
        VarpSettings::ensure(self)
    }
}

/// Documentation for one parameter or property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDoc {
    pub name: &'static str,
    pub description: &'static str,
}

/// Capability every managed resource type provides
pub trait ResourceType: Send + Sync + 'static {
    /// Validated, canonical, immutable form of a declaration
    type Descriptor: ResourceDescriptor + Clone + PartialEq + Serialize + Send + Sync + 'static;

    /// Actual state as read back by the provider
    type Observed: DeserializeOwned;

    /// Work required to converge observed onto desired
    type Change: Serialize;

    /// Catalog-wide type name, e.g. `eos_varp`
    fn type_name(&self) -> &'static str;

    fn doc(&self) -> &'static str;

    fn properties(&self) -> &'static [PropertyDoc];

    /// Type-check a declaration without building anything
    fn validate(&self, declaration: &Declaration) -> ValidationResult;

    /// Validate and normalize a declaration into a descriptor
    fn canonicalize(&self, declaration: &Declaration) -> Result<Self::Descriptor, ValidationError>;

    /// Compare a descriptor against the provider's readback
    fn diff(
        &self,
        desired: &Self::Descriptor,
        observed: &Self::Observed,
    ) -> Result<Self::Change, ValidationError>;
}

/// Provider readback of the VARP settings
///
/// `mac_address` is whatever notation the device reports; `None` means the
/// device has no virtual MAC configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedVarp {
    #[serde(default)]
    pub mac_address: Option<String>,
}

/// The `eos_varp` resource type
#[derive(Debug, Clone, Copy, Default)]
pub struct VarpResourceType;

impl VarpResourceType {
    pub const TYPE_NAME: &'static str = "eos_varp";

    const DOC: &'static str = "Manage global VARP settings on Arista EOS. \
        Configure the Virtual-ARP mac address.";

    const PROPERTIES: &'static [PropertyDoc] = &[
        PropertyDoc {
            name: NAME_FIELD,
            description: "Resource name must be 'settings' and is not used to configure EOS.",
        },
        PropertyDoc {
            name: MAC_ADDRESS_FIELD,
            description: "Assigns a virtual MAC address to the switch.",
        },
    ];
}

impl ResourceType for VarpResourceType {
    type Descriptor = VarpSettings;
    type Observed = ObservedVarp;
    type Change = Change;

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn doc(&self) -> &'static str {
        Self::DOC
    }

    fn properties(&self) -> &'static [PropertyDoc] {
        Self::PROPERTIES
    }

    fn validate(&self, declaration: &Declaration) -> ValidationResult {
        validate_name(&declaration.name)?;
        reject_unknown_properties(&declaration.properties, VarpSettings::PROPERTY_FIELDS)?;
        if Ensure::from_value(declaration.ensure.as_ref())? == Ensure::Present {
            let raw = require_property(MAC_ADDRESS_FIELD, declaration.property(MAC_ADDRESS_FIELD))?;
            validate_mac_input(raw)?;
        }
        Ok(())
    }

    fn canonicalize(&self, declaration: &Declaration) -> Result<VarpSettings, ValidationError> {
        VarpSettings::from_declaration(declaration)
    }

    fn diff(&self, desired: &VarpSettings, observed: &ObservedVarp) -> Result<Change, ValidationError> {
        let current = VarpState::observed(observed.mac_address.as_deref())?;
        let (_, change) = current.transition(&desired.state());
        debug!(?current, ?change, "Computed eos_varp change");
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MacAddress, ValidationErrorKind};

    fn declaration(mac: &str) -> Declaration {
        Declaration::new("settings").with_property("mac_address", mac)
    }

    #[test]
    fn test_validate_rejects_unknown_properties() {
        let varp = VarpResourceType;
        let declaration = declaration("00:1c:73:00:00:99").with_property("vlan", 3);
        let err = varp.validate(&declaration).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnknownProperty);
        assert_eq!(err.field(), "vlan");
    }

    #[test]
    fn test_validate_does_not_parse_syntax() {
        let varp = VarpResourceType;
        assert!(varp.validate(&declaration("not-a-mac")).is_ok());

        let err = varp.canonicalize(&declaration("not-a-mac")).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MalformedAddress);
    }

    #[test]
    fn test_validate_checks_types() {
        let varp = VarpResourceType;
        let err = varp
            .validate(&Declaration::new("settings").with_property("mac_address", 7))
            .unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::NotAString);

        let err = varp.validate(&Declaration::new("settings")).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingRequiredProperty);

        assert!(varp
            .validate(&Declaration::new("settings").with_ensure("absent"))
            .is_ok());
    }

    #[test]
    fn test_diff_against_readback() {
        let varp = VarpResourceType;
        let desired = varp.canonicalize(&declaration("001c.7300.0099")).unwrap();

        let converged = ObservedVarp {
            mac_address: Some("00:1C:73:00:00:99".to_string()),
        };
        assert_eq!(varp.diff(&desired, &converged).unwrap(), Change::NoOp);

        let unset = ObservedVarp::default();
        assert_eq!(
            varp.diff(&desired, &unset).unwrap(),
            Change::Create {
                mac_address: MacAddress::new("00:1c:73:00:00:99").unwrap()
            }
        );
    }

    #[test]
    fn test_diff_rejects_malformed_readback() {
        let varp = VarpResourceType;
        let observed = ObservedVarp {
            mac_address: Some("bogus".to_string()),
        };
        let err = varp.diff(&VarpSettings::absent(), &observed).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MalformedAddress);
    }

    #[test]
    fn test_documentation() {
        let varp = VarpResourceType;
        assert_eq!(varp.type_name(), "eos_varp");
        assert!(varp.doc().contains("Virtual-ARP"));
        let names: Vec<_> = varp.properties().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["name", "mac_address"]);
    }
}
