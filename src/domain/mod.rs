// Copyright (c) 2025 - Cowboy AI, Inc.
//! VARP Settings Domain Model
//!
//! Value objects and validation for the `eos_varp` resource type: a
//! singleton description of the switch-wide virtual-ARP MAC address.
//!
//! # Pipeline
//!
//! ```text
//! Declaration ─▶ validate_name ─▶ validate_mac_input ─▶ MacAddress::new ─▶ VarpSettings
//! ```
//!
//! # Value Objects with Invariants
//!
//! - [`MacAddress`] - 48-bit MAC address, canonical lowercase colon form
//! - [`Ensure`] - declared lifecycle state (`present` / `absent`)
//! - [`VarpSettings`] - immutable, validated resource descriptor

pub mod declaration;
pub mod ensure;
pub mod invariants;
pub mod network;
pub mod resource_type;
pub mod varp_settings;

pub use declaration::Declaration;
pub use ensure::Ensure;
pub use invariants::{
    validate_mac_input, validate_name, ValidationError, ValidationErrorKind, ValidationResult,
    MAC_ADDRESS_FIELD, SINGLETON_NAME,
};
pub use network::{canonicalize_mac, MacAddress, Notation};
pub use resource_type::{
    ObservedVarp, PropertyDoc, ResourceDescriptor, ResourceType, VarpResourceType,
};
pub use varp_settings::{build_descriptor, VarpSettings};
