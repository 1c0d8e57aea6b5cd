//! Declarative virtual-ARP settings for the Composable Information Machine
//!
//! This crate defines the `eos_varp` resource type: how a declaration of the
//! switch-wide virtual-ARP MAC address is validated, canonicalized, frozen
//! into a descriptor, and compared against what a provider reads back from
//! the device. It performs no device I/O.

pub mod domain;
pub mod errors;
pub mod registry;
pub mod state_machine;

// Re-export commonly used types
pub use domain::{
    build_descriptor, canonicalize_mac, validate_mac_input, validate_name, Declaration, Ensure,
    MacAddress, ObservedVarp, ResourceType, ValidationError, ValidationErrorKind, VarpResourceType,
    VarpSettings,
};
pub use errors::{ResourceError, ResourceResult};
pub use registry::{CatalogEntry, ResourceKey, ResourceTypeRegistry};
pub use state_machine::{Change, StateMachine, VarpState};
