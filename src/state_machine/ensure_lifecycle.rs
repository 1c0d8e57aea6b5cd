// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ensure Lifecycle State Machine
//!
//! # States
//!
//! - Absent: the virtual MAC is at the device default (unset)
//! - Present(mac): the virtual MAC is configured to `mac`
//!
//! # Inputs
//!
//! The desired state taken from a validated descriptor.
//!
//! # Outputs
//!
//! - Absent → Present: `Create`, the provider sets the MAC
//! - Present → Present (different MAC): `Update`, the provider overwrites in place
//! - Present → Absent: `Remove`, the provider resets to the default
//! - any state → same state: `NoOp`
//!
//! There is no terminal state; every pair of states is a legal transition.

use serde::{Deserialize, Serialize};

use super::StateMachine;
use crate::domain::{Ensure, MacAddress, ValidationError};

/// Desired or observed state of the VARP setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "ensure", rename_all = "lowercase")]
pub enum VarpState {
    Absent,
    Present { mac_address: MacAddress },
}

impl VarpState {
    /// Interpret a provider readback
    ///
    /// `None` or an empty string means the device has no virtual MAC
    /// configured. Any other value must canonicalize.
    pub fn observed(mac_address: Option<&str>) -> Result<Self, ValidationError> {
        match mac_address.map(str::trim) {
            None | Some("") => Ok(Self::Absent),
            Some(raw) => Ok(Self::Present {
                mac_address: MacAddress::new(raw)?,
            }),
        }
    }

    pub fn ensure(&self) -> Ensure {
        match self {
            Self::Absent => Ensure::Absent,
            Self::Present { .. } => Ensure::Present,
        }
    }

    pub fn mac_address(&self) -> Option<&MacAddress> {
        match self {
            Self::Absent => None,
            Self::Present { mac_address } => Some(mac_address),
        }
    }
}

/// Work the provider must perform to converge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Change {
    /// Already converged
    NoOp,
    /// Set the virtual MAC on a device that has none
    Create { mac_address: MacAddress },
    /// Overwrite the configured virtual MAC
    Update { from: MacAddress, to: MacAddress },
    /// Reset the virtual MAC to the device default
    Remove { mac_address: MacAddress },
}

impl Change {
    /// Whether the provider has anything to do
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::NoOp)
    }
}

impl StateMachine for VarpState {
    type Input = VarpState;
    type Output = Change;

    fn transition(&self, desired: &Self::Input) -> (Self, Self::Output) {
        use VarpState::*;

        let change = match (self, desired) {
            (Absent, Absent) => Change::NoOp,
            (Absent, Present { mac_address }) => Change::Create {
                mac_address: *mac_address,
            },
            (Present { mac_address: from }, Present { mac_address: to }) if from == to => {
                Change::NoOp
            }
            (Present { mac_address: from }, Present { mac_address: to }) => Change::Update {
                from: *from,
                to: *to,
            },
            (Present { mac_address }, Absent) => Change::Remove {
                mac_address: *mac_address,
            },
        };

        (*desired, change)
    }
}
