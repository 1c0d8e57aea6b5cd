// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Ensure Lifecycle
//!
//! Applying a change must converge: once the observed state has been
//! driven to the desired state, diffing again yields no work.

use cim_infrastructure_varp::{Change, MacAddress, StateMachine, VarpState};
use proptest::prelude::*;

fn varp_state() -> impl Strategy<Value = VarpState> {
    prop_oneof![
        Just(VarpState::Absent),
        any::<[u8; 6]>().prop_map(|octets| VarpState::Present {
            mac_address: MacAddress::from_octets(octets),
        }),
    ]
}

proptest! {
    /// Property: the next state is always the desired state
    #[test]
    fn prop_transition_reaches_desired(current in varp_state(), desired in varp_state()) {
        let (next, _) = current.transition(&desired);
        prop_assert_eq!(next, desired);
    }

    /// Property: a converged resource needs no change
    #[test]
    fn prop_converged_is_noop(current in varp_state(), desired in varp_state()) {
        let (next, _) = current.transition(&desired);
        let (_, change) = next.transition(&desired);
        prop_assert_eq!(change, Change::NoOp);
    }

    /// Property: a change is requested exactly when states differ
    #[test]
    fn prop_change_iff_drift(current in varp_state(), desired in varp_state()) {
        let (_, change) = current.transition(&desired);
        prop_assert_eq!(change.is_change(), current != desired);
    }

    /// Property: present → present never removes, it updates in place
    #[test]
    fn prop_present_to_present_never_removes(a in any::<[u8; 6]>(), b in any::<[u8; 6]>()) {
        let current = VarpState::Present { mac_address: MacAddress::from_octets(a) };
        let desired = VarpState::Present { mac_address: MacAddress::from_octets(b) };
        let (_, change) = current.transition(&desired);
        prop_assert!(
            matches!(change, Change::NoOp | Change::Update { .. }),
            "unexpected change {:?}",
            change
        );
    }
}
