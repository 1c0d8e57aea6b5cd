// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for MAC Canonicalization
//!
//! Drift detection compares canonical strings, so canonicalization must be
//! deterministic, idempotent and independent of the input notation.

use cim_infrastructure_varp::domain::Notation;
use cim_infrastructure_varp::{build_descriptor, canonicalize_mac, Ensure, MacAddress};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Strategies
// ============================================================================

fn notation() -> impl Strategy<Value = Notation> {
    prop_oneof![
        Just(Notation::Colon),
        Just(Notation::Hyphen),
        Just(Notation::Dot),
    ]
}

/// Any 48-bit address written in any notation, with random letter case
fn mac_input() -> impl Strategy<Value = (MacAddress, String)> {
    (any::<[u8; 6]>(), notation(), any::<bool>()).prop_map(|(octets, notation, upper)| {
        let mac = MacAddress::from_octets(octets);
        let rendered = mac.to_notation(notation);
        let rendered = if upper {
            rendered.to_uppercase()
        } else {
            rendered
        };
        (mac, rendered)
    })
}

fn is_canonical(s: &str) -> bool {
    let groups: Vec<&str> = s.split(':').collect();
    groups.len() == 6
        && groups.iter().all(|g| {
            g.len() == 2
                && g.chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: every notation of an address canonicalizes to the same string
    #[test]
    fn prop_notation_independent((mac, input) in mac_input()) {
        prop_assert_eq!(canonicalize_mac(&input).unwrap(), mac.canonical());
    }

    /// Property: canonicalize(canonicalize(s)) == canonicalize(s)
    #[test]
    fn prop_canonicalization_is_idempotent((_, input) in mac_input()) {
        let once = canonicalize_mac(&input).unwrap();
        let twice = canonicalize_mac(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: output is six lowercase hex pairs joined by colons
    #[test]
    fn prop_output_is_canonical((_, input) in mac_input()) {
        let canonical = canonicalize_mac(&input).unwrap();
        prop_assert!(is_canonical(&canonical), "{} is not canonical", canonical);
    }

    /// Property: canonicalization is deterministic and never panics
    #[test]
    fn prop_arbitrary_strings_are_deterministic(input in ".{0,24}") {
        let first = canonicalize_mac(&input);
        let second = canonicalize_mac(&input);
        prop_assert_eq!(&first, &second);
        if let Ok(canonical) = first {
            prop_assert!(is_canonical(&canonical));
        }
    }

    /// Property: twelve hex digits without grouping are never an address
    #[test]
    fn prop_undelimited_digits_rejected(octets in any::<[u8; 6]>()) {
        let digits = MacAddress::from_octets(octets).canonical().replace(':', "");
        prop_assert!(canonicalize_mac(&digits).is_err(), "{} was accepted", digits);
    }

    /// Property: descriptors built from equivalent notations are equal
    #[test]
    fn prop_descriptor_equality_ignores_notation(
        octets in any::<[u8; 6]>(),
        a in notation(),
        b in notation(),
    ) {
        let mac = MacAddress::from_octets(octets);
        let left = build_descriptor(&json!("settings"), Ensure::Present, Some(&json!(mac.to_notation(a)))).unwrap();
        let right = build_descriptor(&json!("settings"), Ensure::Present, Some(&json!(mac.to_notation(b)))).unwrap();
        prop_assert_eq!(left, right);
    }
}
