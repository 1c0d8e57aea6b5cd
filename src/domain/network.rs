// Copyright (c) 2025 - Cowboy AI, Inc.
//! MAC Address Value Object and Canonicalizer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::{ValidationError, MAC_ADDRESS_FIELD};

/// Textual notation of a 48-bit hardware address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `00:1c:73:00:00:99`
    Colon,
    /// `00-1c-73-00-00-99`
    Hyphen,
    /// `001c.7300.0099` (Cisco/EOS style)
    Dot,
}

impl Notation {
    /// Pick the notation from the first delimiter present in `s`
    pub fn detect(s: &str) -> Option<Self> {
        if s.contains(':') {
            Some(Self::Colon)
        } else if s.contains('-') {
            Some(Self::Hyphen)
        } else if s.contains('.') {
            Some(Self::Dot)
        } else {
            None
        }
    }

    fn delimiter(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Hyphen => '-',
            Self::Dot => '.',
        }
    }

    /// Hex digits per group
    fn group_width(self) -> usize {
        match self {
            Self::Colon | Self::Hyphen => 2,
            Self::Dot => 4,
        }
    }
}

/// MAC Address value object
///
/// Represents a 48-bit (EUI-48) MAC address.
/// Invariants:
/// - Exactly 6 octets; 64-bit EUIs are rejected
/// - Canonical representation is lowercase, colon-separated
///
/// Parsing is case-insensitive and accepts colon, hyphen and dot grouping.
/// Groups must be full width and a single delimiter must be used throughout.
///
/// # Examples
///
/// ```rust
/// use cim_infrastructure_varp::domain::MacAddress;
///
/// let mac = MacAddress::new("001C.7300.0099").unwrap();
/// assert_eq!(mac.canonical(), "00:1c:73:00:00:99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Total hex digits in a 48-bit address
    const HEX_DIGITS: usize = 12;

    /// Parse a MAC address in any supported notation
    pub fn new(mac: impl AsRef<str>) -> Result<Self, ValidationError> {
        let mac = mac.as_ref();
        let malformed = || ValidationError::MalformedAddress {
            field: MAC_ADDRESS_FIELD,
            value: mac.to_string(),
        };

        let notation = Notation::detect(mac).ok_or_else(malformed)?;
        let width = notation.group_width();
        let groups: Vec<&str> = mac.split(notation.delimiter()).collect();

        // Invariant: full-width hex groups adding up to 48 bits
        if groups.len() * width != Self::HEX_DIGITS
            || groups
                .iter()
                .any(|g| g.len() != width || !g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(malformed());
        }

        let digits = groups.concat();
        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(digits.as_bytes().chunks(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| malformed())?;
            *octet = u8::from_str_radix(pair, 16).map_err(|_| malformed())?;
        }

        Ok(Self(octets))
    }

    /// Create from raw octets
    pub fn from_octets(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Get the octets
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Canonical string (lowercase, colon-separated)
    pub fn canonical(&self) -> String {
        self.to_notation(Notation::Colon)
    }

    /// Render in the given notation, lowercase
    pub fn to_notation(&self, notation: Notation) -> String {
        let hex: String = self.0.iter().map(|b| format!("{:02x}", b)).collect();
        let width = notation.group_width();

        hex.as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join(notation.delimiter().to_string().as_str())
    }

    /// Check if this is the broadcast address
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xff; 6]
    }

    /// Check if this is a multicast address
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Check if this is a unicast address
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for MacAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.canonical()
    }
}

/// Canonicalize a MAC address string
///
/// Pure and idempotent: the output parses back to the same address and
/// canonicalizes to itself, which is what drift detection compares.
pub fn canonicalize_mac(value: &str) -> Result<String, ValidationError> {
    MacAddress::new(value).map(|mac| mac.canonical())
}
