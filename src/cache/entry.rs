//! Cache Entry Module
//!
//! Defines the hardware address type and the immutable slot record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ArpCacheError;

// == MAC Address ==
/// A 48-bit link-layer address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// The all-zero address, also held by empty slots.
    pub const ZERO: MacAddr = MacAddr([0; 6]);

    /// Creates a MAC address from its six octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Builds a MAC address from a hardware address of any length.
    ///
    /// Uses the trailing six bytes when at least six are present (so longer
    /// link-layer addresses keep their EUI-48 suffix), otherwise the zero
    /// address.
    pub fn from_slice(hw: &[u8]) -> Self {
        let mut octets = [0u8; 6];
        if hw.len() >= 6 {
            octets.copy_from_slice(&hw[hw.len() - 6..]);
        }
        Self(octets)
    }

    /// Returns the raw octets.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for MacAddr {
    type Err = ArpCacheError;

    /// Parses six hex octets separated by `:` or `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ArpCacheError::InvalidAddress(s.to_string());

        let mut octets = [0u8; 6];
        let mut parts = s.split(|c| c == ':' || c == '-');
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || part.len() > 2 {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(octets))
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// == Entry ==
/// Immutable contents of one slot.
///
/// Updates always replace the whole record, so a reader sees either the old
/// MAC and expiry together or the new ones together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Resolved hardware address
    pub mac: MacAddr,
    /// Expiry time, seconds since the Unix epoch
    pub expires: i64,
}

impl Entry {
    /// Placeholder held by every slot before its first write.
    pub const EMPTY: Entry = Entry {
        mac: MacAddr::ZERO,
        expires: 0,
    };

    pub const fn new(mac: MacAddr, expires: i64) -> Self {
        Self { mac, expires }
    }

    // == Is Expired ==
    /// Checks the entry against the given epoch.
    ///
    /// An entry is still valid during the second it expires in; it is
    /// expired once the epoch has moved strictly past `expires`.
    pub fn is_expired(&self, epoch: i64) -> bool {
        self.expires < epoch
    }

    /// Returns true for the never-written placeholder.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns a copy with a different expiry and the same MAC.
    pub fn with_expiry(self, expires: i64) -> Self {
        Self { expires, ..self }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::EMPTY
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_display() {
        let mac = MacAddr::new([0xaa, 0xbb, 0xcc, 0x0d, 0xee, 0x01]);
        assert_eq!(mac.to_string(), "aa:bb:cc:0d:ee:01");
    }

    #[test]
    fn test_mac_parse_colon_and_dash() {
        let expected = MacAddr::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        assert_eq!("AA:BB:CC:DD:EE:FF".parse::<MacAddr>().unwrap(), expected);
        assert_eq!("aa-bb-cc-dd-ee-ff".parse::<MacAddr>().unwrap(), expected);
        assert_eq!("a:b:c:d:e:f".parse::<MacAddr>().unwrap().octets()[0], 0x0a);
    }

    #[test]
    fn test_mac_parse_rejects_garbage() {
        for bad in [
            "",
            "aa:bb:cc:dd:ee",
            "aa:bb:cc:dd:ee:ff:00",
            "aa:bb:cc:dd:ee:gg",
            "aaa:bb:cc:dd:ee:ff",
            "aa::cc:dd:ee:ff",
        ] {
            assert!(
                matches!(bad.parse::<MacAddr>(), Err(ArpCacheError::InvalidAddress(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_mac_from_slice_uses_trailing_bytes() {
        let long = [9u8, 9, 9, 1, 2, 3, 4, 5, 6];
        assert_eq!(MacAddr::from_slice(&long), MacAddr::new([1, 2, 3, 4, 5, 6]));
        assert_eq!(MacAddr::from_slice(&[1, 2, 3]), MacAddr::ZERO);
    }

    #[test]
    fn test_mac_serde_as_string() {
        let mac = MacAddr::new([1, 2, 3, 4, 5, 6]);
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"01:02:03:04:05:06\"");
        let back: MacAddr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mac);
    }

    #[test]
    fn test_empty_entry() {
        assert!(Entry::EMPTY.is_empty());
        assert!(Entry::default().is_expired(1));
        assert!(!Entry::new(MacAddr::new([1; 6]), 0).is_empty());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = Entry::new(MacAddr::new([1; 6]), 100);
        assert!(!entry.is_expired(99));
        assert!(!entry.is_expired(100));
        assert!(entry.is_expired(101));
    }

    #[test]
    fn test_with_expiry_keeps_mac() {
        let entry = Entry::new(MacAddr::new([7; 6]), 100).with_expiry(0);
        assert_eq!(entry.mac, MacAddr::new([7; 6]));
        assert_eq!(entry.expires, 0);
    }
}
