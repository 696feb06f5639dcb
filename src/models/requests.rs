//! Request DTOs for the control API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::net::Ipv4Addr;

use serde::Deserialize;

use crate::cache::MacAddr;

/// Request body for recording a resolution (PUT /arp)
///
/// # Fields
/// - `ip`: IPv4 address in dotted-quad form
/// - `mac`: hardware address, `aa:bb:cc:dd:ee:ff` or dash-separated
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
}

/// Request body for PUT /arp/:ip/expiry
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiryRequest {
    /// New expiry, seconds since the Unix epoch
    pub expires: i64,
}

/// Request body for PUT /config/timeout
#[derive(Debug, Clone, Deserialize)]
pub struct TimeoutRequest {
    /// Lifetime in seconds for subsequently recorded entries
    pub seconds: i64,
}

impl TimeoutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.seconds <= 0 {
            return Some(format!(
                "Timeout must be a positive number of seconds, got {}",
                self.seconds
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"ip": "10.0.0.1", "mac": "aa:bb:cc:dd:ee:ff"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ip, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(req.mac, MacAddr::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]));
    }

    #[test]
    fn test_set_request_rejects_bad_mac() {
        let json = r#"{"ip": "10.0.0.1", "mac": "not-a-mac"}"#;
        assert!(serde_json::from_str::<SetRequest>(json).is_err());
    }

    #[test]
    fn test_set_request_rejects_ipv6() {
        let json = r#"{"ip": "fe80::1", "mac": "aa:bb:cc:dd:ee:ff"}"#;
        assert!(serde_json::from_str::<SetRequest>(json).is_err());
    }

    #[test]
    fn test_expiry_request_deserialize() {
        let req: ExpiryRequest = serde_json::from_str(r#"{"expires": 0}"#).unwrap();
        assert_eq!(req.expires, 0);
    }

    #[test]
    fn test_validate_timeout() {
        assert!(TimeoutRequest { seconds: 0 }.validate().is_some());
        assert!(TimeoutRequest { seconds: -10 }.validate().is_some());
        assert!(TimeoutRequest { seconds: 60 }.validate().is_none());
    }
}
