//! Response DTOs for the control API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::net::Ipv4Addr;

use serde::Serialize;

use crate::cache::MacAddr;

/// Response body for GET /arp/:ip
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested address
    pub ip: Ipv4Addr,
    /// The resolved hardware address
    pub mac: MacAddr,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(ip: Ipv4Addr, mac: MacAddr) -> Self {
        Self { ip, mac }
    }
}

/// Response body for PUT /arp
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(ip: Ipv4Addr, mac: MacAddr) -> Self {
        Self {
            message: format!("Recorded {} at {}", ip, mac),
            ip,
            mac,
        }
    }
}

/// Response body for PUT /arp/:ip/expiry
#[derive(Debug, Clone, Serialize)]
pub struct ExpiryResponse {
    pub ip: Ipv4Addr,
    /// Expiry now held by the address's slot
    pub expires: i64,
    pub updated: bool,
}

impl ExpiryResponse {
    /// Creates a new ExpiryResponse
    pub fn new(ip: Ipv4Addr, expires: i64, updated: bool) -> Self {
        Self {
            ip,
            expires,
            updated,
        }
    }
}

/// Response body for DELETE /arp/:ip
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The address that was invalidated
    pub ip: Ipv4Addr,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(ip: Ipv4Addr) -> Self {
        Self {
            message: format!("Entry for {} invalidated", ip),
            ip,
        }
    }
}

/// Response body for PUT /config/timeout
#[derive(Debug, Clone, Serialize)]
pub struct TimeoutResponse {
    /// Lifetime in seconds applied to subsequent sets
    pub default_timeout: i64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 1);
    const MAC: MacAddr = MacAddr::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);

    #[test]
    fn test_get_response_serialize() {
        let json = serde_json::to_string(&GetResponse::new(IP, MAC)).unwrap();
        assert_eq!(json, r#"{"ip":"10.0.0.1","mac":"aa:bb:cc:dd:ee:ff"}"#);
    }

    #[test]
    fn test_set_response_serialize() {
        let json = serde_json::to_string(&SetResponse::new(IP, MAC)).unwrap();
        assert!(json.contains("Recorded 10.0.0.1 at aa:bb:cc:dd:ee:ff"));
    }

    #[test]
    fn test_delete_response_serialize() {
        let json = serde_json::to_string(&DeleteResponse::new(IP)).unwrap();
        assert!(json.contains("10.0.0.1"));
        assert!(json.contains("invalidated"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
