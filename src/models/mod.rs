//! Request and Response models for the control API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ExpiryRequest, SetRequest, TimeoutRequest};
pub use responses::{
    DeleteResponse, ExpiryResponse, GetResponse, HealthResponse, SetResponse, TimeoutResponse,
};
