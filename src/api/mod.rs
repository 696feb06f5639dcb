//! API Module
//!
//! HTTP handlers and routing for the ARP cache control API.
//!
//! # Endpoints
//! - `PUT /arp` - Record an IP to MAC mapping
//! - `GET /arp/:ip` - Look up a mapping
//! - `DELETE /arp/:ip` - Invalidate a mapping
//! - `PUT /arp/:ip/expiry` - Move a mapping's expiry
//! - `PUT /config/timeout` - Change the default lifetime
//! - `GET /stats` - Occupancy snapshot
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
