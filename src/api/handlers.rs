//! API Handlers
//!
//! HTTP request handlers for each control API endpoint.

use std::net::Ipv4Addr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{ArpCache, CacheStats};
use crate::error::{ArpCacheError, Result};
use crate::models::{
    DeleteResponse, ExpiryRequest, ExpiryResponse, GetResponse, HealthResponse, SetRequest,
    SetResponse, TimeoutRequest, TimeoutResponse,
};

/// Application state shared across all handlers.
///
/// The cache is lock-free, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ArpCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ArpCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must run inside a tokio runtime since the cache starts its clock.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(ArpCache::new(config.arp_timeout)?))
    }
}

fn parse_ip(raw: &str) -> Result<Ipv4Addr> {
    raw.parse()
        .map_err(|_| ArpCacheError::InvalidAddress(raw.to_string()))
}

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| ArpCacheError::InvalidRequest(rejection.body_text()))
}

/// Handler for PUT /arp
///
/// Records a resolved mapping with the default lifetime.
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<Json<SetResponse>> {
    let req = body(payload)?;
    state.cache.set(req.ip, req.mac);
    debug!("Recorded {} -> {}", req.ip, req.mac);

    Ok(Json(SetResponse::new(req.ip, req.mac)))
}

/// Handler for GET /arp/:ip
///
/// Returns 404 when the slot is empty or expired.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<GetResponse>> {
    let ip = parse_ip(&ip)?;
    let mac = state
        .cache
        .get(ip)
        .ok_or_else(|| ArpCacheError::NotFound(ip.to_string()))?;

    Ok(Json(GetResponse::new(ip, mac)))
}

/// Handler for PUT /arp/:ip/expiry
pub async fn expiry_handler(
    State(state): State<AppState>,
    Path(ip): Path<String>,
    payload: std::result::Result<Json<ExpiryRequest>, JsonRejection>,
) -> Result<Json<ExpiryResponse>> {
    let ip = parse_ip(&ip)?;
    let req = body(payload)?;
    let updated = state.cache.set_expiry(ip, req.expires);

    Ok(Json(ExpiryResponse::new(ip, req.expires, updated)))
}

/// Handler for DELETE /arp/:ip
///
/// Expires the address's slot immediately.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let ip = parse_ip(&ip)?;
    state.cache.delete(ip);
    debug!("Invalidated {}", ip);

    Ok(Json(DeleteResponse::new(ip)))
}

/// Handler for PUT /config/timeout
pub async fn timeout_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TimeoutRequest>, JsonRejection>,
) -> Result<Json<TimeoutResponse>> {
    let req = body(payload)?;
    if let Some(error_msg) = req.validate() {
        return Err(ArpCacheError::InvalidRequest(error_msg));
    }
    state.cache.set_default_timeout(req.seconds);

    Ok(Json(TimeoutResponse {
        default_timeout: state.cache.default_timeout(),
    }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
