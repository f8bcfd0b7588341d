//! Client identification utilities
//!
//! Common functions for identifying clients via HTTP headers.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

use crate::crypto::sha256;

/// Identifying information about the requesting client
///
/// The fingerprint (SHA-256 of the User-Agent) binds sessions to a client
/// so a stolen cookie alone is not enough to resume a session.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// User-Agent string (for session display and the fingerprint)
    pub user_agent: String,
}

impl ClientInfo {
    /// SHA-256 fingerprint of the User-Agent
    pub fn fingerprint(&self) -> [u8; 32] {
        sha256(self.user_agent.as_bytes())
    }

    /// Fingerprint as `Vec<u8>` (for database storage)
    pub fn fingerprint_vec(&self) -> Vec<u8> {
        self.fingerprint().to_vec()
    }

    /// IP as string (for database storage)
    pub fn ip_string(&self) -> Option<String> {
        self.ip.map(|ip| ip.to_string())
    }
}

/// Error when extracting client info
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientInfoError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

/// Extract client info from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - IP of the direct connection, if known
///
/// ## Returns
/// * `Err(ClientInfoError)` - Missing User-Agent header
pub fn extract_client_info(
    headers: &HeaderMap,
    direct_ip: Option<IpAddr>,
) -> Result<ClientInfo, ClientInfoError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ClientInfoError::MissingHeader("User-Agent".to_string()))?;

    Ok(ClientInfo {
        ip: extract_client_ip(headers, direct_ip),
        user_agent: user_agent.to_string(),
    })
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    // First IP in the X-Forwarded-For list is the original client
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}
