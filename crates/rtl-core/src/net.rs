//! IP / port extraction from socket address text.
//!
//! The text form is whatever a peer address prints as: `host:port` for IPv4
//! and `[host%zone]:port` for IPv6.
//!
//! ```text
//! 192.168.1.122:5000                        → 192.168.1.122, 5000
//! [fe80::a4fe:15b9:8b02:8122%eth0]:62787    → fe80::a4fe:15b9:8b02:8122, 62787
//! ```

use std::net::SocketAddr;

use thiserror::Error;

/// Errors produced when an address string cannot be split.
#[derive(Debug, Error, PartialEq)]
pub enum AddrError {
    /// There is no `:` separating host and port (for a bracketed IPv6 host,
    /// no `]:`).
    #[error("address {0:?} has no port")]
    MissingPort(String),

    /// The host part is empty.
    #[error("address {0:?} has no host")]
    MissingHost(String),

    /// The port part is not a number in `0..=65535`.
    #[error("address {0:?} has an invalid port")]
    InvalidPort(String),
}

fn split_host_port(addr: &str) -> Result<(&str, &str), AddrError> {
    let split = if addr.starts_with('[') {
        // The port follows the closing bracket; colons inside belong to the host.
        addr.find("]:").map(|i| (&addr[..=i], &addr[i + 2..]))
    } else {
        addr.rsplit_once(':')
    };
    let (host, port) = split.ok_or_else(|| AddrError::MissingPort(addr.to_string()))?;
    if host.is_empty() || host == "[]" {
        return Err(AddrError::MissingHost(addr.to_string()));
    }
    Ok((host, port))
}

/// Strips IPv6 brackets and any `%zone` suffix.
fn bare_host(host: &str) -> &str {
    let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) else {
        return host;
    };
    match inner.rfind('%') {
        Some(i) if i > 0 => &inner[..i],
        _ => inner,
    }
}

/// Returns the IP part of `addr`.
///
/// # Errors
///
/// Returns [`AddrError`] if `addr` has no `:` or an empty host.
pub fn ip_from_addr_str(addr: &str) -> Result<&str, AddrError> {
    split_host_port(addr).map(|(host, _)| bare_host(host))
}

/// Returns the port part of `addr`.
///
/// # Errors
///
/// Returns [`AddrError`] if `addr` cannot be split or the port is not a
/// valid `u16`.
pub fn port_from_addr_str(addr: &str) -> Result<u16, AddrError> {
    let (_, port) = split_host_port(addr)?;
    port.parse()
        .map_err(|_| AddrError::InvalidPort(addr.to_string()))
}

/// Returns both the IP and the port of `addr`.
///
/// # Errors
///
/// See [`ip_from_addr_str`] and [`port_from_addr_str`].
pub fn ip_port_from_addr_str(addr: &str) -> Result<(&str, u16), AddrError> {
    Ok((ip_from_addr_str(addr)?, port_from_addr_str(addr)?))
}

/// Returns the IP of a socket address as text (IPv6 without brackets or
/// scope id).
pub fn ip_from_socket_addr(addr: &SocketAddr) -> String {
    addr.ip().to_string()
}

pub fn port_from_socket_addr(addr: &SocketAddr) -> u16 {
    addr.port()
}

pub fn ip_port_from_socket_addr(addr: &SocketAddr) -> (String, u16) {
    (ip_from_socket_addr(addr), addr.port())
}
