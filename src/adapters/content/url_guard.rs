//! Outbound URL checks applied before any fetch, and again on every redirect.

use reqwest::Url;
use std::net::{IpAddr, Ipv4Addr};

use crate::ports::{BlockReason, ExtractionError};

const BLOCKED_SUFFIXES: [&str; 3] = [".local", ".internal", ".localhost"];
const BLOCKED_HOSTNAMES: [&str; 2] = ["metadata", "metadata.google.internal"];

/// Parses `raw` and rejects anything that could reach internal infrastructure.
pub fn validate_external_url(raw: &str) -> Result<Url, ExtractionError> {
    let url = Url::parse(raw.trim()).map_err(|_| ExtractionError::InvalidUrl)?;
    check_url(&url)?;
    Ok(url)
}

/// Scheme and host checks for an already-parsed URL.
pub fn check_url(url: &Url) -> Result<(), ExtractionError> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ExtractionError::UnsupportedScheme);
    }

    let host = url.host_str().ok_or(ExtractionError::InvalidUrl)?;
    let host = host
        .trim_start_matches('[')
        .trim_end_matches(']')
        .to_ascii_lowercase();

    if let Ok(ip) = host.parse::<IpAddr>() {
        return check_ip(ip);
    }

    if host == "localhost" {
        return Err(ExtractionError::BlockedHost(BlockReason::Localhost));
    }
    if BLOCKED_HOSTNAMES.contains(&host.as_str())
        || BLOCKED_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
    {
        return Err(ExtractionError::BlockedHost(BlockReason::InternalHostname));
    }
    Ok(())
}

fn check_ip(ip: IpAddr) -> Result<(), ExtractionError> {
    if ip.is_loopback() {
        return Err(ExtractionError::BlockedHost(BlockReason::Localhost));
    }
    match ip {
        IpAddr::V4(v4) if is_internal_v4(v4) => {
            Err(ExtractionError::BlockedHost(BlockReason::PrivateAddress))
        }
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => check_ip(IpAddr::V4(v4)),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

/// 10/8, 172.16/12, 192.168/16, 169.254/16 and 0/8.
fn is_internal_v4(ip: Ipv4Addr) -> bool {
    ip.is_private() || ip.is_link_local() || ip.octets()[0] == 0
}
