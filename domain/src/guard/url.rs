//! URL guard — SSRF defense for caller-supplied fetch targets
//!
//! Prevents the server from being used as a confused-deputy proxy into
//! internal infrastructure. The guard classifies the *literal* hostname as
//! parsed from the URL; it never resolves DNS, so a public name that
//! resolves to a private address at connection time passes. That gap is a
//! documented limitation of this layer, not a boundary it claims to hold.

use serde::{Deserialize, Serialize};
use url::Url;

/// Hostnames that are always refused, exact match after lowercasing.
const BLOCKED_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0", "::1", "[::1]"];

/// Cloud metadata endpoints, exact match after lowercasing.
const METADATA_HOSTS: &[&str] = &["169.254.169.254", "metadata.google.internal", "metadata.goog"];

/// Classification of a single URL: fetchable or forbidden.
///
/// Produced by [`check`] and consumed once by the dispatcher to decide
/// whether the request may proceed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVerdict {
    /// Whether the URL may be fetched
    pub allowed: bool,
    /// Refusal reason (present when `allowed` is false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl UrlVerdict {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn forbid(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decide whether `input` is safe for the server process to fetch.
///
/// Pure and deterministic: no I/O, no panics, no retries. Checks run in a
/// fixed order, each assuming the previous ones passed:
///
/// 1. must parse as a URL with a host
/// 2. scheme must be `http` or `https`
/// 3. literal loopback/unspecified blocklist
/// 4. cloud metadata hostnames
/// 5. any IPv6 literal (rejects IPv4-mapped aliases like `::ffff:127.0.0.1`)
/// 6. alternate numeric encodings (decimal, hex, octal IP forms)
/// 7. RFC 1918 and link-local dotted-decimal ranges
///
/// Step 6 runs before dotted-decimal parsing so octal/hex spellings of
/// private addresses cannot be misread as harmless octets in step 7.
/// A normal domain name that merely starts with digits (`123.example.com`)
/// is allowed.
pub fn check(input: &str) -> UrlVerdict {
    let url = match Url::parse(input) {
        Ok(u) => u,
        Err(_) => return UrlVerdict::forbid("invalid URL format"),
    };

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return UrlVerdict::forbid(format!("scheme '{scheme}' is not allowed"));
    }

    let host = match url.host_str() {
        Some(h) => h.to_lowercase(),
        None => return UrlVerdict::forbid("invalid URL format"),
    };

    if BLOCKED_HOSTS.contains(&host.as_str()) {
        return UrlVerdict::forbid(format!("host '{host}' is not allowed"));
    }

    if METADATA_HOSTS.contains(&host.as_str()) {
        return UrlVerdict::forbid("cloud metadata endpoints are not allowed");
    }

    // Any colon in the hostname means an IPv6 literal, bracketed or not.
    // IPv4-mapped forms like ::ffff:127.0.0.1 would otherwise alias a
    // loopback address past the dotted-decimal check below.
    if host.contains(':') {
        return UrlVerdict::forbid("IPv6 addresses are not allowed");
    }

    if is_alternate_ip_encoding(&host) {
        return UrlVerdict::forbid("numeric host encodings are not allowed");
    }

    if let Some(octets) = parse_dotted_decimal(&host) {
        if is_private_or_link_local(octets) {
            return UrlVerdict::forbid("private and link-local addresses are not allowed");
        }
    }

    UrlVerdict::allow()
}

/// Detect decimal-integer, hex, and octal spellings of an IP address.
///
/// Must run before [`parse_dotted_decimal`]: `0177.0.0.1` parses as octets
/// `177.0.0.1` there and would pass the range check even though it denotes
/// `127.0.0.1`.
fn is_alternate_ip_encoding(host: &str) -> bool {
    // Entirely numeric: a decimal-integer IP like 2130706433
    if !host.is_empty() && host.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    // Hex form like 0x7f000001
    if host.starts_with("0x") || host.starts_with("0X") {
        return true;
    }

    // Octal form: first dot-segment is a leading zero followed by digits
    let first = host.split('.').next().unwrap_or("");
    let bytes = first.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

/// Parse `host` as dotted-decimal IPv4 (four 0-255 values), if it is one.
fn parse_dotted_decimal(host: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in host.split('.') {
        if count == 4 {
            return None;
        }
        octets[count] = part.parse::<u8>().ok()?;
        count += 1;
    }
    (count == 4).then_some(octets)
}

/// RFC 1918 private ranges plus the 169.254/16 link-local range.
fn is_private_or_link_local(octets: [u8; 4]) -> bool {
    match octets {
        [10, ..] => true,
        [172, b, ..] => (16..=31).contains(&b),
        [192, 168, ..] => true,
        [169, 254, ..] => true,
        _ => false,
    }
}
