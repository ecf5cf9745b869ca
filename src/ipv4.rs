//! IPv4 Canonicalization
//!
//! Converts possibly malformed `"address[/prefix]"` strings into canonical
//! network-masked form. The philosophy here is leniency over strictness:
//! telemetry configs arrive with missing octets, stray text, or no CIDR
//! suffix at all, and a best-effort normalization beats an error.
//!
//! - missing or unparseable octets read as `0` (`"10../8"` → `10.0.0.0/8`)
//! - octet values wrap modulo 256; octets past the fourth are ignored
//! - a missing or unparseable prefix means `/32` (host route); prefixes
//!   above 32 are clamped
//!
//! Internally an address is a `u32` in network (big-endian) byte order;
//! masking keeps the top `prefix` bits and zeroes the host bits.

use alloc::format;
use alloc::string::String;

/// Zero the host bits of `n`, keeping only the top `k` bits.
///
/// `k == 0` clears everything; `k >= 32` is a no-op.
pub fn zero_out32(n: u32, k: u32) -> u32 {
    if k == 0 {
        0
    } else if k >= 32 {
        n
    } else {
        (n >> (32 - k)) << (32 - k)
    }
}

fn lenient_octet(s: &str) -> u8 {
    (s.parse::<u64>().unwrap_or(0) & 0xFF) as u8
}

/// Pack a dotted-quad string into a `u32` in network byte order.
///
/// Lenient: missing or unparseable octets count as zero.
pub fn ipv4_to_int(ip: &str) -> u32 {
    let mut octets = ip.split('.');
    let mut n = 0u32;
    for _ in 0..4 {
        let octet = octets.next().map_or(0, lenient_octet);
        n = (n << 8) | u32::from(octet);
    }
    n
}

/// Render a `u32` in network byte order as a dotted-quad string
pub fn int_to_ipv4(n: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (n >> 24) & 0xFF,
        (n >> 16) & 0xFF,
        (n >> 8) & 0xFF,
        n & 0xFF
    )
}

/// Normalize an `"address[/prefix]"` pool definition into canonical form.
///
/// The address is masked down to the prefix length and re-rendered, so
/// `"87.70.141.1/22"` becomes `"87.70.140.0/22"` and a bare
/// `"10.207.219.251"` becomes `"10.207.219.251/32"`. Idempotent by
/// construction: the output always round-trips to itself.
pub fn canonical_ipv4_pool(s: &str) -> String {
    let (ip, cidr) = match s.split_once('/') {
        Some((ip, cidr)) => (ip, cidr),
        None => (s, ""),
    };
    let prefix = cidr.parse::<u32>().unwrap_or(32).min(32);
    let network = zero_out32(ipv4_to_int(ip), prefix);
    format!("{}/{}", int_to_ipv4(network), prefix)
}
