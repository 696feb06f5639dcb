//! Address Indexing
//!
//! Maps an IPv4 address onto one of the 65,536 cache slots.
//!
//! The last octet selects the row and the second-to-last the column, so every
//! host of a /24 lands in its own slot. There is no chaining: addresses that
//! share their last two octets alias the same slot and the latest write wins.

use std::net::Ipv4Addr;

/// Total number of slots, one per 16-bit key.
pub const SLOT_COUNT: usize = 1 << 16;

/// Returns the slot key for a raw address in network byte order.
///
/// Works for both the 4-byte and the 16-byte (IPv4-mapped) encodings since
/// only the trailing two octets matter. Inputs shorter than two bytes map to
/// slot 0.
#[inline]
pub fn slot_key(octets: &[u8]) -> u16 {
    match octets {
        [.., second_last, last] => (u16::from(*last) << 8) | u16::from(*second_last),
        _ => 0,
    }
}

/// Returns the slot key for an IPv4 address.
#[inline]
pub fn slot_key_v4(ip: Ipv4Addr) -> u16 {
    slot_key(&ip.octets())
}
