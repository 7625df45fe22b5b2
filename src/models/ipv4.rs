//! IPv4 address codec.
//!
//! Conversions between the three representations of an address (dotted
//! octet string, `u32`, 32-character binary string), along with prefix and
//! subnet mask arithmetic used throughout the planner.

use crate::error::PlanError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Total number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;
/// Smallest prefix the planner accepts.
pub const MIN_PREFIX: u8 = 8;
/// Largest prefix the planner accepts. /31 point-to-point links are not
/// covered by this tool.
pub const MAX_PREFIX: u8 = 30;

lazy_static! {
    static ref OCTETS_RE: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Parse a dotted octet string into its `u32` value.
///
/// # Examples
/// ```
/// use subnet_planner::models::parse_addr;
/// assert_eq!(parse_addr("192.168.1.0").unwrap(), 0xC0A80100);
/// ```
pub fn parse_addr(addr: &str) -> Result<u32, PlanError> {
    let caps = OCTETS_RE
        .captures(addr.trim())
        .ok_or_else(|| PlanError::Format(format!("not a dotted octet address: {addr}")))?;
    let mut bits: u32 = 0;
    for i in 1..=4 {
        let octet: u32 = caps[i]
            .parse()
            .map_err(|_| PlanError::Format(format!("invalid octet in {addr}")))?;
        // An octet above 255 would not fit its 8 bits.
        if octet > u8::MAX as u32 {
            return Err(PlanError::Format(format!(
                "octet {octet} exceeds 8 bits in {addr}"
            )));
        }
        bits = (bits << 8) | octet;
    }
    Ok(bits)
}

/// Format a `u32` address in dotted octet notation.
pub fn format_addr(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// The 32-character binary form of an address.
pub fn addr_to_bits(addr: u32) -> String {
    format!("{addr:032b}")
}

/// Parse a 32-character binary string back into an address.
pub fn bits_to_addr(bits: &str) -> Result<u32, PlanError> {
    if bits.len() != MAX_LENGTH as usize || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(PlanError::Format(format!(
            "expected 32 binary digits, got {bits:?}"
        )));
    }
    u32::from_str_radix(bits, 2)
        .map_err(|_| PlanError::Format(format!("expected 32 binary digits, got {bits:?}")))
}

/// Convert a prefix length to a mask as `u32`.
///
/// Accepts the full 0..=32 range; the special-use table needs masks down
/// to /4 and up to /32.
///
/// # Examples
/// ```
/// use subnet_planner::models::cidr_mask;
/// assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask(len: u8) -> Result<u32, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::Range(format!("mask length {len} is too long")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a prefix to a subnet mask in dotted octet notation.
///
/// Valid for prefixes between [`MIN_PREFIX`] and [`MAX_PREFIX`] only;
/// these are the prefixes a plan may use.
pub fn prefix_to_mask(prefix: u8) -> Result<String, PlanError> {
    if !(MIN_PREFIX..=MAX_PREFIX).contains(&prefix) {
        return Err(PlanError::Range(format!(
            "prefix must be between {MIN_PREFIX} and {MAX_PREFIX}, got {prefix}"
        )));
    }
    Ok(format_addr(cidr_mask(prefix)?))
}

/// Convert a subnet mask in dotted octet notation to its prefix.
///
/// The mask must be well formed (a run of ones followed by zeros, prefix
/// within the supported range); the prefix is its number of set bits.
pub fn mask_to_prefix(mask: &str) -> Result<u8, PlanError> {
    if !crate::validation::is_mask_well_formed(mask) {
        return Err(PlanError::Format(format!("invalid subnet mask: {mask}")));
    }
    Ok(parse_addr(mask)?.count_ones() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr() {
        assert_eq!(parse_addr("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_addr("10.0.0.1").unwrap(), 0x0A000001);
        assert_eq!(parse_addr("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_addr(" 172.16.10.32 ").unwrap(), 0xAC100A20);

        assert!(parse_addr("1.2.3").is_err());
        assert!(parse_addr("1.2.3.4.5").is_err());
        assert!(parse_addr("256.1.1.1").is_err());
        assert!(parse_addr("210.200.345.116").is_err());
        assert!(parse_addr("a.b.c.d").is_err());
        assert!(parse_addr("").is_err());
    }

    #[test]
    fn test_addr_string_roundtrip() {
        for addr in ["142.212.80.8", "0.0.0.0", "255.255.255.255", "10.1.2.3"] {
            let bits = parse_addr(addr).unwrap();
            assert_eq!(format_addr(bits), addr);
        }
    }

    #[test]
    fn test_addr_binary_roundtrip() {
        let bits = parse_addr("192.168.1.0").unwrap();
        let bin = addr_to_bits(bits);
        assert_eq!(bin.len(), 32);
        assert_eq!(bin, "11000000101010000000000100000000");
        assert_eq!(bits_to_addr(&bin).unwrap(), bits);
    }

    #[test]
    fn test_bits_to_addr_rejects_malformed() {
        assert!(bits_to_addr("1010").is_err());
        assert!(bits_to_addr(&"1".repeat(33)).is_err());
        assert!(bits_to_addr("1100000010101000000000010000000x").is_err());
    }

    #[test]
    fn test_cidr_mask() {
        assert_eq!(cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(cidr_mask(4).unwrap(), 0xF0000000);
        assert_eq!(cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(cidr_mask(33).is_err());
    }

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(8).unwrap(), "255.0.0.0");
        assert_eq!(prefix_to_mask(10).unwrap(), "255.192.0.0");
        assert_eq!(prefix_to_mask(24).unwrap(), "255.255.255.0");
        assert_eq!(prefix_to_mask(26).unwrap(), "255.255.255.192");
        assert_eq!(prefix_to_mask(30).unwrap(), "255.255.255.252");
        assert!(prefix_to_mask(7).is_err());
        assert!(prefix_to_mask(31).is_err());
    }

    #[test]
    fn test_mask_prefix_roundtrip() {
        for prefix in MIN_PREFIX..=MAX_PREFIX {
            let mask = prefix_to_mask(prefix).unwrap();
            assert_eq!(mask_to_prefix(&mask).unwrap(), prefix);
        }
    }

    #[test]
    fn test_mask_to_prefix_rejects_invalid() {
        assert!(mask_to_prefix("255.0.255.0").is_err());
        assert!(mask_to_prefix("255.255.255.254").is_err());
        assert!(mask_to_prefix("0.0.0.0").is_err());
        assert!(mask_to_prefix("not a mask").is_err());
    }
}
