//! Input validation and RFC classification.
//!
//! Verifies addresses and masks for plausibility and correct format, and
//! classifies addresses against the historical class scheme and the
//! RFC 5735 special-use table.

use crate::error::PlanError;
use crate::models::{cidr_mask, parse_addr, MAX_PREFIX, MIN_PREFIX};
use serde::Serialize;
use std::fmt;

/// Check if a string fulfills all criteria of a valid IPv4 address:
/// four dot-separated decimal groups, each fitting 8 bits.
pub fn is_addr_well_formed(addr: &str) -> bool {
    parse_addr(addr).is_ok()
}

/// Check if a string is a valid, applicable subnet mask.
///
/// Besides being a well formed address, its bit pattern must be a run of
/// ones followed by zeros (a zero bit is never followed by a one bit
/// again) and its prefix must lie in the supported range.
pub fn is_mask_well_formed(mask: &str) -> bool {
    let bits = match parse_addr(mask) {
        Ok(bits) => bits,
        Err(_) => return false,
    };
    let prefix = bits.count_ones() as u8;
    if !(MIN_PREFIX..=MAX_PREFIX).contains(&prefix) {
        return false;
    }
    cidr_mask(prefix).map(|m| m == bits).unwrap_or(false)
}

/// IPv4 address class, determined by the leading bits of the first octet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved, scientific use.
    E,
}

impl AddrClass {
    /// Default prefix of the class. Classes D and E have no conventional
    /// prefix and report zero.
    pub fn default_prefix(&self) -> u8 {
        match self {
            AddrClass::A => 8,
            AddrClass::B => 16,
            AddrClass::C => 24,
            AddrClass::D | AddrClass::E => 0,
        }
    }
}

impl fmt::Display for AddrClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            AddrClass::A => "A",
            AddrClass::B => "B",
            AddrClass::C => "C",
            AddrClass::D => "D",
            AddrClass::E => "E",
        };
        write!(f, "{letter}")
    }
}

/// Get the address class of an address along with its default prefix.
///
/// The class follows from the leading bits of the first octet: `0` is A,
/// `10` is B, `110` is C, `1110` is D and everything above is E.
pub fn classify(addr: &str) -> Result<(AddrClass, u8), PlanError> {
    let bits = parse_addr(addr)?;
    let class = if bits >> 31 == 0 {
        AddrClass::A
    } else if bits >> 30 == 0b10 {
        AddrClass::B
    } else if bits >> 29 == 0b110 {
        AddrClass::C
    } else if bits >> 28 == 0b1110 {
        AddrClass::D
    } else {
        AddrClass::E
    };
    Ok((class, class.default_prefix()))
}

/// Special-use verdict for a single address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SpecialUse {
    /// The address belongs to a special-use network.
    pub is_special: bool,
    /// The address may still be subnetted (RFC 1918 space only).
    pub is_subnettable: bool,
    /// What kind of special use, with the RFC citation. Empty when not
    /// special.
    pub description: &'static str,
}

struct SpecialUseEntry {
    network: u32,
    prefix: u8,
    subnettable: bool,
    description: &'static str,
}

const fn net(a: u8, b: u8, c: u8, d: u8) -> u32 {
    u32::from_be_bytes([a, b, c, d])
}

/// RFC 5735 special-use networks, checked in declaration order.
/// First match wins.
const SPECIAL_USE_NETWORKS: [SpecialUseEntry; 15] = [
    SpecialUseEntry {
        network: net(0, 0, 0, 0),
        prefix: 8,
        subnettable: false,
        description: "\"This\" Network (RFC 1122, Section 3.2.1.3)",
    },
    SpecialUseEntry {
        network: net(10, 0, 0, 0),
        prefix: 8,
        subnettable: true,
        description: "Private-Use Networks (RFC 1918)",
    },
    SpecialUseEntry {
        network: net(127, 0, 0, 0),
        prefix: 8,
        subnettable: false,
        description: "Loopback (RFC 1122, Section 3.2.1.3)",
    },
    SpecialUseEntry {
        network: net(169, 254, 0, 0),
        prefix: 16,
        subnettable: false,
        description: "Link Local (RFC 3927)",
    },
    SpecialUseEntry {
        network: net(172, 16, 0, 0),
        prefix: 12,
        subnettable: true,
        description: "Private-Use Networks (RFC 1918)",
    },
    SpecialUseEntry {
        network: net(192, 0, 0, 0),
        prefix: 24,
        subnettable: false,
        description: "IETF Protocol Assignments (RFC 5736)",
    },
    SpecialUseEntry {
        network: net(192, 0, 2, 0),
        prefix: 24,
        subnettable: false,
        description: "TEST-NET-1 (RFC 5737)",
    },
    SpecialUseEntry {
        network: net(192, 88, 99, 0),
        prefix: 24,
        subnettable: false,
        description: "6to4 Relay Anycast (RFC 3068)",
    },
    SpecialUseEntry {
        network: net(192, 168, 0, 0),
        prefix: 16,
        subnettable: true,
        description: "Private-Use Networks (RFC 1918)",
    },
    SpecialUseEntry {
        network: net(198, 18, 0, 0),
        prefix: 15,
        subnettable: false,
        description: "Network Interconnect Device Benchmarking Testing (RFC 2544)",
    },
    SpecialUseEntry {
        network: net(198, 51, 100, 0),
        prefix: 24,
        subnettable: false,
        description: "TEST-NET-2 (RFC 5737)",
    },
    SpecialUseEntry {
        network: net(203, 0, 113, 0),
        prefix: 24,
        subnettable: false,
        description: "TEST-NET-3 (RFC 5737)",
    },
    SpecialUseEntry {
        network: net(224, 0, 0, 0),
        prefix: 4,
        subnettable: false,
        description: "Multicast (RFC 3171)",
    },
    SpecialUseEntry {
        network: net(240, 0, 0, 0),
        prefix: 4,
        subnettable: false,
        description: "Reserved for Future Use (RFC 1112, Section 4)",
    },
    SpecialUseEntry {
        network: net(255, 255, 255, 255),
        prefix: 32,
        subnettable: false,
        description: "Limited Broadcast (RFC 919, Section 7; RFC 922, Section 7)",
    },
];

/// Check if an address belongs to a special use case according to
/// RFC 5735 (https://www.rfc-editor.org/rfc/rfc5735#section-4).
///
/// The address is masked with each candidate's prefix and compared to the
/// candidate network address; the first matching entry wins. Private-use
/// space reports `is_subnettable = true`, every other special-use network
/// reports `false`. An address that matches nothing is trivially fine for
/// subnetting.
pub fn special_use(addr: &str) -> Result<SpecialUse, PlanError> {
    let bits = parse_addr(addr)?;
    for entry in &SPECIAL_USE_NETWORKS {
        let mask = cidr_mask(entry.prefix)?;
        if bits & mask == entry.network {
            return Ok(SpecialUse {
                is_special: true,
                is_subnettable: entry.subnettable,
                description: entry.description,
            });
        }
    }
    Ok(SpecialUse {
        is_special: false,
        is_subnettable: true,
        description: "",
    })
}
