//! Final netplan data model.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// One subnet of a finished plan.
///
/// Created once by the builder from a validated block list, immutable
/// afterwards; consumed only by rendering and export.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// Network address of the subnet.
    pub addr: Ipv4Addr,
    /// Subnet mask in dotted octet notation.
    pub mask: String,
    /// Prefix derived from the host block size.
    pub prefix: u8,
    /// First usable host address.
    pub first_host: Ipv4Addr,
    /// Last usable host address.
    pub last_host: Ipv4Addr,
    /// Broadcast address.
    pub broadcast: Ipv4Addr,
    /// First address past this subnet, where the next one starts.
    pub next_network: Ipv4Addr,
    /// Maximum host capacity.
    pub max_hosts: u32,
    /// Routing note for the whole plan (None outside special-use space).
    pub annotation: Option<String>,
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

/// A finished subnetting plan.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Netplan {
    /// Original network address.
    pub network: Ipv4Addr,
    /// Original network prefix.
    pub prefix: u8,
    /// Subnets in layout order, lowest addresses first.
    pub subnets: Vec<Subnet>,
}
