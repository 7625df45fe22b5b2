//! Domain models for the subnet planner.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ipv4`] codec functions - address, mask and prefix conversions
//! - [`Subnet`] and [`Netplan`] - final plan records
//! - [`FaultyBlock`] - fit diagnostics

mod fault;
mod ipv4;
mod subnet;

// Re-export public types
pub use fault::FaultyBlock;
pub use ipv4::{
    addr_to_bits, bits_to_addr, cidr_mask, format_addr, mask_to_prefix, parse_addr,
    prefix_to_mask, MAX_LENGTH, MAX_PREFIX, MIN_PREFIX,
};
pub use subnet::{Netplan, Subnet};
