//! Subnetting and network engineering utility.
//!
//! Computes IPv4 subnetting plans from host count requests and validates
//! addresses and masks against RFC address classes and special-use space.
//! The pipeline runs strictly forward: parse the request string, check
//! that the blocks fit the original network, lay out the subnets. Every
//! step is a pure function over in-memory values; independent planning
//! requests may run concurrently.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod validation;

pub use error::PlanError;

use models::{addr_to_bits, parse_addr, Netplan};
use serde::Serialize;
use std::net::Ipv4Addr;
use validation::{classify, special_use, AddrClass, SpecialUse};

/// Compute a full netplan from an origin address and a raw request string.
///
/// When `prefix` is `None` the class default prefix of the address is
/// used; classes D and E have none and are refused. A request that parses
/// but does not fit returns [`PlanError::Fit`] with one diagnostic per
/// faulty block.
pub fn plan_network(
    orig_addr: &str,
    prefix: Option<u8>,
    config: &str,
) -> Result<Netplan, PlanError> {
    let host_blocks = processing::parse_host_blocks(config)?;
    let network = Ipv4Addr::from(parse_addr(orig_addr)?);
    let prefix = match prefix {
        Some(p) => p,
        None => {
            let (class, default_prefix) = classify(orig_addr)?;
            if default_prefix == 0 {
                return Err(PlanError::Policy(format!(
                    "class {class} has no default prefix, provide one explicitly"
                )));
            }
            default_prefix
        }
    };
    log::info!(
        "planning {orig_addr}/{prefix} for {} host blocks",
        host_blocks.len()
    );

    let report = processing::analyze_fit(prefix, &host_blocks)?;
    if !report.fits {
        return Err(PlanError::Fit {
            faults: report.faults,
        });
    }

    let subnets = processing::build_subnets(orig_addr, &host_blocks)?;
    Ok(Netplan {
        network,
        prefix,
        subnets,
    })
}

/// Everything the tool knows about a single address.
#[derive(Serialize, Debug, Clone)]
pub struct Inspection {
    /// The address itself.
    pub addr: Ipv4Addr,
    /// Historical address class.
    pub class: AddrClass,
    /// Default prefix of the class, zero for D and E.
    pub default_prefix: u8,
    /// 32-character binary form.
    pub binary: String,
    /// RFC 5735 verdict.
    pub special_use: SpecialUse,
}

/// Gather class, binary and special-use details for one address.
pub fn inspect_address(addr: &str) -> Result<Inspection, PlanError> {
    let bits = parse_addr(addr)?;
    let (class, default_prefix) = classify(addr)?;
    Ok(Inspection {
        addr: Ipv4Addr::from(bits),
        class,
        default_prefix,
        binary: addr_to_bits(bits),
        special_use: special_use(addr)?,
    })
}
