//! Subnet layout.
//!
//! Performs the actual subnetting on an approved request: every block
//! becomes one subnet record, laid out back to back from the original
//! network address.

use crate::error::PlanError;
use crate::models::{parse_addr, prefix_to_mask, Subnet, MAX_PREFIX, MIN_PREFIX};
use crate::validation::{classify, special_use, AddrClass};
use std::net::Ipv4Addr;

/// Lay out every subnet of a plan, starting at the original network
/// address.
///
/// The address must be a network address (even final octet), belong to
/// class A, B or C, and must not come from reserved, non-subnettable
/// space. The block list is laid out largest first; each subnet starts
/// where the previous one ended, so the first subnet occupies the lowest
/// addresses. The list is expected to have passed [`analyze_fit`]
/// beforehand.
///
/// [`analyze_fit`]: super::analyze_fit
pub fn build_subnets(orig_addr: &str, host_blocks: &[u32]) -> Result<Vec<Subnet>, PlanError> {
    let start = parse_addr(orig_addr)?;
    if start & 1 != 0 {
        return Err(PlanError::Format(format!(
            "{orig_addr} is not a network address, the final octet must be even"
        )));
    }
    if host_blocks.len() < 2 {
        return Err(PlanError::Config("provide at least 2 host blocks".into()));
    }

    let special = special_use(orig_addr)?;
    if special.is_special && !special.is_subnettable {
        return Err(PlanError::Policy(format!(
            "{orig_addr} belongs to reserved space: {}",
            special.description
        )));
    }
    let (class, _) = classify(orig_addr)?;
    if matches!(class, AddrClass::D | AddrClass::E) {
        return Err(PlanError::Policy(format!(
            "class {class} addresses cannot be subnetted"
        )));
    }

    // The annotation is a property of the original network and is shared
    // by every subnet of the plan.
    let annotation = (special.is_special && special.is_subnettable)
        .then(|| format!("{}, will not be routed", special.description));

    let mut sorted = host_blocks.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut subnets = Vec::with_capacity(sorted.len());
    let mut current = u64::from(start);
    for &block_len in &sorted {
        // Prefixes outside the supported range never pass the analyzer;
        // this guards standalone callers.
        if !(2..=(32 - MIN_PREFIX as u32)).contains(&block_len) {
            return Err(PlanError::Range(format!(
                "a {block_len} bit host block maps outside the /{MIN_PREFIX}../{MAX_PREFIX} prefix range"
            )));
        }
        let prefix = (32 - block_len) as u8;
        let size = 1u64 << block_len;
        let end = current + size;
        if end > u64::from(u32::MAX) {
            return Err(PlanError::Range(format!(
                "subnetting {orig_addr} runs past the end of the address space"
            )));
        }

        subnets.push(Subnet {
            addr: Ipv4Addr::from(current as u32),
            mask: prefix_to_mask(prefix)?,
            prefix,
            first_host: Ipv4Addr::from((current + 1) as u32),
            last_host: Ipv4Addr::from((end - 2) as u32),
            broadcast: Ipv4Addr::from((end - 1) as u32),
            next_network: Ipv4Addr::from(end as u32),
            max_hosts: (size - 2) as u32,
            annotation: annotation.clone(),
        });
        current = end;
    }

    log::info!(
        "built {} subnets for {orig_addr}, ending before {}",
        subnets.len(),
        Ipv4Addr::from(current as u32)
    );
    Ok(subnets)
}
