//! Fit diagnostic record.

use serde::Serialize;

/// Why one requested host block cannot be carved out of the original
/// network.
///
/// `seq` refers to the 1-based position in the descending-sorted block
/// list, the same order subnets would have been laid out in.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FaultyBlock {
    /// 1-based position in the sorted block list.
    pub seq: usize,
    /// Host block length in bits.
    pub block_len: u32,
    /// Bits by which the host portion exceeds the space the original
    /// prefix leaves. Zero unless the block itself is too large.
    pub host_overlap: u32,
    /// Subnetting bits actually available for blocks of this size.
    pub subnet_block_len: u32,
    /// Bits by which the required subnetting portion exceeds the
    /// available one.
    pub explosion_overlap: u32,
}

impl FaultyBlock {
    /// True when the host block alone is too large for the network.
    pub fn is_collision(&self) -> bool {
        self.host_overlap > 0
    }
}
