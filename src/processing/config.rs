//! Host block request parsing.
//!
//! Turns the user's request string into a normalized list of host block
//! sizes in bits, largest first.

use crate::error::PlanError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_RE: Regex = Regex::new(r"(\d+):(\d+)(?:x(\d+))?").expect("Invalid Regex?");
}

/// Parse a request string into host block sizes in bits.
///
/// Tokens have the form `H:R` or `H:RxN`: `H` is the initial host count
/// (at least 2), `R` a reserve in percent added on top for future
/// expansion (may be zero), `N` an optional multiplier repeating the
/// block. Text that matches no token is ignored; the parse fails only
/// when nothing matches at all, or fewer than two blocks come out.
///
/// Each block is sized to the smallest power of two with room for
/// `H + ceil(H * R / 100)` hosts plus network and broadcast address.
///
/// # Examples
/// ```
/// use subnet_planner::processing::parse_host_blocks;
/// // 300 hosts with 20% reserve, and 1500 hosts without reserve.
/// assert_eq!(parse_host_blocks("300:20 1500:0").unwrap(), vec![11, 9]);
/// ```
pub fn parse_host_blocks(config: &str) -> Result<Vec<u32>, PlanError> {
    let mut blocks = Vec::new();
    let mut matched = false;

    for caps in BLOCK_RE.captures_iter(config) {
        matched = true;
        let hosts: u64 = caps[1]
            .parse()
            .map_err(|_| PlanError::Config(format!("host count out of range: {}", &caps[1])))?;
        let reserve: u64 = caps[2]
            .parse()
            .map_err(|_| PlanError::Config(format!("reserve out of range: {}", &caps[2])))?;
        let multiplier: u64 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| {
                PlanError::Config(format!("multiplier out of range: {}", m.as_str()))
            })?,
            None => 1,
        };

        if hosts < 2 {
            return Err(PlanError::Config("host count must be at least 2".into()));
        }
        if multiplier < 1 {
            return Err(PlanError::Config(
                "block multipliers must be greater than zero".into(),
            ));
        }

        let required = hosts
            .checked_mul(reserve)
            .map(|p| p.div_ceil(100))
            .and_then(|r| hosts.checked_add(r))
            .ok_or_else(|| {
                PlanError::Config(format!("host count overflows: {hosts} with {reserve}% reserve"))
            })?;
        let block_len = super::bit_length(required);

        for _ in 0..multiplier {
            blocks.push(block_len);
        }
    }

    if !matched {
        return Err(PlanError::Config("insufficient configuration".into()));
    }
    if blocks.len() < 2 {
        return Err(PlanError::Config("provide at least 2 host blocks".into()));
    }

    // Order block sizes from largest to smallest.
    blocks.sort_unstable_by(|a, b| b.cmp(a));
    log::debug!("parsed {} host blocks: {:?}", blocks.len(), blocks);
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        // 300 + 60 reserve = 360 -> 9 bits (510 hosts); 1500 -> 11 bits.
        assert_eq!(parse_host_blocks("300:20 1500:0").unwrap(), vec![11, 9]);
    }

    #[test]
    fn test_parse_multiplier() {
        let blocks = parse_host_blocks("2:0x10 200:0").unwrap();
        assert_eq!(blocks.len(), 11);
        assert_eq!(blocks[0], 8);
        assert!(blocks[1..].iter().all(|&b| b == 2));
    }

    #[test]
    fn test_parse_reserve_rounds_up() {
        // 10 + ceil(10 * 25 / 100) = 13 -> 4 bits.
        assert_eq!(parse_host_blocks("10:25 2:0").unwrap(), vec![4, 2]);
    }

    #[test]
    fn test_parse_ignores_unmatched_text() {
        assert_eq!(
            parse_host_blocks("foo 300:20 bar 1500:0 7").unwrap(),
            vec![11, 9]
        );
    }

    #[test]
    fn test_parse_insufficient_configuration() {
        assert!(matches!(
            parse_host_blocks(""),
            Err(PlanError::Config(msg)) if msg == "insufficient configuration"
        ));
        assert!(matches!(
            parse_host_blocks("no tokens here"),
            Err(PlanError::Config(msg)) if msg == "insufficient configuration"
        ));
    }

    #[test]
    fn test_parse_requires_two_blocks() {
        assert!(matches!(
            parse_host_blocks("300:20"),
            Err(PlanError::Config(_))
        ));
        // A single token with a multiplier is enough.
        assert_eq!(parse_host_blocks("300:20x2").unwrap(), vec![9, 9]);
    }

    #[test]
    fn test_parse_rejects_invalid_counts() {
        assert!(matches!(
            parse_host_blocks("1:0 300:20"),
            Err(PlanError::Config(_))
        ));
        assert!(matches!(
            parse_host_blocks("300:20x0 2:0"),
            Err(PlanError::Config(_))
        ));
    }

    #[test]
    fn test_parse_sorted_descending() {
        let blocks = parse_host_blocks("2:0 4000:10 200:150x4").unwrap();
        // 4000 + 400 = 4400 -> 13 bits; 200 + 300 = 500 -> 9 bits; 2 -> 2 bits.
        assert_eq!(blocks, vec![13, 9, 9, 9, 9, 2]);
    }
}
