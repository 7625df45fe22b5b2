//! Terminal output.
//!
//! Renders finished netplans, fit diagnostics and inspection reports.
//!
//! - CAUTION: Nothing here verifies its inputs. These functions render
//!   already approved contents only.

use crate::models::{prefix_to_mask, FaultyBlock, Netplan};
use crate::Inspection;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print a finished netplan.
pub fn print_netplan(plan: &Netplan) {
    println!(
        "Subnetting table for network {}/{}",
        plan.network.to_string().bold(),
        plan.prefix
    );
    for (n, subnet) in plan.subnets.iter().enumerate() {
        println!(
            "{}. Subnet {}/{}",
            n + 1,
            subnet.addr.to_string().bold(),
            subnet.prefix
        );
        println!("\tCapable of {} hosts at max", subnet.max_hosts);
        println!("\tSubnet mask:     {}", subnet.mask);
        println!("\tFirst host addr: {}", subnet.first_host);
        println!("\tLast host addr:  {}", subnet.last_host);
        println!("\tBroadcast addr:  {}", subnet.broadcast);
        if let Some(annotation) = &subnet.annotation {
            println!("\t(i) {}", annotation.yellow());
        }
        println!();
    }
}

/// Print fit diagnostics, one line per faulty block.
pub fn print_faults(faults: &[FaultyBlock]) {
    eprintln!(
        "{} the requested blocks do not fit:",
        "Subnetting failed,".red()
    );
    for fault in faults {
        if fault.is_collision() {
            eprintln!(
                "  block #{} ({} bits): the host block exceeds the network by {} bit(s)",
                fault.seq, fault.block_len, fault.host_overlap
            );
        } else if fault.explosion_overlap > 0 {
            eprintln!(
                "  block #{} ({} bits): needs {} subnetting bit(s), only {} available",
                fault.seq,
                fault.block_len,
                fault.subnet_block_len + fault.explosion_overlap,
                fault.subnet_block_len
            );
        } else {
            eprintln!(
                "  block #{} ({} bits): same-size blocks fill the subnetting space, leaving no room for smaller blocks",
                fault.seq, fault.block_len
            );
        }
    }
}

/// Print the inspection report for a single address.
pub fn print_inspection(report: &Inspection) {
    let bin = &report.binary;
    println!("Address:        {}", report.addr.to_string().bold());
    println!(
        "Binary:         {}.{}.{}.{}",
        &bin[0..8],
        &bin[8..16],
        &bin[16..24],
        &bin[24..32]
    );
    match prefix_to_mask(report.default_prefix) {
        Ok(mask) => println!(
            "Class:          {} (default /{}, mask {mask})",
            report.class, report.default_prefix
        ),
        Err(_) => println!("Class:          {} (no conventional prefix)", report.class),
    }
    if report.special_use.is_special {
        println!(
            "Special use:    {}",
            report.special_use.description.yellow()
        );
        println!(
            "Subnettable:    {}",
            if report.special_use.is_subnettable {
                "yes".green()
            } else {
                "no".red()
            }
        );
    } else {
        println!("Special use:    none");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }
}
