//! CSV export of a finished netplan.
//!
//! Writes the one-shot spreadsheet artifact. Column layout mirrors the
//! terminal table, with an empty hosts column left for manual assignment.

use super::terminal::format_field;
use crate::error::PlanError;
use crate::models::Netplan;
use std::path::Path;

/// Write a finished netplan to a CSV file.
///
/// # Arguments
/// * `plan` - The plan to export
/// * `path` - Destination file, overwritten if it exists
pub fn write_netplan_csv(plan: &Netplan, path: &Path) -> Result<(), PlanError> {
    log::info!(
        "#Start write_netplan_csv() exporting {} subnets to {}",
        plan.subnets.len(),
        path.display()
    );

    let mut out = String::new();
    out.push_str(concat!(
        r#""subnet","network_addr","max_hosts","mask","prefix","hosts","#,
        r#""first_host_addr","last_host_addr","broadcast_addr""#,
    ));
    out.push('\n');

    for (n, subnet) in plan.subnets.iter().enumerate() {
        out.push_str(&format!(
            "{cnt},{addr},{max_hosts},{mask},{prefix},{hosts},{first},{last},{broadcast}\n",
            cnt = format_field(n + 1, 6),
            addr = format_field(subnet.addr, 18),
            max_hosts = format_field(subnet.max_hosts, 10),
            mask = format_field(&subnet.mask, 17),
            prefix = format_field(format!("/{}", subnet.prefix), 5),
            hosts = format_field("", 4),
            first = format_field(subnet.first_host, 17),
            last = format_field(subnet.last_host, 17),
            broadcast = format_field(subnet.broadcast, 17),
        ));
    }

    std::fs::write(path, out)?;
    log::info!("# Netplan written to {}", path.display());
    Ok(())
}
