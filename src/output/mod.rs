//! Output formatting for finished plans.
//!
//! This module handles rendering and exporting core results:
//! - [`csv`] - One-shot CSV export artifact
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::write_netplan_csv;
pub use terminal::{format_field, print_faults, print_inspection, print_netplan};
