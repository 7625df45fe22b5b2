//! Command line surface.
//!
//! Argument definitions and command dispatch. This layer owns all
//! user-facing text for failures and the exit-code mapping; the planning
//! core itself never prints.

use crate::error::PlanError;
use crate::models::{mask_to_prefix, prefix_to_mask};
use crate::output::{print_faults, print_inspection, print_netplan, write_netplan_csv};
use crate::{inspect_address, plan_network};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// Straightforward, lightweight subnetting tool and network engineering
/// utility.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a subnetting plan for a network.
    Plan {
        /// Original network address, with an optional /prefix. Without a
        /// prefix the class default is used.
        network: String,

        /// Host block requests of the form H:R or H:RxN, where H is the
        /// host count (at least 2), R a reserve in percent and N an
        /// optional multiplier. At least two blocks are required.
        #[arg(required = true)]
        config: Vec<String>,

        /// Also export the plan to a CSV file.
        #[arg(long = "csv")]
        csv: Option<PathBuf>,

        /// Output in json format.
        #[arg(long = "json")]
        json: bool,
    },

    /// Convert a prefix to a subnet mask or vice versa.
    Convert {
        /// A prefix (for example 26) or a dotted subnet mask.
        value: String,
    },

    /// Show class, special-use and binary details for an address.
    Inspect {
        /// The address to inspect.
        address: String,

        /// Output in json format.
        #[arg(long = "json")]
        json: bool,
    },
}

/// Run one command, print its output and map failures to an exit code.
pub fn execute(command: Command) -> i32 {
    match run(command) {
        Ok(()) => 0,
        Err(PlanError::Fit { faults }) => {
            print_faults(&faults);
            1
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            1
        }
    }
}

fn run(command: Command) -> Result<(), PlanError> {
    match command {
        Command::Plan {
            network,
            config,
            csv,
            json,
        } => {
            let (addr, prefix) = split_network_arg(&network)?;
            let plan = plan_network(addr, prefix, &config.join(" "))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&plan).expect("netplan serializes to json")
                );
            } else {
                print_netplan(&plan);
            }
            if let Some(path) = csv {
                write_netplan_csv(&plan, &path)?;
                println!("Netplan exported to {}", path.display());
            }
            Ok(())
        }
        Command::Convert { value } => {
            let value = value.trim();
            if value.contains('.') {
                let prefix = mask_to_prefix(value)?;
                println!("{value} = /{prefix}");
            } else {
                let prefix: u8 = value.parse().map_err(|_| {
                    PlanError::Format(format!("neither a prefix nor a subnet mask: {value}"))
                })?;
                let mask = prefix_to_mask(prefix)?;
                println!("/{prefix} = {mask}");
            }
            Ok(())
        }
        Command::Inspect { address, json } => {
            let report = inspect_address(&address)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("inspection serializes to json")
                );
            } else {
                print_inspection(&report);
            }
            Ok(())
        }
    }
}

/// Split an `ADDRESS[/PREFIX]` argument.
fn split_network_arg(network: &str) -> Result<(&str, Option<u8>), PlanError> {
    match network.split_once('/') {
        None => Ok((network, None)),
        Some((addr, prefix)) => {
            let prefix: u8 = prefix
                .parse()
                .map_err(|_| PlanError::Format(format!("invalid prefix: {prefix}")))?;
            Ok((addr, Some(prefix)))
        }
    }
}
