// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # vm-overhead
//!
//! Command-line calculator for VM memory reservations.
//!
//! ## Usage
//! ```bash
//! # How much does an 8 Gi VM leave to the guest?
//! vm-overhead 8Gi
//!
//! # What VM size delivers at least 24 Gi of guest memory?
//! vm-overhead --guest 24Gi
//!
//! # Just the annotation line, for pasting into a VM spec
//! vm-overhead 8Gi --annotation
//!
//! # Reservations for the usual VM sizes at a glance
//! vm-overhead --list-common
//! ```

mod commands;
mod config;

use clap::Parser;
use overhead_planner::Method;

#[derive(Parser)]
#[command(
    name = "vm-overhead",
    about = "Calculates the hypervisor memory reservation for a VM size",
    version,
    author
)]
#[command(group = clap::ArgGroup::new("input")
    .required(true)
    .args(["vm_memory", "guest", "list_common"]))]
struct Cli {
    /// VM memory size to analyse (e.g. "8Gi", "4096Mi", "4.5Gi").
    #[arg(value_name = "vm_memory")]
    vm_memory: Option<String>,

    /// Desired guest memory; computes the VM size required to deliver it.
    #[arg(short, long, value_name = "memory")]
    guest: Option<String>,

    /// Reservation method: auto, legacy, or ratio.
    #[arg(short, long, value_name = "method")]
    method: Option<String>,

    /// Emit only the reserved-memory annotation line.
    #[arg(long)]
    annotation: bool,

    /// Include raw byte counts and the reservation each method would take.
    #[arg(short, long)]
    verbose: bool,

    /// Print one summary line for each common VM size.
    #[arg(long)]
    list_common: bool,

    /// Path to a TOML defaults file (keys: method, verbose).
    #[arg(short, long, value_name = "path")]
    config: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::init_tracing();

    let defaults = match &cli.config {
        Some(path) => config::Defaults::from_file(path)?,
        None => config::Defaults::default(),
    };

    // Explicit flags win over the defaults file.
    let method: Method = cli
        .method
        .as_deref()
        .or(defaults.method.as_deref())
        .unwrap_or("auto")
        .parse()?;
    let verbose = cli.verbose || defaults.verbose;

    if cli.list_common {
        commands::list::execute()
    } else if let Some(guest) = cli.guest.as_deref() {
        commands::reverse::execute(guest, method, cli.annotation, verbose)
    } else if let Some(vm_memory) = cli.vm_memory.as_deref() {
        commands::report::execute(vm_memory, method, cli.annotation, verbose)
    } else {
        // clap's input group guarantees one of the three is present.
        Err(anyhow::anyhow!(
            "one of <vm_memory>, --guest, or --list-common is required"
        ))
    }
}
