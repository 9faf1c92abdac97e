// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shared rendering helpers for the CLI commands.

pub mod list;
pub mod report;
pub mod reverse;

use overhead_planner::{Calculation, FixedReserve, ReservePolicy, ScaledReserve};

/// Annotation key scraped by admission tooling. The printed line must
/// stay byte-exact.
const RESERVED_MEMORY_ANNOTATION: &str = "harvesterhci.io/reservedMemory";

/// Initialises tracing from `RUST_LOG`, defaulting to warnings only.
///
/// Logs go to stderr; stdout carries only report output, so the
/// annotation line stays scrapeable.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{:^54}║", format!("vm-overhead · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

pub(crate) fn print_annotation(calc: &Calculation) {
    println!(
        "{}: \"{}\"",
        RESERVED_MEMORY_ANNOTATION,
        calc.reserved.as_bytes()
    );
}

pub(crate) fn print_calculation(calc: &Calculation, verbose: bool) {
    println!("  VM memory:     {}", calc.vm);
    println!(
        "  Reserved:      {}  ({:.1}% overhead)",
        calc.reserved,
        calc.overhead_percent()
    );
    println!("  Guest memory:  {}", calc.guest);
    match calc.ratio {
        Some(ratio) => println!("  Method:        {}  (ratio {ratio})", calc.method_used),
        None => println!("  Method:        {}", calc.method_used),
    }

    if verbose {
        println!();
        println!("  Raw bytes:");
        println!("   VM:        {}", calc.vm.as_bytes());
        println!("   Reserved:  {}", calc.reserved.as_bytes());
        println!("   Guest:     {}", calc.guest.as_bytes());
        println!();
        println!("  Reservation by method:");
        let policies: [&dyn ReservePolicy; 2] = [&FixedReserve, &ScaledReserve];
        for policy in policies {
            let r = policy.reserve(calc.vm);
            match r.ratio {
                Some(ratio) => {
                    println!("   {:<12} {}  (ratio {ratio})", policy.name(), r.reserved)
                }
                None => println!("   {:<12} {}", policy.name(), r.reserved),
            }
        }
    }
}
