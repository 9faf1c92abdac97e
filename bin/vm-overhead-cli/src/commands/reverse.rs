// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reverse report: desired guest size in, required VM size out.

use crate::commands;
use mem_units::ByteSize;
use overhead_planner::Method;

pub fn execute(
    guest: &str,
    method: Method,
    annotation: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let desired = ByteSize::parse(guest)?;
    let calc = overhead_planner::reverse(desired, method)?;

    if annotation {
        commands::print_annotation(&calc);
        return Ok(());
    }

    commands::banner("Guest Memory Sizing Report");
    println!("  Requested guest: {desired}");
    println!();
    commands::print_calculation(&calc, verbose);

    // The sizing walk lands on the first satisfying VM size, so the
    // delivered guest usually overshoots the request a little.
    if calc.guest > desired {
        let extra = ByteSize::from_bytes(calc.guest.as_bytes() - desired.as_bytes());
        println!();
        println!("  Delivered guest exceeds the request by {extra}.");
    }
    Ok(())
}
