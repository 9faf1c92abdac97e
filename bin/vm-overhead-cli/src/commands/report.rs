// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Forward report: VM size in, reservation split out.

use crate::commands;
use mem_units::ByteSize;
use overhead_planner::Method;

pub fn execute(
    vm_memory: &str,
    method: Method,
    annotation: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let vm = ByteSize::parse(vm_memory)?;
    let calc = overhead_planner::forward(vm, method)?;

    if annotation {
        commands::print_annotation(&calc);
        return Ok(());
    }

    commands::banner("Memory Reservation Report");
    commands::print_calculation(&calc, verbose);
    Ok(())
}
