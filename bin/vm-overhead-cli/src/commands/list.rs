// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Summary listing for the usual VM sizes.

use crate::commands;
use mem_units::ByteSize;
use overhead_planner::Method;

/// Sizes summarised by `--list-common`.
const COMMON_SIZES: [ByteSize; 6] = [
    ByteSize::from_gib(1),
    ByteSize::from_gib(2),
    ByteSize::from_gib(4),
    ByteSize::from_gib(8),
    ByteSize::from_gib(16),
    ByteSize::from_gib(32),
];

pub fn execute() -> anyhow::Result<()> {
    commands::banner("Common VM Sizes");
    for vm in COMMON_SIZES {
        let calc = overhead_planner::forward(vm, Method::Auto)?;
        println!("  {}", calc.summary());
    }
    Ok(())
}
