// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Size-proportional reservation policy.
//!
//! The reservation grows with the VM in stepped brackets:
//!
//! | VM memory (GiB) | ratio |
//! |---|---|
//! | ≤ 1 | 0.01 |
//! | ≤ 2 | 0.02 |
//! | ≤ 4 | 0.03 |
//! | ≤ 8 | 0.04 |
//! | > 8 | 0.05 |
//!
//! Brackets are selected on the GiB value rounded to two decimals
//! ([`ByteSize::as_gib`]), so a VM a few MiB over a boundary can still
//! land in the lower bracket. The Auto selector threshold does NOT use
//! this rounding; see [`crate::policy::AUTO_RATIO_THRESHOLD`].

use crate::policy::{Reservation, ReservePolicy};
use mem_units::ByteSize;

/// Ratio-based policy: reserve a stepped fraction of the VM size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaledReserve;

/// Returns the bracket ratio for a VM size.
pub(crate) fn ratio_for(vm: ByteSize) -> f64 {
    let gib = vm.as_gib();
    if gib <= 1.0 {
        0.01
    } else if gib <= 2.0 {
        0.02
    } else if gib <= 4.0 {
        0.03
    } else if gib <= 8.0 {
        0.04
    } else {
        0.05
    }
}

impl ReservePolicy for ScaledReserve {
    fn name(&self) -> &'static str {
        "ratio-based"
    }

    fn reserve(&self, vm: ByteSize) -> Reservation {
        let ratio = ratio_for(vm);
        // Truncated toward zero, never rounded up.
        let reserved = (vm.as_bytes() as f64 * ratio) as u64;
        Reservation {
            reserved: ByteSize::from_bytes(reserved),
            ratio: Some(ratio),
        }
    }
}
