// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-amount reservation policy.
//!
//! The original admission behavior: withhold 100 Mi regardless of how
//! large the VM is. Cheap to compute and predictable, but it
//! under-reserves for large VMs, which is why [`crate::Method::Auto`]
//! switches away from it at 4 Gi.

use crate::policy::{Reservation, ReservePolicy};
use mem_units::ByteSize;

/// Bytes withheld by the legacy policy, for every VM size.
pub const LEGACY_RESERVED: ByteSize = ByteSize::from_mib(100);

/// Legacy policy: a fixed 100 Mi reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedReserve;

impl ReservePolicy for FixedReserve {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn reserve(&self, _vm: ByteSize) -> Reservation {
        Reservation {
            reserved: LEGACY_RESERVED,
            ratio: None,
        }
    }
}
