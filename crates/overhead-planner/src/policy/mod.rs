// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`ReservePolicy`] trait and policy implementations.

pub mod legacy;
pub mod ratio;

use crate::{Method, ResolvedMethod};
use mem_units::ByteSize;

pub use legacy::{FixedReserve, LEGACY_RESERVED};
pub use ratio::ScaledReserve;

/// VM sizes at or above this threshold use ratio-based reservation
/// under [`Method::Auto`]. Compared against raw bytes, unlike the
/// bracket table inside [`ScaledReserve`], which works on the GiB
/// value rounded to two decimals.
pub const AUTO_RATIO_THRESHOLD: ByteSize = ByteSize::from_gib(4);

/// Trait for overhead reservation policies.
///
/// Each policy takes a VM memory size and decides how many bytes are
/// withheld from the guest. Policies are purely arithmetic, with no I/O
/// or shared state, so they are trivially unit-testable.
pub trait ReservePolicy: Send + Sync {
    /// Display name of this policy.
    fn name(&self) -> &'static str;

    /// Computes the reservation for the given VM size.
    fn reserve(&self, vm: ByteSize) -> Reservation;
}

/// Outcome of applying a single policy to a VM size.
#[derive(Debug, Clone, Copy)]
pub struct Reservation {
    /// Bytes withheld from the guest.
    pub reserved: ByteSize,
    /// The ratio applied, when the policy is size-proportional.
    pub ratio: Option<f64>,
}

/// Resolves a requested method to a concrete policy for the given VM
/// size.
pub fn resolve(method: Method, vm: ByteSize) -> ResolvedMethod {
    match method {
        Method::Legacy => ResolvedMethod::Legacy,
        Method::Ratio => ResolvedMethod::RatioBased,
        Method::Auto => {
            if vm >= AUTO_RATIO_THRESHOLD {
                tracing::info!("auto: {vm} meets the 4 Gi threshold → ratio-based reservation");
                ResolvedMethod::RatioBased
            } else {
                tracing::info!("auto: {vm} below the 4 Gi threshold → legacy reservation");
                ResolvedMethod::Legacy
            }
        }
    }
}
