// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`Calculation`] result type.

use crate::policy::Reservation;
use crate::{PlanError, ResolvedMethod};
use mem_units::ByteSize;

/// The guest must keep at least this much memory after the reservation
/// is withheld. Calculations that would dip below it are rejected.
pub const MIN_GUEST: ByteSize = ByteSize::from_mib(10);

/// A completed reservation calculation.
///
/// Invariant: `vm == reserved + guest` exactly, for every method and
/// input. Instances are only built through the crate's entry points,
/// which enforce the invariant and the [`MIN_GUEST`] floor.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Calculation {
    /// Total memory configured for the VM.
    pub vm: ByteSize,
    /// Bytes withheld for hypervisor overhead.
    pub reserved: ByteSize,
    /// Bytes left to the guest OS.
    pub guest: ByteSize,
    /// The concrete policy that produced the reservation.
    pub method_used: ResolvedMethod,
    /// The ratio applied, when `method_used` is ratio-based.
    pub ratio: Option<f64>,
}

impl Calculation {
    /// Builds a calculation from a policy outcome, enforcing the guest
    /// floor.
    pub(crate) fn build(
        vm: ByteSize,
        reservation: Reservation,
        method_used: ResolvedMethod,
    ) -> Result<Self, PlanError> {
        let floor = reservation
            .reserved
            .as_bytes()
            .checked_add(MIN_GUEST.as_bytes())
            .ok_or(PlanError::SizeOverflow)?;
        if vm.as_bytes() < floor {
            return Err(PlanError::GuestBelowMinimum {
                vm,
                reserved: reservation.reserved,
                min_guest: MIN_GUEST,
            });
        }
        let guest = ByteSize::from_bytes(vm.as_bytes() - reservation.reserved.as_bytes());
        Ok(Self {
            vm,
            reserved: reservation.reserved,
            guest,
            method_used,
            ratio: reservation.ratio,
        })
    }

    /// Reserved share of the VM memory, as a percentage. Display only.
    pub fn overhead_percent(&self) -> f64 {
        self.reserved.as_bytes() as f64 * 100.0 / self.vm.as_bytes() as f64
    }

    /// Returns a one-line summary of this calculation.
    pub fn summary(&self) -> String {
        format!(
            "vm {} → reserved {} ({}, {:.1}%), guest {}",
            self.vm,
            self.reserved,
            self.method_used,
            self.overhead_percent(),
            self.guest,
        )
    }
}
