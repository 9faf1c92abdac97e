// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for reservation planning.

use mem_units::ByteSize;

/// Errors that can occur while planning a memory reservation.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The method token is not one of the recognized set.
    #[error("unknown method '{0}'; expected 'auto', 'legacy', or 'ratio'")]
    InvalidMethod(String),

    /// The selected policy would leave the guest below the admission floor.
    #[error(
        "guest memory would fall below the {min_guest} admission floor: \
         vm {vm} minus {reserved} reserved"
    )]
    GuestBelowMinimum {
        vm: ByteSize,
        reserved: ByteSize,
        min_guest: ByteSize,
    },

    /// The reverse solve exhausted its iteration cap without meeting the
    /// requested guest size.
    #[error(
        "sizing for {desired} guest memory did not converge within {iterations} \
         iterations (last candidate: {last_vm} vm)"
    )]
    NonConvergence {
        desired: ByteSize,
        iterations: u32,
        last_vm: ByteSize,
    },

    /// A byte count exceeded the 64-bit range.
    #[error("memory size overflows the byte counter")]
    SizeOverflow,
}
