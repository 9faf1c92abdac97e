// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # overhead-planner
//!
//! Computes how much of a virtual machine's configured memory is
//! withheld for hypervisor overhead and how much the guest OS actually
//! sees, in both directions: VM size to reservation ([`forward`]) and
//! desired guest size to required VM size ([`reverse`]).
//!
//! # Key Components
//!
//! - [`ReservePolicy`] — the policy seam: [`FixedReserve`] withholds a
//!   flat 100 Mi, [`ScaledReserve`] withholds a stepped fraction of the
//!   VM size.
//! - [`Method`] / [`ResolvedMethod`] — what the caller asked for and
//!   what `Auto` resolved it to.
//! - [`Calculation`] — the result, carrying the exact
//!   `vm == reserved + guest` split.
//! - [`reverse`] — the sizing solver, a one-step formula for the fixed
//!   policy and a capped fixed-point walk for the proportional one.
//!
//! Every computation is a pure function of its inputs. There is no
//! shared state, no I/O, and nothing to configure.
//!
//! # Example
//! ```
//! use mem_units::ByteSize;
//! use overhead_planner::{forward, Method};
//!
//! let vm = ByteSize::parse("8Gi").unwrap();
//! let calc = forward(vm, Method::Auto).unwrap();
//! assert_eq!(
//!     calc.reserved.as_bytes() + calc.guest.as_bytes(),
//!     calc.vm.as_bytes(),
//! );
//! assert_eq!(calc.method_used.as_str(), "ratio-based");
//! ```

mod calculation;
mod error;
mod method;
pub mod policy;
mod solver;

pub use calculation::{Calculation, MIN_GUEST};
pub use error::PlanError;
pub use method::{Method, ResolvedMethod};
pub use policy::{
    FixedReserve, Reservation, ReservePolicy, ScaledReserve, AUTO_RATIO_THRESHOLD,
    LEGACY_RESERVED,
};
pub use solver::reverse;

use mem_units::ByteSize;

/// Computes the reservation split for a VM of the given size.
///
/// Resolves `method` to a concrete policy (`Auto` picks ratio-based at
/// or above 4 Gi), applies it, and returns the full split. Fails with
/// [`PlanError::GuestBelowMinimum`] when the policy would leave the
/// guest under the 10 Mi floor.
pub fn forward(vm: ByteSize, method: Method) -> Result<Calculation, PlanError> {
    let resolved = policy::resolve(method, vm);
    Calculation::build(vm, resolved.policy().reserve(vm), resolved)
}
