// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reverse sizing: find the VM size that delivers a requested guest
//! size.
//!
//! The legacy policy inverts in one step. The ratio-based policy does
//! not: the bracket depends on the VM size being solved for, so the
//! solver seeds an estimate assuming the deepest bracket and walks it
//! up geometrically until the candidate guest covers the request.
//!
//! The walk finds the first satisfying size in its growth sequence,
//! not the minimal one. The delivered guest can therefore exceed the
//! request; callers get the exact figures back and must surface them.
// TODO: a binary search over [desired, desired / 0.90] would find the
// minimal VM size with guaranteed termination; the geometric walk is
// kept so existing deployments keep getting the same sizes.

use crate::policy::ratio::ratio_for;
use crate::policy::{FixedReserve, ReservePolicy, ScaledReserve, AUTO_RATIO_THRESHOLD};
use crate::{Calculation, Method, PlanError, ResolvedMethod, LEGACY_RESERVED};
use mem_units::ByteSize;

/// Iteration cap for the ratio-based walk.
const MAX_ITERATIONS: u32 = 10;
/// Seed divisor: assumes the deepest bracket (5% reserved).
const SEED_DIVISOR: f64 = 0.97;
/// Growth applied to an undershooting candidate.
const GROWTH: f64 = 1.01;

/// Computes the VM size needed to deliver at least `desired` guest
/// memory under the given method.
///
/// For `Method::Auto`, requests of 4 Gi or more use the ratio-based
/// procedure and smaller requests use the legacy formula, mirroring
/// the forward selector.
pub fn reverse(desired: ByteSize, method: Method) -> Result<Calculation, PlanError> {
    let resolved = match method {
        Method::Legacy => ResolvedMethod::Legacy,
        Method::Ratio => ResolvedMethod::RatioBased,
        Method::Auto => {
            if desired >= AUTO_RATIO_THRESHOLD {
                tracing::info!("auto: {desired} guest requested → ratio-based sizing");
                ResolvedMethod::RatioBased
            } else {
                tracing::info!("auto: {desired} guest requested → legacy sizing");
                ResolvedMethod::Legacy
            }
        }
    };

    match resolved {
        ResolvedMethod::Legacy => {
            let vm = desired
                .as_bytes()
                .checked_add(LEGACY_RESERVED.as_bytes())
                .ok_or(PlanError::SizeOverflow)?;
            let vm = ByteSize::from_bytes(vm);
            Calculation::build(vm, FixedReserve.reserve(vm), ResolvedMethod::Legacy)
        }
        ResolvedMethod::RatioBased => solve_ratio(desired),
    }
}

/// Fixed-point walk for the ratio-based policy.
fn solve_ratio(desired: ByteSize) -> Result<Calculation, PlanError> {
    let mut vm = (desired.as_bytes() as f64 / SEED_DIVISOR) as u64;
    let mut converged = false;

    for iteration in 0..MAX_ITERATIONS {
        let ratio = ratio_for(ByteSize::from_bytes(vm));
        let candidate_guest = (vm as f64 * (1.0 - ratio)) as u64;
        if candidate_guest >= desired.as_bytes() {
            tracing::debug!(iteration, vm, candidate_guest, "sizing converged");
            converged = true;
            break;
        }
        tracing::debug!(
            iteration,
            vm,
            candidate_guest,
            shortfall = desired.as_bytes() - candidate_guest,
            "candidate undershoots, growing by 1%"
        );
        vm = (vm as f64 * GROWTH) as u64;
    }

    if !converged {
        return Err(PlanError::NonConvergence {
            desired,
            iterations: MAX_ITERATIONS,
            last_vm: ByteSize::from_bytes(vm),
        });
    }

    // Recompute through the policy so reserved, guest, and percentage
    // are mutually consistent. The policy subtracts the truncated
    // reservation, so the final guest can exceed the walk's candidate.
    let vm = ByteSize::from_bytes(vm);
    Calculation::build(vm, ScaledReserve.reserve(vm), ResolvedMethod::RatioBased)
}
