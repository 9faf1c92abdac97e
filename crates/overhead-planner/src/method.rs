// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reservation method selectors.

use crate::policy::{FixedReserve, ReservePolicy, ScaledReserve};
use crate::PlanError;
use std::fmt;
use std::str::FromStr;

/// The reservation method requested by the caller.
///
/// `Auto` picks between the two concrete policies based on the memory
/// size involved; the other variants force a policy unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Choose ratio-based at or above 4 Gi, legacy below.
    Auto,
    /// Fixed 100 Mi reservation.
    Legacy,
    /// Size-proportional reservation.
    Ratio,
}

impl Method {
    /// Returns the CLI token for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Auto => "auto",
            Method::Legacy => "legacy",
            Method::Ratio => "ratio",
        }
    }
}

impl FromStr for Method {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Method::Auto),
            "legacy" => Ok(Method::Legacy),
            "ratio" | "ratio-based" => Ok(Method::Ratio),
            other => Err(PlanError::InvalidMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete policy a calculation actually used.
///
/// `Auto` always resolves to one of these; a result never reports
/// "auto" as its method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolvedMethod {
    Legacy,
    RatioBased,
}

impl ResolvedMethod {
    /// Returns the display token for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedMethod::Legacy => "legacy",
            ResolvedMethod::RatioBased => "ratio-based",
        }
    }

    /// Returns the policy implementing this method.
    pub fn policy(self) -> &'static dyn ReservePolicy {
        match self {
            ResolvedMethod::Legacy => &FixedReserve,
            ResolvedMethod::RatioBased => &ScaledReserve,
        }
    }
}

impl fmt::Display for ResolvedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
