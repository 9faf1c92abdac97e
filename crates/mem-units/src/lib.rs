// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # mem-units
//!
//! Exact byte counts for infrastructure resource specifications, with
//! human-readable parsing and binary-unit formatting.
//!
//! # Key Components
//!
//! - [`ByteSize`] — a `u64` byte count with string parsing (`"8Gi"`,
//!   `"512M"`, `"4.5Gi"`, raw byte counts) and a `Display` impl that
//!   downscales through Ki/Mi/Gi/Ti.
//! - [`SizeError`] — typed parse failures.
//!
//! All suffixes use binary multipliers: `K`, `KB`, and `Ki` are all
//! 1024, `M`/`MB`/`Mi` are 1024², and so on through `T`/`TB`/`Ti`.
//! This matches the resource-specification convention the calculator
//! targets, not SI decimal units.
//!
//! # Example
//! ```
//! use mem_units::ByteSize;
//!
//! let size = ByteSize::parse("512Mi").unwrap();
//! assert_eq!(size.as_bytes(), 536_870_912);
//! assert_eq!(size.to_string(), "512.00 Mi");
//!
//! assert_eq!(ByteSize::parse("4096").unwrap().as_bytes(), 4096);
//! assert!(ByteSize::parse("4 Gi").is_err());
//! ```

mod error;
mod size;

pub use error::SizeError;
pub use size::{ByteSize, GIB, KIB, MIB, TIB};
