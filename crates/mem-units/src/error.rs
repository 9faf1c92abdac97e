// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for size parsing.

/// Errors that can occur while parsing a memory size string.
#[derive(Debug, thiserror::Error)]
pub enum SizeError {
    /// The input was empty or whitespace only.
    #[error("empty size string")]
    Empty,

    /// The input does not match `<number><unit>` or `<integer>`.
    #[error("invalid size '{input}': expected a number followed by an optional unit (Ki, Mi, Gi, Ti)")]
    InvalidFormat { input: String },

    /// The unit suffix is not in the recognized set.
    #[error("invalid size '{input}': unknown unit '{unit}'")]
    UnknownUnit { input: String, unit: String },

    /// The value does not fit in a 64-bit byte count.
    #[error("size '{input}' overflows the byte counter")]
    Overflow { input: String },
}
