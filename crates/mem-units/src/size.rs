// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`ByteSize`] type: an exact byte count with human-readable
//! parsing and binary-unit formatting.

use crate::SizeError;
use std::fmt;

/// Bytes per kibibyte.
pub const KIB: u64 = 1024;
/// Bytes per mebibyte.
pub const MIB: u64 = 1024 * KIB;
/// Bytes per gibibyte.
pub const GIB: u64 = 1024 * MIB;
/// Bytes per tebibyte.
pub const TIB: u64 = 1024 * GIB;

/// Display units, smallest first. `Ti` is the ceiling: larger values
/// stay in `Ti` rather than promoting further.
const UNITS: [&str; 5] = ["B", "Ki", "Mi", "Gi", "Ti"];

/// An exact, non-negative number of bytes.
///
/// # Parsing
/// Accepts `<number><unit>` or a bare integer byte count, case
/// insensitive, no embedded whitespace:
/// - `"8Gi"`, `"8G"`, `"8GB"` all mean 8 × 1024³ bytes
/// - `"4.5Gi"` is truncated toward zero after scaling
/// - `"1073741824"` is a raw byte count
///
/// # Examples
/// ```
/// use mem_units::ByteSize;
///
/// let b = ByteSize::parse("1G").unwrap();
/// assert_eq!(b, ByteSize::from_gib(1));
/// assert_eq!(b.as_bytes(), 1_073_741_824);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ByteSize(u64);

impl ByteSize {
    /// Creates a size from a raw byte count.
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Creates a size from mebibytes.
    pub const fn from_mib(mib: u64) -> Self {
        Self(mib * MIB)
    }

    /// Creates a size from gibibytes.
    pub const fn from_gib(gib: u64) -> Self {
        Self(gib * GIB)
    }

    /// Returns the size in bytes.
    pub const fn as_bytes(self) -> u64 {
        self.0
    }

    /// Returns the size in gibibytes, rounded to two decimal places.
    ///
    /// This is the granularity the reservation brackets are defined at,
    /// so callers comparing against whole-GiB boundaries must use this
    /// accessor rather than dividing raw bytes themselves.
    pub fn as_gib(self) -> f64 {
        round2(self.0 as f64 / GIB as f64)
    }

    /// Parses a human-readable size string.
    ///
    /// Surrounding whitespace is ignored; embedded whitespace is an
    /// error. A fractional literal requires a unit (fractional raw
    /// bytes are meaningless).
    pub fn parse(text: &str) -> Result<Self, SizeError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(SizeError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(SizeError::InvalidFormat {
                input: text.to_string(),
            });
        }

        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        if number.is_empty() {
            return Err(SizeError::InvalidFormat {
                input: text.to_string(),
            });
        }

        let multiplier = multiplier_for(unit).ok_or_else(|| SizeError::UnknownUnit {
            input: text.to_string(),
            unit: unit.to_string(),
        })?;

        if number.contains('.') {
            // Fractional path: scale in f64, then truncate toward zero.
            if unit.is_empty() {
                return Err(SizeError::InvalidFormat {
                    input: text.to_string(),
                });
            }
            let value: f64 = number.parse().map_err(|_| SizeError::InvalidFormat {
                input: text.to_string(),
            })?;
            let bytes = value * multiplier as f64;
            if !bytes.is_finite() || bytes >= u64::MAX as f64 {
                return Err(SizeError::Overflow {
                    input: text.to_string(),
                });
            }
            Ok(Self(bytes as u64))
        } else {
            // Integer path: exact, no float involved.
            let value: u64 = number.parse().map_err(|_| SizeError::Overflow {
                input: text.to_string(),
            })?;
            let bytes = value
                .checked_mul(multiplier)
                .ok_or_else(|| SizeError::Overflow {
                    input: text.to_string(),
                })?;
            Ok(Self(bytes))
        }
    }
}

/// Maps a unit suffix to its byte multiplier. The single-letter and
/// `*B` forms are binary, identical to their `*i` counterparts.
fn multiplier_for(unit: &str) -> Option<u64> {
    match unit.to_ascii_lowercase().as_str() {
        "" | "b" => Some(1),
        "k" | "kb" | "ki" => Some(KIB),
        "m" | "mb" | "mi" => Some(MIB),
        "g" | "gb" | "gi" => Some(GIB),
        "t" | "tb" | "ti" => Some(TIB),
        _ => None,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for ByteSize {
    /// Formats as `"<value> <unit>"`, downscaling through Ki/Mi/Gi/Ti.
    ///
    /// The running value is rounded to two decimals after every
    /// division, before the next comparison. This decides which unit a
    /// boundary value lands in: 1_048_571 bytes rounds up to 1024.00 Ki
    /// mid-loop and therefore prints as `"1.00 Mi"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0 as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value = round2(value / 1024.0);
            unit += 1;
        }
        if unit == 0 {
            write!(f, "{} B", self.0)
        } else {
            write!(f, "{:.2} {}", value, UNITS[unit])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary_suffixes() {
        assert_eq!(ByteSize::parse("4Gi").unwrap().as_bytes(), 4 * GIB);
        assert_eq!(ByteSize::parse("512Mi").unwrap().as_bytes(), 512 * MIB);
        assert_eq!(ByteSize::parse("2048Ki").unwrap().as_bytes(), 2048 * KIB);
        assert_eq!(ByteSize::parse("1Ti").unwrap().as_bytes(), TIB);
    }

    #[test]
    fn test_parse_short_and_decimal_looking_suffixes() {
        // K, KB, and Ki are all binary here, and likewise for M/G/T.
        assert_eq!(ByteSize::parse("1K").unwrap().as_bytes(), 1024);
        assert_eq!(ByteSize::parse("1KB").unwrap().as_bytes(), 1024);
        assert_eq!(ByteSize::parse("1M").unwrap().as_bytes(), MIB);
        assert_eq!(ByteSize::parse("1MB").unwrap().as_bytes(), MIB);
        assert_eq!(ByteSize::parse("8G").unwrap().as_bytes(), 8 * GIB);
        assert_eq!(ByteSize::parse("8GB").unwrap().as_bytes(), 8 * GIB);
        assert_eq!(ByteSize::parse("2T").unwrap().as_bytes(), 2 * TIB);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ByteSize::parse("4gi").unwrap(), ByteSize::from_gib(4));
        assert_eq!(ByteSize::parse("4GI").unwrap(), ByteSize::from_gib(4));
        assert_eq!(ByteSize::parse("512mB").unwrap(), ByteSize::from_mib(512));
    }

    #[test]
    fn test_parse_raw_bytes() {
        assert_eq!(ByteSize::parse("4096").unwrap().as_bytes(), 4096);
        assert_eq!(
            ByteSize::parse("4294967296").unwrap(),
            ByteSize::from_gib(4)
        );
        assert_eq!(ByteSize::parse("0").unwrap().as_bytes(), 0);
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(
            ByteSize::parse("4.5Gi").unwrap().as_bytes(),
            4_831_838_208
        );
        assert_eq!(ByteSize::parse("1.5Ki").unwrap().as_bytes(), 1536);
        // Truncated toward zero, not rounded.
        assert_eq!(ByteSize::parse("0.3Gi").unwrap().as_bytes(), 322_122_547);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_eq!(ByteSize::parse("  8Gi  ").unwrap(), ByteSize::from_gib(8));
    }

    #[test]
    fn test_parse_embedded_whitespace() {
        assert!(matches!(
            ByteSize::parse("4 Gi"),
            Err(SizeError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert!(matches!(
            ByteSize::parse("4XY"),
            Err(SizeError::UnknownUnit { .. })
        ));
        assert!(matches!(
            ByteSize::parse("4GiB2"),
            Err(SizeError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_parse_bad_grammar() {
        assert!(matches!(ByteSize::parse(""), Err(SizeError::Empty)));
        assert!(matches!(ByteSize::parse("   "), Err(SizeError::Empty)));
        assert!(matches!(
            ByteSize::parse("Gi"),
            Err(SizeError::InvalidFormat { .. })
        ));
        assert!(matches!(
            ByteSize::parse("-1Gi"),
            Err(SizeError::InvalidFormat { .. })
        ));
        assert!(matches!(
            ByteSize::parse("1.2.3Gi"),
            Err(SizeError::InvalidFormat { .. })
        ));
        // A fractional literal needs a unit.
        assert!(matches!(
            ByteSize::parse("4.5"),
            Err(SizeError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            ByteSize::parse("99999999999999T"),
            Err(SizeError::Overflow { .. })
        ));
        // Integer literal beyond u64.
        assert!(matches!(
            ByteSize::parse("99999999999999999999"),
            Err(SizeError::Overflow { .. })
        ));
        assert!(matches!(
            ByteSize::parse("99999999999.5T"),
            Err(SizeError::Overflow { .. })
        ));
    }

    #[test]
    fn test_display_whole_bytes() {
        assert_eq!(ByteSize::from_bytes(0).to_string(), "0 B");
        assert_eq!(ByteSize::from_bytes(100).to_string(), "100 B");
        assert_eq!(ByteSize::from_bytes(1023).to_string(), "1023 B");
    }

    #[test]
    fn test_display_scaled() {
        assert_eq!(ByteSize::from_bytes(1024).to_string(), "1.00 Ki");
        assert_eq!(ByteSize::from_bytes(536_870_912).to_string(), "512.00 Mi");
        assert_eq!(ByteSize::from_gib(4).to_string(), "4.00 Gi");
        assert_eq!(ByteSize::from_bytes(TIB).to_string(), "1.00 Ti");
    }

    #[test]
    fn test_display_iterative_rounding_boundary() {
        // 1_048_571 / 1024 = 1023.995..., which rounds to 1024.00 before
        // the next comparison and so promotes to Mi. One step fewer and
        // it stays in Ki.
        assert_eq!(ByteSize::from_bytes(1_048_571).to_string(), "1.00 Mi");
        assert_eq!(ByteSize::from_bytes(1_048_570).to_string(), "1023.99 Ki");
    }

    #[test]
    fn test_display_ti_is_ceiling() {
        // 1 PiB does not promote past Ti.
        assert_eq!(ByteSize::from_bytes(1024 * TIB).to_string(), "1024.00 Ti");
    }

    #[test]
    fn test_as_gib_rounds_to_two_decimals() {
        assert_eq!(ByteSize::from_gib(8).as_gib(), 8.0);
        // 4 Gi + 1 Mi is 4.0009..., which rounds back to 4.00.
        assert_eq!(ByteSize::from_bytes(4 * GIB + MIB).as_gib(), 4.0);
        assert_eq!(ByteSize::from_mib(1536).as_gib(), 1.5);
    }

    #[test]
    fn test_parse_format_reparse_stays_close() {
        // Formatting is lossy, but re-parsing a formatted value must
        // stay within one formatting unit of the original.
        for text in ["1Gi", "512Mi", "24Gi", "3Ti"] {
            let original = ByteSize::parse(text).unwrap();
            let formatted = original.to_string().replace(' ', "");
            let reparsed = ByteSize::parse(&formatted).unwrap();
            let delta = original.as_bytes().abs_diff(reparsed.as_bytes());
            assert!(delta <= MIB, "{text}: drifted by {delta} bytes");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let size = ByteSize::from_mib(256);
        let json = serde_json::to_string(&size).unwrap();
        let back: ByteSize = serde_json::from_str(&json).unwrap();
        assert_eq!(size, back);
    }
}
