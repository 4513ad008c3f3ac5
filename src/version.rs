//! Two-component version tokens and their ordering.
//!
//! Release eligibility is decided on `major.minor` tokens with a strict
//! two-level comparison: minor is only consulted when the majors are equal.

use std::fmt;
use std::str::FromStr;

/// Reason a token failed to parse as a [`Version`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    /// The token did not contain exactly two dot-separated segments.
    #[error("expected two dot-separated segments, got {0}")]
    SegmentCount(usize),

    /// A segment was not a non-negative integer.
    #[error("segment {0:?} is not a non-negative integer")]
    Segment(String),
}

/// A `major.minor` version token.
///
/// Ordering is strict two-level lexicographic: `2.5 > 2.3`, `2.0 > 1.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
}

impl Version {
    /// Returns `true` if `self` is strictly newer than `other`.
    pub fn is_newer_than(self, other: Version) -> bool {
        self > other
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Parses `"<major>.<minor>"`.
    ///
    /// Strict by contract: wrong segment count or a non-numeric segment is
    /// an error, never coerced to zero. A malformed remote token must read
    /// as incomparable, not as version `0.x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() != 2 {
            return Err(ParseVersionError::SegmentCount(segments.len()));
        }

        let parse = |segment: &str| {
            // u32::from_str tolerates a leading `+`; the token format is
            // digits only.
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseVersionError::Segment(segment.to_owned()));
            }
            segment
                .parse::<u32>()
                .map_err(|_| ParseVersionError::Segment(segment.to_owned()))
        };

        Ok(Version {
            major: parse(segments[0])?,
            minor: parse(segments[1])?,
        })
    }
}
