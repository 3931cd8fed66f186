//! CEFR proficiency levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common European Framework of Reference level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// All levels, lowest first.
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    /// Position of this level on the 1-10 self-assessment scale.
    pub fn scale_equivalent(&self) -> f64 {
        match self {
            CefrLevel::A1 => 2.0,
            CefrLevel::A2 => 4.0,
            CefrLevel::B1 => 5.0,
            CefrLevel::B2 => 7.0,
            CefrLevel::C1 => 8.5,
            CefrLevel::C2 => 10.0,
        }
    }

    /// Returns true for C1 and C2.
    pub fn is_advanced(&self) -> bool {
        matches!(self, CefrLevel::C1 | CefrLevel::C2)
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_equivalent_increases_with_level() {
        for pair in CefrLevel::ALL.windows(2) {
            assert!(pair[0].scale_equivalent() < pair[1].scale_equivalent());
        }
    }

    #[test]
    fn only_c_levels_are_advanced() {
        assert!(!CefrLevel::B2.is_advanced());
        assert!(CefrLevel::C1.is_advanced());
        assert!(CefrLevel::C2.is_advanced());
    }

    #[test]
    fn serializes_as_plain_code() {
        assert_eq!(serde_json::to_string(&CefrLevel::B1).unwrap(), "\"B1\"");
    }
}
