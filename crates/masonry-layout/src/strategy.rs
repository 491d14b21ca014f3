//! Strategy selector.

use std::fmt;
use std::str::FromStr;

use masonry_core::AllocationError;

/// Column allocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Item `i` goes to column `i % columns`; geometry is ignored
    RoundRobin,
    /// Always extend the shortest column
    GreedyHeight,
    /// Shortest column while it has room, otherwise the column with fewest items
    Hybrid,
    /// Order-preserving contiguous split minimizing the tallest column
    #[default]
    Contiguous,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::RoundRobin,
        Strategy::GreedyHeight,
        Strategy::Hybrid,
        Strategy::Contiguous,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RoundRobin => "round-robin",
            Strategy::GreedyHeight => "greedy-height",
            Strategy::Hybrid => "hybrid",
            Strategy::Contiguous => "contiguous",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "round-robin" | "roundrobin" => Ok(Strategy::RoundRobin),
            "greedy-height" | "greedy" | "height" => Ok(Strategy::GreedyHeight),
            "hybrid" => Ok(Strategy::Hybrid),
            "contiguous" | "vertical" | "optimal" => Ok(Strategy::Contiguous),
            _ => Err(AllocationError::UnknownStrategy { name: s.to_string() }),
        }
    }
}
