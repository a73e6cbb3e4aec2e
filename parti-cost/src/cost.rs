//! Cost of a partition: pairs inside each group plus a penalty for every
//! group that precedes it.

use crate::partition::Partition;

/// v choose 2, the unordered pairs within a group of `part` items.
pub const fn combination_term(part: u64) -> u64 {
    if part >= 2 {
        part * (part - 1) / 2
    } else {
        0
    }
}

/// `position` is 1-based
pub const fn position_term(part: u64, position: usize) -> u64 {
    debug_assert!(position >= 1);
    part * (position as u64 - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostBreakdown {
    pub combination: u64,
    pub position: u64,
}

impl CostBreakdown {
    pub const fn total(&self) -> u64 {
        self.combination + self.position
    }
}

impl Partition {
    pub fn cost_breakdown(&self) -> CostBreakdown {
        self.parts()
            .enumerate()
            .fold(CostBreakdown::default(), |acc, (idx, part)| CostBreakdown {
                combination: acc.combination + combination_term(part),
                position: acc.position + position_term(part, idx + 1),
            })
    }

    pub fn cost(&self) -> u64 {
        self.cost_breakdown().total()
    }
}
