use std::fmt::Display;

use im::Vector;
use itertools::Itertools;

/// A non-increasing sequence of positive parts.
///
/// Backed by a persistent vector, so extending a partition shares structure
/// with its prefix instead of mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Partition {
    values: Vector<u64>,
}

impl Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.values.iter().join(", "))
    }
}

impl Partition {
    pub fn parts(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> u64 {
        self.values.iter().sum()
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.values.iter().copied().collect_vec()
    }
}

/// A partition under construction, `remaining` is what is left to distribute.
#[derive(Debug, Clone)]
struct Parti {
    values: Vector<u64>,
    remaining: u64,
}

impl Parti {
    fn empty(target_n: u64) -> Self {
        Self {
            values: Vector::new(),
            remaining: target_n,
        }
    }

    /// Copy-on-append, `self` stays usable for the sibling branches.
    fn take(&self, part: u64) -> Self {
        debug_assert!((1..=self.remaining).contains(&part));
        let mut values = self.values.clone();
        values.push_back(part);
        Self {
            values,
            remaining: self.remaining - part,
        }
    }

    fn into_partition(self) -> Partition {
        debug_assert_eq!(self.remaining, 0);
        Partition {
            values: self.values,
        }
    }
}

/// Every partition of `n`, largest first part first.
///
/// `n == 0` yields exactly one partition, the empty one.
pub fn generate_partitions(n: u64) -> Vec<Partition> {
    let mut partitions = Vec::new();
    extend_partitions(Parti::empty(n), n, &mut partitions);
    partitions
}

fn extend_partitions(parti: Parti, max_part: u64, partitions: &mut Vec<Partition>) {
    if parti.remaining == 0 {
        partitions.push(parti.into_partition());
        return;
    }
    for part in (1..=max_part.min(parti.remaining)).rev() {
        extend_partitions(parti.take(part), part, partitions);
    }
}

/// p(n) without enumerating. Saturates at `u64::MAX` (past n = 400 or so).
pub fn count_partitions(n: u64) -> u64 {
    let n = n as usize;
    let mut ways = vec![0u64; n + 1];
    ways[0] = 1;
    for part in 1..=n {
        for total in part..=n {
            ways[total] = ways[total].saturating_add(ways[total - part]);
        }
    }
    ways[n]
}
