use std::cmp::Ordering;

use log::debug;

use crate::partition::{generate_partitions, Partition};

/// Lowest cost among the partitions of n and every partition attaining it,
/// in generator encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostResult {
    pub min_cost: u64,
    pub partitions: Vec<Partition>,
}

/// `None` only for an empty input.
pub fn select_min_cost<I>(partitions: I) -> Option<CostResult>
where
    I: IntoIterator<Item = Partition>,
{
    let mut best: Option<CostResult> = None;
    for partition in partitions {
        let cost = partition.cost();
        if let Some(current) = best.as_mut() {
            match cost.cmp(&current.min_cost) {
                Ordering::Greater => continue,
                Ordering::Equal => {
                    current.partitions.push(partition);
                    continue;
                }
                Ordering::Less => {}
            }
        }
        best = Some(CostResult {
            min_cost: cost,
            partitions: vec![partition],
        });
    }
    best
}

pub fn find_min_sums_and_partitions(n: u64) -> CostResult {
    // the generator yields at least the empty partition, even for n = 0
    let result = select_min_cost(generate_partitions(n))
        .unwrap_or_else(|| unreachable!("no partitions generated for n={n}"));
    debug!(
        "n={n} min_cost={} attained by {} partition(s)",
        result.min_cost,
        result.partitions.len()
    );
    result
}
