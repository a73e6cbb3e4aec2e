pub mod cost;
pub mod error;
pub mod partition;
pub mod selector;
pub mod table;

pub use error::Error;
pub use partition::{count_partitions, generate_partitions, Partition};
pub use selector::{find_min_sums_and_partitions, select_min_cost, CostResult};
pub use table::ResultTable;
