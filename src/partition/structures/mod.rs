mod partition_set;
mod set_family;

pub(crate) use partition_set::PartitionSet;
pub use set_family::{SetFamily, single_difference, symmetric_difference};
