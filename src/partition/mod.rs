mod collection;
mod enumerate;
mod ops;
mod partition;
mod structures;

pub(crate) use structures::PartitionSet;
pub use collection::PartitionCollection;
pub use enumerate::{Enumerator, enumerate_partitions};
pub use partition::Partition;
pub use structures::{SetFamily, single_difference, symmetric_difference};
