use serde::{Deserialize, Serialize};

use crate::error::{Error, Resource, Result};

/// Ceilings on the enumeration search. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum number of distinct candidates retained on the frontier.
    pub max_candidates: Option<usize>,
    /// Maximum number of partitions recorded in the collection.
    pub max_partitions: Option<usize>,
}

impl Limits {
    /// No ceilings at all.
    #[inline] pub fn unlimited() -> Self { Self::default() }

    /// Cap the number of retained frontier candidates.
    pub fn max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    /// Cap the number of recorded partitions.
    pub fn max_partitions(mut self, limit: usize) -> Self {
        self.max_partitions = Some(limit);
        self
    }

    /// Fail if `count` exceeds the ceiling configured for `resource`.
    pub(crate) fn check(&self, resource: Resource, count: usize) -> Result<()> {
        let limit = match resource {
            Resource::Candidates => self.max_candidates,
            Resource::Partitions => self.max_partitions,
        };
        match limit {
            Some(limit) if count > limit => Err(Error::ResourceExhausted { resource, limit }),
            _ => Ok(()),
        }
    }
}
