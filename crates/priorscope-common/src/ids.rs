//! Id generation as an injected capability.
//!
//! Entities mint ids through an `IdSource` rather than calling
//! `Uuid::new_v4()` at the use site, so tests can supply
//! deterministic ids and replays stay reproducible.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh entity ids.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Production source: random v4 UUIDs.
#[derive(Debug, Clone, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic source for tests: ids are sequential counters
/// embedded in the low bits of the UUID.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u64_pair(0, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_distinct_and_ordered() {
        let ids = SequentialIds::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(a.as_u128() < b.as_u128());
    }

    #[test]
    fn random_ids_are_distinct() {
        let ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
