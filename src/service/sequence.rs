// ABOUTME: In-process sequence generator for concatenated message reference numbers
// ABOUTME: Atomic fetch-and-add so concurrent submissions never share a reference

use crate::service::error::SmppResult;
use crate::service::traits::SequenceGenerator;
use std::sync::atomic::{AtomicU32, Ordering};

/// [`SequenceGenerator`] backed by an `AtomicU32`.
///
/// Unique within one process only. Deployments running several service
/// instances against the same SMSC account need a shared counter instead.
/// Zero is never returned; the counter wraps from `u32::MAX` to 1.
#[derive(Debug)]
pub struct AtomicSequence {
    next: AtomicU32,
}

impl AtomicSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start handing out numbers from `start` (0 is treated as 1).
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start.max(1)),
        }
    }

    fn next_value(&self) -> u32 {
        loop {
            let value = self.next.fetch_add(1, Ordering::Relaxed);
            if value != 0 {
                return value;
            }
        }
    }
}

impl Default for AtomicSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for AtomicSequence {
    async fn next(&self) -> SmppResult<u32> {
        Ok(self.next_value())
    }
}
