use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleId(pub u64);

// atomic counter so loads running anywhere always get a fresh id
pub fn next_sample_id() -> SampleId {
    SampleId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}
