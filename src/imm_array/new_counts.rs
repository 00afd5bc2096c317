//! Counts fresh `ImmArray` allocations for testing purposes.
//!
//! Counts are kept per thread so that tests running in parallel don't see
//! each other's allocations.

use std::{
    collections::HashMap,
    sync::Mutex,
    thread::{self, ThreadId},
};

lazy_static::lazy_static! {
    static ref NEW_COUNTS: Mutex<HashMap<ThreadId, usize>> = Default::default();
}

pub fn reset_counts() {
    let tid = thread::current().id();
    NEW_COUNTS.lock().unwrap().insert(tid, 0);
}

pub fn total_new_count() -> usize {
    let tid = thread::current().id();
    *NEW_COUNTS.lock().unwrap().entry(tid).or_default()
}

pub fn incr_total_new_count() {
    let tid = thread::current().id();
    let mut guard = NEW_COUNTS.lock().unwrap();
    let count = guard.entry(tid).or_default();
    *count += 1;
}
