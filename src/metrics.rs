//! Lightweight global metrics for SceneSnap.
//!
//! Thread-safe atomic counters per subsystem:
//! - Captures (coordinator)
//! - Graph walk (nodes, cycles, depth limits, truncations, unreadable members)
//! - Output sink

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Captures -----
static CAPTURES_TOTAL: AtomicU64 = AtomicU64::new(0);

// ----- Graph walk -----
static NODES_VISITED: AtomicU64 = AtomicU64::new(0);
static CYCLES_DETECTED: AtomicU64 = AtomicU64::new(0);
static DEPTH_LIMITED: AtomicU64 = AtomicU64::new(0);
static COLLECTIONS_TRUNCATED: AtomicU64 = AtomicU64::new(0);
static UNREADABLE_MEMBERS: AtomicU64 = AtomicU64::new(0);

// ----- Output sink -----
static SINK_WRITE_FAILURES: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    pub captures_total: u64,

    pub nodes_visited: u64,
    pub cycles_detected: u64,
    pub depth_limited: u64,
    pub collections_truncated: u64,
    pub unreadable_members: u64,

    pub sink_write_failures: u64,
}

impl MetricsSnapshot {
    /// Average visited nodes per capture (0.0 before the first capture).
    pub fn avg_nodes_per_capture(&self) -> f64 {
        if self.captures_total == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.captures_total as f64
        }
    }
}

// ----- Recorders -----

pub fn record_capture() {
    CAPTURES_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub fn record_node_visited() {
    NODES_VISITED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_cycle_detected() {
    CYCLES_DETECTED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_depth_limited() {
    DEPTH_LIMITED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_collection_truncated() {
    COLLECTIONS_TRUNCATED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_unreadable_member() {
    UNREADABLE_MEMBERS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_sink_write_failure() {
    SINK_WRITE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

/// Consistent-enough snapshot of all counters (Relaxed loads).
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        captures_total: CAPTURES_TOTAL.load(Ordering::Relaxed),

        nodes_visited: NODES_VISITED.load(Ordering::Relaxed),
        cycles_detected: CYCLES_DETECTED.load(Ordering::Relaxed),
        depth_limited: DEPTH_LIMITED.load(Ordering::Relaxed),
        collections_truncated: COLLECTIONS_TRUNCATED.load(Ordering::Relaxed),
        unreadable_members: UNREADABLE_MEMBERS.load(Ordering::Relaxed),

        sink_write_failures: SINK_WRITE_FAILURES.load(Ordering::Relaxed),
    }
}

/// Reset all counters to zero (tests / between bench runs).
pub fn reset() {
    CAPTURES_TOTAL.store(0, Ordering::Relaxed);

    NODES_VISITED.store(0, Ordering::Relaxed);
    CYCLES_DETECTED.store(0, Ordering::Relaxed);
    DEPTH_LIMITED.store(0, Ordering::Relaxed);
    COLLECTIONS_TRUNCATED.store(0, Ordering::Relaxed);
    UNREADABLE_MEMBERS.store(0, Ordering::Relaxed);

    SINK_WRITE_FAILURES.store(0, Ordering::Relaxed);
}
