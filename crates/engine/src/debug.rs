//! Optional debugger-attach hook for engine startup
//!
//! Mirrors the original runtime's rank-targeted spin-wait: set
//! `DATAFLOW_DEBUG_RANK` to the rank you want to attach a debugger to, and
//! that process spins (logging its pid) until the variable a debugger would
//! set is flipped. Gated behind the `gdb-attach` feature and off by default,
//! since it busy-waits and has no place in a production build.

use dataflow_core::ServerRank;

/// If `DATAFLOW_DEBUG_RANK` is set and matches `rank`, spin until a debugger
/// flips the local `attached` flag, logging the process id so the operator
/// knows what to attach to. A no-op when the feature is disabled or the env
/// var is unset or doesn't match.
#[cfg(feature = "gdb-attach")]
pub fn spin_for_debugger(rank: ServerRank) {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    static ATTACHED: AtomicBool = AtomicBool::new(false);

    let Ok(target) = std::env::var("DATAFLOW_DEBUG_RANK") else {
        return;
    };
    let Ok(target_rank) = target.parse::<i32>() else {
        tracing::warn!(raw = %target, "invalid DATAFLOW_DEBUG_RANK, ignoring");
        return;
    };
    if target_rank != rank.get() {
        return;
    }

    tracing::info!(pid = std::process::id(), rank = rank.get(), "waiting for debugger to attach");
    while !ATTACHED.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(100));
    }
}

/// No-op when the `gdb-attach` feature is disabled.
#[cfg(not(feature = "gdb-attach"))]
pub fn spin_for_debugger(_rank: ServerRank) {}
