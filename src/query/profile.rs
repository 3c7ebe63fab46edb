//! Operator profiling counters.
//!
//! Profiling is enabled via the `CADENA_PROFILE` environment variable and
//! tracks per-family timing and invocation counts across a process. The
//! counters are relaxed atomics: cheap enough to leave compiled in, precise
//! enough for before/after comparisons of a pipeline change.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

/// A snapshot of operator profiling metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryProfileSnapshot {
    /// Total nanoseconds spent in filtering operators.
    pub filter_ns: u64,
    /// Number of filtering operator invocations.
    pub filter_count: u64,
    /// Total nanoseconds spent in projection operators.
    pub select_ns: u64,
    /// Number of projection operator invocations.
    pub select_count: u64,
    /// Total nanoseconds spent in ordering operators.
    pub order_ns: u64,
    /// Number of ordering operator invocations.
    pub order_count: u64,
    /// Total nanoseconds spent in set-algebra operators.
    pub set_op_ns: u64,
    /// Number of set-algebra operator invocations.
    pub set_op_count: u64,
    /// Total nanoseconds spent in aggregation operators.
    pub aggregate_ns: u64,
    /// Number of aggregation operator invocations.
    pub aggregate_count: u64,
}

#[derive(Default)]
struct ProfileCounters {
    filter_ns: AtomicU64,
    filter_count: AtomicU64,
    select_ns: AtomicU64,
    select_count: AtomicU64,
    order_ns: AtomicU64,
    order_count: AtomicU64,
    set_op_ns: AtomicU64,
    set_op_count: AtomicU64,
    aggregate_ns: AtomicU64,
    aggregate_count: AtomicU64,
}

static PROFILE_ENABLED: OnceLock<bool> = OnceLock::new();
static PROFILE_COUNTERS: OnceLock<ProfileCounters> = OnceLock::new();

fn profiling_enabled() -> bool {
    *PROFILE_ENABLED.get_or_init(|| std::env::var_os("CADENA_PROFILE").is_some())
}

fn counters() -> Option<&'static ProfileCounters> {
    profiling_enabled().then(|| PROFILE_COUNTERS.get_or_init(ProfileCounters::default))
}

pub(crate) fn profile_timer() -> Option<Instant> {
    profiling_enabled().then(Instant::now)
}

pub(crate) enum ProfileKind {
    /// Filtering operators (`filter`).
    Filter,
    /// Projection operators (`select`).
    Select,
    /// Ordering operators (`order_by` and friends).
    Order,
    /// Set algebra (`distinct`, `except`, `intersect`, `union`).
    SetOp,
    /// Aggregation folds (`sum`, `min`, `max` families).
    Aggregate,
}

pub(crate) fn record_profile_timer(kind: ProfileKind, start: Option<Instant>) {
    let Some(start) = start else {
        return;
    };
    let Some(counters) = counters() else {
        return;
    };
    let nanos = start.elapsed().as_nanos().min(u64::MAX as u128) as u64;
    let (ns, count) = match kind {
        ProfileKind::Filter => (&counters.filter_ns, &counters.filter_count),
        ProfileKind::Select => (&counters.select_ns, &counters.select_count),
        ProfileKind::Order => (&counters.order_ns, &counters.order_count),
        ProfileKind::SetOp => (&counters.set_op_ns, &counters.set_op_count),
        ProfileKind::Aggregate => (&counters.aggregate_ns, &counters.aggregate_count),
    };
    ns.fetch_add(nanos, Ordering::Relaxed);
    count.fetch_add(1, Ordering::Relaxed);
}

/// Retrieves a snapshot of the current profiling metrics.
///
/// Returns `None` unless profiling was enabled via the `CADENA_PROFILE`
/// environment variable at first use. With `reset`, counters are zeroed
/// after being read.
pub fn profile_snapshot(reset: bool) -> Option<QueryProfileSnapshot> {
    let counters = counters()?;
    let load = |counter: &AtomicU64| {
        if reset {
            counter.swap(0, Ordering::Relaxed)
        } else {
            counter.load(Ordering::Relaxed)
        }
    };
    Some(QueryProfileSnapshot {
        filter_ns: load(&counters.filter_ns),
        filter_count: load(&counters.filter_count),
        select_ns: load(&counters.select_ns),
        select_count: load(&counters.select_count),
        order_ns: load(&counters.order_ns),
        order_count: load(&counters.order_count),
        set_op_ns: load(&counters.set_op_ns),
        set_op_count: load(&counters.set_op_count),
        aggregate_ns: load(&counters.aggregate_ns),
        aggregate_count: load(&counters.aggregate_count),
    })
}
