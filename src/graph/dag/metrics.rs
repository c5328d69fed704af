//! Per-call instrumentation for the DAG algorithms.
//!
//! Counters never influence results. A fresh [`Metrics`] is created for every
//! engine call and handed back with the outcome, so one engine value can be
//! shared freely between threads.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// The events the algorithms count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    /// An outgoing edge of a reached vertex was examined.
    Relaxation,
    /// A candidate distance was compared against the recorded one.
    Comparison,
    /// A recorded distance was improved.
    DistanceUpdate,
    /// A vertex entered the topological sorter's ready queue.
    QueuePush,
    /// A vertex left the topological sorter's ready queue.
    QueuePop,
}

/// Receiver of lifecycle calls and counter increments.
///
/// `()` is a sink that discards everything.
pub trait MetricsSink {
    /// Zeroes all counters and the elapsed time.
    fn reset(&mut self);
    /// Starts the wall-clock timer.
    fn start_timer(&mut self);
    /// Stops the timer and records the elapsed time.
    fn stop_timer(&mut self);
    /// Adds one to `counter`.
    fn increment(&mut self, counter: Counter);
}

impl MetricsSink for () {
    #[inline(always)]
    fn reset(&mut self) {}
    #[inline(always)]
    fn start_timer(&mut self) {}
    #[inline(always)]
    fn stop_timer(&mut self) {}
    #[inline(always)]
    fn increment(&mut self, _counter: Counter) {}
}

/// In-memory counters plus elapsed wall-clock time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metrics {
    relaxations: u64,
    comparisons: u64,
    distance_updates: u64,
    queue_pushes: u64,
    queue_pops: u64,
    elapsed: Duration,
    #[serde(skip)]
    started: Option<Instant>,
}

impl Metrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `counter`.
    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Relaxation => self.relaxations,
            Counter::Comparison => self.comparisons,
            Counter::DistanceUpdate => self.distance_updates,
            Counter::QueuePush => self.queue_pushes,
            Counter::QueuePop => self.queue_pops,
        }
    }

    /// Edge relaxation attempts.
    pub fn relaxations(&self) -> u64 {
        self.relaxations
    }

    /// Distance comparisons.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Applied distance improvements.
    pub fn distance_updates(&self) -> u64 {
        self.distance_updates
    }

    /// Time between the last `start_timer` and `stop_timer`.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` while the timer is running.
    pub fn is_timing(&self) -> bool {
        self.started.is_some()
    }
}

impl PartialEq for Metrics {
    /// Compares counters only; timings differ between otherwise identical runs.
    fn eq(&self, other: &Self) -> bool {
        self.relaxations == other.relaxations
            && self.comparisons == other.comparisons
            && self.distance_updates == other.distance_updates
            && self.queue_pushes == other.queue_pushes
            && self.queue_pops == other.queue_pops
    }
}

impl MetricsSink for Metrics {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop_timer(&mut self) {
        if let Some(start) = self.started.take() {
            self.elapsed = start.elapsed();
        }
    }

    #[inline]
    fn increment(&mut self, counter: Counter) {
        let slot = match counter {
            Counter::Relaxation => &mut self.relaxations,
            Counter::Comparison => &mut self.comparisons,
            Counter::DistanceUpdate => &mut self.distance_updates,
            Counter::QueuePush => &mut self.queue_pushes,
            Counter::QueuePop => &mut self.queue_pops,
        };
        *slot += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_count_and_reset() {
        let mut m = Metrics::new();
        m.increment(Counter::Relaxation);
        m.increment(Counter::Relaxation);
        m.increment(Counter::DistanceUpdate);
        assert_eq!(m.relaxations(), 2);
        assert_eq!(m.get(Counter::DistanceUpdate), 1);
        assert_eq!(m.comparisons(), 0);

        m.reset();
        assert_eq!(m, Metrics::new());
    }

    #[test]
    fn metrics_timer_lifecycle() {
        let mut m = Metrics::new();
        m.start_timer();
        assert!(m.is_timing());
        m.stop_timer();
        assert!(!m.is_timing());

        // Stopping twice keeps the first measurement.
        let first = m.elapsed();
        m.stop_timer();
        assert_eq!(m.elapsed(), first);
    }

    #[test]
    fn metrics_serialize_counters() {
        let mut m = Metrics::new();
        m.increment(Counter::Comparison);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["comparisons"], 1);
        assert!(json.get("started").is_none());
    }
}
