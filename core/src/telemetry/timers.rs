//! telemetry/timers.rs
//! Stage timers for a round trip.

use std::collections::{hash_map, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Compress,
    Decompress,
    Verify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Compress   => "compress",
            Stage::Decompress => "decompress",
            Stage::Verify     => "verify",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    /// Get total duration for a stage.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    /// Get duration in microseconds (f64).
    pub fn get_us(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000_000.0
    }

    /// Sum all stage durations.
    pub fn total(&self) -> Duration {
        self.times.values().copied().sum()
    }

    /// Whether every expected stage was recorded.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.times.contains_key(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Stage, &Duration)> {
        self.times.iter()
    }
}

impl<'a> IntoIterator for &'a StageTimes {
    type Item = (&'a Stage, &'a Duration);
    type IntoIter = hash_map::Iter<'a, Stage, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }
}
