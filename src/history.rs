use std::fmt;

use crate::error::Result;

/// The three metrics with a rolling history list in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temp,
    Humidity,
    Moisture,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temp, Metric::Humidity, Metric::Moisture];

    /// Node name under `/history/` in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Temp => "temp",
            Metric::Humidity => "humidity",
            Metric::Moisture => "moisture",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One history entry, stored as a `[timestampMs, value]` JSON pair.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryPoint(pub i64, pub f64);

/// Remote access to the per-metric history lists. The whole list
/// round-trips on every update; there is no partial-update protocol.
pub trait HistoryStore {
    /// Fetch the full list for a metric. A missing node is an empty list.
    fn fetch_history(&self, metric: Metric) -> Result<Vec<HistoryPoint>>;

    /// Overwrite the full list for a metric.
    fn put_history(&self, metric: Metric, points: &[HistoryPoint]) -> Result<()>;
}

/// Read-modify-write of one metric's history: fetch, append the new
/// point, evict from the front while over `cap`, write back.
///
/// Not atomic; correctness relies on this process being the only writer.
pub fn update_history<S: HistoryStore>(
    store: &S,
    metric: Metric,
    value: f64,
    timestamp: i64,
    cap: usize,
) -> Result<()> {
    let mut points = store.fetch_history(metric)?;

    points.push(HistoryPoint(timestamp, value));
    while points.len() > cap {
        points.remove(0);
    }

    store.put_history(metric, &points)
}
