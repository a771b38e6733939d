use rand::Rng;

use crate::history::Metric;
use crate::utils;

/// One set of simulated readings, generated fresh each cycle.
///
/// The timestamp is only used for the history lists; the `current`
/// record persists the three values alone.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Sample {
    pub temp: f64,     // °F
    pub humidity: f64, // percent
    pub moisture: f64, // percent
    #[serde(skip)]
    pub timestamp: i64, // ms since epoch, UTC
}

impl Sample {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temp => self.temp,
            Metric::Humidity => self.humidity,
            Metric::Moisture => self.moisture,
        }
    }
}

/// Draw a fresh sample from the thread RNG.
pub fn generate() -> Sample {
    generate_with(&mut rand::rng(), utils::ms_since_epoch())
}

fn generate_with<R: Rng>(rng: &mut R, timestamp: i64) -> Sample {
    Sample {
        temp: round1(rng.random_range(65.0..=85.0)),
        humidity: round1(rng.random_range(30.0..=70.0)),
        moisture: round1(rng.random_range(10.0..=80.0)),
        timestamp,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_decimal(v: f64) -> bool {
        (v * 10.0 - (v * 10.0).round()).abs() < 1e-9
    }

    #[test]
    fn values_in_range_with_one_decimal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let s = generate_with(&mut rng, 0);
            assert!((65.0..=85.0).contains(&s.temp), "temp {}", s.temp);
            assert!((30.0..=70.0).contains(&s.humidity), "humidity {}", s.humidity);
            assert!((10.0..=80.0).contains(&s.moisture), "moisture {}", s.moisture);
            assert!(one_decimal(s.temp));
            assert!(one_decimal(s.humidity));
            assert!(one_decimal(s.moisture));
        }
    }

    #[test]
    fn current_record_has_three_fields_and_no_timestamp() {
        let s = Sample {
            temp: 70.1,
            humidity: 50.0,
            moisture: 33.3,
            timestamp: 1234,
        };
        let json = serde_json::to_value(s).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["temp"], 70.1);
        assert_eq!(obj["humidity"], 50.0);
        assert_eq!(obj["moisture"], 33.3);
    }

    #[test]
    fn value_accessor_matches_fields() {
        let s = Sample {
            temp: 1.0,
            humidity: 2.0,
            moisture: 3.0,
            timestamp: 0,
        };
        assert_eq!(s.value(Metric::Temp), 1.0);
        assert_eq!(s.value(Metric::Humidity), 2.0);
        assert_eq!(s.value(Metric::Moisture), 3.0);
    }
}
