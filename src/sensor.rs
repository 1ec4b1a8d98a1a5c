use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;

/// Chance that a single reading is a spike above the threshold
pub const ANOMALY_PROBABILITY: f64 = 0.01;

/// Offset added on top of the threshold when a spike is simulated
pub const SPIKE_OFFSET: RangeInclusive<f64> = 1.0..=10.0;

/// One simulated measurement, compared against the threshold it was generated with
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub threshold: f64,
    pub is_above_threshold: bool,
    pub generated_at: DateTime<Utc>,
}

impl Reading {
    /// Simulate a reading against `threshold`.
    ///
    /// Mostly uniform between zero and the threshold, with a rare spike of
    /// `threshold + SPIKE_OFFSET` so the alerting flag gets exercised.
    pub fn simulate<R: Rng + ?Sized>(threshold: f64, rng: &mut R) -> Self {
        let value = if rng.random_bool(ANOMALY_PROBABILITY) {
            let spike = threshold + rng.random_range(SPIKE_OFFSET);
            // Large thresholds swallow the offset, a spike must still be above
            if spike > threshold { spike } else { threshold.next_up() }
        } else {
            // Negative thresholds flip the bounds, the range must not be empty
            rng.random_range(threshold.min(0.0)..=threshold.max(0.0))
        };

        Self {
            value,
            threshold,
            is_above_threshold: value > threshold,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLES: usize = 200_000;

    #[test]
    fn distribution_is_mostly_below_threshold() {
        let mut rng = StdRng::seed_from_u64(7);
        let threshold = 50.0;

        let mut above = 0usize;
        for _ in 0..SAMPLES {
            let reading = Reading::simulate(threshold, &mut rng);
            if reading.value > threshold {
                above += 1;
                assert!(reading.value <= threshold + 10.0, "{reading:?}");
            } else {
                assert!((0.0..=threshold).contains(&reading.value), "{reading:?}");
            }
        }

        let ratio = above as f64 / SAMPLES as f64;
        assert!((0.007..0.013).contains(&ratio), "spike ratio {ratio}");
    }

    #[test]
    fn flag_matches_generation_threshold() {
        let mut rng = StdRng::seed_from_u64(99);

        for threshold in [0.5, 42.0, 75.0, 1_000.0] {
            for _ in 0..10_000 {
                let reading = Reading::simulate(threshold, &mut rng);
                assert_eq!(reading.threshold, threshold);
                assert_eq!(reading.is_above_threshold, reading.value > threshold);
            }
        }
    }

    #[test]
    fn spikes_stay_above_huge_thresholds() {
        let mut rng = StdRng::seed_from_u64(1);
        let threshold = 1e17;

        let mut above = 0usize;
        for _ in 0..SAMPLES {
            let reading = Reading::simulate(threshold, &mut rng);
            if reading.is_above_threshold {
                assert!(reading.value > threshold, "{reading:?}");
                above += 1;
            }
        }

        let ratio = above as f64 / SAMPLES as f64;
        assert!((0.007..0.013).contains(&ratio), "spike ratio {ratio}");
    }

    #[test]
    fn zero_and_negative_thresholds_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10_000 {
            let zero = Reading::simulate(0.0, &mut rng);
            assert!(zero.value == 0.0 || zero.is_above_threshold);

            let negative = Reading::simulate(-20.0, &mut rng);
            assert!(negative.value <= 0.0 || negative.is_above_threshold);
            assert!(negative.value >= -20.0);
        }
    }
}
