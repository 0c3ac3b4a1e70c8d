//! Sparse fault event processes
//!
//! Each process fires when a slow sinusoid plus per-sample noise crosses a
//! high threshold. Evaluation is per sample with no hysteresis, and the two
//! processes use independent noise streams.

use std::f64::consts::TAU;

use crate::config::{EventProcessConfig, EventsConfig};
use crate::types::FaultEvents;

use super::noise::SampleNoise;

/// Does the process fire at `index`, given a standard-normal draw `z`?
pub fn event_fires(process: &EventProcessConfig, index: usize, z: f64) -> bool {
    let base = (TAU * index as f64 / process.period + process.phase).sin();
    base + process.noise_std * z > process.threshold
}

/// Bearing and electrical event processes of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultEventModel {
    bearing: EventProcessConfig,
    electrical: EventProcessConfig,
}

impl FaultEventModel {
    pub fn from_config(config: &EventsConfig) -> Self {
        Self {
            bearing: config.bearing.clone(),
            electrical: config.electrical.clone(),
        }
    }

    pub fn at(&self, index: usize, noise: &SampleNoise) -> FaultEvents {
        FaultEvents {
            bearing: event_fires(&self.bearing, index, noise.bearing_event),
            electrical: event_fires(&self.electrical, index, noise.electrical_event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::noise::NoiseTape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noiseless_bearing_fires_only_near_crest() {
        let process = EventProcessConfig { noise_std: 0.0, ..EventProcessConfig::bearing() };
        // crest of sin(2πi/2000) at i = 500
        assert!(event_fires(&process, 500, 0.0));
        assert!(!event_fires(&process, 0, 0.0));
        assert!(!event_fires(&process, 1500, 0.0));
    }

    #[test]
    fn test_large_noise_draw_can_fire_anywhere() {
        let process = EventProcessConfig::electrical();
        assert!(event_fires(&process, 0, 10.0));
        assert!(!event_fires(&process, 0, -10.0));
    }

    #[test]
    fn test_events_are_sparse() {
        let n = 10_000;
        let tape = NoiseTape::draw(&mut StdRng::seed_from_u64(42), n);
        let model = FaultEventModel::from_config(&EventsConfig::default());
        let (mut bearing, mut electrical) = (0usize, 0usize);
        for (i, noise) in tape.as_slice().iter().enumerate() {
            let events = model.at(i, noise);
            bearing += usize::from(events.bearing);
            electrical += usize::from(events.electrical);
        }
        assert!(bearing > 0 && bearing < n / 4, "bearing events: {bearing}");
        assert!(electrical < n / 10, "electrical events: {electrical}");
    }
}
