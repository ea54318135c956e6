use crate::payload::{Payload, Probe, Satellite};
use crate::stage::Stage;

/// A finished vehicle: one payload on top of an ordered stack of stages.
/// Stage 0 is the first stage to fire.
pub trait Rocket {
    type Payload: Payload;

    fn payload(&self) -> &Self::Payload;

    /// Stages in firing order
    fn stages(&self) -> Vec<&Stage>;

    fn stage_count(&self) -> usize {
        self.stages().len()
    }

    /// Engines across all stages
    fn engine_count(&self) -> usize {
        self.stages().iter().map(|s| s.engine_count()).sum()
    }

    /// Sum of every engine's thrust across all stages
    fn total_thrust(&self) -> f64 {
        self.stages().iter().map(|s| s.total_thrust()).sum()
    }
}

/// Single-stage rocket with a solid motor, carrying a probe
#[derive(Debug, Clone, PartialEq)]
pub struct SoundingRocket {
    pub payload: Probe,
    pub stage: Stage,
}

impl Rocket for SoundingRocket {
    type Payload = Probe;

    fn payload(&self) -> &Probe {
        &self.payload
    }

    fn stages(&self) -> Vec<&Stage> {
        vec![&self.stage]
    }
}

/// Liquid-fuelled rocket carrying a satellite.
/// The second stage is only fitted for heavy payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct FreightRocket {
    pub payload: Satellite,
    pub first_stage: Stage,
    pub second_stage: Option<Stage>,
}

impl FreightRocket {
    pub fn second_stage(&self) -> Option<&Stage> {
        self.second_stage.as_ref()
    }

    pub fn has_second_stage(&self) -> bool {
        self.second_stage.is_some()
    }
}

impl Rocket for FreightRocket {
    type Payload = Satellite;

    fn payload(&self) -> &Satellite {
        &self.payload
    }

    fn stages(&self) -> Vec<&Stage> {
        std::iter::once(&self.first_stage)
            .chain(self.second_stage.as_ref())
            .collect()
    }
}
