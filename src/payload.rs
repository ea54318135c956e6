//! Payloads carried by rockets.
//! A payload is supplied by the caller and never mutated by a builder.

use crate::error::BuildError;

pub type PayloadId = u32;

/// Anything a rocket can carry
pub trait Payload {
    /// Mass in kilograms
    fn mass_kg(&self) -> f64;

    /// Identity of the payload, if it has one
    fn id(&self) -> Option<PayloadId> {
        None
    }

    /// Reject payloads whose mass is not a positive, finite number
    fn validate(&self) -> Result<(), BuildError> {
        let mass_kg = self.mass_kg();
        if mass_kg.is_finite() && mass_kg > 0.0 {
            Ok(())
        } else {
            Err(BuildError::InvalidPayload { mass_kg })
        }
    }
}

/// Scientific probe flown on a sounding rocket. Anonymous.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub mass_kg: f64,
}

impl Probe {
    pub fn new(mass_kg: f64) -> Self {
        Self { mass_kg }
    }
}

impl Payload for Probe {
    fn mass_kg(&self) -> f64 {
        self.mass_kg
    }
}

/// Customer satellite flown on a freight rocket
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub id: PayloadId,
    pub mass_kg: f64,
}

impl Satellite {
    pub fn new(id: PayloadId, mass_kg: f64) -> Self {
        Self { id, mass_kg }
    }
}

impl Payload for Satellite {
    fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    fn id(&self) -> Option<PayloadId> {
        Some(self.id)
    }
}
