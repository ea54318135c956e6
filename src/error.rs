//! Error types for staged rocket construction

use thiserror::Error;

use crate::build_phase::{BuildPhase, BuildStep};

/// Errors that can occur while configuring a builder or running a build
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// Payload mass must be a positive, finite number of kilograms
    #[error("invalid payload: mass must be positive and finite, got {mass_kg} kg")]
    InvalidPayload { mass_kg: f64 },

    /// A construction step was called from a phase that does not allow it
    #[error("cannot {} while builder is {}", .step.name(), .phase.name())]
    Protocol { step: BuildStep, phase: BuildPhase },

    #[error("invalid builder configuration: {0}")]
    Configuration(String),
}

impl BuildError {
    pub fn is_protocol(&self) -> bool {
        matches!(self, BuildError::Protocol { .. })
    }

    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, BuildError::InvalidPayload { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, BuildError::Configuration(_))
    }
}
