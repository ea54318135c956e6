use crate::builder::RocketBuilder;
use crate::error::BuildError;

/// Runs the five construction steps in their fixed order.
///
/// The director holds no state, so one instance can drive any number of
/// builds. Each builder instance is good for exactly one build; a spent
/// builder fails on its first step. Errors from the builder are returned
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    pub fn build<B: RocketBuilder>(
        &self,
        builder: &mut B,
        payload: B::Payload,
    ) -> Result<B::Rocket, BuildError> {
        let span = tracing::debug_span!("build", builder = builder.name());
        let _enter = span.enter();

        builder.create_product()?;
        builder.add_payload(payload)?;
        builder.add_stages()?;
        builder.finalize_resources()?;
        builder.retrieve_product()
    }
}
