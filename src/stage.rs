use crate::engine::{fuel, Engine};

/// A group of engines that fire together.
///
/// The engine list is fixed once the stage is built; only fuel levels change
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    engines: Vec<Engine>,
}

impl Stage {
    /// Create a stage from its engines. Returns None for an empty list,
    /// since a stage with no engines cannot fly.
    pub fn new(engines: Vec<Engine>) -> Option<Self> {
        if engines.is_empty() {
            None
        } else {
            Some(Self { engines })
        }
    }

    /// A stage of `count` identical engines (at least one is always fitted)
    pub fn uniform(count: u32, engine: Engine) -> Self {
        let count = count.max(1) as usize;
        Self {
            engines: vec![engine; count],
        }
    }

    /// A stage with exactly one engine
    pub fn single(engine: Engine) -> Self {
        Self {
            engines: vec![engine],
        }
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Combined thrust of every engine in the stage
    pub fn total_thrust(&self) -> f64 {
        self.engines.iter().map(|e| e.thrust).sum()
    }

    /// Set every engine in the stage to the same fuel level
    pub fn refuel(&mut self, level: f64) {
        for engine in &mut self.engines {
            engine.refuel(level);
        }
    }

    pub fn refuel_full(&mut self) {
        self.refuel(fuel::FULL_TANK);
    }

    /// Fuel level shared by the stage's engines.
    /// Engines are always refuelled together, so the first engine speaks for all.
    pub fn fuel_level(&self) -> f64 {
        self.engines
            .first()
            .map(|e| e.fuel_level)
            .unwrap_or(fuel::EMPTY_TANK)
    }
}
