/// Fuel level constants, expressed as a percentage of tank capacity
pub mod fuel {
    /// Fuel level of an engine that has never been refuelled
    pub const EMPTY_TANK: f64 = 0.0;

    /// Fuel level of a completely filled tank
    pub const FULL_TANK: f64 = 100.0;
}

/// Propulsion family of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Solid motor: propellant is cast in at manufacture, never refuelled
    Solid,
    /// Liquid engine fed from tanks that are filled before launch
    Liquid,
}

impl EngineKind {
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Solid => "Solid",
            EngineKind::Liquid => "Liquid",
        }
    }

    /// Whether engines of this kind take part in resource finalization
    pub fn is_refuelable(&self) -> bool {
        matches!(self, EngineKind::Liquid)
    }
}

/// A single engine mounted in a stage
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub kind: EngineKind,
    /// Thrust, never negative
    pub thrust: f64,
    /// Fuel level in percent of tank capacity (nominally 0 to 100)
    pub fuel_level: f64,
}

impl Engine {
    /// Create an engine with an empty tank. Negative thrust is floored at zero.
    pub fn new(kind: EngineKind, thrust: f64) -> Self {
        Self {
            kind,
            thrust: thrust.max(0.0),
            fuel_level: fuel::EMPTY_TANK,
        }
    }

    pub fn solid(thrust: f64) -> Self {
        Self::new(EngineKind::Solid, thrust)
    }

    pub fn liquid(thrust: f64) -> Self {
        Self::new(EngineKind::Liquid, thrust)
    }

    /// Set the fuel level. Solid motors ignore this.
    pub fn refuel(&mut self, level: f64) {
        if self.kind.is_refuelable() {
            self.fuel_level = level;
        }
    }
}
