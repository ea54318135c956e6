use rocket_builder::payload::{Probe, Satellite};
use rocket_builder::rocket::Rocket;
use rocket_builder::{
    BuildError, Director, FuelPolicy, MultiStageBuilder, MultiStageConfig, SimpleBuilder,
};
use tracing_subscriber::EnvFilter;

fn print_rocket<R: Rocket>(label: &str, rocket: &R) {
    println!("{}", label);
    println!("{}", "-".repeat(40));
    for (i, stage) in rocket.stages().iter().enumerate() {
        println!(
            "  Stage {}: {} engine(s), thrust {:.1}, fuel {:.1}%",
            i,
            stage.engine_count(),
            stage.total_thrust(),
            stage.fuel_level()
        );
    }
    println!("  Total thrust: {:.1}\n", rocket.total_thrust());
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    println!("=== Rocket Builder Demo ===\n");
    let director = Director::new();

    let sounding = director.build(&mut SimpleBuilder::new(), Probe::new(120.0))?;
    print_rocket("Sounding rocket (120 kg probe)", &sounding);

    for (id, mass_kg) in [(1, 500.0), (2, 1000.0), (3, 1500.0), (4, 2500.0)] {
        let satellite = Satellite::new(id, mass_kg);
        let rocket = director.build(&mut MultiStageBuilder::default(), satellite)?;
        let label = format!("Freight rocket #{} ({} kg satellite)", id, mass_kg);
        print_rocket(&label, &rocket);
    }

    let clamped = MultiStageConfig::default().with_fuel_policy(FuelPolicy::Clamped);
    let rocket = director.build(&mut MultiStageBuilder::new(clamped)?, Satellite::new(5, 2500.0))?;
    print_rocket("Freight rocket #5 (2500 kg, clamped fuel)", &rocket);

    match director.build(&mut MultiStageBuilder::default(), Satellite::new(6, 0.0)) {
        Ok(_) => println!("Unexpectedly built a rocket with no payload mass"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
