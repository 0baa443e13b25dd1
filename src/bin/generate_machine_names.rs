// Small dev utility: print a numbered list of generated machine names.
//
// Usage:
//   cargo run --bin generate_machine_names
//
// Uses the same seed and machine count as the report binary, so the listed
// names match the report's machines.

use machine_util_pareto::engine::{seeded_rng, NameGenerator};
use machine_util_pareto::SimulationConfig;

fn main() {
    let config = SimulationConfig::default();

    let mut rng = seeded_rng(config.seed);
    let result = NameGenerator::new().generate_names(&mut rng, config.machine_count);

    println!(
        "--- Generated {} Unique Machine Names (Toy Story Theme) ---",
        result.names.len()
    );
    if result.exhausted {
        println!(
            "(requested {}, name pool holds only {})",
            result.requested, result.pool_size
        );
    }

    for (i, name) in result.names.iter().enumerate() {
        println!("{:03}. {}", i + 1, name);
    }
}
