// Agent-based single-good market simulation.
//
// Module structure:
// - config    Run parameters, defaults, fail-fast validation
// - agent     The per-participant record and its initial values
// - world     Agent store + per-round producer/consumer index sets
// - market/   Randomized cheapest-price matching and trade execution
// - pricing   Noisy proportional price feedback
// - stats     Statistic enumeration, summaries, report rows
// - sim       Driver owning the world, the seeded generator, and the loop

#[cfg(feature = "instrument")]
pub use instrument;

pub mod agent;
pub mod config;
pub mod market;
pub mod pricing;
pub mod sim;
pub mod stats;
pub mod world;

// Re-export the public surface at the crate root
pub use agent::{Agent, AgentIdx, EPSILON};
pub use config::{ConfigError, SimConfig};
pub use market::{Trade, execute_trade, find_cheapest_producer};
pub use pricing::adjust_price;
pub use sim::Simulation;
pub use stats::{RoundReport, Statistic, Summary, summarize};
pub use world::World;
