// Randomized cheapest-price matching and single-pair trade execution.

pub mod matching;
pub mod trade;

pub use matching::find_cheapest_producer;
pub use trade::{Trade, execute_trade};
