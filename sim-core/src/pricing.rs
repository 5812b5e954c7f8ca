//! Per-agent price feedback, run once per agent after a round's trading.

use rand::Rng;

use crate::agent::{Agent, EPSILON};

/// Nudge an agent's posted price from this round's leftover stock.
///
/// `tick` is the 1-indexed round count, so `total_production / tick` is the
/// lifetime average production rate. Leftover stock below that average signals
/// excess demand and pushes the price up; leftover above it signals excess
/// supply and pushes it down. A fresh uniform draw scales every step so the
/// population does not move in lockstep, and `adjustment_rate` bounds the
/// step size.
pub fn adjust_price<R: Rng>(rng: &mut R, agent: &mut Agent, tick: u64) {
    let expected_production = agent.total_production / tick as f64;
    let noise: f64 = rng.random();
    let price_change = noise * (expected_production - agent.unsold_production)
        / agent.max_production
        * agent.adjustment_rate;

    agent.price += price_change;
    if agent.price < EPSILON {
        agent.price = EPSILON;
    }
}
