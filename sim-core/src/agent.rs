use std::fmt;

use serde::{Deserialize, Serialize};

// === CORE TYPES ===

/// Stable index of an agent in the world's store. Assigned once at creation,
/// doubles as the agent's identity in the participant sets.
pub type AgentIdx = usize;

/// Floor for balances, stock, and prices. Values that drift below it are
/// clamped to exactly zero (money, stock) or to the floor itself (price), so
/// membership checks can compare against 0.0 and the quantity computation
/// never divides by a vanishing price.
pub const EPSILON: f64 = 1e-5;

const INITIAL_MONEY: f64 = 1.0;
const INITIAL_UNSOLD: f64 = 1.0;
const ADJUSTMENT_RATE: f64 = 0.001;

// === AGENT ===

/// One market participant. Produces up to `max_production` units per round,
/// consumes up to `max_consumption`, and posts a unit price that the matcher
/// compares across sampled producers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentIdx,
    pub max_consumption: f64,
    pub max_production: f64,
    /// Spendable balance. Invariant: `money >= 0`.
    pub money: f64,
    /// Sales revenue accrued this round, folded into `money` at the start of
    /// the next round. Keeps a round's purchases funded by prior wealth only.
    pub money_gained: f64,
    /// Remaining sellable capacity this round. Invariant: in
    /// `[0, max_production]`.
    pub unsold_production: f64,
    /// Units bought so far this round. Invariant: `<= max_consumption`.
    pub consumed_this_round: f64,
    pub total_consumption: f64,
    pub total_production: f64,
    /// Posted unit price. Invariant: `price >= EPSILON`.
    pub price: f64,
    /// Scale of the per-round price feedback step. Constant after creation.
    pub adjustment_rate: f64,
}

impl Agent {
    pub fn new(id: AgentIdx, max_consumption: f64, max_production: f64) -> Self {
        Self {
            id,
            max_consumption,
            max_production,
            money: INITIAL_MONEY,
            money_gained: 0.0,
            unsold_production: INITIAL_UNSOLD,
            consumed_this_round: 0.0,
            total_consumption: 0.0,
            total_production: 0.0,
            price: INITIAL_MONEY,
            adjustment_rate: ADJUSTMENT_RATE,
        }
    }
}

/// Fixed-width one-line state dump, used by the verbose per-agent report.
impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:5}{:8.2}{:8.2}{:8.2}{:8.2}{:8.2}{:8.2}{:8.2}{:8.2}{:8.2}{:8.2}",
            self.id,
            self.max_consumption,
            self.max_production,
            self.money,
            self.money_gained,
            self.unsold_production,
            self.consumed_this_round,
            self.total_consumption,
            self.total_production,
            self.price,
            self.adjustment_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_agent_starts_with_unit_money_and_matching_price() {
        let agent = Agent::new(7, 10.0, 12.0);
        assert_eq!(agent.id, 7);
        assert_eq!(agent.money, 1.0);
        assert_eq!(agent.price, agent.money);
        assert_eq!(agent.unsold_production, 1.0);
        assert_eq!(agent.money_gained, 0.0);
        assert_eq!(agent.consumed_this_round, 0.0);
        assert_eq!(agent.total_consumption, 0.0);
        assert_eq!(agent.total_production, 0.0);
        assert_eq!(agent.adjustment_rate, 0.001);
    }

    #[test]
    fn display_row_has_stable_width() {
        let a = Agent::new(0, 10.0, 10.0);
        let b = Agent::new(99, 10.0, 10.0);
        assert_eq!(format!("{a}").len(), format!("{b}").len());
    }
}
