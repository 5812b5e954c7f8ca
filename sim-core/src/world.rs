//! World state: the agent store plus the per-round participant sets.

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentIdx};
use crate::config::SimConfig;

/// Complete simulation state. One instance owns every agent; the participant
/// sets hold indices into `agents`, never agents themselves.
///
/// The sets are rebuilt by [`World::begin_round`] and shrink during trading
/// via swap-remove, so removal is O(1) and ordering carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// 1-indexed round counter; 0 before the first round starts.
    pub tick: u64,
    pub agents: Vec<Agent>,
    /// Agents with sellable stock remaining this round.
    pub producers: Vec<AgentIdx>,
    /// Agents still able and funded to buy this round.
    pub consumers: Vec<AgentIdx>,
}

impl World {
    /// Build the population. `num_agents = 0` yields an empty store and every
    /// downstream loop does nothing.
    pub fn new(config: &SimConfig) -> Self {
        let agents = (0..config.num_agents)
            .map(|id| Agent::new(id, config.max_consumption, config.max_production))
            .collect();

        Self {
            tick: 0,
            agents,
            producers: Vec::with_capacity(config.num_agents),
            consumers: Vec::with_capacity(config.num_agents),
        }
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    /// Reset per-round state and rebuild both participant sets, in id order.
    ///
    /// Consumer membership is decided on the balance *before* pending sales
    /// revenue is folded in: an agent that ended the previous round broke but
    /// with earnings pending sits out one round as a buyer. Every agent
    /// produces, so producer membership is unconditional.
    pub fn begin_round(&mut self) {
        self.producers.clear();
        self.consumers.clear();

        for agent in &mut self.agents {
            agent.consumed_this_round = 0.0;
            if agent.money > 0.0 {
                self.consumers.push(agent.id);
            }
            self.producers.push(agent.id);
            agent.unsold_production = agent.max_production;
            agent.money += agent.money_gained;
            agent.money_gained = 0.0;
        }
    }

    pub(crate) fn remove_producer(&mut self, slot: usize) {
        self.producers.swap_remove(slot);
    }

    pub(crate) fn remove_consumer(&mut self, slot: usize) {
        self.consumers.swap_remove(slot);
    }
}
