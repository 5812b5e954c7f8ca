//! Aggregate statistics over the population.
//!
//! Each reportable quantity is a [`Statistic`] variant bound to a pure
//! extraction function. The closed enum keeps the set of reportable fields a
//! compile-time fact; there is deliberately no by-name lookup.

use serde::Serialize;

use crate::agent::Agent;
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statistic {
    Money,
    Price,
    TotalConsumption,
    TotalProduction,
    UnsoldProduction,
    ConsumedThisRound,
}

impl Statistic {
    pub fn extract(self, agent: &Agent) -> f64 {
        match self {
            Statistic::Money => agent.money,
            Statistic::Price => agent.price,
            Statistic::TotalConsumption => agent.total_consumption,
            Statistic::TotalProduction => agent.total_production,
            Statistic::UnsoldProduction => agent.unsold_production,
            Statistic::ConsumedThisRound => agent.consumed_this_round,
        }
    }
}

/// Average, minimum, and maximum of one statistic across all agents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    const ZERO: Summary = Summary {
        avg: 0.0,
        min: 0.0,
        max: 0.0,
    };
}

pub fn summarize(world: &World, stat: Statistic) -> Summary {
    if world.agents.is_empty() {
        return Summary::ZERO;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for agent in &world.agents {
        let value = stat.extract(agent);
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    Summary {
        avg: sum / world.agents.len() as f64,
        min,
        max,
    }
}

/// One report checkpoint: the four summaries the report table prints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoundReport {
    pub tick: u64,
    pub money: Summary,
    pub price: Summary,
    pub consumption: Summary,
    pub production: Summary,
}

impl RoundReport {
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.tick,
            money: summarize(world, Statistic::Money),
            price: summarize(world, Statistic::Price),
            consumption: summarize(world, Statistic::TotalConsumption),
            production: summarize(world, Statistic::TotalProduction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn world_of(n: usize) -> World {
        World::new(&SimConfig {
            num_agents: n,
            ..Default::default()
        })
    }

    #[test]
    fn extract_reads_the_matching_field() {
        let mut agent = Agent::new(0, 10.0, 10.0);
        agent.money = 2.0;
        agent.price = 3.0;
        agent.total_consumption = 4.0;
        agent.total_production = 5.0;
        agent.unsold_production = 6.0;
        agent.consumed_this_round = 7.0;

        assert_eq!(Statistic::Money.extract(&agent), 2.0);
        assert_eq!(Statistic::Price.extract(&agent), 3.0);
        assert_eq!(Statistic::TotalConsumption.extract(&agent), 4.0);
        assert_eq!(Statistic::TotalProduction.extract(&agent), 5.0);
        assert_eq!(Statistic::UnsoldProduction.extract(&agent), 6.0);
        assert_eq!(Statistic::ConsumedThisRound.extract(&agent), 7.0);
    }

    #[test]
    fn summarize_computes_avg_min_max() {
        let mut world = world_of(3);
        world.agents[0].money = 1.0;
        world.agents[1].money = 2.0;
        world.agents[2].money = 6.0;

        let summary = summarize(&world, Statistic::Money);
        assert_eq!(summary.avg, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 6.0);
    }

    #[test]
    fn empty_population_summarizes_to_zero() {
        let world = world_of(0);
        assert_eq!(summarize(&world, Statistic::Money), Summary::ZERO);
        assert_eq!(summarize(&world, Statistic::Price), Summary::ZERO);
    }

    #[test]
    fn round_report_captures_current_tick() {
        let mut world = world_of(2);
        world.tick = 17;
        let report = RoundReport::capture(&world);
        assert_eq!(report.tick, 17);
        assert_eq!(report.money.avg, 1.0);
        assert_eq!(report.price.min, 1.0);
    }
}
