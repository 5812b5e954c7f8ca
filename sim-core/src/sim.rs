//! Simulation driver: wires the round phases together and owns the loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, SimConfig};
use crate::market::{execute_trade, find_cheapest_producer};
use crate::pricing::adjust_price;
use crate::stats::RoundReport;
use crate::world::World;

/// One simulation run: the world, the single seeded generator, and the
/// immutable configuration.
///
/// All randomness flows through the one `StdRng` here, in a fixed order
/// (consumer draw, producer samples, then one feedback draw per agent), so a
/// fixed seed reproduces the run exactly.
pub struct Simulation {
    config: SimConfig,
    world: World,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = World::new(&config);
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self { config, world, rng })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Rounds completed so far.
    pub fn tick(&self) -> u64 {
        self.world.tick
    }

    pub fn report(&self) -> RoundReport {
        RoundReport::capture(&self.world)
    }

    /// Run one full round: reset and rebuild the participant sets, trade
    /// until a set empties, then apply price feedback to every agent.
    pub fn advance_round(&mut self) {
        self.world.tick += 1;
        let tick = self.world.tick;
        self.world.begin_round();

        let mut trades_this_round: u64 = 0;
        while !self.world.consumers.is_empty() && !self.world.producers.is_empty() {
            let consumer_slot = self.rng.random_range(0..self.world.consumers.len());
            let found = find_cheapest_producer(
                &mut self.rng,
                &self.world,
                consumer_slot,
                self.config.producer_sample_size,
            );
            match found {
                Some(producer_slot) => {
                    if let Some(trade) =
                        execute_trade(&mut self.world, consumer_slot, producer_slot)
                    {
                        trades_this_round += 1;

                        #[cfg(feature = "instrument")]
                        tracing::info!(
                            target: "trade",
                            tick = tick,
                            consumer = trade.consumer as u64,
                            producer = trade.producer as u64,
                            quantity = trade.quantity,
                            cost = trade.cost,
                            unit_price = trade.unit_price,
                        );
                        #[cfg(not(feature = "instrument"))]
                        let _ = trade;
                    }
                }
                None => {
                    // One consumer, one producer, same agent: no counterpart
                    // can ever appear, so the round's trading is over. Every
                    // other miss retries with a fresh consumer draw. With
                    // larger sets a long streak of self-draws can stall here;
                    // no retry cap is applied.
                    if self.world.producers.len() == 1
                        && self.world.consumers.len() == 1
                        && self.world.producers[0] == self.world.consumers[0]
                    {
                        break;
                    }
                }
            }
        }

        for agent in &mut self.world.agents {
            adjust_price(&mut self.rng, agent, tick);
        }

        #[cfg(feature = "instrument")]
        {
            let money_total: f64 = self
                .world
                .agents
                .iter()
                .map(|a| a.money + a.money_gained)
                .sum();
            tracing::info!(
                target: "round",
                tick = tick,
                trades = trades_this_round,
                money_total = money_total,
            );
        }
        let _ = trades_this_round;
    }

    /// Drive the configured number of rounds to completion.
    pub fn run(&mut self) {
        for _ in 0..self.config.num_iters {
            self.advance_round();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_configuration() {
        let config = SimConfig {
            max_production: -1.0,
            ..Default::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn advance_round_increments_tick() {
        let mut sim = Simulation::new(SimConfig {
            num_agents: 5,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(sim.tick(), 0);
        sim.advance_round();
        assert_eq!(sim.tick(), 1);
        sim.advance_round();
        assert_eq!(sim.tick(), 2);
    }

    #[test]
    fn empty_population_runs_without_trading() {
        let mut sim = Simulation::new(SimConfig {
            num_agents: 0,
            num_iters: 10,
            ..Default::default()
        })
        .unwrap();
        sim.run();
        assert_eq!(sim.tick(), 10);
        assert!(sim.world().agents.is_empty());
    }

    #[test]
    fn zero_iterations_leave_the_world_untouched() {
        let mut sim = Simulation::new(SimConfig {
            num_agents: 3,
            num_iters: 0,
            ..Default::default()
        })
        .unwrap();
        sim.run();
        assert_eq!(sim.tick(), 0);
        for agent in &sim.world().agents {
            assert_eq!(agent.money, 1.0);
            assert_eq!(agent.price, 1.0);
        }
    }
}
