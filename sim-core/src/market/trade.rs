use crate::agent::{AgentIdx, EPSILON};
use crate::world::World;

/// Record of one executed exchange.
#[derive(Clone, Copy, Debug)]
pub struct Trade {
    pub consumer: AgentIdx,
    pub producer: AgentIdx,
    pub quantity: f64,
    pub cost: f64,
    pub unit_price: f64,
}

/// Execute one exchange between the consumer at `consumer_slot` and the
/// producer at `producer_slot`, then update participant-set membership.
///
/// The traded quantity is the binding constraint among the consumer's
/// remaining appetite, the consumer's budget at the producer's price, and the
/// producer's remaining stock. `cost` is computed once and applied to both
/// sides, so the money leaving the consumer equals the money entering the
/// producer's pending earnings exactly, before any clamping.
///
/// Returns `None` without touching state if both slots refer to the same
/// agent; the matcher never produces such a pair.
pub fn execute_trade(world: &mut World, consumer_slot: usize, producer_slot: usize) -> Option<Trade> {
    let consumer_id = world.consumers[consumer_slot];
    let producer_id = world.producers[producer_slot];
    if consumer_id == producer_id {
        return None;
    }

    let price = world.agents[producer_id].price;
    let quantity = {
        let consumer = &world.agents[consumer_id];
        (consumer.max_consumption - consumer.consumed_this_round)
            .min(consumer.money / price)
            .min(world.agents[producer_id].unsold_production)
    };
    let cost = quantity * price;

    let producer = &mut world.agents[producer_id];
    producer.unsold_production -= quantity;
    if producer.unsold_production < EPSILON {
        producer.unsold_production = 0.0;
    }
    producer.total_production += quantity;
    producer.money_gained += cost;

    let consumer = &mut world.agents[consumer_id];
    consumer.money -= cost;
    if consumer.money < EPSILON {
        consumer.money = 0.0;
    }
    consumer.consumed_this_round += quantity;
    consumer.total_consumption += quantity;

    if world.agents[producer_id].unsold_production == 0.0 {
        world.remove_producer(producer_slot);
    }

    let consumer = &world.agents[consumer_id];
    if consumer.money == 0.0 || consumer.consumed_this_round >= consumer.max_consumption {
        world.remove_consumer(consumer_slot);
    }

    Some(Trade {
        consumer: consumer_id,
        producer: producer_id,
        quantity,
        cost,
        unit_price: price,
    })
}
