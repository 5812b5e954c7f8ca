use rand::Rng;

use crate::world::World;

/// Find the cheapest producer for the consumer at `consumer_slot`.
///
/// Draws `sample_size` producer-set slots independently and uniformly **with
/// replacement**: collisions are possible and intended, since the sample is
/// over slots, not distinct agents. A draw that lands on the consumer itself is
/// skipped. Among the valid draws the strictly lowest price wins, under `<`,
/// so the first-seen of equal prices is kept.
///
/// Returns the winning producer-set slot, or `None` when no draw produced a
/// valid candidate (every draw was a self-match, or the set is empty).
pub fn find_cheapest_producer<R: Rng>(
    rng: &mut R,
    world: &World,
    consumer_slot: usize,
    sample_size: usize,
) -> Option<usize> {
    if world.producers.is_empty() {
        return None;
    }

    let consumer_id = world.consumers[consumer_slot];
    let mut min_price = f64::INFINITY;
    let mut cheapest_slot = None;

    for _ in 0..sample_size {
        let slot = rng.random_range(0..world.producers.len());
        let producer_id = world.producers[slot];
        if producer_id == consumer_id {
            continue;
        }
        let price = world.agents[producer_id].price;
        if price < min_price {
            min_price = price;
            cheapest_slot = Some(slot);
        }
    }

    cheapest_slot
}
