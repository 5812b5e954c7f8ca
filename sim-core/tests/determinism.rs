//! A fixed seed must reproduce the run exactly: same agent trajectories,
//! same report rows.

use sim_core::{RoundReport, SimConfig, Simulation};

fn run_and_report(seed: u64, rounds: u64) -> (Vec<RoundReport>, Vec<f64>) {
    let mut sim = Simulation::new(SimConfig {
        seed,
        num_agents: 20,
        num_iters: rounds,
        ..Default::default()
    })
    .unwrap();

    let mut reports = Vec::new();
    for _ in 0..rounds {
        sim.advance_round();
        reports.push(sim.report());
    }
    let money: Vec<f64> = sim.world().agents.iter().map(|a| a.money).collect();
    (reports, money)
}

#[test]
fn same_seed_reproduces_the_trajectory_exactly() {
    let (reports_a, money_a) = run_and_report(31, 60);
    let (reports_b, money_b) = run_and_report(31, 60);

    // Bit-for-bit: the serialized report rows are byte-identical.
    let rows_a = serde_json::to_string(&reports_a).unwrap();
    let rows_b = serde_json::to_string(&reports_b).unwrap();
    assert_eq!(rows_a, rows_b);

    assert_eq!(money_a, money_b);
}

#[test]
fn different_seeds_diverge() {
    let (reports_a, money_a) = run_and_report(31, 60);
    let (reports_b, money_b) = run_and_report(32, 60);

    assert_ne!(
        serde_json::to_string(&reports_a).unwrap(),
        serde_json::to_string(&reports_b).unwrap()
    );
    assert_ne!(money_a, money_b);
}

#[test]
fn prices_also_replay_exactly() {
    let collect_prices = |seed| {
        let mut sim = Simulation::new(SimConfig {
            seed,
            num_agents: 10,
            num_iters: 40,
            ..Default::default()
        })
        .unwrap();
        sim.run();
        sim.world()
            .agents
            .iter()
            .map(|a| a.price)
            .collect::<Vec<f64>>()
    };

    assert_eq!(collect_prices(7), collect_prices(7));
}
