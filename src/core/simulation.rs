use rand::Rng;

use crate::core::ledger::{choose_action, choose_action_flat, BikeLedger};
use crate::domain::model::{Location, Period, TrajectoryRecord};

/// Drives a ledger through a sequence of periods, recording one snapshot
/// per period. Strictly sequential: each step depends on the ledger state
/// left by the previous one.
pub struct Simulation {
    ledger: BikeLedger,
}

impl Simulation {
    pub fn new(ledger: BikeLedger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &BikeLedger {
        &self.ledger
    }

    /// One simulation step with an explicit draw. The driver loops call
    /// this with fresh uniform draws; tests call it with forced values.
    pub fn step(&mut self, period: &Period, draw: f64) -> TrajectoryRecord {
        let planned = choose_action(draw, period.season);
        let outcome = self.ledger.apply(planned);

        tracing::debug!(label = %period.label, draw, outcome = %outcome, "simulation step");

        self.snapshot(&period.label, outcome.to_string())
    }

    /// Run the full trajectory: per period, draw once, select, apply,
    /// record. Zero periods is a valid degenerate run and yields an empty
    /// trajectory.
    pub fn run_trajectory<I, R>(&mut self, periods: I, rng: &mut R) -> Vec<TrajectoryRecord>
    where
        I: IntoIterator<Item = Period>,
        R: Rng,
    {
        let mut records = Vec::new();
        for period in periods {
            let draw: f64 = rng.gen();
            records.push(self.step(&period, draw));
        }
        records
    }

    /// Season-free run over a fixed number of steps, labeled by 1-based
    /// step index, using the flat band table.
    pub fn run_walk<R: Rng>(&mut self, steps: u32, rng: &mut R) -> Vec<TrajectoryRecord> {
        let mut records = Vec::with_capacity(steps as usize);
        for step in 1..=steps {
            let draw: f64 = rng.gen();
            let outcome = self.ledger.apply(choose_action_flat(draw));

            tracing::debug!(step, draw, outcome = %outcome, "walk step");

            records.push(self.snapshot(&step.to_string(), outcome.to_string()));
        }
        records
    }

    fn snapshot(&self, label: &str, action: String) -> TrajectoryRecord {
        TrajectoryRecord {
            label: label.to_string(),
            olin: self.ledger.count(Location::Olin),
            wellesley: self.ledger.count(Location::Wellesley),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Season;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn winter_days(n: usize) -> Vec<Period> {
        (1..=n)
            .map(|i| Period::new(format!("day-{}", i), Season::Winter))
            .collect()
    }

    #[test]
    fn test_forced_winter_draw_moves_one_to_wellesley() {
        let mut sim = Simulation::new(BikeLedger::new(8, 4));

        let record = sim.step(&Period::new("2024-01-15", Season::Winter), 0.50);

        assert_eq!(record.label, "2024-01-15");
        assert_eq!(record.olin, 7);
        assert_eq!(record.wellesley, 5);
        assert_eq!(record.action, "Moved 1 bike from Olin to Wellesley");
    }

    #[test]
    fn test_trajectory_length_and_order() {
        let mut sim = Simulation::new(BikeLedger::new(8, 4));
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let records = sim.run_trajectory(winter_days(30), &mut rng);

        assert_eq!(records.len(), 30);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.label, format!("day-{}", i + 1));
        }
    }

    #[test]
    fn test_empty_period_sequence_yields_empty_trajectory() {
        let mut sim = Simulation::new(BikeLedger::new(8, 4));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let records = sim.run_trajectory(Vec::new(), &mut rng);
        assert!(records.is_empty());
        assert_eq!(sim.ledger().total(), 12);
    }

    #[test]
    fn test_conservation_and_non_negativity_over_long_run() {
        let mut sim = Simulation::new(BikeLedger::new(8, 4));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let periods: Vec<Period> = (0..500)
            .map(|i| {
                let season = if i % 2 == 0 { Season::Winter } else { Season::Summer };
                Period::new(format!("p{}", i), season)
            })
            .collect();

        let records = sim.run_trajectory(periods, &mut rng);

        for record in &records {
            assert_eq!(record.olin + record.wellesley, 12);
        }
        assert_eq!(sim.ledger().total(), 12);
    }

    #[test]
    fn test_drained_ledger_records_insufficiency_and_continues() {
        let mut sim = Simulation::new(BikeLedger::new(0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let records = sim.run_trajectory(winter_days(20), &mut rng);

        assert_eq!(records.len(), 20);
        for record in &records {
            assert_eq!(record.olin, 0);
            assert_eq!(record.wellesley, 0);
            assert!(
                record.action.starts_with("Not enough bikes")
                    || record.action == "No bikes were shared"
            );
        }
    }

    #[test]
    fn test_walk_produces_indexed_labels() {
        let mut sim = Simulation::new(BikeLedger::new(5, 5));
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let records = sim.run_walk(40, &mut rng);

        assert_eq!(records.len(), 40);
        assert_eq!(records[0].label, "1");
        assert_eq!(records[39].label, "40");
        for record in &records {
            assert_eq!(record.olin + record.wellesley, 10);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut sim = Simulation::new(BikeLedger::new(8, 4));
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sim.run_trajectory(winter_days(50), &mut rng)
        };

        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }
}
