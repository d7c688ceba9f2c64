//! Random job relocation move.

use super::solution::ScheduleSolution;
use crate::sa::SaState;
use rand::Rng;

/// Moves one uniformly random job to a uniformly random *different*
/// processor.
///
/// The target is rejection-sampled until it differs from the job's
/// current processor. Returns `false` without touching the solution when
/// no such move exists: no jobs, or fewer than two processors (the
/// rejection loop would never find an alternative).
pub fn move_random_job<R: Rng>(solution: &mut ScheduleSolution, rng: &mut R) -> bool {
    if solution.num_jobs() == 0 || solution.num_processors() < 2 {
        return false;
    }

    let job = rng.random_range(0..solution.num_jobs());
    let old_processor = solution.processor_of(job);
    let mut new_processor = rng.random_range(0..solution.num_processors());
    while new_processor == old_processor {
        new_processor = rng.random_range(0..solution.num_processors());
    }

    solution.apply_move(job, new_processor);
    true
}

impl SaState for ScheduleSolution {
    fn cost(&self) -> f64 {
        self.imbalance() as f64
    }

    fn apply_random_move<R: Rng>(&mut self, rng: &mut R) -> bool {
        move_random_job(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn solution(values: &[u64], num_processors: usize, seed: u64) -> ScheduleSolution {
        let mut rng = create_rng(seed);
        ScheduleSolution::random(values.to_vec().into(), num_processors, &mut rng).unwrap()
    }

    #[test]
    fn test_moves_exactly_one_job() {
        let mut rng = create_rng(1);
        let sol = solution(&[3, 1, 4, 1, 5], 3, 42);

        for _ in 0..100 {
            let before = sol.assignment().to_vec();
            let mut next = sol.clone();
            assert!(move_random_job(&mut next, &mut rng));

            let changed: Vec<usize> = (0..before.len())
                .filter(|&job| next.assignment()[job] != before[job])
                .collect();
            assert_eq!(changed.len(), 1, "exactly one job must move");
            assert_ne!(
                next.assignment()[changed[0]],
                before[changed[0]],
                "the moved job must land on a different processor"
            );
            assert!(next.verify().is_ok());
        }
    }

    #[test]
    fn test_single_processor_has_no_move() {
        let mut rng = create_rng(1);
        let mut sol = solution(&[2, 2, 2], 1, 42);
        let before = sol.assignment().to_vec();

        assert!(!move_random_job(&mut sol, &mut rng));
        assert_eq!(sol.assignment(), before.as_slice());
    }

    #[test]
    fn test_zero_jobs_has_no_move() {
        let mut rng = create_rng(1);
        let mut sol = solution(&[], 4, 42);

        assert!(!move_random_job(&mut sol, &mut rng));
    }

    #[test]
    fn test_cost_is_imbalance() {
        let mut sol = solution(&[6, 2], 2, 42);
        for job in 0..2 {
            sol.apply_move(job, 0);
        }
        sol.apply_move(1, 1);

        // Loads are [6, 2], so the spread is 4.
        assert!((SaState::cost(&sol) - 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_long_move_sequence_stays_consistent() {
        let mut rng = create_rng(9);
        let mut sol = solution(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3], 4, 42);
        let total: u64 = sol.loads().iter().sum();

        for _ in 0..1000 {
            assert!(sol.apply_random_move(&mut rng));
        }

        assert_eq!(sol.loads().iter().sum::<u64>(), total);
        assert!(sol.verify().is_ok());
    }
}
