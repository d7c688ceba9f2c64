//! Core trait for annealable state.

use rand::Rng;

/// A candidate solution that can be annealed.
///
/// The state carries everything the search loop needs as capabilities:
/// cloning (trajectory snapshots), cost evaluation, and an in-place
/// random move. The framework handles temperature management, the
/// acceptance criterion, and trajectory bookkeeping.
///
/// # Minimization
///
/// The search minimizes the cost function. For maximization, negate
/// the cost.
///
/// # Move contract
///
/// `apply_random_move` perturbs the state in place and returns `true`.
/// It must keep any internal bookkeeping (incremental cost caches,
/// aggregates) consistent with the new state. Returning `false` means
/// the state has no neighbors at all (for example, nothing left to
/// move); the trajectory stops immediately rather than looping.
///
/// Rejected moves are undone by the runner via [`Clone::clone_from`],
/// so a cheap `clone_from` pays off for large states.
///
/// # Examples
///
/// ```ignore
/// #[derive(Clone)]
/// struct Tour { order: Vec<usize>, length: f64 }
///
/// impl SaState for Tour {
///     fn cost(&self) -> f64 {
///         self.length
///     }
///
///     fn apply_random_move<R: Rng>(&mut self, rng: &mut R) -> bool {
///         if self.order.len() < 2 {
///             return false;
///         }
///         let i = rng.random_range(0..self.order.len());
///         let j = rng.random_range(0..self.order.len());
///         self.order.swap(i, j);
///         self.update_length_incrementally(i, j);
///         true
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaState: Clone + Send {
    /// Computes the cost of this state. Lower is better.
    fn cost(&self) -> f64;

    /// Applies one random move in place.
    ///
    /// Returns `false` when no move is possible; the state must be
    /// left unchanged in that case.
    fn apply_random_move<R: Rng>(&mut self, rng: &mut R) -> bool;
}
