//! Finish Resolver
//!
//! Turns customer preference lists into a committed finish per colour code.
//!
//! # Design
//!
//! - **Round based**: each round offers every unsatisfied customer their best
//!   remaining option, most constrained customer first
//! - **Permanent commitments**: a committed code keeps its finish for the rest
//!   of the run; nothing is ever backtracked
//! - **Iterative**: state is threaded through a loop, so deep inputs cannot
//!   exhaust the call stack
//!
//! # Transition Rules
//!
//! | State                               | Action |
//! |-------------------------------------|--------|
//! | no customers left                   | success, return the assignment |
//! | no pending choices                  | start a new round |
//! | choice is compatible                | commit code → finish, drop customer |
//! | conflicts, last option              | fail with `NoSolution` |
//! | conflicts, options remain           | defer: advance the customer's cursor |
//!
//! Because commitments are never revisited, some orders that a full search
//! could satisfy are reported as unsolvable. That is the intended policy.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{PaintShopError, Result};
use crate::input_file::PaintOrder;
use crate::logic::choice::{next_choice, Choice};
use crate::logic::validity::is_valid_choice;
use crate::preferences::{CustomerId, Preferences};
use crate::types::Assignment;

// ============================================================================
// Statistics
// ============================================================================

/// Counters collected while resolving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolveStats {
    /// Customers in the order
    pub customers: usize,
    /// Rounds started (choice lists generated)
    pub rounds: u64,
    /// Choices committed to the assignment
    pub commits: u64,
    /// Conflicting choices skipped in favour of the customer's next option
    pub deferrals: u64,
}

impl ResolveStats {
    #[inline]
    fn on_round(&mut self) {
        self.rounds = self.rounds.saturating_add(1);
    }

    #[inline]
    fn on_commit(&mut self) {
        self.commits = self.commits.saturating_add(1);
    }

    #[inline]
    fn on_deferral(&mut self) {
        self.deferrals = self.deferrals.saturating_add(1);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve an order into a finish assignment.
///
/// # Errors
///
/// `PaintShopError::NoSolution` when a customer's last option conflicts with
/// a finish already committed for that code.
pub fn resolve(order: &PaintOrder) -> Result<Assignment> {
    resolve_with_stats(order).0
}

/// Like [`resolve`], also returning counters for the run.
pub fn resolve_with_stats(order: &PaintOrder) -> (Result<Assignment>, ResolveStats) {
    let mut stats = ResolveStats {
        customers: order.customer_count(),
        ..ResolveStats::default()
    };
    let result = run_rounds(order.customers.clone(), &mut stats);
    debug!(
        rounds = stats.rounds,
        commits = stats.commits,
        deferrals = stats.deferrals,
        "Resolver finished"
    );
    (result, stats)
}

fn run_rounds(
    mut remaining: BTreeMap<CustomerId, Preferences>,
    stats: &mut ResolveStats,
) -> Result<Assignment> {
    let mut assignment = Assignment::new();
    let mut pending: VecDeque<Choice> = VecDeque::new();

    loop {
        if remaining.is_empty() {
            return Ok(assignment);
        }

        let Some(choice) = pending.pop_front() else {
            pending = next_choice(&remaining).into();
            stats.on_round();
            debug!(
                round = stats.rounds,
                customers = remaining.len(),
                "Starting round"
            );
            if pending.is_empty() {
                // every remaining customer ran out of options
                warn!("No choices left for {} customers", remaining.len());
                return Err(PaintShopError::NoSolution);
            }
            continue;
        };

        if is_valid_choice(&assignment, &choice) {
            trace!("{} takes {}", choice.customer, choice.colour);
            assignment.insert(choice.colour.code, choice.colour.finish);
            remaining.remove(&choice.customer);
            stats.on_commit();
        } else if choice.remaining == 1 {
            warn!(
                "{} needs {} but colour {} is already committed",
                choice.customer, choice.colour, choice.colour.code
            );
            return Err(PaintShopError::NoSolution);
        } else {
            trace!("{} defers from {}", choice.customer, choice.colour);
            if let Some(prefs) = remaining.get_mut(&choice.customer) {
                prefs.advance();
            }
            stats.on_deferral();
        }
    }
}
