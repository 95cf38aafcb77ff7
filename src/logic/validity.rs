//! Conflict check for a single choice.

use crate::logic::choice::Choice;
use crate::types::Assignment;

/// True when the choice's code is still free or already has the same finish
pub fn is_valid_choice(assignment: &Assignment, choice: &Choice) -> bool {
    assignment
        .get(&choice.colour.code)
        .is_none_or(|committed| *committed == choice.colour.finish)
}
