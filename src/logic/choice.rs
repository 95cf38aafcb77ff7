//! Per-round choice generation.
//!
//! Each round offers every unsatisfied customer exactly one option: the head of
//! their remaining preferences. Customers with the fewest options left go
//! first so they get first claim on contested codes.

use std::collections::BTreeMap;

use crate::preferences::{CustomerId, Preferences};
use crate::types::Colour;

/// A customer's current best option and how many options they have left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub customer: CustomerId,
    pub colour: Colour,
    pub remaining: usize,
}

/// Build this round's choices, most constrained customer first.
///
/// Ties on `remaining` keep customer ID order. Exhausted customers are skipped.
pub fn next_choice(preferences: &BTreeMap<CustomerId, Preferences>) -> Vec<Choice> {
    let mut choices: Vec<Choice> = preferences
        .iter()
        .filter_map(|(&customer, prefs)| {
            prefs.head().map(|colour| Choice {
                customer,
                colour,
                remaining: prefs.remaining(),
            })
        })
        .collect();

    // stable: equal counts stay in ascending customer order
    choices.sort_by_key(|c| c.remaining);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::parse_line;

    fn customers(lines: &[&str]) -> BTreeMap<CustomerId, Preferences> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| (CustomerId(i + 1), parse_line(line).unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_choices() {
        assert!(next_choice(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_most_constrained_customer_first() {
        let prefs = customers(&["1 M 3 G 5 G", "2 G 3 M 4 G", "5 M"]);
        let choices = next_choice(&prefs);

        assert_eq!(
            choices,
            vec![
                Choice {
                    customer: CustomerId(3),
                    colour: Colour::matte(5),
                    remaining: 1,
                },
                Choice {
                    customer: CustomerId(1),
                    colour: Colour::gloss(3),
                    remaining: 3,
                },
                Choice {
                    customer: CustomerId(2),
                    colour: Colour::gloss(2),
                    remaining: 3,
                },
            ]
        );
    }

    #[test]
    fn test_choice_tracks_advanced_cursor() {
        let mut prefs = customers(&["1 G 2 M"]);
        prefs.get_mut(&CustomerId(1)).unwrap().advance();

        let choices = next_choice(&prefs);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].colour, Colour::matte(2));
        assert_eq!(choices[0].remaining, 1);
    }

    #[test]
    fn test_exhausted_customers_are_skipped() {
        let mut prefs = customers(&["1 G", "2 G"]);
        prefs.get_mut(&CustomerId(1)).unwrap().advance();

        let choices = next_choice(&prefs);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].customer, CustomerId(2));
    }
}
