//! Customer preference lists
//!
//! A customer's acceptable colours are parsed once, sorted gloss-first, and
//! never edited afterwards. The resolver only moves a cursor past options that
//! turned out to conflict, so the full list stays available for checking the
//! finished batch.

use std::fmt;

use crate::error::{PaintShopError, Result};
use crate::types::{Assignment, Colour, ColourCode, Finish};

/// Customer identifier, assigned from 1 in input line order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(pub usize);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer {}", self.0)
    }
}

/// One customer's ordered list of acceptable colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    colours: Vec<Colour>,
    consumed: usize,
}

impl Preferences {
    /// Build a preference list, sorting it gloss-first then by code
    pub fn new(mut colours: Vec<Colour>) -> Self {
        colours.sort();
        Self {
            colours,
            consumed: 0,
        }
    }

    /// Most-preferred option not yet ruled out
    pub fn head(&self) -> Option<Colour> {
        self.colours.get(self.consumed).copied()
    }

    /// Number of options not yet ruled out
    pub fn remaining(&self) -> usize {
        self.colours.len() - self.consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Rule out the current head and move on to the next option
    pub fn advance(&mut self) {
        if self.consumed < self.colours.len() {
            self.consumed += 1;
        }
    }

    /// Options not yet ruled out, most-preferred first
    pub fn pending(&self) -> &[Colour] {
        &self.colours[self.consumed..]
    }

    /// Every option as parsed, regardless of the cursor
    pub fn all(&self) -> &[Colour] {
        &self.colours
    }

    /// True when at least one option matches the committed finish for its code
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.colours
            .iter()
            .any(|c| assignment.get(&c.code) == Some(&c.finish))
    }

    /// Largest code mentioned by this customer
    pub fn max_code(&self) -> Option<ColourCode> {
        self.colours.iter().map(|c| c.code).max()
    }
}

/// Parse one customer line of `<code> <finish>` pairs.
///
/// Fails on an empty line, an odd token count, a code that is not a positive
/// integer, or a finish other than `G`/`M`.
pub fn parse_line(line: &str) -> Result<Preferences> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(PaintShopError::format("empty preference line"));
    }
    if tokens.len() % 2 != 0 {
        return Err(PaintShopError::format(format!(
            "odd number of tokens in '{}'",
            line.trim()
        )));
    }

    let colours = tokens
        .chunks_exact(2)
        .map(|pair| parse_pair(pair[0], pair[1]))
        .collect::<Result<Vec<_>>>()?;

    Ok(Preferences::new(colours))
}

fn parse_pair(code: &str, finish: &str) -> Result<Colour> {
    let code = code
        .parse::<ColourCode>()
        .ok()
        .filter(|c| *c > 0)
        .ok_or_else(|| {
            PaintShopError::format(format!("'{}' is not a positive colour code", code))
        })?;

    let finish: Finish = finish.parse().map_err(|_| {
        PaintShopError::format(format!(
            "'{}' is not a finish (expected G or M)",
            finish
        ))
    })?;

    Ok(Colour::new(code, finish))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_sorts_gloss_first() {
        let prefs = parse_line("1 M 3 G 5 G").unwrap();
        assert_eq!(
            prefs.all(),
            &[Colour::gloss(3), Colour::gloss(5), Colour::matte(1)]
        );
        assert_eq!(prefs.remaining(), 3);
    }

    #[test]
    fn test_parse_line_rejects_empty() {
        assert!(matches!(parse_line(""), Err(PaintShopError::Format(_))));
        assert!(matches!(parse_line("   \t"), Err(PaintShopError::Format(_))));
    }

    #[test]
    fn test_parse_line_rejects_odd_token_count() {
        assert!(matches!(parse_line("1 M 3"), Err(PaintShopError::Format(_))));
    }

    #[test]
    fn test_parse_line_rejects_unknown_finish() {
        assert!(matches!(parse_line("1 r"), Err(PaintShopError::Format(_))));
        assert!(matches!(parse_line("1 g"), Err(PaintShopError::Format(_))));
        assert!(matches!(parse_line("1 GM"), Err(PaintShopError::Format(_))));
    }

    #[test]
    fn test_parse_line_rejects_bad_codes() {
        for line in ["x G", "0 G", "-1 M", "1.5 G", "99999999999 G"] {
            assert!(
                matches!(parse_line(line), Err(PaintShopError::Format(_))),
                "expected format error for {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_line_accepts_extra_whitespace() {
        let prefs = parse_line("  2\tM   4 G  ").unwrap();
        assert_eq!(prefs.all(), &[Colour::gloss(4), Colour::matte(2)]);
    }

    #[test]
    fn test_advance_moves_head() {
        let mut prefs = parse_line("1 G 2 M").unwrap();
        assert_eq!(prefs.head(), Some(Colour::gloss(1)));
        prefs.advance();
        assert_eq!(prefs.head(), Some(Colour::matte(2)));
        assert_eq!(prefs.pending(), &[Colour::matte(2)]);
        assert_eq!(prefs.remaining(), 1);
        prefs.advance();
        assert!(prefs.is_exhausted());
        assert_eq!(prefs.head(), None);

        // advancing past the end is a no-op
        prefs.advance();
        assert_eq!(prefs.remaining(), 0);
        assert_eq!(prefs.all().len(), 2);
    }

    #[test]
    fn test_is_satisfied_by() {
        let prefs = parse_line("1 M 2 G").unwrap();
        let mut assignment = Assignment::new();
        assert!(!prefs.is_satisfied_by(&assignment));

        assignment.insert(1, Finish::Gloss);
        assert!(!prefs.is_satisfied_by(&assignment));

        assignment.insert(2, Finish::Gloss);
        assert!(prefs.is_satisfied_by(&assignment));
    }

    #[test]
    fn test_max_code() {
        assert_eq!(parse_line("3 G 7 M 1 G").unwrap().max_code(), Some(7));
    }
}
