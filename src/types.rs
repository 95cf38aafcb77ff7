//! Type-safe paint types for the paint shop
//!
//! A `Colour` is a paint code paired with a finish. Ordering puts every gloss
//! option ahead of every matte option, then sorts by code, so a sorted
//! preference list reads "cheapest finish first, then lowest code first".

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Paint finish. Gloss is the cheaper default.
///
/// Variant order matters: the derived `Ord` sorts `Gloss` before `Matte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Finish {
    #[default]
    #[strum(serialize = "G")]
    #[serde(rename = "G")]
    Gloss,
    #[strum(serialize = "M")]
    #[serde(rename = "M")]
    Matte,
}

impl Finish {
    /// Single-character symbol used in input lines and batch output
    pub fn symbol(self) -> char {
        match self {
            Self::Gloss => 'G',
            Self::Matte => 'M',
        }
    }
}

/// Positive integer identifying a paint colour independent of its finish
pub type ColourCode = u32;

/// Committed finishes keyed by colour code.
///
/// Only ever grows: once a code is present its finish never changes.
pub type Assignment = BTreeMap<ColourCode, Finish>;

/// A colour code with a finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    pub code: ColourCode,
    pub finish: Finish,
}

impl Colour {
    pub const fn new(code: ColourCode, finish: Finish) -> Self {
        Self { code, finish }
    }

    pub const fn gloss(code: ColourCode) -> Self {
        Self::new(code, Finish::Gloss)
    }

    pub const fn matte(code: ColourCode) -> Self {
        Self::new(code, Finish::Matte)
    }
}

impl Ord for Colour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.finish
            .cmp(&other.finish)
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl PartialOrd for Colour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.finish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_finish_parses_from_symbol() {
        assert_eq!("G".parse::<Finish>().unwrap(), Finish::Gloss);
        assert_eq!("M".parse::<Finish>().unwrap(), Finish::Matte);
        assert!("g".parse::<Finish>().is_err());
        assert!("r".parse::<Finish>().is_err());
    }

    #[test]
    fn test_finish_display_matches_symbol() {
        for finish in Finish::iter() {
            assert_eq!(finish.to_string(), finish.symbol().to_string());
        }
    }

    #[test]
    fn test_gloss_is_default_and_sorts_first() {
        assert_eq!(Finish::default(), Finish::Gloss);
        assert!(Finish::Gloss < Finish::Matte);
    }

    #[test]
    fn test_colour_orders_by_finish_then_code() {
        let mut colours = vec![Colour::matte(1), Colour::gloss(5), Colour::gloss(3)];
        colours.sort();
        assert_eq!(
            colours,
            vec![Colour::gloss(3), Colour::gloss(5), Colour::matte(1)]
        );
    }

    #[test]
    fn test_matte_with_low_code_sorts_after_gloss_with_high_code() {
        assert!(Colour::gloss(100) < Colour::matte(1));
    }

    #[test]
    fn test_colour_equality_is_structural() {
        assert_eq!(Colour::new(2, Finish::Matte), Colour::matte(2));
        assert_ne!(Colour::gloss(2), Colour::matte(2));
    }

    #[test]
    fn test_finish_serializes_as_symbol() {
        let json = serde_json::to_string(&Finish::Matte).unwrap();
        assert_eq!(json, "\"M\"");
        let parsed: Finish = serde_json::from_str("\"G\"").unwrap();
        assert_eq!(parsed, Finish::Gloss);
    }
}
