//! Totalistic Life-like rules.

use crate::{cells::State, error::Error, nbhd::Neighborhood, rules::Rule};
use ca_rules::ParseLife;
use std::str::FromStr;

/// Totalistic Life-like rules.
///
/// Whether a cell is alive in the next generation depends only on its own
/// state and the number of living cells among its eight neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// Bit `n` is set iff a dead cell with `n` living neighbors is born.
    birth: u16,
    /// Bit `n` is set iff a living cell with `n` living neighbors survives.
    survival: u16,
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Counts larger than 8 are ignored.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let to_mask = |counts: Vec<u8>| {
            counts
                .into_iter()
                .filter(|&n| n <= 8)
                .fold(0, |mask, n| mask | 1 << n)
        };
        Life {
            birth: to_mask(b),
            survival: to_mask(s),
        }
    }

    /// Conway's Game of Life, `B3/S23`.
    pub fn conway() -> Self {
        Self::new(vec![3], vec![2, 3])
    }

    /// Whether a dead cell with `alives` living neighbors is born.
    pub fn is_birth(&self, alives: u32) -> bool {
        alives <= 8 && self.birth & 1 << alives != 0
    }

    /// Whether a living cell with `alives` living neighbors survives.
    pub fn is_survival(&self, alives: u32) -> bool {
        alives <= 8 && self.survival & 1 << alives != 0
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::conway()
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ParseLife::parse_rule(input).map_err(Error::ParseRuleError)
    }
}

impl Rule for Life {
    fn successor(&self, nbhd: Neighborhood) -> State {
        let alives = nbhd.alive_neighbors();
        State::from(if nbhd.center().is_alive() {
            self.is_survival(alives)
        } else {
            self.is_birth(alives)
        })
    }
}
