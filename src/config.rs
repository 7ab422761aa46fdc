//! Configuration.

use crate::{
    board::Board,
    error::Error,
    rules::{Classification, Life},
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of the board and the rule.
#[derive(Clone, Debug, PartialEq, Eq, Educe)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width of the board. A positive multiple of 8.
    #[educe(Default = 8)]
    pub width: usize,

    /// Height of the board. A positive multiple of 8.
    #[educe(Default = 8)]
    pub height: usize,

    /// The rule string of the cellular automaton.
    ///
    /// Only totalistic Life-like rules are supported.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Parses the rule string.
    pub fn rule(&self) -> Result<Life, Error> {
        self.rule_string.parse()
    }

    /// Classifies all neighborhoods under the rule.
    pub fn classification(&self) -> Result<Classification, Error> {
        let rule = self.rule()?;
        if rule == Life::conway() {
            Ok(Classification::conway())
        } else {
            Ok(Classification::new(&rule))
        }
    }

    /// Creates an empty board of the configured size.
    pub fn board(&self) -> Result<Board, Error> {
        Board::new(self.width, self.height)
    }
}
