//! States of cells.

use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// It is isomorphic to a `bool`, where `true` means [`Alive`](State::Alive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A dead cell, displayed as `+`.
    Dead,
    /// A living cell, displayed as `#`.
    Alive,
}

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }

    /// The character used for the state in text formats.
    ///
    /// `#` for [`Alive`](State::Alive), `+` for [`Dead`](State::Dead).
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            State::Alive => '#',
            State::Dead => '+',
        }
    }

    /// Reads a state from its character, if it is one.
    #[inline]
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '#' => Some(State::Alive),
            '+' => Some(State::Dead),
            _ => None,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(is_alive: bool) -> Self {
        if is_alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

impl From<State> for bool {
    #[inline]
    fn from(state: State) -> Self {
        state.is_alive()
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            State::Alive => write!(f, "Alive"),
            State::Dead => write!(f, "Dead"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::State;

    #[test]
    fn glyphs() {
        assert_eq!(State::Alive.glyph(), '#');
        assert_eq!(State::Dead.glyph(), '+');
        assert_eq!(State::from_glyph('#'), Some(State::Alive));
        assert_eq!(State::from_glyph('+'), Some(State::Dead));
        assert_eq!(State::from_glyph('.'), None);
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(State::from(true), State::Alive);
        assert_eq!(State::from(false), State::Dead);
        assert!(bool::from(State::Alive));
        assert!(!State::Dead.is_alive());
        assert_eq!(!State::Dead, State::Alive);
    }
}
