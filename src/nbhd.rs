//! Neighborhoods: a cell together with its eight neighbors.

use crate::{cells::State, error::Error};
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in a 3x3 neighborhood.
///
/// ```text
/// NW  N  NE
/// W   C   E
/// SW  S  SE
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    NW,
    N,
    NE,
    W,
    C,
    E,
    SW,
    S,
    SE,
}

impl Side {
    /// All nine positions, in reading order.
    ///
    /// This is also the order of characters in the text format.
    pub const ALL: [Side; 9] = [
        Side::NW,
        Side::N,
        Side::NE,
        Side::W,
        Side::C,
        Side::E,
        Side::SW,
        Side::S,
        Side::SE,
    ];

    /// The eight positions around the center, in reading order.
    pub const NEIGHBORS: [Side; 8] = [
        Side::NW,
        Side::N,
        Side::NE,
        Side::W,
        Side::E,
        Side::SW,
        Side::S,
        Side::SE,
    ];

    /// The bit index of the position in a [`Neighborhood`].
    ///
    /// `NW` is the most significant bit, `SE` the least.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            Side::NW => 8,
            Side::N => 7,
            Side::NE => 6,
            Side::W => 5,
            Side::C => 4,
            Side::E => 3,
            Side::SW => 2,
            Side::S => 1,
            Side::SE => 0,
        }
    }

    /// The offset `(dy, dx)` of the position from the center.
    ///
    /// `dy` grows southwards, `dx` grows eastwards.
    #[inline]
    pub fn offset(self) -> (i8, i8) {
        match self {
            Side::NW => (-1, -1),
            Side::N => (-1, 0),
            Side::NE => (-1, 1),
            Side::W => (0, -1),
            Side::C => (0, 0),
            Side::E => (0, 1),
            Side::SW => (1, -1),
            Side::S => (1, 0),
            Side::SE => (1, 1),
        }
    }

    /// The position at offset `(dy, dx)` from the center,
    /// or `None` if the offset falls outside the 3x3 block.
    #[inline]
    pub fn at(dy: i8, dx: i8) -> Option<Self> {
        if (-1..=1).contains(&dy) && (-1..=1).contains(&dx) {
            Some(Self::ALL[((dy + 1) * 3 + dx + 1) as usize])
        } else {
            None
        }
    }

    /// The position on the other side of the center.
    ///
    /// `C` is its own opposite.
    #[inline]
    pub fn opposite(self) -> Self {
        let (dy, dx) = self.offset();
        // Negating an offset inside the block stays inside the block.
        Self::ALL[((1 - dy) * 3 + 1 - dx) as usize]
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::NW => "NW",
            Side::N => "N",
            Side::NE => "NE",
            Side::W => "W",
            Side::C => "C",
            Side::E => "E",
            Side::SW => "SW",
            Side::S => "S",
            Side::SE => "SE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .iter()
            .copied()
            .find(|side| side.to_string() == s)
            .ok_or_else(|| Error::InvalidSide(s.to_owned()))
    }
}

/// The largest valid value of a [`Neighborhood`].
pub const MAX_NBHD: u16 = 0x1ff;

/// The states of a cell and its eight neighbors.
///
/// It is a 9-bit integer, one bit for each [`Side`];
/// a set bit means that the cell at that position is alive.
/// The bit of each side is given by [`Side::index`].
///
/// The text format lists the nine cells in reading order,
/// `#` for a living cell and `+` for a dead one.
/// Any other character is ignored when parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct Neighborhood(u16);

impl Neighborhood {
    /// The neighborhood where all cells are dead.
    pub const EMPTY: Self = Neighborhood(0);

    /// The neighborhood where all cells are alive.
    pub const FULL: Self = Neighborhood(MAX_NBHD);

    /// Creates a neighborhood from its integer representation.
    pub fn new(bits: u16) -> Result<Self, Error> {
        if bits > MAX_NBHD {
            Err(Error::OutOfRange(bits))
        } else {
            Ok(Neighborhood(bits))
        }
    }

    /// Creates a neighborhood from the states of its cells,
    /// given in the order of [`Side::ALL`].
    pub fn from_states(states: [State; 9]) -> Self {
        let mut nbhd = Self::EMPTY;
        for (&side, &state) in Side::ALL.iter().zip(states.iter()) {
            nbhd.set(side, state);
        }
        nbhd
    }

    /// The integer representation.
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// The state of the cell at `side`.
    #[inline]
    pub fn get(self, side: Side) -> State {
        State::from(self.0 & 1 << side.index() != 0)
    }

    /// Sets the state of the cell at `side`, leaving the others unchanged.
    #[inline]
    pub fn set(&mut self, side: Side, state: State) {
        let mask = MAX_NBHD & !(1 << side.index());
        self.0 = self.0 & mask | (state.is_alive() as u16) << side.index();
    }

    /// The state of the cell in the center.
    #[inline]
    pub fn center(self) -> State {
        self.get(Side::C)
    }

    /// Number of living cells around the center.
    #[inline]
    pub fn alive_neighbors(self) -> u32 {
        (self.0 & !(1 << Side::C.index())).count_ones()
    }

    /// Whether `other` can sit next to this neighborhood on the same board.
    ///
    /// The center of `other` is placed `dist` cells away from the center of
    /// `self` towards `side`. The two 3x3 blocks then overlap on some cells;
    /// they match if every overlapping cell has the same state in both.
    /// When the blocks don't overlap at all, they trivially match.
    ///
    /// For example, with
    ///
    /// ```text
    ///     ###        +##
    /// n = ++#    k = +##
    ///     #+#        ###
    /// ```
    ///
    /// `n.matches(k, 1, Side::SE)` is `true`,
    /// while `n.matches(k, 1, Side::N)` is `false`.
    ///
    /// `dist` must be 1 or 2, and `side` must not be [`Side::C`].
    pub fn matches(self, other: Self, dist: u8, side: Side) -> Result<bool, Error> {
        Ok(overlap(dist, side)?.all(|(s, t)| self.get(s) == other.get(t)))
    }
}

/// The cells shared by two neighborhoods whose centers are `dist` apart
/// towards `side`.
///
/// Yields pairs `(s, t)`, where `s` is the position of a shared cell in the
/// first neighborhood and `t` its position in the second.
pub(crate) fn overlap(
    dist: u8,
    side: Side,
) -> Result<impl Iterator<Item = (Side, Side)>, Error> {
    if side == Side::C {
        return Err(Error::CenterSide(side));
    }
    if !(1..=2).contains(&dist) {
        return Err(Error::InvalidDistance(dist));
    }
    let (dy, dx) = side.offset();
    let (dy, dx) = (dy * dist as i8, dx * dist as i8);
    Ok((0..9).filter_map(move |i| {
        let s = Side::ALL[i];
        let (y, x) = s.offset();
        Side::at(y - dy, x - dx).map(|t| (s, t))
    }))
}

impl TryFrom<u16> for Neighborhood {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Neighborhood> for u16 {
    fn from(nbhd: Neighborhood) -> Self {
        nbhd.0
    }
}

impl FromStr for Neighborhood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut nbhd = Self::EMPTY;
        let mut sides = Side::ALL.iter();
        for state in s.chars().filter_map(State::from_glyph) {
            let side = sides
                .next()
                .ok_or_else(|| Error::InvalidFormat(s.to_owned()))?;
            nbhd.set(*side, state);
        }
        if sides.next().is_some() {
            return Err(Error::InvalidFormat(s.to_owned()));
        }
        Ok(nbhd)
    }
}

/// Renders the neighborhood as three comma-separated rows, e.g. `##+,+#+,+++`.
impl Display for Neighborhood {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, &side) in Side::ALL.iter().enumerate() {
            if i == 3 || i == 6 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.get(side).glyph())?;
        }
        Ok(())
    }
}
