//! All kinds of errors in this crate.

use crate::nbhd::Side;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use std::convert::TryFrom;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid neighborhood, want exactly 9 meaningful characters ('#' or '+'), got: {0:?}.
    InvalidFormat(String),
    /// Invalid side, want one of NW, N, NE, W, C, E, SW, S, SE, got: {0:?}.
    InvalidSide(String),
    /// {0} is not a valid side for matching neighborhoods.
    CenterSide(Side),
    /// Want distance equal to 1 or 2, got {0}.
    InvalidDistance(u8),
    /// Illegal neighborhood, want integer in 0 .. 0x1ff, got {0:#x}.
    OutOfRange(u16),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Width and height of a board must be positive multiples of 8, got {0}x{1}.
    InvalidSize(usize, usize),
    /// Invalid board header, want "WxH", got: {0:?}.
    InvalidHeader(String),
    /// Row {row} has {found} characters, want {expected}.
    InvalidRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid character {glyph:?} at ({x}, {y}).
    InvalidGlyph { glyph: char, x: usize, y: usize },
    /// Board ended before row {0}.
    MissingRow(usize),
    /// Address ({0}, {1}) is out of the board.
    OutOfBounds(isize, isize),
}

impl Error {
    /// Whether the error is caused by an invalid argument to
    /// [`matches`](crate::Neighborhood::matches) or
    /// [`shift_intersect`](crate::shift_intersect).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::CenterSide(_) | Error::InvalidDistance(_))
    }

    /// An out-of-bounds error for unsigned coordinates, saturated at
    /// `isize::MAX`.
    pub(crate) fn out_of_bounds(x: usize, y: usize) -> Self {
        let saturate = |i: usize| isize::try_from(i).unwrap_or(isize::MAX);
        Error::OutOfBounds(saturate(x), saturate(y))
    }
}
