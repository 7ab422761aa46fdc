//! A finite board of cells, packed eight to a byte.

use crate::{
    cells::State,
    error::Error,
    nbhd::{Neighborhood, Side},
    rules::{Classification, Rule},
};
use log::debug;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A `width` x `height` board of cells.
///
/// Both dimensions are positive multiples of 8.
/// Each row is stored as `width / 8` bytes, the leftmost cell in the most
/// significant bit.
///
/// The text format is a `WxH` header line followed by `H` rows of `W`
/// characters each, `#` for a living cell and `+` for a dead one:
///
/// ```text
/// 8x8
/// ++++++++
/// ++#+++++
/// +++#++++
/// +###++++
/// ++++++++
/// ++++++++
/// ++++++++
/// ++++++++
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Creates a board with all cells dead.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 || width % 8 != 0 || height % 8 != 0 {
            return Err(Error::InvalidSize(width, height));
        }
        let len = width
            .checked_mul(height)
            .ok_or(Error::InvalidSize(width, height))?
            / 8;
        Ok(Board {
            width,
            height,
            cells: vec![0; len],
        })
    }

    /// Width of the board.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the board.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The byte and the bit mask of a cell.
    fn address(&self, x: usize, y: usize) -> Result<(usize, u8), Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y));
        }
        Ok((y * self.width / 8 + x / 8, 0x80 >> (x % 8)))
    }

    /// The state of the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<State, Error> {
        let (byte, mask) = self.address(x, y)?;
        Ok(State::from(self.cells[byte] & mask != 0))
    }

    /// Sets the state of the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, state: State) -> Result<(), Error> {
        let (byte, mask) = self.address(x, y)?;
        match state {
            State::Alive => self.cells[byte] |= mask,
            State::Dead => self.cells[byte] &= !mask,
        }
        Ok(())
    }

    /// The state of the cell at `(x, y)`, where the board wraps around
    /// like a torus.
    ///
    /// Only one step past each edge is allowed: `x` may range from `-1` to
    /// `width`, `y` from `-1` to `height`.
    pub fn get_wrapped(&self, x: isize, y: isize) -> Result<State, Error> {
        let wrap = |i: isize, len: usize| {
            let len = len as isize;
            match i {
                -1 => Some(len - 1),
                i if i == len => Some(0),
                i if (0..len).contains(&i) => Some(i),
                _ => None,
            }
        };
        match (wrap(x, self.width), wrap(y, self.height)) {
            (Some(wx), Some(wy)) => self.get(wx as usize, wy as usize),
            _ => Err(Error::OutOfBounds(x, y)),
        }
    }

    /// The neighborhood of the cell at `(x, y)`, with the board wrapping
    /// around like a torus.
    pub fn neighborhood(&self, x: usize, y: usize) -> Result<Neighborhood, Error> {
        self.address(x, y)?;
        let mut nbhd = Neighborhood::EMPTY;
        for &side in Side::ALL.iter() {
            let (dy, dx) = side.offset();
            let (nx, ny) = (x as isize + dx as isize, y as isize + dy as isize);
            nbhd.set(side, self.get_wrapped(nx, ny)?);
        }
        Ok(nbhd)
    }

    /// The state of the cell at `(x, y)` in the next generation.
    pub fn next_state(
        &self,
        x: usize,
        y: usize,
        classification: &Classification,
    ) -> Result<State, Error> {
        Ok(classification.successor(self.neighborhood(x, y)?))
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|byte| byte.count_ones() as usize).sum()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines.next().unwrap_or_default();
        let invalid_header = || Error::InvalidHeader(header.to_owned());
        let mut dims = header.splitn(2, 'x');
        let width = dims
            .next()
            .and_then(|w| w.parse().ok())
            .ok_or_else(invalid_header)?;
        let height = dims
            .next()
            .and_then(|h| h.parse().ok())
            .ok_or_else(invalid_header)?;

        let mut board = Board::new(width, height)?;
        for y in 0..height {
            let row = lines.next().ok_or(Error::MissingRow(y))?;
            let found = row.chars().count();
            if found != width {
                return Err(Error::InvalidRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let state =
                    State::from_glyph(glyph).ok_or(Error::InvalidGlyph { glyph, x, y })?;
                board.set(x, y, state)?;
            }
        }
        debug!(
            "Parsed a {}x{} board with {} living cells",
            width,
            height,
            board.population()
        );
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{}", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                let state = self.get(x, y).map_err(|_| fmt::Error)?;
                write!(f, "{}", state.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
