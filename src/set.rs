//! Sets of neighborhoods.

use crate::{
    error::Error,
    nbhd::{Neighborhood, MAX_NBHD},
};
use std::{
    fmt::{self, Display, Formatter},
    iter::FromIterator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of bytes needed for one bit per neighborhood.
const SET_BYTES: usize = (MAX_NBHD as usize + 1) / 8;

/// A set of [`Neighborhood`]s.
///
/// There are 2<sup>9</sup> = 8 * 64 possible neighborhoods, so the set is an
/// array of 64 bytes. Neighborhood `n` is in the set iff bit `n % 8` of byte
/// `n / 8` is set, counting from the most significant bit of the byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "Vec<Neighborhood>", from = "Vec<Neighborhood>")
)]
pub struct NeighborhoodSet([u8; SET_BYTES]);

/// The byte and the bit mask of a neighborhood in the set.
#[inline]
fn address(nbhd: Neighborhood) -> (usize, u8) {
    let bits = nbhd.bits() as usize;
    (bits / 8, 0x80 >> (bits % 8))
}

impl NeighborhoodSet {
    /// The empty set.
    pub fn new() -> Self {
        NeighborhoodSet([0; SET_BYTES])
    }

    /// The set of all 512 neighborhoods.
    pub fn full() -> Self {
        NeighborhoodSet([0xff; SET_BYTES])
    }

    /// Adds a neighborhood to the set.
    ///
    /// Returns whether it was not in the set before.
    #[inline]
    pub fn add(&mut self, nbhd: Neighborhood) -> bool {
        let (byte, mask) = address(nbhd);
        let is_new = self.0[byte] & mask == 0;
        self.0[byte] |= mask;
        is_new
    }

    /// Removes a neighborhood from the set.
    ///
    /// Returns whether it was in the set.
    #[inline]
    pub fn remove(&mut self, nbhd: Neighborhood) -> bool {
        let (byte, mask) = address(nbhd);
        let was_present = self.0[byte] & mask != 0;
        self.0[byte] &= !mask;
        was_present
    }

    /// Whether the set contains a neighborhood.
    #[inline]
    pub fn contains(&self, nbhd: Neighborhood) -> bool {
        let (byte, mask) = address(nbhd);
        self.0[byte] & mask != 0
    }

    /// Adds a neighborhood given by its integer representation.
    ///
    /// Fails with [`Error::OutOfRange`] if `bits > 0x1ff`.
    pub fn add_bits(&mut self, bits: u16) -> Result<bool, Error> {
        Ok(self.add(Neighborhood::new(bits)?))
    }

    /// Whether the set contains the neighborhood given by its integer
    /// representation.
    ///
    /// Fails with [`Error::OutOfRange`] if `bits > 0x1ff`.
    pub fn contains_bits(&self, bits: u16) -> Result<bool, Error> {
        Ok(self.contains(Neighborhood::new(bits)?))
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }

    /// Number of neighborhoods in the set.
    pub fn len(&self) -> usize {
        self.0.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// An iterator over the neighborhoods in the set, in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { set: self, next: 0 }
    }
}

impl Default for NeighborhoodSet {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over a [`NeighborhoodSet`], in ascending order.
///
/// Created by [`NeighborhoodSet::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    set: &'a NeighborhoodSet,
    /// The first value not examined yet.
    next: u16,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Neighborhood;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next <= MAX_NBHD {
            let byte = self.set.0[self.next as usize / 8];
            if byte == 0 && self.next % 8 == 0 {
                self.next += 8;
                continue;
            }
            let nbhd = Neighborhood::new(self.next).ok()?;
            self.next += 1;
            if byte & 0x80 >> (nbhd.bits() % 8) != 0 {
                return Some(nbhd);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a NeighborhoodSet {
    type Item = Neighborhood;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Neighborhood> for NeighborhoodSet {
    fn from_iter<I: IntoIterator<Item = Neighborhood>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Neighborhood> for NeighborhoodSet {
    fn extend<I: IntoIterator<Item = Neighborhood>>(&mut self, iter: I) {
        for nbhd in iter {
            self.add(nbhd);
        }
    }
}

impl From<Vec<Neighborhood>> for NeighborhoodSet {
    fn from(nbhds: Vec<Neighborhood>) -> Self {
        nbhds.into_iter().collect()
    }
}

impl From<NeighborhoodSet> for Vec<Neighborhood> {
    fn from(set: NeighborhoodSet) -> Self {
        set.iter().collect()
    }
}

/// Lists the members, e.g. `["+++,#++,+#+", "##+,###,##+"]`.
impl Display for NeighborhoodSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, nbhd) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\"", nbhd)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for NeighborhoodSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NeighborhoodSet{}", self)
    }
}
