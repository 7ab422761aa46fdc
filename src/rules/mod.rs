//! Cellular automata rules, and the classification of neighborhoods by
//! what they become.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;

use crate::{
    cells::State,
    nbhd::{Neighborhood, MAX_NBHD},
    set::NeighborhoodSet,
};
use log::debug;
use once_cell::sync::Lazy;

pub use life::Life;

/// A cellular automaton rule on the Moore neighborhood.
pub trait Rule {
    /// The state of the center cell in the next generation.
    fn successor(&self, nbhd: Neighborhood) -> State;
}

/// All 512 neighborhoods, split by the state of the center cell in the next
/// generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Neighborhoods whose center becomes alive.
    ancestors_of_alive: NeighborhoodSet,
    /// Neighborhoods whose center becomes dead.
    ancestors_of_dead: NeighborhoodSet,
}

impl Classification {
    /// Classifies every neighborhood under `rule`.
    pub fn new<R: Rule>(rule: &R) -> Self {
        let mut ancestors_of_alive = NeighborhoodSet::new();
        let mut ancestors_of_dead = NeighborhoodSet::new();
        for nbhd in (0..=MAX_NBHD).filter_map(|bits| Neighborhood::new(bits).ok()) {
            match rule.successor(nbhd) {
                State::Alive => ancestors_of_alive.add(nbhd),
                State::Dead => ancestors_of_dead.add(nbhd),
            };
        }
        debug!(
            "Classified neighborhoods: {} ancestors of alive, {} ancestors of dead",
            ancestors_of_alive.len(),
            ancestors_of_dead.len()
        );
        Classification {
            ancestors_of_alive,
            ancestors_of_dead,
        }
    }

    /// The classification for Conway's Game of Life, `B3/S23`.
    ///
    /// This is a copy of a classification computed once per process.
    pub fn conway() -> Self {
        CONWAY.clone()
    }

    /// Neighborhoods whose center becomes alive.
    pub fn ancestors_of_alive(&self) -> NeighborhoodSet {
        self.ancestors_of_alive
    }

    /// Neighborhoods whose center becomes dead.
    pub fn ancestors_of_dead(&self) -> NeighborhoodSet {
        self.ancestors_of_dead
    }

    /// Neighborhoods whose center becomes `state`.
    pub fn ancestors(&self, state: State) -> NeighborhoodSet {
        match state {
            State::Alive => self.ancestors_of_alive(),
            State::Dead => self.ancestors_of_dead(),
        }
    }
}

/// A classified rule is itself a rule: a lookup into the two sets.
impl Rule for Classification {
    fn successor(&self, nbhd: Neighborhood) -> State {
        State::from(self.ancestors_of_alive.contains(nbhd))
    }
}

/// The classification for `B3/S23`, computed on first use.
static CONWAY: Lazy<Classification> = Lazy::new(|| Classification::new(&Life::conway()));

/// All neighborhoods whose center becomes alive in Conway's Game of Life.
///
/// Returns a new set each time.
pub fn ancestors_of_alive() -> NeighborhoodSet {
    CONWAY.ancestors_of_alive()
}

/// All neighborhoods whose center becomes dead in Conway's Game of Life.
///
/// Returns a new set each time.
pub fn ancestors_of_dead() -> NeighborhoodSet {
    CONWAY.ancestors_of_dead()
}
