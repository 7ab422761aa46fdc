//! __rlifepred__ reasons about the 3x3 neighborhoods of cells in
//! [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! and other totalistic Life-like cellular automata.
//!
//! A [`Neighborhood`] packs the states of a cell and its eight neighbors
//! into 9 bits. All 512 neighborhoods are [classified](Classification) by
//! what the center cell becomes in the next generation. Two neighborhoods
//! [match](Neighborhood::matches) if they can sit side by side on the same
//! board, and [`shift_intersect`] filters two [`NeighborhoodSet`]s down to
//! the members that match something in the other set.
//!
//! ```rust
//! use rlifepred::{ancestors_of_alive, shift_intersect, Side};
//!
//! let alive = ancestors_of_alive();
//! assert_eq!(alive.len(), 140);
//!
//! let (left, right) = shift_intersect(&alive, &alive, Side::E).unwrap();
//! assert_eq!(left.len(), 136);
//! assert_eq!(right.len(), 136);
//! ```

mod board;
mod cells;
mod config;
mod error;
mod nbhd;
pub mod rules;
mod set;
mod shift;

pub use board::Board;
pub use cells::State;
pub use config::Config;
pub use error::Error;
pub use nbhd::{Neighborhood, Side, MAX_NBHD};
pub use rules::{ancestors_of_alive, ancestors_of_dead, Classification, Rule};
pub use set::{Iter, NeighborhoodSet};
pub use shift::shift_intersect;
