//! The shift & intersect operation on sets of neighborhoods.

use crate::{
    error::Error,
    nbhd::{overlap, Side},
    set::NeighborhoodSet,
};
use log::trace;

/// Keeps the neighborhoods in each set that fit next to at least one
/// neighborhood in the other set.
///
/// Every `l` in `left` is tried against every `r` in `right` with the `r`
/// placed one cell away towards `side`, as in
/// [`Neighborhood::matches`](crate::Neighborhood::matches).
/// Returns the `l`s and the `r`s that take part in at least one match.
///
/// Fails if `side` is [`Side::C`].
pub fn shift_intersect(
    left: &NeighborhoodSet,
    right: &NeighborhoodSet,
    side: Side,
) -> Result<(NeighborhoodSet, NeighborhoodSet), Error> {
    // The shared cells are the same for every pair.
    let shared: Vec<_> = overlap(1, side)?.collect();
    let mut result_left = NeighborhoodSet::new();
    let mut result_right = NeighborhoodSet::new();
    for l in left {
        for r in right {
            if shared.iter().all(|&(s, t)| l.get(s) == r.get(t)) {
                result_left.add(l);
                result_right.add(r);
            }
        }
    }
    trace!(
        "Shift & intersect towards {}: {} x {} -> {} x {}",
        side,
        left.len(),
        right.len(),
        result_left.len(),
        result_right.len()
    );
    Ok((result_left, result_right))
}
