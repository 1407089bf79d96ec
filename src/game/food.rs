use super::grid::{Cell, Grid};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Choose a uniformly random cell of `grid` that is not in `occupied`, or
/// `None` if every cell is taken.
///
/// The free cells are never collected: the grid is walked lazily and sampled
/// with a reservoir, so the cost is one pass over the grid regardless of how
/// full it is.
pub(crate) fn spawn<I, R>(occupied: I, grid: Grid, rng: &mut R) -> Option<Cell>
where
    I: IntoIterator<Item = Cell>,
    R: Rng + ?Sized,
{
    let occupied = occupied.into_iter().collect::<HashSet<_>>();
    grid.cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
}
