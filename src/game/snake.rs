use super::direction::Direction;
use super::grid::{Cell, Grid};
use std::collections::VecDeque;

/// Snake state.
///
/// The body is stored head-first and is always contiguous: each cell is one
/// [`Direction`] step away from the next.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SnakeBody {
    /// Occupied cells, head at the front
    body: VecDeque<Cell>,

    /// The direction applied on the most recent step (or the starting
    /// direction before the first step)
    direction: Direction,

    /// Direction changes requested but not yet applied, oldest first
    pending: VecDeque<Direction>,

    /// Number of upcoming steps that will keep the tail in place
    growth: u32,
}

impl SnakeBody {
    /// Create a straight snake of `len` cells with its head at `head`, facing
    /// `direction`, with the rest of the body trailing behind it.
    pub(crate) fn new(head: Cell, direction: Direction, len: usize) -> SnakeBody {
        let body = std::iter::successors(Some(head), |&c| Some(c + -direction))
            .take(len.max(1))
            .collect();
        SnakeBody {
            body,
            direction,
            pending: VecDeque::new(),
            growth: 0,
        }
    }

    /// Create a snake from explicit cells, head first.  Returns `None` if
    /// `cells` is empty.
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(
        cells: I,
        direction: Direction,
    ) -> Option<SnakeBody> {
        let body = cells.into_iter().collect::<VecDeque<_>>();
        (!body.is_empty()).then_some(SnakeBody {
            body,
            direction,
            pending: VecDeque::new(),
            growth: 0,
        })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        // The body is never empty: `new()` takes at least one cell and
        // `step()` pushes before it pops.
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Return the occupied cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Return the active direction
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the queued direction changes, oldest first
    #[cfg(test)]
    pub(crate) fn pending(&self) -> &VecDeque<Direction> {
        &self.pending
    }

    /// Return the number of steps still owed growth
    #[cfg(test)]
    pub(crate) fn growth(&self) -> u32 {
        self.growth
    }

    /// Request a turn towards `direction`.
    ///
    /// The request is dropped if it reverses the *active* direction.  Note
    /// that this is checked against the active direction rather than the last
    /// queued one, so (moving right) "up" followed by "down" queues both; the
    /// reversal is caught when the second one is dequeued by [`step()`].
    ///
    /// [`step()`]: SnakeBody::step
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if direction.is_opposite(self.direction) {
            return;
        }
        if self.pending.back() != Some(&direction) {
            self.pending.push_back(direction);
        }
    }

    /// Owe the snake `n` more cells of length
    pub(crate) fn add_growth(&mut self, n: u32) {
        self.growth = self.growth.saturating_add(n);
    }

    /// Advance the snake one cell, applying at most one queued turn.
    pub(crate) fn step(&mut self) {
        if let Some(turn) = self.pending.pop_front() {
            if !turn.is_opposite(self.direction) {
                self.direction = turn;
            }
        }
        let new_head = self.head() + self.direction;
        self.body.push_front(new_head);
        if self.growth > 0 {
            self.growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Does the head overlap any other part of the body?
    pub(crate) fn hits_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Is the head inside `grid`?
    pub(crate) fn within_bounds(&self, grid: Grid) -> bool {
        grid.contains(self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake(cells: &[(i32, i32)], direction: Direction) -> SnakeBody {
        SnakeBody::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)), direction)
            .expect("test snake should not be empty")
    }

    #[test]
    fn new_trails_behind_head() {
        let s = SnakeBody::new(Cell::new(2, 2), Direction::Right, 3);
        assert_eq!(
            s.cells().collect::<Vec<_>>(),
            [Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)]
        );
        assert_eq!(s.direction(), Direction::Right);
        assert!(s.pending().is_empty());
        assert_eq!(s.growth(), 0);
    }

    #[test]
    fn new_never_empty() {
        let s = SnakeBody::new(Cell::new(0, 0), Direction::Up, 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn step_moves_without_growing() {
        let mut s = SnakeBody::new(Cell::new(2, 2), Direction::Right, 3);
        s.step();
        assert_eq!(s.len(), 3);
        assert_eq!(s.head(), Cell::new(3, 2));
        assert!(!s.occupies(Cell::new(0, 2)));
    }

    #[rstest]
    #[case(0, 3)]
    #[case(1, 4)]
    #[case(2, 4)]
    fn step_length_follows_credit(#[case] credit: u32, #[case] expected_len: usize) {
        let mut s = SnakeBody::new(Cell::new(5, 5), Direction::Down, 3);
        s.add_growth(credit);
        s.step();
        assert_eq!(s.len(), expected_len);
        assert_eq!(s.growth(), credit.saturating_sub(1));
    }

    #[test]
    fn growth_is_consumed_lazily() {
        let mut s = SnakeBody::new(Cell::new(5, 5), Direction::Down, 1);
        s.add_growth(2);
        for expected in [2, 3, 3, 3] {
            s.step();
            assert_eq!(s.len(), expected);
        }
    }

    #[test]
    fn body_stays_contiguous() {
        let mut s = SnakeBody::new(Cell::new(10, 10), Direction::Right, 3);
        s.add_growth(4);
        for d in [Direction::Down, Direction::Left, Direction::Up, Direction::Left] {
            s.set_direction(d);
            s.step();
            let cells = s.cells().collect::<Vec<_>>();
            for pair in cells.windows(2) {
                let dist = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(dist, 1, "body broke apart: {cells:?}");
            }
        }
    }

    #[test]
    fn reversal_of_active_direction_is_ignored() {
        let mut s = SnakeBody::new(Cell::new(2, 2), Direction::Right, 3);
        s.set_direction(Direction::Left);
        assert!(s.pending().is_empty());
        s.step();
        assert_eq!(s.direction(), Direction::Right);
        assert_eq!(s.head(), Cell::new(3, 2));
    }

    #[test]
    fn repeated_direction_is_queued_once() {
        let mut s = SnakeBody::new(Cell::new(2, 2), Direction::Right, 3);
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Up);
        assert_eq!(s.pending(), &VecDeque::from([Direction::Up]));
    }

    #[test]
    fn repeats_are_only_suppressed_against_the_tail() {
        let mut s = SnakeBody::new(Cell::new(2, 2), Direction::Right, 3);
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Right);
        s.set_direction(Direction::Up);
        assert_eq!(
            s.pending(),
            &VecDeque::from([Direction::Up, Direction::Right, Direction::Up])
        );
    }

    #[test]
    fn one_turn_per_step() {
        let mut s = SnakeBody::new(Cell::new(5, 5), Direction::Right, 3);
        s.set_direction(Direction::Down);
        s.set_direction(Direction::Left);
        s.step();
        assert_eq!(s.direction(), Direction::Down);
        assert_eq!(s.head(), Cell::new(5, 6));
        s.step();
        assert_eq!(s.direction(), Direction::Left);
        assert_eq!(s.head(), Cell::new(4, 6));
    }

    #[test]
    fn opposite_pair_in_one_frame_is_checked_against_active() {
        let mut s = SnakeBody::new(Cell::new(5, 5), Direction::Right, 3);
        // Both requests are compared with the active direction (Right), so
        // both are accepted into the queue.
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Down);
        assert_eq!(
            s.pending(),
            &VecDeque::from([Direction::Up, Direction::Down])
        );
        s.step();
        assert_eq!(s.direction(), Direction::Up);
        // Down reverses Up, so it is discarded when dequeued.
        s.step();
        assert_eq!(s.direction(), Direction::Up);
        assert_eq!(s.head(), Cell::new(5, 3));
        assert!(s.pending().is_empty());
        assert!(!s.hits_self());
    }

    #[test]
    fn step_never_reverses() {
        let all = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for a in all {
            for b in all {
                for c in all {
                    let mut s = SnakeBody::new(Cell::new(10, 10), Direction::Right, 3);
                    for d in [a, b, c] {
                        s.set_direction(d);
                    }
                    for _ in 0..4 {
                        let before = s.direction();
                        s.step();
                        assert!(
                            !s.direction().is_opposite(before),
                            "reversed from {before:?} with inputs {a:?} {b:?} {c:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn single_cell_never_hits_self() {
        let mut s = SnakeBody::new(Cell::new(1, 1), Direction::Right, 1);
        assert!(!s.hits_self());
        s.step();
        assert!(!s.hits_self());
    }

    #[test]
    fn hits_self_when_head_on_body() {
        let s = snake(
            &[(2, 2), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2), (2, 2)],
            Direction::Left,
        );
        assert!(s.hits_self());
    }

    #[test]
    fn following_the_tail_is_not_a_collision() {
        // A 2x2 loop: the head moves into the cell the tail vacates.
        let mut s = snake(&[(1, 1), (1, 2), (2, 2), (2, 1)], Direction::Up);
        s.set_direction(Direction::Right);
        s.step();
        assert_eq!(s.head(), Cell::new(2, 1));
        assert!(!s.hits_self());
    }

    #[test]
    fn chasing_the_tail_while_growing_is_a_collision() {
        let mut s = snake(&[(1, 1), (1, 2), (2, 2), (2, 1)], Direction::Up);
        s.add_growth(1);
        s.set_direction(Direction::Right);
        s.step();
        assert!(s.hits_self());
    }

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(4, 4), true)]
    #[case(Cell::new(-1, 2), false)]
    #[case(Cell::new(5, 2), false)]
    #[case(Cell::new(2, -1), false)]
    #[case(Cell::new(2, 5), false)]
    fn test_within_bounds(#[case] head: Cell, #[case] inside: bool) {
        let s = SnakeBody::new(head, Direction::Up, 1);
        assert_eq!(s.within_bounds(Grid::new(5, 5)), inside);
    }
}
