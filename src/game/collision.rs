//! Collision checks consulted after each step of the snake
use super::grid::Grid;
use super::snake::SnakeBody;

/// Has the snake's head left the grid?
pub(crate) fn hits_wall(snake: &SnakeBody, grid: Grid) -> bool {
    !snake.within_bounds(grid)
}

/// Has the snake's head run into the rest of its body?
pub(crate) fn hits_self(snake: &SnakeBody) -> bool {
    snake.hits_self()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::grid::Cell;
    use rstest::rstest;

    const GRID: Grid = Grid::new(6, 4);

    #[rstest]
    #[case(Cell::new(-1, 2))]
    #[case(Cell::new(6, 2))]
    #[case(Cell::new(3, -1))]
    #[case(Cell::new(3, 4))]
    fn just_outside_is_a_wall_hit(#[case] head: Cell) {
        let snake = SnakeBody::new(head, Direction::Up, 1);
        assert!(hits_wall(&snake, GRID));
    }

    #[rstest]
    #[case(Cell::new(0, 0))]
    #[case(Cell::new(5, 0))]
    #[case(Cell::new(0, 3))]
    #[case(Cell::new(5, 3))]
    fn corners_are_inside(#[case] head: Cell) {
        let snake = SnakeBody::new(head, Direction::Up, 1);
        assert!(!hits_wall(&snake, GRID));
    }

    #[test]
    fn stepping_off_the_edge() {
        let mut snake = SnakeBody::new(Cell::new(5, 1), Direction::Right, 3);
        assert!(!hits_wall(&snake, GRID));
        snake.step();
        assert!(hits_wall(&snake, GRID));
        assert!(!hits_self(&snake));
    }

    #[test]
    fn length_one_never_hits_self() {
        let mut snake = SnakeBody::new(Cell::new(2, 2), Direction::Left, 1);
        for d in [Direction::Up, Direction::Right, Direction::Down] {
            snake.set_direction(d);
            snake.step();
            assert!(!hits_self(&snake));
        }
    }
}
