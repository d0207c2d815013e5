use crate::consts::{FOOD_SIZE, MOVE_DISTANCE, STOPPED_HEAD_CHAR, WALL_LIMIT};
use Direction::*;

/// A point in world coordinates; the origin is the centre of the board and y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Euclidean proximity: true when the centres are less than one cell apart
    pub fn touches(&self, other: Position) -> bool {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy < FOOD_SIZE * FOOD_SIZE
    }

    /// Box overlap on both axes, used when placing food
    pub fn overlaps(&self, other: Position) -> bool {
        (self.x - other.x).abs() < FOOD_SIZE && (self.y - other.y).abs() < FOOD_SIZE
    }

    pub fn out_of_bounds(&self) -> bool {
        self.x.abs() > WALL_LIMIT || self.y.abs() > WALL_LIMIT
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
        )
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Stop => (0, 0),
            Up => (0, MOVE_DISTANCE),
            Down => (0, -MOVE_DISTANCE),
            Left => (-MOVE_DISTANCE, 0),
            Right => (MOVE_DISTANCE, 0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Head first
    segments: Vec<Position>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake { segments: vec![head], direction: Stop }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Every segment except the head
    pub fn body(&self) -> &[Position] {
        &self.segments[1..]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Moves every body segment onto its predecessor's cell, then steps the head.
    pub fn advance(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        self.segments[0] = self.head().moved(self.direction);
    }

    /// Appends a segment on top of the current tail; it separates on the next advance.
    pub fn grow(&mut self) {
        let tail = self.segments[self.segments.len() - 1];
        self.segments.push(tail);
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body().iter().any(|seg| head.touches(*seg))
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|seg| seg.overlaps(pos))
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
            Stop => STOPPED_HEAD_CHAR,
        }
    }

    #[cfg(test)]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Snake { segments, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Left.is_opposite(Right));
        assert!(!Up.is_opposite(Left));
        assert!(!Stop.is_opposite(Left));
        assert!(!Right.is_opposite(Stop));
    }

    #[test]
    fn stopped_snake_stays_put() {
        let mut snake = Snake::new(Position::ORIGIN);
        snake.advance();
        assert_eq!(snake.head(), Position::ORIGIN);
    }

    #[test]
    fn body_follows_head() {
        let mut snake = Snake::from_segments(
            vec![Position::new(40, 0), Position::new(20, 0), Position::new(0, 0)],
            Up,
        );
        snake.advance();

        assert_eq!(
            snake.segments(),
            &[Position::new(40, 20), Position::new(40, 0), Position::new(20, 0)]
        );
    }

    #[test]
    fn grown_segment_trails_after_next_step() {
        let mut snake = Snake::new(Position::ORIGIN);
        snake.set_direction(Right);
        snake.grow();
        assert_eq!(snake.len(), 2);

        snake.advance();
        assert_eq!(snake.head(), Position::new(20, 0));
        assert_eq!(snake.body(), &[Position::ORIGIN]);
        assert!(!snake.head_hits_body());
    }

    #[test]
    fn touching_uses_euclidean_distance() {
        let p = Position::ORIGIN;
        assert!(p.touches(Position::new(10, 10)));
        assert!(!p.touches(Position::new(20, 0)));
        assert!(!p.touches(Position::new(15, 15)));
        assert!(p.overlaps(Position::new(15, 15)));
    }

    #[test]
    fn bounds() {
        assert!(!Position::new(280, -280).out_of_bounds());
        assert!(!Position::new(290, 0).out_of_bounds());
        assert!(Position::new(300, 0).out_of_bounds());
        assert!(Position::new(0, -300).out_of_bounds());
    }
}
