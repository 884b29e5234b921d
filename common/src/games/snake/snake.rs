use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Body ordered tail to head. `body_set` mirrors `body` for O(1) lookups.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_back(point);
        self.body_set.insert(point);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_front()?;
        self.body_set.remove(&tail);
        Some(tail)
    }

    /// Drops every segment except the head.
    pub fn truncate_to_head(&mut self) {
        let head = self.head();
        self.body.clear();
        self.body_set.clear();
        self.push_head(head);
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_has_single_segment() {
        let snake = Snake::new(Point::new(3, 4));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(3, 4));
        assert_eq!(snake.tail(), Point::new(3, 4));
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.push_head(Point::new(1, 0));
        snake.push_head(Point::new(2, 0));
        assert_eq!(snake.pop_tail(), Some(Point::new(0, 0)));
        assert!(!snake.contains(&Point::new(0, 0)));
        assert!(snake.contains(&Point::new(2, 0)));
        assert_eq!(snake.head(), Point::new(2, 0));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_pop_tail_never_empties_snake() {
        let mut snake = Snake::new(Point::new(5, 5));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_truncate_to_head() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.push_head(Point::new(0, 1));
        snake.push_head(Point::new(0, 2));
        snake.truncate_to_head();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(0, 2));
        assert_eq!(snake.body_set.len(), 1);
    }
}
