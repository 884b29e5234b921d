use serde::{Deserialize, Serialize};

/// A grid cell. Coordinates are signed so that a head stepping off the board
/// is still representable and can be rejected by [`FieldSize::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn neighbors(&self) -> [Point; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit offset in grid space, y grows downwards.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    ObstacleCollision,
}

impl std::fmt::Display for DeathReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            DeathReason::WallCollision => "hit the wall",
            DeathReason::SelfCollision => "bit itself",
            DeathReason::ObstacleCollision => "hit an obstacle",
        };
        write!(f, "{}", text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        Some(point.y as usize * self.width + point.x as usize)
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.width as i32)
            .flat_map(move |x| (0..self.height as i32).map(move |y| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_field_contains_bounds() {
        let field = FieldSize::new(10, 8);
        assert!(field.contains(Point::new(0, 0)));
        assert!(field.contains(Point::new(9, 7)));
        assert!(!field.contains(Point::new(10, 0)));
        assert!(!field.contains(Point::new(0, 8)));
        assert!(!field.contains(Point::new(-1, 3)));
    }

    #[test]
    fn test_field_cells_visits_every_cell_once() {
        let field = FieldSize::new(4, 3);
        let cells: Vec<Point> = field.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[1], Point::new(0, 1));
        assert_eq!(cells[11], Point::new(3, 2));
    }

    #[test]
    fn test_center_uses_integer_division() {
        assert_eq!(FieldSize::new(48, 48).center(), Point::new(24, 24));
        assert_eq!(FieldSize::new(21, 17).center(), Point::new(10, 8));
    }
}
