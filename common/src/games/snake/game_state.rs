use std::collections::HashSet;
use std::time::Duration;

use crate::{debug_log, log};
use crate::games::SessionRng;
use super::levels::{
    self, Difficulty, ThemeKind, POINTS_PER_FOOD,
};
use super::obstacles;
use super::snake::Snake;
use super::spawner::{spawn_food, SpawnPolicy};
use super::types::{DeathReason, Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
    pub speed: u32,
    pub theme: ThemeKind,
    pub snake_truncated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate {
        food_spawned: bool,
        level_up: Option<LevelUp>,
    },
    Died(DeathReason),
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub field_size: FieldSize,
    pub snake: Snake,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub obstacles: HashSet<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub foods_eaten: u32,
    pub level: u32,
    pub speed: u32,
    pub theme: ThemeKind,
    pub difficulty: Difficulty,
    pub spawn_policy: SpawnPolicy,
    pub game_end_reason: Option<DeathReason>,
}

impl SnakeGameState {
    /// Level 1 board: a one-cell snake at the center heading right, food placed.
    pub fn new(
        field_size: FieldSize,
        difficulty: Difficulty,
        spawn_policy: SpawnPolicy,
        rng: &mut SessionRng,
    ) -> Self {
        let level = levels::level_for_foods(0);
        let mut state = Self {
            field_size,
            snake: Snake::new(field_size.center()),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            obstacles: obstacles::generate(level, field_size),
            food: None,
            score: 0,
            foods_eaten: 0,
            level,
            speed: difficulty.speed_for_level(level),
            theme: levels::theme_for_level(level),
            difficulty,
            spawn_policy,
            game_end_reason: None,
        };
        state.respawn_food(rng);
        state
    }

    pub fn is_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn tick_interval(&self) -> Duration {
        levels::tick_interval(self.speed)
    }

    /// Queues a turn for the next tick. Reversing onto the neck is ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if let Some(reason) = self.game_end_reason {
            return TickOutcome::Died(reason);
        }

        self.direction = self.pending_direction;

        let next_head = match self.calculate_next_head() {
            Ok(point) => point,
            Err(reason) => {
                self.game_end_reason = Some(reason);
                return TickOutcome::Died(reason);
            }
        };

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.food = None;
            let level_up = self.eat_food();
            let food_spawned = self.respawn_food(rng);
            TickOutcome::Ate {
                food_spawned,
                level_up,
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    fn calculate_next_head(&self) -> Result<Point, DeathReason> {
        let next_head = self.snake.head().step(self.direction);

        if !self.field_size.contains(next_head) {
            return Err(DeathReason::WallCollision);
        }
        if self.snake.contains(&next_head) {
            return Err(DeathReason::SelfCollision);
        }
        if self.obstacles.contains(&next_head) {
            return Err(DeathReason::ObstacleCollision);
        }

        Ok(next_head)
    }

    fn eat_food(&mut self) -> Option<LevelUp> {
        self.score += POINTS_PER_FOOD;
        self.foods_eaten += 1;
        debug_log!(
            "Food eaten at ({}, {}). Score: {}, foods: {}",
            self.snake.head().x,
            self.snake.head().y,
            self.score,
            self.foods_eaten
        );

        let new_level = levels::level_for_foods(self.foods_eaten);
        if new_level == self.level {
            return None;
        }

        let from = self.level;
        self.level = new_level;
        self.theme = levels::theme_for_level(new_level);
        self.speed = self.difficulty.speed_for_level(new_level);
        self.obstacles = obstacles::generate(new_level, self.field_size);

        let snake_truncated = levels::resets_length_on_entry(new_level);
        if snake_truncated {
            self.snake.truncate_to_head();
        }

        log!(
            "Level {} -> {} ({} theme, speed {}, {} obstacles{})",
            from,
            new_level,
            self.theme.name(),
            self.speed,
            self.obstacles.len(),
            if snake_truncated { ", snake reset" } else { "" }
        );

        Some(LevelUp {
            from,
            to: new_level,
            speed: self.speed,
            theme: self.theme,
            snake_truncated,
        })
    }

    fn respawn_food(&mut self, rng: &mut SessionRng) -> bool {
        self.food = spawn_food(
            &self.snake,
            &self.obstacles,
            self.field_size,
            self.spawn_policy,
            rng,
        );
        if self.food.is_none() {
            log!("No free cell left for food; continuing without it");
        }
        self.food.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::levels::MAX_LEVEL;

    fn create_state() -> (SnakeGameState, SessionRng) {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(
            FieldSize::new(48, 48),
            Difficulty::Normal,
            SpawnPolicy::default(),
            &mut rng,
        );
        (state, rng)
    }

    /// Puts food directly in front of the head.
    fn place_food_ahead(state: &mut SnakeGameState) {
        state.food = Some(state.snake.head().step(state.pending_direction));
    }

    #[test]
    fn test_new_state_starts_at_level_one() {
        let (state, _) = create_state();
        assert_eq!(state.level, 1);
        assert_eq!(state.speed, 4);
        assert_eq!(state.theme, ThemeKind::Classic);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Point::new(24, 24));
        assert_eq!(state.direction, Direction::Right);
        assert!(state.obstacles.is_empty());
        let food = state.food.expect("food spawned");
        assert_ne!(food, state.snake.head());
    }

    #[test]
    fn test_tick_without_food_shifts_snake_right() {
        let (mut state, mut rng) = create_state();
        state.food = Some(Point::new(0, 0));
        let outcome = state.update(&mut rng);
        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(state.snake.head(), Point::new(25, 24));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_length_unchanged_when_moving() {
        let (mut state, mut rng) = create_state();
        state.snake.push_head(Point::new(25, 24));
        state.snake.push_head(Point::new(26, 24));
        state.food = Some(Point::new(0, 0));
        for _ in 0..5 {
            state.update(&mut rng);
            assert_eq!(state.snake.len(), 3);
        }
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let (mut state, mut rng) = create_state();
        place_food_ahead(&mut state);
        let outcome = state.update(&mut rng);
        assert!(matches!(outcome, TickOutcome::Ate { food_spawned: true, level_up: None }));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 10);
        assert_eq!(state.foods_eaten, 1);
        let food = state.food.expect("respawned");
        assert!(!state.snake.contains(&food));
    }

    #[test]
    fn test_reverse_direction_is_ignored() {
        let (mut state, mut rng) = create_state();
        state.food = Some(Point::new(0, 0));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Right);
        assert!(state.set_direction(Direction::Up));
        state.update(&mut rng);
        assert_eq!(state.direction, Direction::Up);
        assert!(!state.set_direction(Direction::Down));
    }

    #[test]
    fn test_quick_double_turn_cannot_reverse() {
        let (mut state, _) = create_state();
        assert!(state.set_direction(Direction::Up));
        // Still heading right until the next tick commits Up.
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Up);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let (mut state, mut rng) = create_state();
        state.food = None;
        state.snake = Snake::new(Point::new(47, 10));
        assert_eq!(state.update(&mut rng), TickOutcome::Died(DeathReason::WallCollision));
        assert!(state.is_over());
        assert_eq!(state.snake.head(), Point::new(47, 10));
    }

    #[test]
    fn test_obstacle_collision_ends_game() {
        let (mut state, mut rng) = create_state();
        state.food = None;
        state.obstacles.insert(Point::new(25, 24));
        assert_eq!(state.update(&mut rng), TickOutcome::Died(DeathReason::ObstacleCollision));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let (mut state, mut rng) = create_state();
        state.food = None;
        let mut snake = Snake::new(Point::new(10, 12));
        snake.push_head(Point::new(10, 11));
        snake.push_head(Point::new(11, 11));
        snake.push_head(Point::new(11, 10));
        snake.push_head(Point::new(10, 10));
        state.snake = snake;
        state.direction = Direction::Left;
        state.pending_direction = Direction::Down;
        assert_eq!(state.update(&mut rng), TickOutcome::Died(DeathReason::SelfCollision));
    }

    #[test]
    fn test_moving_into_tail_cell_is_a_collision() {
        let (mut state, mut rng) = create_state();
        state.food = None;
        let mut snake = Snake::new(Point::new(10, 11));
        snake.push_head(Point::new(11, 11));
        snake.push_head(Point::new(11, 10));
        snake.push_head(Point::new(10, 10));
        state.snake = snake;
        state.direction = Direction::Left;
        state.pending_direction = Direction::Down;
        assert!(matches!(state.update(&mut rng), TickOutcome::Died(_)));
    }

    #[test]
    fn test_fifteenth_food_levels_up_to_two() {
        let (mut state, mut rng) = create_state();
        state.foods_eaten = 14;
        state.snake.push_head(Point::new(25, 24));
        state.pending_direction = Direction::Down;
        place_food_ahead(&mut state);

        let outcome = state.update(&mut rng);
        let TickOutcome::Ate { level_up: Some(level_up), .. } = outcome else {
            panic!("expected level up, got {:?}", outcome);
        };
        assert_eq!(level_up.from, 1);
        assert_eq!(level_up.to, 2);
        assert_eq!(level_up.speed, 4);
        assert!(!level_up.snake_truncated);
        assert_eq!(state.level, 2);
        assert_eq!(state.speed, 4);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.obstacles, obstacles::generate(2, state.field_size));
        let food = state.food.expect("food respawned");
        assert!(!state.obstacles.contains(&food));
    }

    #[test]
    fn test_entering_level_eight_truncates_snake() {
        let (mut state, mut rng) = create_state();
        state.level = 7;
        state.foods_eaten = 104;
        state.snake = Snake::new(Point::new(2, 2));
        state.snake.push_head(Point::new(3, 2));
        state.snake.push_head(Point::new(4, 2));
        place_food_ahead(&mut state);

        let outcome = state.update(&mut rng);
        let TickOutcome::Ate { level_up: Some(level_up), .. } = outcome else {
            panic!("expected level up, got {:?}", outcome);
        };
        assert_eq!(level_up.to, 8);
        assert!(level_up.snake_truncated);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Point::new(5, 2));
        assert_eq!(state.speed, 6);
        assert_eq!(state.theme, ThemeKind::Neon);
        assert_eq!(state.tick_interval(), Duration::from_millis(166));
    }

    #[test]
    fn test_entering_level_fifteen_truncates_snake() {
        let (mut state, mut rng) = create_state();
        state.level = 14;
        state.foods_eaten = 209;
        state.snake = Snake::new(Point::new(2, 2));
        state.snake.push_head(Point::new(3, 2));
        place_food_ahead(&mut state);

        state.update(&mut rng);
        assert_eq!(state.level, 15);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.theme, ThemeKind::Amber);
        assert_eq!(state.speed, 8);
    }

    #[test]
    fn test_level_nine_does_not_truncate() {
        let (mut state, mut rng) = create_state();
        state.level = 8;
        state.foods_eaten = 119;
        state.snake = Snake::new(Point::new(2, 2));
        state.snake.push_head(Point::new(3, 2));
        place_food_ahead(&mut state);

        state.update(&mut rng);
        assert_eq!(state.level, 9);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_level_caps_at_max() {
        let (mut state, mut rng) = create_state();
        state.level = MAX_LEVEL;
        state.foods_eaten = 400;
        state.obstacles.clear();
        state.snake = Snake::new(Point::new(2, 2));
        place_food_ahead(&mut state);
        let outcome = state.update(&mut rng);
        assert!(matches!(outcome, TickOutcome::Ate { level_up: None, .. }));
        assert_eq!(state.level, MAX_LEVEL);
    }

    #[test]
    fn test_missing_food_is_not_fatal() {
        let (mut state, mut rng) = create_state();
        state.food = None;
        assert_eq!(state.update(&mut rng), TickOutcome::Moved);
        assert!(!state.is_over());
    }

    #[test]
    fn test_head_stays_on_board_over_random_walk() {
        let (mut state, mut rng) = create_state();
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        for step in 0..500 {
            if step % 7 == 0 {
                state.set_direction(turns[(step / 7) % 4]);
            }
            if let TickOutcome::Died(_) = state.update(&mut rng) {
                break;
            }
            assert!(state.field_size.contains(state.snake.head()));
        }
        assert!(state.field_size.contains(state.snake.head()));
    }

    #[test]
    fn test_fast_difficulty_speeds_up_ticks() {
        let mut rng = SessionRng::new(1);
        let state = SnakeGameState::new(
            FieldSize::new(30, 30),
            Difficulty::Fast,
            SpawnPolicy::Exhaustive,
            &mut rng,
        );
        assert_eq!(state.speed, 8);
        assert_eq!(state.tick_interval(), Duration::from_millis(125));
    }
}
