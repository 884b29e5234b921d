use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::snake::Snake;
use super::types::{FieldSize, Point};

pub const DEFAULT_SPAWN_CANDIDATES: usize = 300;

/// How hard the spawner tries to place food the snake can actually reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Check at most `max_candidates` shuffled free cells, then settle for the
    /// first shuffled cell even if it is walled off.
    Sampled { max_candidates: usize },
    /// Only ever return a reachable cell; `None` when there is none.
    Exhaustive,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::Sampled {
            max_candidates: DEFAULT_SPAWN_CANDIDATES,
        }
    }
}

/// Cells connected to a start cell through free cells, 4-directionally.
pub struct ReachabilityMap {
    field: FieldSize,
    seen: Vec<bool>,
}

impl ReachabilityMap {
    pub fn flood(
        start: Point,
        snake: &Snake,
        obstacles: &HashSet<Point>,
        field: FieldSize,
    ) -> Self {
        let mut seen = vec![false; field.cell_count()];
        let mut queue = VecDeque::new();

        if let Some(index) = field.index_of(start) {
            seen[index] = true;
            queue.push_back(start);
        }

        while let Some(point) = queue.pop_front() {
            for next in point.neighbors() {
                let Some(index) = field.index_of(next) else {
                    continue;
                };
                if seen[index] || obstacles.contains(&next) || snake.contains(&next) {
                    continue;
                }
                seen[index] = true;
                queue.push_back(next);
            }
        }

        Self { field, seen }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.field
            .index_of(point)
            .is_some_and(|index| self.seen[index])
    }
}

pub fn free_cells(snake: &Snake, obstacles: &HashSet<Point>, field: FieldSize) -> Vec<Point> {
    field
        .cells()
        .filter(|point| !snake.contains(point) && !obstacles.contains(point))
        .collect()
}

/// Picks a food cell off the snake and obstacles, preferring cells reachable from the head.
pub fn spawn_food(
    snake: &Snake,
    obstacles: &HashSet<Point>,
    field: FieldSize,
    policy: SpawnPolicy,
    rng: &mut SessionRng,
) -> Option<Point> {
    let mut free = free_cells(snake, obstacles, field);
    if free.is_empty() {
        return None;
    }
    rng.shuffle(&mut free);

    let reachable = ReachabilityMap::flood(snake.head(), snake, obstacles, field);

    match policy {
        SpawnPolicy::Sampled { max_candidates } => free
            .iter()
            .take(max_candidates)
            .find(|candidate| reachable.contains(**candidate))
            .or_else(|| free.first())
            .copied(),
        SpawnPolicy::Exhaustive => free
            .into_iter()
            .find(|candidate| reachable.contains(*candidate)),
    }
}
