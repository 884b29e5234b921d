use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u32 = 21;
pub const FOODS_PER_LEVEL: u32 = 15;
pub const POINTS_PER_FOOD: u32 = 10;
pub const MAX_SPEED: u32 = 25;

pub fn level_for_foods(foods_eaten: u32) -> u32 {
    (foods_eaten / FOODS_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Ticks per second for a level, before the difficulty offset.
pub fn speed_for_level(level: u32) -> u32 {
    match level {
        0..=7 => 4,
        8..=14 => 6,
        _ => 8,
    }
}

pub fn theme_for_level(level: u32) -> ThemeKind {
    match level {
        0..=7 => ThemeKind::Classic,
        8..=14 => ThemeKind::Neon,
        _ => ThemeKind::Amber,
    }
}

/// Entering the first level of a theme band (8 and 15) cuts the snake back to its head.
pub fn resets_length_on_entry(level: u32) -> bool {
    level > 1 && theme_for_level(level) != theme_for_level(level - 1)
}

pub fn tick_interval(speed: u32) -> Duration {
    let clamped = speed.clamp(1, MAX_SPEED);
    Duration::from_millis(1000 / clamped as u64)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// Base tick rates of the difficulty selector; offsets are taken relative to `Normal`.
const SLOW_RATE: i32 = 8;
const NORMAL_RATE: i32 = 10;
const FAST_RATE: i32 = 14;

impl Difficulty {
    pub fn speed_offset(&self) -> i32 {
        match self {
            Difficulty::Slow => SLOW_RATE - NORMAL_RATE,
            Difficulty::Normal => 0,
            Difficulty::Fast => FAST_RATE - NORMAL_RATE,
        }
    }

    pub fn speed_for_level(&self, level: u32) -> u32 {
        let speed = speed_for_level(level) as i32 + self.speed_offset();
        speed.clamp(1, MAX_SPEED as i32) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    Classic,
    Neon,
    Amber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub snake: Rgb,
    pub food: Rgb,
    pub frame: Rgb,
    pub grid: Rgb,
    pub title: Rgb,
}

impl ThemeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Classic => "Classic",
            ThemeKind::Neon => "Neon",
            ThemeKind::Amber => "Amber",
        }
    }

    pub fn palette(&self) -> ThemePalette {
        match self {
            ThemeKind::Classic => ThemePalette {
                snake: Rgb(0x00, 0xFF, 0x00),
                food: Rgb(0xFF, 0x00, 0x00),
                frame: Rgb(0x00, 0xFF, 0x00),
                grid: Rgb(0x23, 0x23, 0x23),
                title: Rgb(0x00, 0xFF, 0x00),
            },
            ThemeKind::Neon => ThemePalette {
                snake: Rgb(0x00, 0xFF, 0xFF),
                food: Rgb(0xFF, 0x00, 0xFF),
                frame: Rgb(0x00, 0xFF, 0xFF),
                grid: Rgb(0x19, 0x19, 0x19),
                title: Rgb(0x00, 0xFF, 0xFF),
            },
            ThemeKind::Amber => ThemePalette {
                snake: Rgb(0xFF, 0xB4, 0x00),
                food: Rgb(0xFF, 0x50, 0x00),
                frame: Rgb(0xFF, 0xB4, 0x00),
                grid: Rgb(0x2D, 0x24, 0x12),
                title: Rgb(0xFF, 0xD2, 0x40),
            },
        }
    }
}
