use super::session::Intent;
use super::types::Direction;

pub const SWIPE_THRESHOLD_PX: f32 = 24.0;

/// A finished drag: longer than the threshold on either axis turns the snake
/// along the dominant axis, anything shorter is a tap that starts the game.
pub fn classify_gesture(dx: f32, dy: f32) -> Intent {
    if dx.abs() > SWIPE_THRESHOLD_PX || dy.abs() > SWIPE_THRESHOLD_PX {
        Intent::SetDirection(swipe_direction(dx, dy))
    } else {
        Intent::Start
    }
}

/// Screen y grows downwards, matching grid y.
pub fn swipe_direction(dx: f32, dy: f32) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 { Direction::Right } else { Direction::Left }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_gesture_is_a_tap() {
        assert_eq!(classify_gesture(0.0, 0.0), Intent::Start);
        assert_eq!(classify_gesture(24.0, -24.0), Intent::Start);
    }

    #[test]
    fn test_swipe_uses_dominant_axis() {
        assert_eq!(classify_gesture(40.0, 10.0), Intent::SetDirection(Direction::Right));
        assert_eq!(classify_gesture(-40.0, 30.0), Intent::SetDirection(Direction::Left));
        assert_eq!(classify_gesture(5.0, 30.0), Intent::SetDirection(Direction::Down));
        assert_eq!(classify_gesture(-10.0, -60.0), Intent::SetDirection(Direction::Up));
    }

    #[test]
    fn test_equal_axes_prefer_vertical() {
        assert_eq!(swipe_direction(30.0, 30.0), Direction::Down);
    }
}
