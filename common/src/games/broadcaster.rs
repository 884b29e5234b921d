use super::snake::SnakeFrame;

/// Receives render snapshots. Implementations must not block the game loop.
pub trait FrameSink {
    fn publish_frame(&self, frame: SnakeFrame);

    /// No game in progress.
    fn clear(&self);
}
