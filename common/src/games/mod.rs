mod audio;
mod broadcaster;
mod scheduler;
mod session_rng;

pub mod snake;

pub use audio::{AudioSink, SilentAudio};
pub use broadcaster::FrameSink;
pub use scheduler::TickScheduler;
pub use session_rng::SessionRng;
