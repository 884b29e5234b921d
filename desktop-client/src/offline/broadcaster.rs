use common::games::FrameSink;
use common::games::snake::SnakeFrame;

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl FrameSink for LocalBroadcaster {
    fn publish_frame(&self, frame: SnakeFrame) {
        self.shared_state.set_frame(Some(frame));
    }

    fn clear(&self) {
        self.shared_state.set_frame(None);
    }
}
