use tokio::sync::mpsc;

use crate::state::ClientCommand;

#[derive(Clone)]
pub struct CommandSender(mpsc::UnboundedSender<ClientCommand>);

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self(tx)
    }

    /// Dropped silently once the game runner has exited.
    pub fn send(&self, cmd: ClientCommand) {
        let _ = self.0.send(cmd);
    }
}
