use common::games::snake::{SnakeController, TickOutcome};
use common::leaderboard::LeaderboardKind;
use common::{log, PlayerName};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::state::{ClientCommand, SharedState};

use super::LocalBroadcaster;

/// Drives one controller until the UI asks to shut down. Ticks and commands
/// are handled in this single task, one at a time.
pub async fn run_snake_game(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    mut controller: SnakeController,
) {
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    publish_leaderboards(&controller, &shared_state);
    controller.publish(&broadcaster, Instant::now());

    loop {
        tokio::select! {
            _ = controller.scheduler_mut().tick() => {
                let now = Instant::now();
                if let Some(outcome) = controller.on_tick(now) {
                    report_outcome(&controller, &shared_state, outcome);
                }
                controller.publish(&broadcaster, now);
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                match command {
                    ClientCommand::Game(intent) => {
                        let now = Instant::now();
                        if controller.handle_intent(intent, now) {
                            controller.publish(&broadcaster, now);
                        }
                    }
                    ClientCommand::NewGame => {
                        let now = Instant::now();
                        controller.new_game(now);
                        controller.publish(&broadcaster, now);
                    }
                    ClientCommand::SetPlayerName(name) => {
                        let player = PlayerName::new(&name);
                        log!("Player name set to {}", player);
                        controller.set_player(player);
                    }
                    ClientCommand::RefreshLeaderboard => {
                        publish_leaderboards(&controller, &shared_state);
                    }
                    ClientCommand::Shutdown => break,
                }
            }
        }
    }

    log!("Game runner stopped");
}

fn report_outcome(controller: &SnakeController, shared_state: &SharedState, outcome: TickOutcome) {
    match outcome {
        TickOutcome::Ate { food_spawned, level_up } => {
            if let Some(level_up) = level_up {
                let mut line = format!(
                    "Level {}: {} theme, speed {}",
                    level_up.to,
                    level_up.theme.name(),
                    level_up.speed
                );
                if level_up.snake_truncated {
                    line.push_str(", snake shortened");
                }
                shared_state.add_event(line);
            }
            if !food_spawned {
                shared_state.add_event("No room left for food".to_string());
            }
        }
        TickOutcome::Died(_) => {
            if let Some(summary) = controller.session().and_then(|session| session.summary()) {
                shared_state.add_event(format!(
                    "{} {} on level {}: {:.1}s, {} pts",
                    summary.player,
                    summary.reason,
                    summary.level,
                    summary.duration.as_secs_f64(),
                    summary.score
                ));
            }
            publish_leaderboards(controller, shared_state);
        }
        TickOutcome::Moved => {}
    }
}

fn publish_leaderboards(controller: &SnakeController, shared_state: &SharedState) {
    for kind in LeaderboardKind::ALL {
        match controller.leaderboard().query(kind) {
            Ok(entries) => shared_state.set_leaderboard(kind, entries),
            Err(e) => {
                log!("Failed to load {} leaderboard: {}", kind.storage_key(), e);
                shared_state.set_error(e.to_string());
            }
        }
    }
}
