mod audio;
mod colors;
mod command_sender;
mod config;
mod constants;
mod offline;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use common::games::snake::SnakeController;
use common::games::{AudioSink, SilentAudio};
use common::leaderboard::{Leaderboard, LeaderboardKind, YamlFileScoreStore};
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

pub use command_sender::CommandSender;

use audio::RodioAudio;
use config::{get_config_manager, AudioConfig, Config};
use constants::{WINDOW_HEADER_PX, WINDOW_PADDING_PX};
use offline::run_snake_game;
use state::SharedState;
use ui::SnakeApp;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LeaderboardArg {
    Durations,
    Points,
}

impl From<LeaderboardArg> for LeaderboardKind {
    fn from(value: LeaderboardArg) -> Self {
        match value {
            LeaderboardArg::Durations => LeaderboardKind::Durations,
            LeaderboardArg::Points => LeaderboardKind::Points,
        }
    }
}

#[derive(Parser)]
#[command(name = "grid_snake")]
struct Args {
    /// Config file, defaults to grid_snake_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the player name from the config
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Print a leaderboard and exit
    #[arg(long, value_enum)]
    leaderboard: Option<LeaderboardArg>,

    /// With --leaderboard, print the list as HTML items
    #[arg(long, requires = "leaderboard")]
    html: bool,

    /// Fixed seed for obstacle and food placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.clone());
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };
    if let Some(name) = args.name {
        config.player.name = name;
    }

    let leaderboard_dir = PathBuf::from(&config.leaderboard.location);

    if let Some(kind) = args.leaderboard {
        return print_leaderboard(&leaderboard_dir, kind.into(), args.html);
    }

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let player = config.player.player_name();
    let settings = config.game.session_settings();
    let audio_config = config.audio.clone();
    let seed = args.seed;
    let shared_state_clone = shared_state.clone();
    let player_clone = player.clone();

    let runner = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start game loop: {}", e));
                return;
            }
        };
        rt.block_on(async {
            let leaderboard = Leaderboard::new(YamlFileScoreStore::new(leaderboard_dir));
            let mut controller =
                SnakeController::new(player_clone, settings, leaderboard, open_audio(&audio_config));
            if let Some(seed) = seed {
                controller = controller.with_seed(seed);
            }
            run_snake_game(shared_state_clone, command_rx, controller).await;
        });
    });

    let cell_size = config.game.cell_size_px as f32;
    let board_cells = (config.game.field_width as usize, config.game.field_height as usize);
    let window_width = board_cells.0 as f32 * cell_size + WINDOW_PADDING_PX;
    let window_height = board_cells.1 as f32 * cell_size + WINDOW_HEADER_PX;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title(format!("Grid Snake - {}", player)),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    let exit_sender = command_sender.clone();

    eframe::run_native(
        "Grid Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_sender,
                player.as_str().to_string(),
                board_cells,
                cell_size,
                LeaderboardKind::Durations,
            )))
        }),
    )?;

    exit_sender.send(state::ClientCommand::Shutdown);
    if runner.join().is_err() {
        log!("Game runner panicked");
    }

    Ok(())
}

/// Music is optional: any failure to open the device or track falls back to silence.
fn open_audio(config: &AudioConfig) -> Box<dyn AudioSink> {
    if !config.enabled {
        return Box::new(SilentAudio);
    }
    let Some(track_path) = config.track_path.as_deref() else {
        return Box::new(SilentAudio);
    };
    match RodioAudio::open(Path::new(track_path), config.volume) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            log!("Music disabled: {}", e);
            Box::new(SilentAudio)
        }
    }
}

fn print_leaderboard(
    directory: &Path,
    kind: LeaderboardKind,
    html: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let leaderboard = Leaderboard::new(YamlFileScoreStore::new(directory));
    if html {
        println!("{}", leaderboard.render_html(kind)?);
        return Ok(());
    }

    let entries = leaderboard.query(kind)?;
    println!("{}", kind.title());
    if entries.is_empty() {
        println!("(empty)");
    }
    for (index, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}. {:<18} {}",
            index + 1,
            entry.player,
            kind.format_value(entry.value)
        );
    }
    Ok(())
}
