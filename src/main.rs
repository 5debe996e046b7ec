//! catghost headless level runner.
//!
//! Loads a level description and a save file, runs the gameplay schedule for
//! a number of frames with the spawn system attached, and writes the save
//! file back. Rendering, input and physics belong to the host game; this
//! runner exists to exercise levels and save data from the command line.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/forest.json --frames 600
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use catghost::events::savegame::{LoadGameEvent, SaveGameEvent};
use catghost::game::{LevelDescription, SpawnSystemScope, build_update_schedule, setup_level, tick};
use catghost::resources::gameconfig::GameConfig;
use catghost::savedata::GameData;

/// Cat & Ghost level runner
#[derive(Parser)]
#[command(version, about = "Runs a Cat & Ghost level headless and updates its save file.")]
struct Cli {
    /// Level description (JSON).
    #[arg(long, value_name = "PATH")]
    level: PathBuf,

    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Save file to resume from and write to. Overrides the config value.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 60)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    let save_path = cli.save.unwrap_or_else(|| config.save_path.clone());

    let level = match LevelDescription::load_from_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let game_data = match GameData::load_from_file(&save_path) {
        Ok(data) => data,
        Err(e) => {
            log::info!("No usable save at {:?} ({}); starting fresh", save_path, e);
            GameData::default()
        }
    };

    let mut world = World::new();
    if let Err(e) = setup_level(&mut world, &level, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    world.insert_resource(game_data);
    world.insert_resource(config.clone());

    let mut update = build_update_schedule();
    if let Err(e) = update.initialize(&mut world) {
        eprintln!("Error: failed to initialize schedule: {e}");
        std::process::exit(1);
    }

    {
        let mut scope = match SpawnSystemScope::enter(&mut world) {
            Ok(scope) => scope,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        scope.trigger(LoadGameEvent {});

        for _ in 0..cli.frames {
            tick(&mut scope, &mut update, config.frame_delta);
        }

        scope.trigger(SaveGameEvent {});
    }

    let game_data = world.resource::<GameData>();
    if let Err(e) = game_data.save_to_file(&save_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    log::info!(
        "Ran {} frames of '{}'; resume point {:?}",
        cli.frames,
        level.name,
        game_data.last_checkpoint_id
    );
}
