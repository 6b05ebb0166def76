//! Cube Sim entry point
//!
//! Applies a move sequence to a fresh cube and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cube_sim::settings::AnimationPreset;
use cube_sim::sim::format_sequence;
use cube_sim::{Engine, FaceMove, MoveListener, Settings, SoundCue};

/// Apply cube notation to a solved 3x3x3 cube and print the result
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file (JSON); missing fields use defaults
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Seed for the shuffle RNG
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Animation preset: slow, normal, fast or instant
    #[arg(long, value_name = "NAME", value_parser = parse_preset)]
    preset: Option<AnimationPreset>,
    /// Scramble the cube before applying the moves
    #[arg(long)]
    shuffle: bool,
    /// Print the cube snapshot as JSON instead of a net
    #[arg(long)]
    json: bool,
    /// Moves such as R U' M2
    moves: Vec<String>,
}

fn parse_preset(name: &str) -> Result<AnimationPreset, String> {
    AnimationPreset::from_str(name).ok_or_else(|| format!("unknown preset '{name}'"))
}

/// Logs each move start with its sound cue
struct CueLog;

impl MoveListener for CueLog {
    fn move_started(&mut self, mv: &FaceMove, cue: SoundCue) {
        log::debug!("{} -> {} cue", mv, cue.as_str());
    }

    fn solved(&mut self) {
        log::info!("Cube solved");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    let mut settings = match &args.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(preset) = args.preset {
        settings.apply_preset(preset);
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut engine = Engine::with_listener(settings, Box::new(CueLog));
    log::info!("Cube Sim starting...");

    if args.shuffle {
        engine.shuffle();
    }
    let errors = engine.record_input_sequence(&args.moves.join(" "));
    engine.drain();

    if args.json {
        match engine.snapshot().to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to encode snapshot: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        if !engine.shuffle_moves().is_empty() {
            println!("moves: {}", format_sequence(engine.shuffle_moves()));
        }
        println!("{}", engine.cube().stickers());
        println!("solved: {}", engine.is_solved());
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
