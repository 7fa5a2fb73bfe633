//! RPS Session Driver CLI
//!
//! Stand-in for the camera/UI host: feeds gestures into the game core the
//! way the detector callback would, drives the round scheduler, and
//! renders results to the terminal. Also exposes the JSON classification
//! surface for landmark files captured elsewhere.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rps_core::{
    classify_json, Difficulty, GameSession, Gesture, SessionConfig, TickResult, ROUND_INTERVAL,
    SCHEMA_VERSION, WARMUP_DELAY,
};

#[derive(Parser)]
#[command(name = "rps_cli")]
#[command(about = "Play rock-paper-scissors sessions against the game core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session with scripted or randomly drawn player gestures
    Play {
        /// Rounds per game (clamped to 1..=10)
        #[arg(long, default_value = "5")]
        rounds: u8,

        /// Opponent difficulty: easy | medium | hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Seed for the opponent strategy (and the random player script)
        #[arg(long)]
        seed: Option<u64>,

        /// Comma-separated player script, e.g. "rock,paper,none,scissors";
        /// "none" submits an unrecognizable pose. Random when omitted.
        #[arg(long)]
        gestures: Option<String>,

        /// Sleep the scheduler cadence between rounds instead of ticking
        /// immediately
        #[arg(long, default_value = "false")]
        realtime: bool,

        /// Print the final summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Classify a landmark frame from a JSON file
    Classify {
        /// Input file: either `[{"x":..,"y":..}, ...]` or
        /// `{"landmarks": [...]}`
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play { rounds, difficulty, seed, gestures, realtime, json } => {
            run_play(rounds, difficulty, seed, gestures, realtime, json)
        }
        Commands::Classify { input } => run_classify(&input),
    }
}

fn parse_script(script: &str) -> Result<Vec<Gesture>> {
    script
        .split(',')
        .map(|word| match word.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Gesture::Rock),
            "paper" => Ok(Gesture::Paper),
            "scissors" => Ok(Gesture::Scissors),
            "none" => Ok(Gesture::Unrecognized),
            other => bail!("unknown gesture in script: {other:?}"),
        })
        .collect()
}

fn run_play(
    rounds: u8,
    difficulty: Difficulty,
    seed: Option<u64>,
    gestures: Option<String>,
    realtime: bool,
    json: bool,
) -> Result<()> {
    let config = SessionConfig { max_rounds: rounds, difficulty };
    let mut session = match seed {
        Some(seed) => GameSession::with_seed(config, seed),
        None => GameSession::new(config),
    };
    session.start(config)?;

    let script = gestures.as_deref().map(parse_script).transpose()?;
    let mut player_rng = StdRng::seed_from_u64(seed.unwrap_or(0).wrapping_add(1));
    let mut script_pos = 0usize;

    println!(
        "playing {} rounds at {} difficulty (tick every {:?})",
        session.max_rounds(),
        session.difficulty(),
        ROUND_INTERVAL
    );

    if realtime {
        std::thread::sleep(WARMUP_DELAY);
    }

    while session.is_running() {
        let gesture = match &script {
            Some(script) => {
                if script_pos >= script.len() {
                    println!("script exhausted after {} frames, stopping", script_pos);
                    session.stop();
                    break;
                }
                let g = script[script_pos];
                script_pos += 1;
                g
            }
            None => Gesture::REAL[player_rng.gen_range(0..Gesture::REAL.len())],
        };

        session.observe_gesture(gesture);
        match session.tick() {
            TickResult::Round(round) => {
                println!(
                    "round {}/{}: {} {} vs {} {} -> {}",
                    round.round,
                    session.max_rounds(),
                    round.player.emoji(),
                    round.player,
                    round.opponent.emoji(),
                    round.opponent,
                    round.outcome
                );
            }
            TickResult::Skipped => println!("skipped: no recognizable gesture"),
            TickResult::Idle | TickResult::Finished(_) => break,
        }

        if realtime && session.is_running() {
            std::thread::sleep(ROUND_INTERVAL);
        }
    }

    let summary = session.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if let Some(outcome) = session.final_outcome() {
        println!(
            "final: {}-{}-{} ({})",
            summary.scores.win, summary.scores.lose, summary.scores.draw, outcome
        );
    } else {
        println!(
            "stopped early: {}-{}-{} after {} rounds",
            summary.scores.win, summary.scores.lose, summary.scores.draw, summary.rounds_played
        );
    }

    Ok(())
}

fn run_classify(input: &PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading landmark file {}", input.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("parsing landmark file as JSON")?;

    let landmarks = match value {
        serde_json::Value::Array(items) => serde_json::Value::Array(items),
        serde_json::Value::Object(mut map) => map
            .remove("landmarks")
            .context("landmark object is missing a \"landmarks\" field")?,
        _ => bail!("landmark file must contain an array or an object"),
    };

    let request = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "landmarks": landmarks,
    });

    match classify_json(&request.to_string()) {
        Ok(response) => {
            println!("{}", response);
            Ok(())
        }
        Err(err) => bail!("classification failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_parsing_accepts_known_words() {
        let script = parse_script("rock, Paper,SCISSORS,none").unwrap();
        assert_eq!(
            script,
            vec![Gesture::Rock, Gesture::Paper, Gesture::Scissors, Gesture::Unrecognized]
        );
    }

    #[test]
    fn script_parsing_rejects_unknown_words() {
        assert!(parse_script("rock,lizard").is_err());
    }
}
