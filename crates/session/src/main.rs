//! Self-play CLI
//!
//! Plays the minimax bot against a chosen opponent and prints the results.

use std::env;
use std::process::ExitCode;

use castellan_session::{opponent_engine, OpponentKind, SelfPlay, SessionConfig};
use minimax_bot::MinimaxBot;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Castellan self-play");
    println!();
    println!("Usage:");
    println!("  selfplay [--config PATH] [--games N] [--depth D] [--seed S]");
    println!("           [--max-plies N] [--opponent minimax|random] [--json]");
    println!();
    println!("Flags override values read from the config file.");
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for per-ply logging.");
}

struct Options {
    config_path: Option<String>,
    games: Option<u32>,
    depth: Option<u8>,
    seed: Option<u64>,
    max_plies: Option<u32>,
    opponent: Option<OpponentKind>,
    json: bool,
    help: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        config_path: None,
        games: None,
        depth: None,
        seed: None,
        max_plies: None,
        opponent: None,
        json: false,
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "--config" | "-c" => {
                opts.config_path = Some(parse_value(flag, value)?);
                i += 1;
            }
            "--games" | "-g" => {
                opts.games = Some(parse_value(flag, value)?);
                i += 1;
            }
            "--depth" | "-d" => {
                opts.depth = Some(parse_value(flag, value)?);
                i += 1;
            }
            "--seed" => {
                opts.seed = Some(parse_value(flag, value)?);
                i += 1;
            }
            "--max-plies" => {
                opts.max_plies = Some(parse_value(flag, value)?);
                i += 1;
            }
            "--opponent" | "-o" => {
                let name = value.ok_or_else(|| format!("{flag} needs a value"))?;
                opts.opponent = Some(name.parse()?);
                i += 1;
            }
            "--json" => opts.json = true,
            "help" | "--help" | "-h" => opts.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(opts)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return ExitCode::from(2);
        }
    };
    if opts.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let mut config = match &opts.config_path {
        Some(path) => match SessionConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SessionConfig::default(),
    };
    if let Some(games) = opts.games {
        config.selfplay.games = games;
    }
    if let Some(depth) = opts.depth {
        config.bot.depth = depth;
    }
    if let Some(seed) = opts.seed {
        config.bot.seed = Some(seed);
    }
    if let Some(max_plies) = opts.max_plies {
        config.selfplay.max_plies = max_plies;
    }
    if let Some(opponent) = opts.opponent {
        config.selfplay.opponent = opponent;
    }

    let mut first = MinimaxBot::new(config.bot.clone());
    let mut second = opponent_engine(config.selfplay.opponent, &config.bot);
    let runner = SelfPlay::new(config.selfplay.clone(), config.bot.clone());

    let report = match runner.run(&mut first, second.as_mut()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if opts.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }
    ExitCode::SUCCESS
}
