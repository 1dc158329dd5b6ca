use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use neovale::{Game, SimConfig, WorldCatalogs, WorldEvent};

struct Options {
    config: SimConfig,
    assets_dir: Option<PathBuf>,
}

fn main() {
    println!("Initializing Neovale...");
    let options = parse_options(env::args().collect());

    let catalogs = match &options.assets_dir {
        Some(dir) => match WorldCatalogs::load_from_dir(dir) {
            Ok(catalogs) => catalogs,
            Err(err) => {
                eprintln!("Failed to load catalogs from {}: {}", dir.display(), err);
                std::process::exit(1);
            }
        },
        None => WorldCatalogs::builtin(),
    };

    let mut game = match Game::new(options.config, &catalogs) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to start world: {}", err);
            std::process::exit(1);
        }
    };

    game.subscribe(|event| {
        if let WorldEvent::Log(entry) = event {
            println!("[{}] {}", entry.time, entry.message);
        }
    });
    game.drain_events();

    println!("World ready. Type 'help' for commands.");
    repl(&mut game, options.config.tick_rate_ms);
}

fn repl(game: &mut Game, tick_rate_ms: u64) {
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => continue,
        };

        match command {
            "step" => {
                let count = parts.next().and_then(|n| n.parse().ok()).unwrap_or(1);
                for _ in 0..count {
                    game.tick();
                }
            }
            "run" => {
                // Timer-driven mode: one simulated hour per tick_rate_ms.
                let count: u64 = parts.next().and_then(|n| n.parse().ok()).unwrap_or(24);
                for _ in 0..count {
                    game.tick();
                    thread::sleep(Duration::from_millis(tick_rate_ms));
                }
            }
            "pause" => {
                game.toggle_pause();
                println!(
                    "{}",
                    if game.is_paused() { "Paused." } else { "Resumed." }
                );
            }
            "act" => match parts.next() {
                Some(action_id) => game.act(action_id),
                None => println!("Usage: act <public_savior|tyrant_takeover|ghost_influence>"),
            },
            "status" => print_status(game),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }
}

fn print_status(game: &Game) {
    let snapshot = game.snapshot();
    println!(
        "{}{}",
        snapshot.time,
        if snapshot.paused { " [paused]" } else { "" }
    );
    println!(
        "{} | {} credits | heat {:.0}% | alignment {:?}",
        snapshot.player.name,
        snapshot.player.credits,
        snapshot.player.heat * 100.0,
        snapshot.player.alignment
    );

    println!("Districts:");
    for district in &snapshot.districts {
        println!(
            "  {:<16} crime {:>3.0}%  drones {:>3.0}%  unrest {:>3.0}%  safety {:>3.0}%  order {:>3.0}%",
            district.name,
            district.crime * 100.0,
            district.drones * 100.0,
            district.unrest * 100.0,
            district.safety * 100.0,
            district.visual_score * 100.0
        );
    }

    println!("Factions:");
    for faction in &snapshot.factions {
        println!(
            "  {:<16} {:<5?} power {:>3.0}%",
            faction.name,
            faction.kind,
            faction.power * 100.0
        );
    }

    if snapshot.active.is_empty() {
        println!("No activities on the board yet.");
    } else {
        println!("Activities:");
        for activity in &snapshot.active {
            println!("  [{}] {} - {}", activity.district_id, activity.name, activity.desc);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  step [n]   advance n simulated hours immediately (default 1)");
    println!("  run [n]    advance n hours on the accelerated timer (default 24)");
    println!("  pause      toggle tick suppression");
    println!("  act <id>   commit to a stance: public_savior, tyrant_takeover, ghost_influence");
    println!("  status     print the current world snapshot");
    println!("  quit       exit");
}

fn parse_options(args: Vec<String>) -> Options {
    let mut config = SimConfig::default();
    let mut assets_dir = None;

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(value) = iter.next().and_then(|v| v.parse().ok()) {
                    config.seed = value;
                } else {
                    eprintln!("--seed expects an integer");
                }
            }
            "--rate" => {
                if let Some(value) = iter.next().and_then(|v| v.parse().ok()) {
                    config.tick_rate_ms = value;
                } else {
                    eprintln!("--rate expects milliseconds per hour");
                }
            }
            "--assets" => match iter.next() {
                Some(value) => assets_dir = Some(PathBuf::from(value)),
                None => eprintln!("--assets expects a directory"),
            },
            other => eprintln!("Ignoring unknown argument '{}'", other),
        }
    }

    Options { config, assets_dir }
}
