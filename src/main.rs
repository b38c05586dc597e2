//! YantraSim - Toy robot simulator CLI
//!
//! Reads robot commands one per line, either interactively from stdin
//! (until `exit`) or from a file in batch mode, and prints REPORT and
//! TRAVEL output. An error on one line never aborts the session.

use std::fs;
use std::io::{self, BufRead, Write};

use yantra_sim::{Cell, Config, Reply, Simulator};

struct Args {
    config_path: Option<String>,
    input_file: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args {
        config_path: None,
        input_file: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    result.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--input-file" | "-f" => {
                if i + 1 < args.len() {
                    result.input_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!("yantra-sim - toy robot simulator on a bounded grid");
    println!();
    println!("USAGE:");
    println!("    yantra-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>        Configuration file (default: yantra-sim.toml)");
    println!("    -f, --input-file <FILE>    Run commands from a file instead of stdin");
    println!("    -h, --help                 Print help information");
    println!();
    println!("COMMANDS:");
    println!("    PLACE X,Y,HEADING    Place the robot (HEADING: NORTH, EAST, SOUTH, WEST)");
    println!("    MOVE                 Step one cell forward (ignored at edges and potholes)");
    println!("    LEFT / RIGHT         Rotate 90 degrees");
    println!("    REPORT               Print the current position and heading");
    println!("    TRAVEL X,Y           Print a route from the current cell to (X, Y)");
    println!();
    println!("    In interactive mode, `exit` ends the session.");
}

fn load_config(args: &Args) -> Config {
    match &args.config_path {
        Some(path) => match Config::from_file(path) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path);
                cfg
            }
            Err(e) => {
                log::warn!("Failed to load config {}: {}", path, e);
                Config::default()
            }
        },
        None => {
            // Try default paths
            for path in &["yantra-sim.toml", "/etc/yantra-sim.toml"] {
                if let Ok(cfg) = Config::from_file(path) {
                    log::info!("Loaded config from {}", path);
                    return cfg;
                }
            }
            Config::default()
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let config = load_config(&args);

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &Config) -> yantra_sim::Result<()> {
    let grid = config.grid.build()?;
    log::info!("yantra-sim starting");
    log::info!(
        "  Table: {}x{} cells, {} potholes",
        grid.width(),
        grid.height(),
        grid.pothole_count()
    );

    let mut simulator = Simulator::new(grid);

    match &args.input_file {
        Some(path) => {
            log::info!("  Input: {}", path);
            let contents = fs::read_to_string(path)?;
            for line in contents.lines() {
                dispatch(&mut simulator, line);
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().eq_ignore_ascii_case("exit") {
                    break;
                }
                dispatch(&mut simulator, &line);
            }
        }
    }

    Ok(())
}

/// Run one line and print whatever it yields.
///
/// Command errors are printed and the session continues; each line is
/// independent. Blank lines are skipped.
fn dispatch(simulator: &mut Simulator, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    match simulator.execute_line(line) {
        Ok(Reply::Silent) => {}
        Ok(Reply::Report { x, y, heading }) => println!("{},{},{}", x, y, heading.as_str()),
        Ok(Reply::Path(path)) => println!("path: [{}]", format_path(&path)),
        Err(e) => println!("{}", e),
    }
}

fn format_path(path: &[Cell]) -> String {
    path.iter().map(|cell| cell.to_string()).collect::<Vec<_>>().join(", ")
}
