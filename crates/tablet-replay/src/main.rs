//! `tablet-replay [--seed N] [LOG]`
//!
//! Reads a JSON-lines pointer log from `LOG` (stdin when absent), replays it
//! through a canvas session and prints the resulting tablets as JSON.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use tablet_replay::{DEFAULT_SEED, parse_log, render_report, replay};

struct Args {
    seed: u64,
    path: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: DEFAULT_SEED,
        path: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value
                    .parse()
                    .map_err(|e| format!("Invalid seed {value:?}: {e}"))?;
            }
            _ if args.path.is_none() => args.path = Some(arg),
            _ => return Err(format!("Unexpected argument {arg:?}")),
        }
    }
    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| format!("{p}: {e}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(buf)
        }
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let input = read_input(args.path.as_deref())?;
    let log = parse_log(&input);
    for (line, msg) in &log.skipped {
        eprintln!("SKIP line {line}: {msg}");
    }
    let session = replay(&log.events, args.seed);
    println!("{}", render_report(&session, &log)?);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("tablet-replay: {e}");
        process::exit(1);
    }
}
