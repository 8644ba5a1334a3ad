//! CLI tool for gridview - renders a table snapshot's body as JSON
//!
//! Usage:
//!   gridview_cli <snapshot.json>                   # Main pane to stdout
//!   gridview_cli <snapshot.json> --pane left       # A fixed pane
//!   gridview_cli <snapshot.json> --header          # Header rows instead
//!   gridview_cli <snapshot.json> -o out.json -v    # To a file, debug logs

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridview::{PaneSide, TableState};
use log::SetLoggerError;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

const USAGE: &str =
    "Usage: gridview_cli <snapshot.json> [--pane main|left|right] [--header] [-o output.json] [-v]";

struct Args {
    input: String,
    pane: PaneSide,
    header: bool,
    output: Option<String>,
    verbose: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut input = None;
    let mut pane = PaneSide::Main;
    let mut header = false;
    let mut output = None;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pane" => {
                let name = args.next().ok_or("--pane needs a value")?;
                pane = PaneSide::parse(&name).map_err(|e| e.to_string())?;
            }
            "--header" => header = true,
            "-o" => output = Some(args.next().ok_or("-o needs a path")?),
            "-v" | "--verbose" => verbose = true,
            other if input.is_none() => input = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(Args {
        input: input.ok_or("missing snapshot path")?,
        pane,
        header,
        output,
        verbose,
    })
}

/// Install the stderr logger. Fails when a logger is already installed.
fn init_logging(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let json = match fs::read_to_string(&args.input) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let state = match TableState::from_json(&json) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading snapshot: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!(
        "loaded {} rows, {} columns",
        state.rows().len(),
        state.columns().len()
    );

    let rendered = if args.header {
        serde_json::to_string_pretty(&state.header_rows())
    } else {
        serde_json::to_string_pretty(&state.render(args.pane))
    };
    let rendered = match rendered {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &rendered) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{rendered}") {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
        }
    }
}
