//! `smartpad` binary: argument parsing, logging, dictionary/config loading, then the REPL.

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use log::{info, warn};
use smartpad::config::Config;
use smartpad::dictionary::Dictionary;
use smartpad::repl::Repl;
use smartpad::session::EditorSession;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Program entry point.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SMARTPAD_LOG", "warn"))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

/// Parsed command line.
#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    file: Option<PathBuf>,
}

fn print_help() {
    println!("smartpad: text editing session with autocomplete and spell-check");
    println!();
    println!("USAGE:");
    println!("    smartpad [OPTIONS] [FILE]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config PATH       Config file (default: ./smartpad.toml)");
    println!("    -d, --dictionary PATH   Dictionary word file (overrides config)");
    println!("    -h, --help              Show this help message");
    println!("    -v, --version           Show version information");
    println!();
    println!("Logging: set SMARTPAD_LOG=info|debug.");
}

/// Simple argument parsing. `Ok(None)` means "already handled, exit".
fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    let mut it = args.iter().skip(1);

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            "-v" | "--version" => {
                println!("smartpad v{}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "-c" | "--config" => {
                let v = it.next().with_context(|| format!("'{arg}' needs a path"))?;
                parsed.config = Some(PathBuf::from(v));
            }
            "-d" | "--dictionary" => {
                let v = it.next().with_context(|| format!("'{arg}' needs a path"))?;
                parsed.dictionary = Some(PathBuf::from(v));
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown flag '{flag}'");
                eprintln!("Try 'smartpad --help' for more information.");
                std::process::exit(1);
            }
            path => {
                parsed.file = Some(PathBuf::from(path));
            }
        }
    }
    Ok(Some(parsed))
}

/// Load FILE given on the command line. A file that cannot be read is reported and the
/// session starts empty; a missing one becomes the save target.
fn open_startup_file(
    session: &mut EditorSession,
    path: PathBuf,
    out: &mut dyn Write,
) -> io::Result<()> {
    if !path.exists() {
        info!("{} does not exist yet; it will be created on save", path.display());
        session.set_file_path(path);
        return Ok(());
    }
    match session.open_path(&path) {
        Ok(()) => writeln!(out, "Opened: {}", path.display()),
        Err(e) => {
            warn!("{e:#}");
            writeln!(out, "Error: {e:#}")?;
            writeln!(out, "Starting with an empty document.")
        }
    }
}

/// Runs the editor:
/// - parses command line arguments
/// - loads config and dictionary (a missing dictionary is reported, not fatal)
/// - opens FILE if it exists
/// - runs the REPL on stdin/stdout
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(args) = parse_args(&args)? else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover_default()?,
    };
    let dict_path = args.dictionary.unwrap_or_else(|| config.dictionary.clone());

    let dict = match Dictionary::load_file(&dict_path, config.index.buckets) {
        Ok(d) => {
            println!("Dictionary loaded: {} words.", d.trie().len());
            d
        }
        Err(e) => {
            warn!("{e:#}");
            println!("Cannot open dictionary file {}.", dict_path.display());
            Dictionary::empty(config.index.buckets)
        }
    };

    let mut session = EditorSession::new(Arc::new(dict), config.suggest.clone());
    if let Some(path) = args.file {
        open_startup_file(&mut session, path, &mut io::stdout())?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let color = config.color && stdout.is_tty();
    {
        let mut repl = Repl::new(session, &mut input, &mut stdout, color);
        repl.run()?;
    }
    stdout.flush()?;
    Ok(())
}
