//! serialview - replay a serial capture through the monitor engine
//!
//! Feeds a capture file (or stdin) to a loopback transport in fixed-size
//! fragments and prints the display lines a monitor view would paint.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing::{debug, info};

use serialview::error::Result;
use serialview::logging::init_logging;
use serialview::{Config, ConfigLoader, LoopbackTransport, MonitorSession};

/// Default fragment size in characters
const DEFAULT_CHUNK_SIZE: usize = 16;

/// Replay configuration
#[derive(Debug)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Capture file; stdin when absent
    input: Option<PathBuf>,
    /// Fragment size in characters
    chunk_size: usize,
    /// Force timestamps on
    timestamps: bool,
    /// Enable debug mode
    debug: bool,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            config_path: None,
            input: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            timestamps: false,
            debug: false,
        }
    }
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let path = args.get(i + 1).ok_or("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--chunk-size" | "-n" => {
                    let value = args.get(i + 1).ok_or("Missing chunk size")?;
                    app_args.chunk_size = match value.parse::<usize>() {
                        Ok(size) if size > 0 => size,
                        _ => return Err(format!("Invalid chunk size: {}", value).into()),
                    };
                    i += 1;
                }
                "--timestamps" | "-t" => {
                    app_args.timestamps = true;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("serialview v{}", serialview::VERSION);
                    process::exit(0);
                }
                "-" => {
                    app_args.input = None;
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                path => {
                    app_args.input = Some(PathBuf::from(path));
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("serialview - replay a serial capture through the monitor engine");
    println!();
    println!("USAGE:");
    println!("    serialview [OPTIONS] [FILE]");
    println!();
    println!("ARGS:");
    println!("    FILE                    Capture to replay (stdin if omitted or '-')");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>     Path to configuration file");
    println!("    -n, --chunk-size <N>    Fragment size in characters (default {})", DEFAULT_CHUNK_SIZE);
    println!("    -t, --timestamps        Prefix lines with their capture time");
    println!("    -d, --debug             Enable debug logging");
    println!("    -h, --help              Print this help message");
    println!("    -V, --version           Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    SERIALVIEW_CONFIG       Path to configuration file");
    println!("    SERIALVIEW_DEBUG        Enable debug logging (1 or true)");
    println!("    RUST_LOG                Set logging level (error, warn, info, debug, trace)");
}

fn load_configuration(args: &AppArgs) -> Result<Config> {
    let loader = match &args.config_path {
        Some(path) => ConfigLoader::with_explicit_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load_first()?;
    if args.timestamps {
        config.monitor.timestamps = true;
    }
    Ok(config)
}

fn read_capture(input: Option<&PathBuf>) -> Result<String> {
    let bytes = match input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split `text` into fragments of at most `size` characters
fn fragments(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_help();
        process::exit(1);
    });

    init_logging(args.debug);
    info!("Starting serialview v{}", serialview::VERSION);

    let config = load_configuration(&args)?;
    let capture = read_capture(args.input.as_ref())?;

    let transport = Arc::new(LoopbackTransport::new(config.transport.event_capacity));
    let mut session = MonitorSession::attach(transport.clone(), config.monitor);

    transport.set_connected(true);
    session.poll_events();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut printed = 0;

    for fragment in fragments(&capture, args.chunk_size) {
        transport.push_fragment(&fragment);
        session.poll_events();
        printed = flush_new_lines(&session, printed, &mut out)?;
    }

    // Lines still queued behind the first delimiter of the last fragment
    while session.on_fragment("").lines_appended > 0 {}
    flush_new_lines(&session, printed, &mut out)?;

    if !session.pending().is_empty() {
        debug!("{} bytes left without a terminating newline", session.pending().len());
    }

    session.detach();
    Ok(())
}

fn flush_new_lines(session: &MonitorSession, printed: usize, out: &mut impl Write) -> Result<usize> {
    let lines = session.lines();
    // A clear since the last flush restarts numbering
    let start = if printed > lines.len() { 0 } else { printed };
    for line in &lines[start..] {
        write!(out, "{}", line.display_text())?;
    }
    out.flush()?;
    Ok(lines.len())
}
