use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use library_lending::{
    Command, LendingService, LibraryConfig, Outcome, Report, TracingObserver, command::HELP,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for the library console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed JSON with books, patrons and checkouts (defaults to the sample library)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty library instead of the sample one
    #[arg(long, conflicts_with = "config")]
    empty: bool,

    /// Read commands from a file instead of standard input
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print the final state as JSON on exit
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match (&args.config, args.empty) {
        (Some(path), _) => LibraryConfig::from_path(path)
            .with_context(|| format!("loading seed data from {}", path.display()))?,
        (None, true) => LibraryConfig::empty(),
        (None, false) => LibraryConfig::default(),
    };

    let mut service = LendingService::new();
    service.register_observer(Box::new(TracingObserver));
    service.seed(&config);

    let interactive = args.script.is_none() && io::stdin().is_terminal();
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    if interactive {
        println!("{}", format!("{} console", config.name).green().bold());
        println!("{HELP}");
    }
    run(input, &mut service, &config.name, interactive)?;

    if args.json {
        println!("{}", Report::capture(&config.name, &service).to_json()?);
    }
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "library_lending=debug" } else { "library_lending=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Read, execute and render commands until `exit` or end of input
fn run(
    input: Box<dyn BufRead>,
    service: &mut LendingService,
    library: &str,
    interactive: bool,
) -> Result<()> {
    let mut stdout = io::stdout();
    if interactive {
        prompt(&mut stdout)?;
    }
    for line in input.lines() {
        let line = line.context("reading command")?;
        if !line.trim().is_empty() || interactive {
            let today = chrono::Local::now().format("%Y-%m-%d").to_string();
            match Command::parse(&line) {
                Ok(command) => {
                    if render(command.execute(service, library, &today)) {
                        break;
                    }
                }
                Err(error) => println!("{}", error.to_string().red()),
            }
        }
        if interactive {
            prompt(&mut stdout)?;
        }
    }
    Ok(())
}

/// Print the menu prompt
fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("\nEnter your choice: ");
    stdout.flush().context("flushing prompt")
}

/// Print an outcome; returns true when the session should end
fn render(outcome: Outcome) -> bool {
    match outcome {
        Outcome::Listing { heading, items, empty } => {
            println!("{}", heading.bold());
            if items.is_empty() {
                println!("{empty}");
            }
            for item in items {
                println!("{item}");
            }
        }
        Outcome::Accepted(message) => println!("{}", message.green()),
        Outcome::Refused(error) => println!("{}", error.to_string().red()),
        Outcome::Text(text) => println!("{text}"),
        Outcome::Exit => {
            println!("Exiting the program. Goodbye!");
            return true;
        }
    }
    false
}
