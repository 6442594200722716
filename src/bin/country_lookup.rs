use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use country_lookup::controller::{self, DEBOUNCE_DELAY};
use country_lookup::render::{self, NoticeLevel, Notifier};
use country_lookup::{Client, DisplaySurface};
use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "country-lookup",
    version,
    about = "Look up countries by name via the REST Countries API"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a single name and print the rendered result.
    Lookup(LookupArgs),
    /// Read input events from stdin (one per line), debounced, until EOF.
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// Full or partial country name (e.g. "poland", "united").
    name: String,
}

#[derive(Args, Debug)]
struct WatchArgs {
    /// Quiet window in milliseconds before a burst of input fires a lookup.
    #[arg(long, default_value_t = DEBOUNCE_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

/// Prints transient notices to stderr with a level tag.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => eprintln!("info: {message}"),
            NoticeLevel::Failure => eprintln!("failure: {message}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Lookup(args) => cmd_lookup(args),
        Command::Watch(args) => cmd_watch(args),
    }
}

fn cmd_lookup(args: LookupArgs) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("country name must not be empty");
    }

    let client = Client::default();
    let mut surface = DisplaySurface::new();
    let mut notifier = TermNotifier;
    render::process(client.fetch_countries(name), &mut surface, &mut notifier);
    print_surface(&surface);
    // Lookup failures are user notices, not process errors.
    Ok(())
}

fn cmd_watch(args: WatchArgs) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel();
    let (update_tx, update_rx) = mpsc::channel();

    let client = Client::default();
    let quiet = Duration::from_millis(args.delay_ms);
    thread::spawn(move || {
        controller::run(event_rx, update_tx, quiet, move |query| {
            client.fetch_countries(query)
        });
    });

    // One stdin line = one input-change event carrying the field value.
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut surface = DisplaySurface::new();
    let mut notifier = TermNotifier;
    for update in update_rx {
        controller::apply(update, &mut surface, &mut notifier);
        print_surface(&surface);
    }
    Ok(())
}

fn print_surface(surface: &DisplaySurface) {
    if !surface.list.is_empty() {
        print!("{}", surface.list);
    }
    if !surface.detail.is_empty() {
        print!("{}", surface.detail);
    }
}
