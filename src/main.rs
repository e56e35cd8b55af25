use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use design_patterns::config::should_use_colors;
use design_patterns::{DemoConfig, DemoContext, DemoError, Driver, Pattern};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "design-patterns")]
#[command(about = "Runs the design pattern examples and prints what they do", long_about = None)]
struct Cli {
    /// TOML file with demo settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only run these patterns (slug or number, comma separated)
    #[arg(short, long, value_delimiter = ',')]
    only: Vec<String>,

    /// List the available patterns and exit
    #[arg(short, long)]
    list: bool,

    /// Disable coloured headings
    #[arg(long)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the config file (if any) and applies the command-line overrides.
fn resolve_config(cli: &Cli, env_allows_color: bool) -> Result<DemoConfig, DemoError> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    if !cli.only.is_empty() {
        config.patterns = cli
            .only
            .iter()
            .map(|name| name.parse::<Pattern>())
            .collect::<Result<_, _>>()?;
    }
    if cli.no_color || !env_allows_color {
        config.color = false;
    }
    Ok(config)
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), DemoError> {
    let config = resolve_config(cli, should_use_colors())?;
    let driver = Driver::new(config.color);

    if cli.list {
        return driver.list(out);
    }

    let mut ctx = DemoContext::new(&config);
    driver.run(&config.selected(), &mut ctx, out)
}

fn exit_code(result: Result<(), DemoError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    exit_code(run(&cli, &mut stdout))
}
