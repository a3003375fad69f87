mod error_formatter;
mod formatter;
mod interactive;
#[cfg(feature = "server")]
mod server;
mod store;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use error_formatter::CalculationError;
use formatter::Formatter;
use pacecalc::samples::{samples, SAMPLE_EXPRESSIONS};
use pacecalc::{tokenize, UnitSystem};
use std::path::{Path, PathBuf};
use store::Store;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PACECALC_LOG";
const DEFAULT_LOG_FILTER: &str = "pacecalc=warn";
const SERVER_LOG_FILTER: &str = "pacecalc=info,tower_http=info";

#[derive(Parser)]
#[command(name = "pacecalc")]
#[command(about = "Pace, speed, distance and duration calculator for runners.")]
#[command(
    long_about = "Pacecalc evaluates short running expressions such as '5km in 25min', '4:00 for 10min' or 'M in 3:30h'.\nThe CLI evaluates expressions, keeps a history of saved results, and can run as an HTTP server."
)]
#[command(version)]
struct Cli {
    /// Directory holding the saved results and unit preference
    #[arg(short = 'd', long = "dir", default_value = ".", global = true)]
    workdir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression (try: pacecalc calc 5km in 25min)
    ///
    /// Reads the expression, shows every token it recognised and the computed result.
    /// Whitespace is optional: '4:00 for 10min' and '4:00for10min' are the same.
    Calc {
        /// The expression; several arguments are joined with spaces
        ///
        /// Examples:
        ///   5km in 25min       - pace needed for 5km in 25 minutes
        ///   4:00 for 10min     - distance covered at 4:00 per km
        ///   HM at 4:30         - time for a half marathon
        ///   15km/h             - speed as pace
        #[arg(required = true, value_name = "EXPR")]
        expression: Vec<String>,
        /// Unit system for unlabelled paces and output (metric or imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,
        /// Output the result only (for piping to other tools)
        #[arg(short, long, conflicts_with = "json")]
        raw: bool,
        /// Output the calculation as plain-data JSON
        #[arg(long)]
        json: bool,
        /// Save a successful calculation to the history
        #[arg(short, long)]
        save: bool,
    },
    /// List saved calculations, newest first
    History {
        /// Unit system to render in (metric or imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,
    },
    /// Delete a saved calculation by its number in 'history'
    Delete {
        /// Number shown by 'history'
        index: usize,
    },
    /// Show or set the preferred unit system
    Units {
        /// metric or imperial; omit to show the current preference
        system: Option<UnitSystem>,
    },
    /// Show example expressions and their results
    Samples {
        /// Unit system to render in (metric or imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,
    },
    /// Evaluate expressions at a prompt
    ///
    /// End a line with '!' to save it. An empty line or Esc quits.
    Interactive {
        /// Unit system for unlabelled paces and output (metric or imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: POST /tokenize with {input, units?}, GET /samples, GET /health
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(match cli.command {
        Commands::Server { .. } => SERVER_LOG_FILTER,
        _ => DEFAULT_LOG_FILTER,
    });

    let workdir = cli.workdir.as_path();
    let result = match &cli.command {
        Commands::Calc {
            expression,
            units,
            raw,
            json,
            save,
        } => calc_command(workdir, &expression.join(" "), *units, *raw, *json, *save),
        Commands::History { units } => history_command(workdir, *units),
        Commands::Delete { index } => delete_command(workdir, *index),
        Commands::Units { system } => units_command(workdir, *system),
        Commands::Samples { units } => samples_command(workdir, *units),
        Commands::Interactive { units } => interactive_command(workdir, *units),
        Commands::Server { host, port } => server_command(workdir, host, *port),
    };

    if let Err(e) = result {
        if let Some(calculation_err) = e.downcast_ref::<CalculationError>() {
            eprintln!("{}", error_formatter::format_error(calculation_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// The `--units` flag wins over the stored preference
fn active_units(flag: Option<UnitSystem>, store: &Store) -> UnitSystem {
    flag.unwrap_or_else(|| store.units())
}

fn calc_command(
    workdir: &Path,
    input: &str,
    units: Option<UnitSystem>,
    raw: bool,
    json: bool,
    save: bool,
) -> Result<()> {
    let mut store = Store::open(workdir);
    let units = active_units(units, &store);
    let calculation = tokenize(input, units);
    debug!(input, %units, ok = calculation.is_ok(), "evaluated expression");

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation.to_plain())?);
    } else {
        print!("{}", Formatter::default().format_calculation(&calculation, units, raw));
    }

    if calculation.is_error() {
        return Err(CalculationError {
            input: input.to_string(),
            calculation,
        }
        .into());
    }

    if save {
        if calculation.result().is_none() {
            bail!("Nothing to save: '{}' has no result", input);
        }
        store.push(&calculation)?;
        store.save()?;
        if !raw && !json {
            println!("Saved as #1");
        }
    }

    Ok(())
}

fn history_command(workdir: &Path, units: Option<UnitSystem>) -> Result<()> {
    let store = Store::open(workdir);
    let units = active_units(units, &store);
    print!(
        "{}",
        Formatter::default().format_history(&store.calculations(), units)
    );
    Ok(())
}

fn delete_command(workdir: &Path, index: usize) -> Result<()> {
    let mut store = Store::open(workdir);
    let removed = store.remove(index)?;
    store.save()?;
    println!("Deleted #{}: {}", index, removed.to_input(store.units()));
    Ok(())
}

fn units_command(workdir: &Path, system: Option<UnitSystem>) -> Result<()> {
    let mut store = Store::open(workdir);
    match system {
        Some(units) => {
            store.set_units(units);
            store.save()?;
            println!("Unit system set to {}", units);
        }
        None => println!("{}", store.units()),
    }
    Ok(())
}

fn samples_command(workdir: &Path, units: Option<UnitSystem>) -> Result<()> {
    let store = Store::open(workdir);
    let units = active_units(units, &store);
    let samples: Vec<_> = SAMPLE_EXPRESSIONS.into_iter().zip(samples(units)).collect();
    print!("{}", Formatter::default().format_samples(&samples, units));
    Ok(())
}

fn interactive_command(workdir: &Path, units: Option<UnitSystem>) -> Result<()> {
    let mut store = Store::open(workdir);
    let units = active_units(units, &store);
    interactive::run_interactive(&mut store, units)
}

#[cfg(feature = "server")]
fn server_command(workdir: &Path, host: &str, port: u16) -> Result<()> {
    let units = Store::open(workdir).units();
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::http::start_server(units, host, port))
}

#[cfg(not(feature = "server"))]
fn server_command(_workdir: &Path, _host: &str, _port: u16) -> Result<()> {
    bail!("Server feature not enabled. Recompile with --features server")
}
