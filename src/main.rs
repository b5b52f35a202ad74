use clap::{Parser, Subcommand, ValueEnum};
use credform::config::FormConfig;
use credform::error::{FormError, Result};
use credform::replay;
use credform::{FieldName, FieldValidationStore};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "credform", about = "Credential form validation state machine")]
struct Cli {
    /// Form configuration (YAML, or JSON by extension).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply a list of form events and print effects and the final state.
    Replay {
        script: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Evaluate one field rule against a value.
    Check {
        field: String,
        value: String,
        /// Password value for confirmPassword checks.
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Print the effective configuration.
    Defaults,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };

    match cli.command {
        Command::Replay { script, format } => {
            let events = replay::load_events(&script)?;
            let mut store = FieldValidationStore::from_config(&config)?;
            let report = replay::replay(&mut store, events);
            println!("{}", render(&report, format)?);
        }
        Command::Check {
            field,
            value,
            password,
        } => {
            let field: FieldName = field.parse()?;
            let mut store = FieldValidationStore::from_config(&config)?;
            store.on_field_change(FieldName::Password, password);
            let outcome = store.validate(field, &value);
            println!("{}", render(&outcome, Format::Json)?);
        }
        Command::Defaults => {
            print!("{}", config.to_yaml()?);
        }
    }
    Ok(())
}

fn render<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(value).map_err(|e| FormError::Output(e.to_string()))
        }
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| FormError::Output(e.to_string())),
    }
}
