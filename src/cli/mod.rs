use crate::Environment;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

/// Main CLI structure for the deployenv application.
///
/// Parses command-line arguments and delegates to the library's parser.
#[derive(Parser)]
#[command(name = "deployenv")]
#[command(about = "Normalize and inspect deployment environment names", long_about = None)]
#[command(version)]
struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the deployenv CLI.
#[derive(Subcommand)]
enum Commands {
    /// Parse free-form text into an environment
    Parse {
        /// Text to parse (e.g. "production", "'dev'", " Staging ")
        text: String,
        /// Fail on unrecognized input instead of falling back to PROD
        #[arg(long)]
        strict: bool,
    },
    /// Show how an exact canonical value is classified
    Describe {
        /// Canonical text, used verbatim (e.g. PROD, STAGE, DEV)
        value: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main entry point for the deployenv CLI application.
///
/// # Returns
///
/// * `Ok(())` - If the command executed successfully
/// * `Err` - If strict parsing rejected the input
pub fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { text, strict } => {
            let env = if strict {
                Environment::parse_strict(&text)
                    .wrap_err_with(|| format!("Failed to parse environment from '{}'", text))?
            } else {
                Environment::parse(&text)
            };
            println!("{} ({})", env.as_str(), env.label());
        }
        Commands::Describe { value } => {
            let env = Environment::from_canonical(value);
            println!("canonical:   {}", env.as_str());
            println!("label:       {}", env.label());
            println!("production:  {}", env.is_production());
            println!("staging:     {}", env.is_staging());
            println!("development: {}", env.is_development());
        }
    }

    Ok(())
}
