//! vortexmath - digit interaction calculator
//!
//! Usage:
//!   vortexmath interaction 3 9
//!   vortexmath table --json
//!   vortexmath gateways --kind solution --challenge 4

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vortexmath::config::{expand_tilde, VortexConfig};
use vortexmath::format::{self, FormatOptions};
use vortexmath_core::{interaction_with, table, InteractionMatrix};
use vortexmath_gateway::{generate, generate_for, Challenge, RecordKind};

#[derive(Parser)]
#[command(name = "vortexmath", about = "Digit interaction calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to config file (TOML). Default: ~/.vortexmath/vortexmath.toml
    #[arg(long, global = true)]
    config: Option<String>,

    /// Dump default config as TOML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Print version and exit
    #[arg(long = "version")]
    show_version: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Interaction record for two digits
    Interaction {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        /// Emit JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// The digit consciousness table
    Table {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Vortex sequence for one digit
    Sequence {
        #[arg(allow_negative_numbers = true)]
        digit: i64,
    },
    /// 10×10 resonance grid
    Matrix,
    /// Possibility/solution records (challenge × gateway)
    Gateways {
        /// possibility | solution
        #[arg(long, default_value = "possibility")]
        kind: RecordKind,
        /// Restrict to one challenge (1-9)
        #[arg(long)]
        challenge: Option<u8>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.show_version {
        println!("vortexmath {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if cli.dump_config {
        println!("{}", VortexConfig::default().to_toml());
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vortexmath=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.config {
        Some(ref p) => VortexConfig::load_strict(&expand_tilde(p))?,
        None => VortexConfig::load(&VortexConfig::default_path()),
    };
    let opts = FormatOptions::from(&config);

    let Some(command) = cli.command else {
        anyhow::bail!("no command given (try --help)");
    };

    let output = match command {
        Command::Interaction { a, b, json } => {
            let policy = config.input.policy;
            let da = policy.resolve(a).with_context(|| format!("first digit {}", a))?;
            let db = policy.resolve(b).with_context(|| format!("second digit {}", b))?;
            tracing::debug!(%da, %db, ?policy, "resolved digits");
            let record = interaction_with(da, db, config.frequency.mode);
            if json || config.output.json {
                format::to_json(&record)?
            } else {
                format::format_interaction(&record, &opts)
            }
        }
        Command::Table { json } => {
            if json || config.output.json {
                format::to_json(table::table())?
            } else {
                format::format_table()
            }
        }
        Command::Sequence { digit } => {
            let d = config.input.policy.resolve(digit)?;
            format::format_sequence(d)
        }
        Command::Matrix => format::format_matrix(InteractionMatrix::global()),
        Command::Gateways {
            kind,
            challenge,
            json,
        } => {
            let records = match challenge {
                Some(index) => generate_for(kind, Challenge::from_index(index)?),
                None => generate(kind),
            };
            if json || config.output.json {
                format::to_json(&records)?
            } else {
                format::format_records(&records)
            }
        }
    };

    print!("{}", output);
    Ok(())
}
