//! Mathhammer - Entry Point
//!
//! Reads one attack profile from flags or a JSON file, evaluates it against
//! the selected targets and prints the expected damage.

use clap::{Parser, ValueEnum};
use mathhammer::core::config::CalculatorConfig;
use mathhammer::core::error::Result;
use mathhammer::report;
use mathhammer::{Calculator, DefenderCatalog, RawAttackInput};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Expected wounds and models destroyed for one weapon profile
#[derive(Parser, Debug)]
#[command(name = "mathhammer")]
#[command(about = "Compute expected damage of an attack against target profiles")]
struct Args {
    /// Number of attacks or shots (fractions allowed for averages)
    #[arg(long)]
    attacks: Option<String>,

    /// Roll required to hit (1-6)
    #[arg(long)]
    to_hit: Option<String>,

    /// Weapon strength
    #[arg(long)]
    strength: Option<String>,

    /// Armor penetration
    #[arg(long)]
    ap: Option<String>,

    /// Damage per unsaved wound (fractions allowed for averages)
    #[arg(long)]
    damage: Option<String>,

    /// Hit reroll policy: none, ones or all
    #[arg(long, default_value = "none")]
    reroll_hit: String,

    /// Wound reroll policy: none, ones or all
    #[arg(long, default_value = "none")]
    reroll_wound: String,

    /// Target profile name; repeat for several targets
    #[arg(long = "target", short = 't')]
    targets: Vec<String>,

    /// Evaluate against every profile in the catalog
    #[arg(long)]
    all_targets: bool,

    /// Read the whole attack from a JSON object instead ("-" for stdin)
    #[arg(
        long,
        conflicts_with_all = [
            "attacks", "to_hit", "strength", "ap", "damage",
            "reroll_hit", "reroll_wound", "targets", "all_targets",
        ]
    )]
    input: Option<PathBuf>,

    /// TOML file of [[defender]] profiles replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Decimal places in the output
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Print the available target profiles and exit
    #[arg(long)]
    list_targets: bool,
}

impl Args {
    /// Flags left out become absent fields, just like an unfilled form
    fn raw_input(&self, catalog: &DefenderCatalog) -> RawAttackInput {
        let enemies = if self.all_targets {
            Some(catalog.names().map(str::to_string).collect())
        } else if self.targets.is_empty() {
            None
        } else {
            Some(self.targets.clone())
        };

        RawAttackInput {
            attacks: self.attacks.clone().map(Into::into),
            to_hit: self.to_hit.clone().map(Into::into),
            strength: self.strength.clone().map(Into::into),
            ap: self.ap.clone().map(Into::into),
            damage: self.damage.clone().map(Into::into),
            reroll_hit: Some(self.reroll_hit.clone()),
            reroll_wound: Some(self.reroll_wound.clone()),
            enemies,
        }
    }
}

fn read_input(path: &Path) -> Result<RawAttackInput> {
    let json = if path == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)?
    };
    RawAttackInput::from_json(&json)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mathhammer=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = CalculatorConfig::default().with_precision(args.precision);
    if let Some(path) = &args.catalog {
        config = config.with_catalog_path(path);
    }
    let calculator = Calculator::from_config(config)?;
    tracing::info!("{} target profiles available", calculator.catalog().len());

    if args.list_targets {
        println!("{}", report::catalog_listing(calculator.catalog()));
        return Ok(());
    }

    let input = match &args.input {
        Some(path) => read_input(path)?,
        None => args.raw_input(calculator.catalog()),
    };

    let evaluation = calculator.evaluate(&input)?;
    let output = match args.format {
        OutputFormat::Text => calculator.render(&evaluation),
        OutputFormat::Json => report::to_json(&evaluation, args.precision)?,
    };
    println!("{output}");

    Ok(())
}
