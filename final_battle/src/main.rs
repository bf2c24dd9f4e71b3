//! final_battle - play the wave campaign in a terminal
//!
//! ```text
//! final_battle --mode pvc
//! final_battle --mode cvc --seed 7 --json
//! final_battle --campaign config/campaign.toml --constants config/constants.toml
//! ```

mod console;

use anyhow::{Context, Result};
use battle_core::prelude::*;
use clap::{Parser, ValueEnum};
use console::{ConsoleObserver, HumanProvider};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Who sits on each side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Human heroes against the computer
    Pvc,
    /// Computer on both sides
    Cvc,
    /// Two humans sharing one terminal
    Pvp,
}

impl Mode {
    fn human_heroes(self) -> bool {
        matches!(self, Mode::Pvc | Mode::Pvp)
    }

    fn human_villains(self) -> bool {
        self == Mode::Pvp
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "final_battle",
    about = "Lead the heroes through every wave of the Uncoded One's army"
)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::Pvc)]
    mode: Mode,

    /// Seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// Campaign TOML; the built-in campaign is used when omitted
    #[arg(long)]
    campaign: Option<PathBuf>,

    /// Battle constants TOML; built-in defaults when omitted
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Hero name; asked for interactively when heroes are human
    #[arg(long)]
    name: Option<String>,

    /// Print the final battle snapshot as JSON instead of narrating
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `info` or `battle_core=debug`; overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn provider(human: bool, label: &str, seed: u64) -> Box<dyn DecisionProvider> {
    if human {
        Box::new(HumanProvider::stdio(label))
    } else {
        Box::new(AiProvider::seeded(seed).with_label(label))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut campaign = match &cli.campaign {
        Some(path) => Campaign::load(path)
            .with_context(|| format!("loading campaign from {}", path.display()))?,
        None => Campaign::the_final_battle(),
    };
    let constants = match &cli.constants {
        Some(path) => BattleConstants::load_from_path(path)
            .with_context(|| format!("loading constants from {}", path.display()))?,
        None => BattleConstants::default(),
    };

    let name = match cli.name {
        Some(name) => Some(name),
        None if cli.mode.human_heroes() => {
            console::ask_name(&mut io::stdin(), &mut io::stdout())
                .context("reading the hero name")?
        }
        None => None,
    };
    if let Some(name) = name {
        campaign = campaign.with_hero_name(name);
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, mode = ?cli.mode, waves = campaign.wave_count(), "starting battle");

    let heroes = provider(cli.mode.human_heroes(), "heroes", seed.wrapping_add(1));
    let villains = provider(cli.mode.human_villains(), "villains", seed.wrapping_add(2));
    let mut battle = Battle::new(campaign, constants, heroes, villains, SeededRandom::new(seed));
    if !cli.json {
        battle = battle.with_observer(Box::new(ConsoleObserver::stdout()));
    }

    let result = battle.run().context("battle aborted")?;
    info!(?result, wave = battle.wave(), "battle finished");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&battle.snapshot())?);
    }
    Ok(())
}
