//! Action HUD - command line front end
//!
//! Reads a character snapshot (JSON), builds the action tree and prints it
//! as JSON. Settings, registry and the rest of the build context can be
//! supplied as files; anything omitted falls back to the shipped defaults.

use std::path::PathBuf;

use action_hud::core::error::Result;
use action_hud::rules::RulesTables;
use action_hud::{ActionTree, ActionTreeBuilder, ActorSnapshot, CategoryRegistry, HudContext, HudSettings};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Build the token action HUD for a character snapshot
#[derive(Parser, Debug)]
#[command(name = "action-hud")]
#[command(about = "Build the token action HUD tree for a Pathfinder 1e character snapshot")]
struct Args {
    /// Character snapshot (JSON)
    snapshot: PathBuf,

    /// Build context: user, encounter, translations, rules (JSON)
    #[arg(long)]
    context: Option<PathBuf>,

    /// HUD settings (TOML), replaces the settings in the context
    #[arg(long, default_value = "data/hud_settings.toml")]
    settings: PathBuf,

    /// Rules tables (TOML), replaces the rules in the context
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Category registry (TOML); the standard registry when omitted
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Override the item layout (onlyItems, onlyActions, categorized)
    #[arg(long)]
    layout: Option<String>,

    /// Override the spell filter (allSpells, allPrepared, onlyRemaining)
    #[arg(long)]
    spells: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("action_hud=info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "build failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut ctx = match &args.context {
        Some(path) => HudContext::load(path)?,
        None => HudContext::default(),
    };

    if args.settings.exists() {
        ctx.settings = HudSettings::load(&args.settings)?;
    } else {
        tracing::warn!(path = %args.settings.display(), "settings file not found, using defaults");
    }

    if let Some(path) = &args.rules {
        ctx.rules = RulesTables::load(path)?;
    }

    if let Some(layout) = &args.layout {
        ctx.settings.action_layout = HudSettings::parse_layout(layout)?;
    }
    if let Some(spells) = &args.spells {
        ctx.settings.spell_preparation = HudSettings::parse_spell_preparation(spells)?;
    }

    let registry = match &args.registry {
        Some(path) => CategoryRegistry::load(path)?,
        None => CategoryRegistry::standard(),
    };

    let content = std::fs::read_to_string(&args.snapshot)?;
    let snapshot: ActorSnapshot = serde_json::from_str(&content)?;
    tracing::info!(
        actors = snapshot.actors().len(),
        items = snapshot.items().len(),
        layout = ?ctx.settings.action_layout,
        "building action tree"
    );

    let mut tree = ActionTree::new();
    ActionTreeBuilder::new(&ctx, &registry).build(&snapshot, &mut tree)?;
    tracing::info!(
        subcategories = tree.subcategories().len(),
        actions = tree.entries().len(),
        "action tree built"
    );

    let output = if args.compact {
        serde_json::to_string(&tree)?
    } else {
        tree.to_json_pretty()?
    };
    println!("{}", output);
    Ok(())
}
