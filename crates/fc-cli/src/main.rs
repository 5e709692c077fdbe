//! CLI frontend for the Fallcrest D6 rules engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fc",
    about = "Fallcrest: D6 dice pools, skill values and blip budgets",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse dice notation and show its canonical form and step value
    Notation {
        /// Dice notation, e.g. 2D+1
        text: String,
    },

    /// Show the blip cost of buying steps from scratch
    Cost {
        /// Number of steps to buy
        steps: u64,

        /// Steps already bought
        #[arg(short, long, default_value = "0")]
        from: u64,
    },

    /// Compute a skill value from its parts
    Skill {
        /// Attribute rating, e.g. 3D
        #[arg(short, long)]
        attribute: String,

        /// Trained skill dice
        #[arg(long, default_value = "0")]
        dice: u32,

        /// Trained skill steps and specialization blips
        #[arg(long, default_value = "0")]
        steps: u32,

        /// The skill is weakened
        #[arg(short, long)]
        weakened: bool,

        /// Equipment bonus in steps
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        equipment: i64,

        /// Injury penalty in steps
        #[arg(short, long, default_value = "0")]
        injury: i64,
    },

    /// Roll a rating with the red die
    Roll {
        /// Dice notation, e.g. 3D+2
        notation: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Target number to beat
        #[arg(short, long)]
        target: Option<i64>,
    },

    /// List the default skill catalog and injury keywords
    Skills {
        /// Rules file (JSON; default: Fallcrest rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Show a character sheet
    Sheet {
        /// Character snapshot (JSON)
        character: PathBuf,

        /// Creation settings (JSON)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Rules file (JSON; default: Fallcrest rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Injury records (JSON array)
        #[arg(short, long)]
        injuries: Option<PathBuf>,

        /// Print the sheet as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where a character's blips went
    Budget {
        /// Character snapshot (JSON)
        character: PathBuf,

        /// Creation settings (JSON)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Rules file (JSON; default: Fallcrest rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Check a character against the creation limits
    Check {
        /// Character snapshot (JSON)
        character: PathBuf,

        /// Creation settings (JSON)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Rules file (JSON; default: Fallcrest rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Notation { text } => commands::notation::run(&text),
        Commands::Cost { steps, from } => commands::cost::run(steps, from),
        Commands::Skill {
            attribute,
            dice,
            steps,
            weakened,
            equipment,
            injury,
        } => commands::skill::run(&attribute, dice, steps, weakened, equipment, injury),
        Commands::Roll {
            notation,
            seed,
            target,
        } => commands::roll::run(&notation, seed, target),
        Commands::Skills { rules } => commands::skills::run(rules.as_deref()),
        Commands::Sheet {
            character,
            settings,
            rules,
            injuries,
            json,
        } => commands::sheet::run(
            &character,
            settings.as_deref(),
            rules.as_deref(),
            injuries.as_deref(),
            json,
        ),
        Commands::Budget {
            character,
            settings,
            rules,
        } => commands::budget::run(&character, settings.as_deref(), rules.as_deref()),
        Commands::Check {
            character,
            settings,
            rules,
        } => commands::check::run(&character, settings.as_deref(), rules.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
