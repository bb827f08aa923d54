use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::views::{ExpiryStatus, StatusFilter};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Recipes and seasoning expiry tracking")]
pub struct Cli {
    /// Where the database and settings live. Falls back to `LARDER_DATA_DIR`,
    /// then `./larder-data`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk.
    #[arg(long, global = true, default_value_t = false)]
    pub ephemeral: bool,

    /// Answer "yes" to delete confirmations.
    #[arg(long, short = 'y', global = true, default_value_t = false)]
    pub yes: bool,

    /// Debug-level logging (same as `LARDER_DEBUG=1`).
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Manage recipes.
    #[command(subcommand)]
    Recipes(RecipeCommand),
    /// Manage seasonings and their expiry dates.
    #[command(subcommand)]
    Seasonings(SeasoningCommand),
}

#[derive(Clone, Debug, Subcommand)]
pub enum RecipeCommand {
    /// List recipes, optionally narrowed by a search and category.
    List {
        #[arg(long, short = 's', default_value = "")]
        search: String,
        #[arg(long, short = 'c', default_value = "")]
        category: String,
    },
    /// Show one recipe.
    Show {
        id: String,
        /// Print the HTML detail page instead of plain text.
        #[arg(long, default_value_t = false)]
        html: bool,
    },
    Add(RecipeFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: RecipeFields,
    },
    Delete { id: String },
    /// Write the printable HTML page for a recipe.
    Export {
        id: String,
        /// Output file; stdout when omitted.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Recipe fields; on `edit`, anything left out keeps its current value.
#[derive(Clone, Debug, Default, Args)]
pub struct RecipeFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Minutes.
    #[arg(long)]
    pub cooking_time: Option<String>,
    #[arg(long)]
    pub servings: Option<String>,
    /// Repeat once per ingredient; replaces the whole list.
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,
    /// Repeat once per step; replaces the whole list.
    #[arg(long = "step")]
    pub steps: Vec<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Image file to embed.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SeasoningCommand {
    /// List seasonings, soonest expiry first.
    List {
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,
    },
    Add(SeasoningFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: SeasoningFields,
    },
    Delete { id: String },
    /// Expired / expiring-soon / safe counts.
    Stats,
}

/// Seasoning fields; on `edit`, anything left out keeps its current value.
#[derive(Clone, Debug, Default, Args)]
pub struct SeasoningFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// YYYY-MM-DD.
    #[arg(long = "expiry")]
    pub expiry_date: Option<String>,
    /// YYYY-MM-DD; pass an empty value to clear it.
    #[arg(long = "opened")]
    pub opened_date: Option<String>,
    /// Remaining amount in percent.
    #[arg(long)]
    pub quantity: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Expired,
    Warning,
    Safe,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Expired => StatusFilter::Only(ExpiryStatus::Expired),
            StatusArg::Warning => StatusFilter::Only(ExpiryStatus::Warning),
            StatusArg::Safe => StatusFilter::Only(ExpiryStatus::Safe),
        }
    }
}
