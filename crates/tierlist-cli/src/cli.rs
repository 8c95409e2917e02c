//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Tierlist CLI - Rank items into tiers.
#[derive(Debug, Parser)]
#[command(name = "tierlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Database file path (overrides the config file)
    #[arg(long, global = true, env = "TIERLIST_DB")]
    pub db: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the tiers of the active template
    Show,

    /// Manage templates
    Templates(TemplateArgs),

    /// Edit tiers of the active template
    Tier(TierArgs),

    /// Add, place, move and delete items
    Item(ItemArgs),

    /// List items in the library
    Library,

    /// Clear the ranking of the active template
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Export the current ranking as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import a ranking exported earlier
    Import {
        /// JSON file to import
        file: String,
    },

    /// View or change display settings
    Settings(SettingsArgs),
}

/// Arguments for template management.
#[derive(Debug, Parser)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Template management actions.
#[derive(Debug, Subcommand)]
pub enum TemplateAction {
    /// List all templates
    List,

    /// Switch the active template ("custom" for the free-form set)
    Use {
        /// Template ID
        id: String,
    },

    /// Save the custom tiers as a new template
    Save {
        /// Template name
        name: String,
    },

    /// Delete a user template
    Delete {
        /// Template ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Arguments for tier editing.
#[derive(Debug, Parser)]
pub struct TierArgs {
    #[command(subcommand)]
    pub action: TierAction,
}

/// Tier editing actions.
#[derive(Debug, Subcommand)]
pub enum TierAction {
    /// Append a tier to the custom set
    Add {
        /// Tier ID
        id: String,
        /// Display name
        name: String,
        /// Display color (e.g. "#ff9933")
        color: String,
    },

    /// Remove a tier from the custom set (its items are discarded)
    Remove {
        /// Tier ID
        id: String,
    },

    /// Rename or recolor a tier
    Edit {
        /// Tier ID
        id: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New display color
        #[arg(short, long)]
        color: Option<String>,
    },
}

/// Arguments for item commands.
#[derive(Debug, Parser)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub action: ItemAction,
}

/// Item actions.
#[derive(Debug, Subcommand)]
pub enum ItemAction {
    /// Create an item in the library (or directly in a tier)
    Add {
        /// Item ID
        id: String,
        /// Display name
        name: String,
        /// Image reference
        #[arg(short, long)]
        image: Option<String>,
        /// Place straight into this tier instead of the library
        #[arg(short, long)]
        tier: Option<String>,
    },

    /// Move an item from the library into a tier
    Place {
        /// Tier ID
        tier: String,
        /// Item ID
        id: String,
    },

    /// Move an item between tiers
    Move {
        /// Source tier ID
        from: String,
        /// Target tier ID
        to: String,
        /// Item ID
        id: String,
    },

    /// Return an item from a tier to the library
    Unplace {
        /// Tier ID
        tier: String,
        /// Item ID
        id: String,
    },

    /// Reorder the items of a tier
    Order {
        /// Tier ID
        tier: String,
        /// Item IDs in the new order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete an item from the library and every ranking
    Delete {
        /// Item ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Arguments for the settings command.
#[derive(Debug, Parser)]
pub struct SettingsArgs {
    /// Show item names under images
    #[arg(long)]
    pub show_names: Option<bool>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
