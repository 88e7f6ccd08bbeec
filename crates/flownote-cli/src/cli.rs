use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use flownote_core::VERSION;

/// FlowNote - write forward, seal it, read it later
#[derive(Parser)]
#[command(name = "flownote")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "FLOWNOTE_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Timezone used when displaying seal times (e.g. Europe/Paris)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Editor used for `seal` and `edit`
    #[arg(long)]
    pub editor: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    /// Preset lock window for the seal picker (e.g. 15m, 1h30m, 00:05:00)
    #[arg(long, value_name = "DURATION")]
    pub duration: Option<String>,
}

/// Arguments for the `seal` command
#[derive(Args)]
pub struct SealArgs {
    /// Entry body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Lock window (e.g. 90s, 15m, 1h30m, 00:05:00)
    #[arg(short, long, value_name = "DURATION")]
    pub duration: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Only entries still inside their lock window
    #[arg(long, conflicts_with = "unlocked")]
    pub locked: bool,

    /// Only entries that can be read
    #[arg(long)]
    pub unlocked: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Redraw the countdowns every second
    #[arg(long, conflicts_with = "json")]
    pub watch: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New entry body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `refine` command
#[derive(Args)]
pub struct RefineArgs {
    /// Entry ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Apply the polished version without asking
    #[arg(long)]
    pub apply: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lang` command
#[derive(Args)]
pub struct LangArgs {
    /// Language to switch to (en, zh); prints the current one when omitted
    #[arg(value_name = "LANG")]
    pub language: Option<String>,
}

/// Arguments for the `theme` command
#[derive(Args)]
pub struct ThemeArgs {
    /// Theme to switch to (dark, warm, blue); prints the current one when omitted
    #[arg(value_name = "THEME")]
    pub theme: Option<String>,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination path
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the config file and create the store
    Init(InitArgs),

    /// Open the fading draft pad
    Write(WriteArgs),

    /// Seal an entry from --body, stdin or $EDITOR
    Seal(SealArgs),

    /// List sealed entries, newest first
    List(ListArgs),

    /// Show an unlocked entry
    Show(ShowArgs),

    /// Replace the content of an unlocked entry
    Edit(EditArgs),

    /// Fix typos in an unlocked entry and review the result
    Refine(RefineArgs),

    /// Show or set the display language
    Lang(LangArgs),

    /// Show or set the visual theme
    Theme(ThemeArgs),

    /// Run diagnostics on config, store and vault
    Doctor,

    /// Back up the store file
    Backup(BackupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
