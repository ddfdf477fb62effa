use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use roster_core::{Field, VERSION};

/// Roster - keep a validated, searchable list of contact profiles
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the roster store
    #[arg(short, long, global = true, env = "ROSTER_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Skip the postal code lookup
    #[arg(long, global = true, env = "ROSTER_OFFLINE")]
    pub offline: bool,
}

/// Profile field values given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number (the +91 prefix is added when missing)
    #[arg(long, visible_alias = "phone")]
    pub number: Option<String>,

    /// PAN (uppercased automatically)
    #[arg(long)]
    pub pan: Option<String>,

    /// Address line 1
    #[arg(long)]
    pub address1: Option<String>,

    /// Address line 2
    #[arg(long)]
    pub address2: Option<String>,

    /// City (filled from the postal code lookup when omitted)
    #[arg(long)]
    pub city: Option<String>,

    /// State (filled from the postal code lookup when omitted)
    #[arg(long)]
    pub state: Option<String>,

    /// Six-digit postal code
    #[arg(long)]
    pub postal_code: Option<String>,
}

impl ProfileArgs {
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Number => &self.number,
            Field::Pan => &self.pan,
            Field::Address1 => &self.address1,
            Field::Address2 => &self.address2,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
        };
        value.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_none())
    }
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where the store will live
    #[arg(value_name = "DIR")]
    pub path: Option<String>,

    /// Postal lookup endpoint to record in the config
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: ProfileArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show profiles whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Profile ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Profile ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: ProfileArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Profile ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `lookup` command
#[derive(Args)]
pub struct LookupArgs {
    /// Six-digit postal code
    #[arg(value_name = "POSTCODE")]
    pub postcode: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
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
    /// Write a default config and create the store directory
    Init(InitArgs),

    /// Fill in the profile form and save it
    Add(AddArgs),

    /// List saved profiles
    List(ListArgs),

    /// Show a single profile
    Show(ShowArgs),

    /// Edit a saved profile
    Edit(EditArgs),

    /// Delete a saved profile
    Delete(DeleteArgs),

    /// Resolve a postal code to city and state
    Lookup(LookupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
