use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use checker_rules::StyleMatch;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the configured sub-accounts.
    SubAccounts,
    /// Audit every course of a sub-account.
    Audit(AuditArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Configured sub-account name or numeric account id.
    pub sub_account: String,
    /// Write the HTML table to this file.
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,
    /// Write the spreadsheet to this file.
    #[arg(long, value_name = "PATH")]
    pub xlsx: Option<PathBuf>,
    /// Write both reports as `<DIR>/<sub-account>.{html,xlsx}`.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// How front page style attributes are compared.
    #[arg(long, value_enum, default_value = "substring")]
    pub style_match: StyleMatchArg,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StyleMatchArg {
    /// The template's literal style text must appear in the attribute.
    Substring,
    /// Every template declaration must be present, ignoring spacing and order.
    Declarations,
}

impl From<StyleMatchArg> for StyleMatch {
    fn from(value: StyleMatchArg) -> Self {
        match value {
            StyleMatchArg::Substring => Self::Substring,
            StyleMatchArg::Declarations => Self::Declarations,
        }
    }
}
