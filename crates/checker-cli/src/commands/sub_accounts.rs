use checker_config::{CheckerConfig, SubAccount};

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle(config: &CheckerConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sub_accounts: Vec<SubAccount> = config.sub_accounts.iter().collect();
    output(&sub_accounts, flags.format)
}
