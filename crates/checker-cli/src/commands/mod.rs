use checker_config::CheckerConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod audit;
pub mod sub_accounts;

pub async fn dispatch(
    command: Commands,
    config: &CheckerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::SubAccounts => sub_accounts::handle(config, flags),
        Commands::Audit(args) => audit::handle(&args, config, flags).await,
    }
}
