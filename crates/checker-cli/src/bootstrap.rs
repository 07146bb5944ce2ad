use anyhow::Context;

use checker_config::CheckerConfig;

/// Layered config with `.env` values exported first.
pub fn load_config() -> anyhow::Result<CheckerConfig> {
    let config = CheckerConfig::load_with_dotenv()
        .context("failed to load course-checker configuration")?;
    tracing::debug!(
        base_url = %config.canvas.base_url,
        sub_accounts = config.sub_accounts.len(),
        "configuration loaded"
    );
    Ok(config)
}
