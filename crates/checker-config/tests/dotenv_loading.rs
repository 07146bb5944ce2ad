//! Kept in its own binary: variables read from `.env` stay in the process
//! environment after the jail is dropped.

use checker_config::CheckerConfig;
use figment::Jail;

#[test]
fn dotenv_file_in_working_directory_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "COURSE_CHECKER_CANVAS__TOKEN=from-dotenv\nCOURSE_CHECKER_CANVAS__BASE_URL=https://canvas.dotenv.edu\n",
        )?;

        let config = CheckerConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.canvas.token, "from-dotenv");
        assert_eq!(config.canvas.base_url, "https://canvas.dotenv.edu");
        Ok(())
    });
}
