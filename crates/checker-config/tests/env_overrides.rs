use checker_config::CheckerConfig;
use figment::Jail;

#[test]
fn prefixed_env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("COURSE_CHECKER_CANVAS__TOKEN", "env-token");
        jail.set_env("COURSE_CHECKER_CANVAS__BASE_URL", "https://canvas.env.edu");
        jail.set_env("COURSE_CHECKER_RULES__PLACEHOLDER_ASSIGNMENT", "Actividad 1");

        let config = CheckerConfig::load().expect("config loads");
        assert_eq!(config.canvas.token, "env-token");
        assert_eq!(config.canvas.base_url, "https://canvas.env.edu");
        assert_eq!(config.rules.placeholder_assignment, "Actividad 1");
        Ok(())
    });
}

#[test]
fn legacy_token_variable_fills_canvas_token() {
    Jail::expect_with(|jail| {
        jail.set_env("TOKEN", "legacy-token");

        let config = CheckerConfig::load().expect("config loads");
        assert_eq!(config.canvas.token, "legacy-token");
        assert!(config.canvas.is_configured());
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_legacy_token_and_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".course-checker")?;
        jail.create_file(
            ".course-checker/config.toml",
            "[canvas]\ntoken = \"toml-token\"\n",
        )?;
        jail.set_env("TOKEN", "legacy-token");
        jail.set_env("COURSE_CHECKER_CANVAS__TOKEN", "env-token");

        let config = CheckerConfig::load().expect("config loads");
        assert_eq!(config.canvas.token, "env-token");
        Ok(())
    });
}
