use figment::Jail;
use vaka_config::VakaConfig;

#[test]
fn env_vars_map_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("VAKA_STORAGE__DATA_FILE", "env-cases.json");
        jail.set_env("VAKA_CASES__STRICT_TRANSITIONS", "false");
        jail.set_env("VAKA_EXPORT__PRINTER", "lab");

        let config = VakaConfig::load().expect("config loads");
        assert_eq!(config.storage.data_file, "env-cases.json");
        assert!(!config.cases.strict_transitions);
        assert_eq!(config.export.printer, "lab");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vaka")?;
        jail.create_file(".vaka/config.toml", "[general]\ndefault_format = \"raw\"\n")?;
        jail.set_env("VAKA_GENERAL__DEFAULT_FORMAT", "json");

        let config = VakaConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn dotenv_file_is_read() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "VAKA_EXPORT__OUTPUT_DIR=from-dotenv\n")?;

        let config = VakaConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.export.output_dir, "from-dotenv");
        Ok(())
    });
}
