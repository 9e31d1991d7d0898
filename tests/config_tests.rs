use kod_gozcusu::config::config_manager::ConfigManager;
use kod_gozcusu::config::constants::{DATABASE_PATH_ENV, DEFAULT_PORT};
use kod_gozcusu::errors::KodError;
use kod_gozcusu::helpers::prompt_generator::generate_review_prompt;
use kod_gozcusu::structs::config::config::Config;

#[test]
fn empty_document_yields_defaults() -> anyhow::Result<()> {
    let config = ConfigManager::parse("")?;

    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.database.path, "db.sqlite3");
    assert_eq!(config.ai.provider, "gemini");
    assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
    assert!(config.ai.custom_prompt.is_none());
    assert!(ConfigManager::validate_config(&config).is_ok());
    Ok(())
}

#[test]
fn partial_sections_keep_remaining_defaults() -> anyhow::Result<()> {
    let config = ConfigManager::parse(
        r#"
        [server]
        port = 9090

        [ai]
        model = "gemini-1.5-pro"
        "#,
    )?;

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.ai.model, "gemini-1.5-pro");
    assert_eq!(config.ai.max_output_tokens, 8192);
    Ok(())
}

#[test]
fn malformed_toml_is_a_configuration_error() {
    let result = ConfigManager::parse("[server\nport = ");

    assert!(matches!(result, Err(KodError::Configuration { .. })));
}

#[test]
fn missing_explicit_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let err = ConfigManager::load(Some(&path)).unwrap_err();

    assert!(matches!(err, KodError::ConfigurationFile { ref path, .. } if path.ends_with("absent.toml")));
}

#[test]
fn file_values_and_database_env_override_are_applied() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[database]\npath = \"from-file.sqlite3\"\n[server]\nport = 8123\n")?;

    std::env::remove_var(DATABASE_PATH_ENV);
    let from_file = ConfigManager::load(Some(&path))?;
    assert_eq!(from_file.database.path, "from-file.sqlite3");
    assert_eq!(from_file.server.port, 8123);

    std::env::set_var(DATABASE_PATH_ENV, "from-env.sqlite3");
    let overridden = ConfigManager::load(Some(&path));
    std::env::remove_var(DATABASE_PATH_ENV);

    assert_eq!(overridden?.database.path, "from-env.sqlite3");
    Ok(())
}

#[test]
fn validation_collects_every_problem() {
    let mut config = Config::default();
    config.server.port = 0;
    config.database.path = "  ".to_string();
    config.ai.provider = "openai".to_string();
    config.ai.custom_prompt = Some("no placeholder here".to_string());

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert!(errors.iter().any(|e| e.contains("server.port")));
    assert!(errors.iter().any(|e| e.contains("database.path")));
    assert!(errors.iter().any(|e| e.contains("openai")));
    assert!(errors.iter().any(|e| e.contains("{code}")));
}

#[test]
fn review_prompt_lists_every_section_and_embeds_code() {
    let code = "query = f\"SELECT * FROM users WHERE name = '{user_input}'\"";

    let prompt = generate_review_prompt(code, None);

    for section in ["Errors and Bugs", "Security Vulnerabilities", "Refactoring Suggestions", "Overall Assessment"] {
        assert!(prompt.contains(section), "missing section {section}");
    }
    assert!(prompt.contains(&format!("```\n{code}\n```")));
    assert!(!prompt.contains("{code}"));
}

#[test]
fn custom_template_substitutes_only_the_first_placeholder() {
    let prompt = generate_review_prompt("x = 1", Some("A {code} B {code}"));

    assert_eq!(prompt, "A x = 1 B {code}");
}
