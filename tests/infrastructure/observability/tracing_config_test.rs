use officio::infrastructure::observability::TracingConfig;
use officio::presentation::{Environment, Settings};

#[test]
fn given_default_config_when_created_then_environment_is_local() {
    let config = TracingConfig::default();
    assert_eq!(config.environment, Environment::Local);
}

#[test]
fn given_loaded_settings_when_building_config_then_copies_environment_and_format() {
    let mut settings = Settings::build(Environment::Test, Some("sk-test".to_string())).unwrap();
    settings.logging.json_format = true;

    let config = TracingConfig::from_settings(Environment::Prod, &settings);

    assert_eq!(config.environment, Environment::Prod);
    assert!(config.json_format);
}
