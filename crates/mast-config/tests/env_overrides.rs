use figment::Jail;
use mast_config::{ConfigError, MastConfig};

#[test]
fn env_var_sets_threshold() {
    Jail::expect_with(|jail| {
        jail.set_env("MASTHEAD_QUERY__PROLIFIC_THRESHOLD", "5");
        let config = MastConfig::load().expect("config loads");
        assert_eq!(config.query.prolific_threshold, 5);
        Ok(())
    });
}

#[test]
fn non_numeric_threshold_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("MASTHEAD_QUERY__PROLIFIC_THRESHOLD", "many");
        let err = MastConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
