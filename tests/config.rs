//! 설정 역직렬화 테스트.
use unit_converter::config::Config;
use unit_converter::engine::FormatPolicy;

#[test]
fn missing_keys_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("format = \"scientific\"\n").expect("parse");
    assert_eq!(cfg.format, FormatPolicy::Scientific);
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.seed_value, "1");
    assert!(cfg.custom_catalog.is_none());
}

#[test]
fn blank_seed_uses_default_seed() {
    let cfg = Config {
        seed_value: "  ".into(),
        ..Config::default()
    };
    assert_eq!(cfg.sync_options().seed, "1");
    assert_eq!(cfg.sync_options().format, FormatPolicy::Tiered);
}

#[test]
fn unknown_format_is_rejected() {
    assert!(toml::from_str::<Config>("format = \"roman\"\n").is_err());
}
