//! 번역 조회 및 언어팩 테스트.
use unit_converter::i18n::{keys, parse_toml_to_map, resolve_language, Translator};

#[test]
fn builtin_strings_follow_language() {
    let en = Translator::new_with_pack("en", Some("no/such/pack"));
    let ko = Translator::new_with_pack("ko-KR", Some("no/such/pack"));
    assert_eq!(en.t(keys::LABEL_CATEGORY), "Category");
    assert_ne!(ko.t(keys::LABEL_CATEGORY), en.t(keys::LABEL_CATEGORY));
    // 모르는 키는 키 자체를 돌려준다
    assert_eq!(en.t("no.such.key"), "no.such.key");
}

#[test]
fn explicit_language_wins_over_config() {
    assert_eq!(resolve_language("ko", Some("en")), "ko");
    assert_eq!(resolve_language("auto", Some("en_US")), "en");
}

#[test]
fn language_pack_tables_flatten_to_dotted_keys() {
    let map = parse_toml_to_map(
        r#"
[label]
category = "Kind"

[general]
app_title = "Converter"
"#,
    )
    .expect("valid pack");
    assert_eq!(map.get(keys::LABEL_CATEGORY).map(String::as_str), Some("Kind"));
    assert_eq!(map.get(keys::APP_TITLE).map(String::as_str), Some("Converter"));
}
