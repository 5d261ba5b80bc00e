//! 카탈로그 검증 및 사용자 정의 카테고리 로드 테스트.
use unit_converter::catalog::{parse_custom_categories, Catalog, CatalogError};
use unit_converter::units::builtin_categories;

#[test]
fn builtin_catalog_validates() {
    let catalog = Catalog::new(builtin_categories()).expect("built-in catalog valid");
    assert_eq!(catalog.categories().len(), 11);
    assert_eq!(catalog.conversion_count(), Catalog::builtin().conversion_count());
}

#[test]
fn every_builtin_pair_round_trips() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        for conv in &category.conversions {
            for v in [0.5, 1.0, 37.0, 1234.5] {
                let back = conv.transform.invert(conv.transform.apply(v));
                assert!(
                    (back - v).abs() <= 1e-9 * v.abs().max(1.0),
                    "{}/{}: {v} -> {back}",
                    category.id,
                    conv.id
                );
            }
        }
    }
}

#[test]
fn listings_follow_catalog_order() {
    let catalog = Catalog::builtin();
    let categories = catalog.list_categories();
    assert_eq!(categories[0].id, "length");
    assert_eq!(categories[0].name, "Length");
    assert_eq!(categories[2].id, "temperature");

    let pairs = catalog.list_conversions("length");
    assert_eq!(pairs[0].id, "meters-feet");
    assert_eq!(pairs[0].label, "Meters → Feet");
    assert!(catalog.list_conversions("unknown").is_empty());
}

#[test]
fn every_default_pair_exists() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        let id = category.default_conversion_id.as_deref().expect("default set");
        assert!(category.find_conversion(id).is_some(), "{}", category.id);
    }
}

const TYPOGRAPHY: &str = r#"
[[category]]
id = "typography"
name = "Typography"
base_unit = "points"

[[category.unit]]
key = "points"
name = "Points"
symbol = "pt"
factor = 1.0

[[category.unit]]
key = "picas"
name = "Picas"
symbol = "pc"
factor = 12.0

[[category.unit]]
key = "inches"
name = "Inches"
symbol = "in"
factor = 72.0
"#;

#[test]
fn custom_category_without_pairs_gets_pairs_from_first_unit() {
    let custom = parse_custom_categories(TYPOGRAPHY).expect("parse");
    let mut categories = builtin_categories();
    categories.extend(custom);
    let catalog = Catalog::new(categories).expect("valid");
    let pairs = catalog.list_conversions("typography");
    let ids: Vec<&str> = pairs.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["points-picas", "points-inches"]);

    let category = catalog.find_category("typography").expect("typography");
    let conv = category.find_conversion("points-inches").expect("pair");
    assert!((conv.transform.apply(144.0) - 2.0).abs() < 1e-12);
}

#[test]
fn custom_affine_units_and_explicit_pairs() {
    let src = r#"
[[category]]
id = "temp2"
name = "Temperature (Réaumur)"
default_pair = "reaumur-celsius"

[[category.unit]]
key = "celsius"
name = "Celsius"
symbol = "°C"
factor = 1.0

[[category.unit]]
key = "reaumur"
name = "Réaumur"
symbol = "°Ré"
factor = 1.25

[[category.unit]]
key = "rankine"
name = "Rankine"
symbol = "°R"
factor = 0.5555555555555556
offset = -273.15

[[category.pair]]
from = "reaumur"
to = "celsius"
note = "°C = °Ré × 5/4"

[[category.pair]]
from = "celsius"
to = "rankine"
"#;
    let custom = parse_custom_categories(src).expect("parse");
    let catalog = Catalog::new(custom).expect("valid");
    let category = catalog.find_category("temp2").expect("temp2");
    assert_eq!(
        category.default_conversion().map(|c| c.id.as_str()),
        Some("reaumur-celsius")
    );
    let to_rankine = category.find_conversion("celsius-rankine").expect("pair");
    assert!((to_rankine.transform.apply(0.0) - 491.67).abs() < 1e-9);
}

#[test]
fn custom_catalog_errors_are_reported() {
    let dup = format!("{TYPOGRAPHY}\n{TYPOGRAPHY}");
    let custom = parse_custom_categories(&dup).expect("parse");
    assert!(matches!(
        Catalog::new(custom),
        Err(CatalogError::DuplicateCategory(id)) if id == "typography"
    ));

    let zero = r#"
[[category]]
id = "bad"
name = "Bad"

[[category.unit]]
key = "a"
name = "A"
symbol = "a"
factor = 0.0
"#;
    let custom = parse_custom_categories(zero).expect("parse");
    assert!(matches!(
        Catalog::new(custom),
        Err(CatalogError::InvalidScale { .. })
    ));

    let unknown = r#"
[[category]]
id = "bad"
name = "Bad"

[[category.unit]]
key = "a"
name = "A"
symbol = "a"
factor = 1.0

[[category.pair]]
from = "a"
to = "b"
"#;
    let custom = parse_custom_categories(unknown).expect("parse");
    assert!(matches!(
        Catalog::new(custom),
        Err(CatalogError::UnknownUnit { key, .. }) if key == "b"
    ));

    assert!(matches!(
        parse_custom_categories("[[category]]\nid = 3"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn builtin_with_custom_reports_missing_file() {
    let missing = std::path::Path::new("definitely/not/here.toml");
    assert!(matches!(
        Catalog::builtin_with_custom(missing),
        Err(CatalogError::Io(_))
    ));
    // 실패 시 내장 카탈로그로 대체
    let catalog = Catalog::load(Some(missing));
    assert_eq!(catalog.categories().len(), 11);
}

#[test]
fn demo_catalog_file_loads() {
    let catalog = Catalog::builtin_with_custom(std::path::Path::new("demos/custom_catalog.toml"))
        .expect("demo catalog valid");
    assert_eq!(catalog.categories().len(), 13);

    let typography = catalog.find_category("typography").expect("typography");
    let pair = typography.default_conversion().expect("default pair");
    assert_eq!(pair.id, "points-picas");
    assert!((pair.transform.apply(24.0) - 2.0).abs() < 1e-12);

    let oven = catalog.find_category("gas_mark").expect("gas_mark");
    let pair = oven.find_conversion("celsius-kelvin").expect("generated pair");
    assert!((pair.transform.apply(0.0) - 273.15).abs() < 1e-9);
}
