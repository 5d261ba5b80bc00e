//! CLI 카탈로그 선택 규칙 테스트.
use std::path::Path;
use unit_converter::app::{load_catalog, AppError};
use unit_converter::catalog::CatalogError;

#[test]
fn explicit_catalog_is_loaded() {
    let catalog = load_catalog(Some(Path::new("demos/custom_catalog.toml")), None)
        .expect("demo catalog loads");
    assert!(catalog.find_category("typography").is_some());
}

#[test]
fn broken_explicit_catalog_is_an_error() {
    let err = load_catalog(Some(Path::new("no/such/catalog.toml")), None)
        .expect_err("missing file must fail");
    assert!(matches!(err, AppError::Catalog(CatalogError::Io(_))));
    assert!(err.to_string().starts_with("카탈로그 오류"));
}

#[test]
fn broken_configured_catalog_falls_back_to_builtin() {
    let catalog = load_catalog(None, Some(Path::new("no/such/catalog.toml"))).expect("fallback");
    assert_eq!(catalog.categories().len(), 11);
}
