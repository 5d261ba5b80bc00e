//! 카테고리/단위/단위 쌍 정의와 카탈로그 조회.
//!
//! 내장 카탈로그는 [`crate::units`] 모듈의 정적 표로부터 만들어지며,
//! 사용자 정의 카테고리는 TOML 파일에서 읽어 뒤에 덧붙인다.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::transform::{BaseScale, Transform};
use crate::units;

/// 단위 하나의 정의.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    /// 카테고리 안에서 유일한 키 (예: `meters`)
    pub key: String,
    /// 표시 이름 (예: `Meters`)
    pub name: String,
    /// 단위 기호 (예: `m`)
    pub symbol: String,
    pub scale: BaseScale,
}

impl UnitDefinition {
    pub fn new(key: &str, name: &str, symbol: &str, scale: BaseScale) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            scale,
        }
    }

    /// 기준 단위에 대한 배율만 가지는 단위.
    pub fn linear(key: &str, name: &str, symbol: &str, factor: f64) -> Self {
        Self::new(key, name, symbol, BaseScale::Linear(factor))
    }

    /// 기준 단위와 서로 역함수인 두 함수로 정의되는 단위.
    pub fn custom(
        key: &str,
        name: &str,
        symbol: &str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        Self::new(key, name, symbol, BaseScale::Custom { to_base, from_base })
    }
}

/// 두 단위를 잇는 변환 쌍. 변환식은 선언 시점에 두 단위의 스케일로부터 유도된다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionDefinition {
    pub id: String,
    pub label: String,
    pub from_key: String,
    pub to_key: String,
    pub transform: Transform,
    pub note: String,
}

/// 측정 영역(길이, 질량 등) 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDefinition {
    pub id: String,
    pub name: String,
    pub base_unit: String,
    pub units: Vec<UnitDefinition>,
    pub conversions: Vec<ConversionDefinition>,
    pub default_conversion_id: Option<String>,
}

impl CategoryDefinition {
    pub fn new(id: &str, name: &str, base_unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_unit: base_unit.to_string(),
            units: Vec::new(),
            conversions: Vec::new(),
            default_conversion_id: None,
        }
    }

    pub fn unit(mut self, unit: UnitDefinition) -> Self {
        self.units.push(unit);
        self
    }

    /// 이미 추가된 두 단위 사이의 변환 쌍을 선언한다. id는 `{from}-{to}` 형식이다.
    pub fn pair(mut self, from_key: &str, to_key: &str, note: &str) -> Self {
        let conversion = self.make_conversion(from_key, to_key, note);
        self.conversions.push(conversion);
        self
    }

    pub fn default_pair(mut self, id: &str) -> Self {
        self.default_conversion_id = Some(id.to_string());
        self
    }

    fn make_conversion(&self, from_key: &str, to_key: &str, note: &str) -> ConversionDefinition {
        let from = self.find_unit(from_key);
        let to = self.find_unit(to_key);
        let label = match (from, to) {
            (Some(f), Some(t)) => format!("{} → {}", f.name, t.name),
            _ => format!("{from_key} → {to_key}"),
        };
        // 알 수 없는 키는 검증 단계(Catalog::new)에서 걸러진다.
        let transform = match (from, to) {
            _ if from_key == to_key => Transform::Identity,
            (Some(f), Some(t)) => Transform::between(f.scale, t.scale),
            _ => Transform::Identity,
        };
        ConversionDefinition {
            id: format!("{from_key}-{to_key}"),
            label,
            from_key: from_key.to_string(),
            to_key: to_key.to_string(),
            transform,
            note: note.to_string(),
        }
    }

    /// 첫 번째 단위에서 나머지 각 단위로 가는 쌍을 만든다. 쌍이 선언되지 않은
    /// 사용자 정의 카테고리에 쓰인다.
    fn pairs_from_first_unit(mut self) -> Self {
        let keys: Vec<String> = self.units.iter().map(|u| u.key.clone()).collect();
        if let Some((first, rest)) = keys.split_first() {
            for key in rest {
                let conversion = self.make_conversion(first, key, "");
                self.conversions.push(conversion);
            }
        }
        self
    }

    pub fn find_unit(&self, key: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.key == key)
    }

    pub fn find_conversion(&self, id: &str) -> Option<&ConversionDefinition> {
        self.conversions.iter().find(|c| c.id == id)
    }

    /// 기본 쌍 id. 지정되지 않았으면 첫 번째 쌍을 쓴다.
    pub fn default_conversion(&self) -> Option<&ConversionDefinition> {
        self.default_conversion_id
            .as_deref()
            .and_then(|id| self.find_conversion(id))
            .or_else(|| self.conversions.first())
    }
}

/// 카테고리 선택 목록의 항목.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
}

/// 단위 쌍 선택 목록의 항목.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOption {
    pub id: String,
    pub label: String,
}

/// 카탈로그 구성/로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CatalogError {
    /// 카테고리 id 중복
    DuplicateCategory(String),
    /// 카테고리 안의 단위 키 중복
    DuplicateUnit { category: String, key: String },
    /// 카테고리 안의 쌍 id 중복
    DuplicateConversion { category: String, id: String },
    /// 쌍이 존재하지 않는 단위를 참조
    UnknownUnit { category: String, key: String },
    /// 기본 쌍 id가 존재하지 않음
    UnknownDefault { category: String, id: String },
    /// 배율이 0이거나 유한하지 않음
    InvalidScale { category: String, key: String },
    /// 카테고리에 단위가 없음
    EmptyCategory(String),
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateCategory(id) => write!(f, "중복된 카테고리 id: {id}"),
            CatalogError::DuplicateUnit { category, key } => {
                write!(f, "카테고리 {category}: 중복된 단위 키 {key}")
            }
            CatalogError::DuplicateConversion { category, id } => {
                write!(f, "카테고리 {category}: 중복된 변환 id {id}")
            }
            CatalogError::UnknownUnit { category, key } => {
                write!(f, "카테고리 {category}: 알 수 없는 단위 {key}")
            }
            CatalogError::UnknownDefault { category, id } => {
                write!(f, "카테고리 {category}: 기본 변환 {id} 이(가) 없습니다")
            }
            CatalogError::InvalidScale { category, key } => {
                write!(f, "카테고리 {category}: 단위 {key} 의 배율이 올바르지 않습니다")
            }
            CatalogError::EmptyCategory(id) => write!(f, "카테고리 {id} 에 단위가 없습니다"),
            CatalogError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            CatalogError::Parse(e) => write!(f, "카탈로그 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        CatalogError::Io(value)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(value: toml::de::Error) -> Self {
        CatalogError::Parse(value)
    }
}

/// 순서가 유지되는 읽기 전용 카테고리 모음.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<CategoryDefinition>,
}

impl Catalog {
    /// 카테고리 목록을 검증한 뒤 카탈로그를 만든다.
    pub fn new(categories: Vec<CategoryDefinition>) -> Result<Self, CatalogError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// 내장 카탈로그. 정적 표는 테스트에서 검증한다.
    pub fn builtin() -> Self {
        Self {
            categories: units::builtin_categories(),
        }
    }

    /// 내장 카탈로그 뒤에 TOML 파일의 사용자 정의 카테고리를 덧붙인다.
    pub fn builtin_with_custom(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let custom = parse_custom_categories(&content)?;
        info!(path = %path.display(), count = custom.len(), "Loaded custom categories");
        let mut categories = units::builtin_categories();
        categories.extend(custom);
        Self::new(categories)
    }

    /// 사용자 정의 경로가 있으면 함께 로드하고, 실패하면 경고 후 내장 카탈로그만 쓴다.
    pub fn load(custom: Option<&Path>) -> Self {
        match custom {
            Some(path) => Self::builtin_with_custom(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Custom catalog rejected, using built-in");
                Self::builtin()
            }),
            None => Self::builtin(),
        }
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn find_category(&self, id: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn first_category(&self) -> Option<&CategoryDefinition> {
        self.categories.first()
    }

    pub fn list_categories(&self) -> Vec<CategoryOption> {
        self.categories
            .iter()
            .map(|c| CategoryOption {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect()
    }

    /// 카테고리의 단위 쌍 목록. 알 수 없는 카테고리면 빈 목록이다.
    pub fn list_conversions(&self, category_id: &str) -> Vec<ConversionOption> {
        self.find_category(category_id)
            .map(|c| {
                c.conversions
                    .iter()
                    .map(|conv| ConversionOption {
                        id: conv.id.clone(),
                        label: conv.label.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 전체 단위 쌍 개수.
    pub fn conversion_count(&self) -> usize {
        self.categories.iter().map(|c| c.conversions.len()).sum()
    }
}

fn validate(categories: &[CategoryDefinition]) -> Result<(), CatalogError> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.id.clone()));
        }
        if category.units.is_empty() {
            return Err(CatalogError::EmptyCategory(category.id.clone()));
        }

        let mut unit_keys = HashSet::new();
        for unit in &category.units {
            if !unit_keys.insert(unit.key.as_str()) {
                return Err(CatalogError::DuplicateUnit {
                    category: category.id.clone(),
                    key: unit.key.clone(),
                });
            }
            if !unit.scale.is_invertible() {
                return Err(CatalogError::InvalidScale {
                    category: category.id.clone(),
                    key: unit.key.clone(),
                });
            }
        }

        let mut conversion_ids = HashSet::new();
        for conversion in &category.conversions {
            if !conversion_ids.insert(conversion.id.as_str()) {
                return Err(CatalogError::DuplicateConversion {
                    category: category.id.clone(),
                    id: conversion.id.clone(),
                });
            }
            for key in [&conversion.from_key, &conversion.to_key] {
                if !unit_keys.contains(key.as_str()) {
                    return Err(CatalogError::UnknownUnit {
                        category: category.id.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        if let Some(id) = &category.default_conversion_id {
            if !conversion_ids.contains(id.as_str()) {
                return Err(CatalogError::UnknownDefault {
                    category: category.id.clone(),
                    id: id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// 사용자 정의 카탈로그 파일 형식.
///
/// ```toml
/// [[category]]
/// id = "typography"
/// name = "Typography"
/// base_unit = "points"
///
/// [[category.unit]]
/// key = "points"
/// name = "Points"
/// symbol = "pt"
/// factor = 1.0
///
/// [[category.pair]]
/// from = "points"
/// to = "picas"
/// ```
#[derive(Debug, Deserialize)]
struct CustomCatalogFile {
    #[serde(default)]
    category: Vec<CustomCategory>,
}

#[derive(Debug, Deserialize)]
struct CustomCategory {
    id: String,
    name: String,
    #[serde(default)]
    base_unit: String,
    #[serde(default)]
    default_pair: Option<String>,
    #[serde(default)]
    unit: Vec<CustomUnit>,
    #[serde(default)]
    pair: Vec<CustomPair>,
}

#[derive(Debug, Deserialize)]
struct CustomUnit {
    key: String,
    name: String,
    symbol: String,
    factor: f64,
    #[serde(default)]
    offset: f64,
}

#[derive(Debug, Deserialize)]
struct CustomPair {
    from: String,
    to: String,
    #[serde(default)]
    note: String,
}

/// TOML 문자열에서 사용자 정의 카테고리를 읽는다. 검증은 [`Catalog::new`]가 한다.
pub fn parse_custom_categories(src: &str) -> Result<Vec<CategoryDefinition>, CatalogError> {
    let file: CustomCatalogFile = toml::from_str(src)?;
    Ok(file.category.into_iter().map(custom_to_definition).collect())
}

fn custom_to_definition(custom: CustomCategory) -> CategoryDefinition {
    let mut category = CategoryDefinition::new(&custom.id, &custom.name, &custom.base_unit);
    for u in &custom.unit {
        let scale = if u.offset == 0.0 {
            BaseScale::Linear(u.factor)
        } else {
            BaseScale::Affine {
                factor: u.factor,
                offset: u.offset,
            }
        };
        category = category.unit(UnitDefinition::new(&u.key, &u.name, &u.symbol, scale));
    }
    if custom.pair.is_empty() {
        category = category.pairs_from_first_unit();
    } else {
        for p in &custom.pair {
            category = category.pair(&p.from, &p.to, &p.note);
        }
    }
    category.default_conversion_id = custom.default_pair;
    category
}
