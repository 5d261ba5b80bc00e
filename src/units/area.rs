use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 면적 카테고리. 내부 기준은 제곱미터이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("area", "Area", "square meters")
        .unit(UnitDefinition::linear("square-millimeters", "Square Millimeters", "mm²", 1e-6))
        .unit(UnitDefinition::linear("square-centimeters", "Square Centimeters", "cm²", 1e-4))
        .unit(UnitDefinition::linear("square-meters", "Square Meters", "m²", 1.0))
        .unit(UnitDefinition::linear("hectares", "Hectares", "ha", 10_000.0))
        .unit(UnitDefinition::linear("square-kilometers", "Square Kilometers", "km²", 1e6))
        // (0.0254)², (0.3048)² 및 국제 에이커. 모두 정확한 값
        .unit(UnitDefinition::linear("square-inches", "Square Inches", "in²", 0.00064516))
        .unit(UnitDefinition::linear("square-feet", "Square Feet", "ft²", 0.09290304))
        .unit(UnitDefinition::linear("acres", "Acres", "ac", 4046.8564224))
        .pair("square-meters", "square-feet", "1 ft² = 0.09290304 m² (exact)")
        .pair("hectares", "acres", "1 ac = 4046.8564224 m² (exact)")
        .pair("square-centimeters", "square-inches", "1 in² = 6.4516 cm² (exact)")
        .pair("square-kilometers", "hectares", "1 km² = 100 ha")
        .default_pair("square-meters-square-feet")
}
