use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 질량 카테고리. 내부 기준은 그램이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("mass", "Mass", "grams")
        .unit(UnitDefinition::linear("milligrams", "Milligrams", "mg", 0.001))
        .unit(UnitDefinition::linear("grams", "Grams", "g", 1.0))
        .unit(UnitDefinition::linear("kilograms", "Kilograms", "kg", 1000.0))
        .unit(UnitDefinition::linear("tonnes", "Metric Tons", "t", 1_000_000.0))
        // 상형(avoirdupois) 온스/파운드
        .unit(UnitDefinition::linear("ounces", "Ounces", "oz", 28.349523125))
        .unit(UnitDefinition::linear("pounds", "Pounds", "lb", 453.59237))
        .pair("kilograms", "pounds", "1 lb = 0.45359237 kg (exact)")
        .pair("grams", "ounces", "1 oz = 28.349523125 g (exact)")
        .pair("pounds", "ounces", "1 lb = 16 oz")
        .pair("tonnes", "pounds", "1 t = 1000 kg")
        .pair("kilograms", "grams", "1 kg = 1000 g")
        .pair("grams", "milligrams", "1 g = 1000 mg")
        .default_pair("kilograms-pounds")
}
