use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 동력 카테고리. 내부 기준은 와트이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("power", "Power", "watts")
        .unit(UnitDefinition::linear("watts", "Watts", "W", 1.0))
        .unit(UnitDefinition::linear("kilowatts", "Kilowatts", "kW", 1000.0))
        .unit(UnitDefinition::linear("horsepower", "Horsepower", "hp", 745.7))
        .unit(UnitDefinition::linear("btu-per-hour", "BTU per Hour", "BTU/h", 0.293071))
        .pair("kilowatts", "horsepower", "1 hp ≈ 745.7 W (mechanical)")
        .pair("watts", "btu-per-hour", "1 BTU/h ≈ 0.293071 W")
        .pair("kilowatts", "watts", "1 kW = 1000 W")
        .default_pair("kilowatts-horsepower")
}
