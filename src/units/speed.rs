use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 속도 카테고리. 내부 기준은 m/s이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("speed", "Speed", "meters per second")
        .unit(UnitDefinition::linear("meters-per-second", "Meters per Second", "m/s", 1.0))
        .unit(UnitDefinition::linear("kilometers-per-hour", "Kilometers per Hour", "km/h", 1.0 / 3.6))
        .unit(UnitDefinition::linear("feet-per-second", "Feet per Second", "ft/s", 0.3048))
        .unit(UnitDefinition::linear("miles-per-hour", "Miles per Hour", "mph", 0.44704))
        // 1852/3600 (해리 기준)
        .unit(UnitDefinition::linear("knots", "Knots", "kn", 1852.0 / 3600.0))
        .pair("kilometers-per-hour", "miles-per-hour", "1 mph = 1.609344 km/h (exact)")
        .pair("meters-per-second", "kilometers-per-hour", "1 m/s = 3.6 km/h")
        .pair("knots", "kilometers-per-hour", "1 kn = 1.852 km/h (exact)")
        .pair("meters-per-second", "feet-per-second", "1 ft/s = 0.3048 m/s (exact)")
        .default_pair("kilometers-per-hour-miles-per-hour")
}
