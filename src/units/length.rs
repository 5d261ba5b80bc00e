use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 길이 카테고리. 내부 기준은 미터이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("length", "Length", "meters")
        // 미터법 (작은 단위부터)
        .unit(UnitDefinition::linear("millimeters", "Millimeters", "mm", 0.001))
        .unit(UnitDefinition::linear("centimeters", "Centimeters", "cm", 0.01))
        .unit(UnitDefinition::linear("decimeters", "Decimeters", "dm", 0.1))
        .unit(UnitDefinition::linear("meters", "Meters", "m", 1.0))
        .unit(UnitDefinition::linear("dekameters", "Dekameters", "dam", 10.0))
        .unit(UnitDefinition::linear("hectometers", "Hectometers", "hm", 100.0))
        .unit(UnitDefinition::linear("kilometers", "Kilometers", "km", 1000.0))
        // 야드파운드법. 모두 정의상 정확한 값
        .unit(UnitDefinition::linear("inches", "Inches", "in", 0.0254))
        .unit(UnitDefinition::linear("feet", "Feet", "ft", 0.3048))
        .unit(UnitDefinition::linear("yards", "Yards", "yd", 0.9144))
        .unit(UnitDefinition::linear("miles", "Miles", "mi", 1609.344))
        .pair("meters", "feet", "1 ft = 0.3048 m (exact)")
        .pair("centimeters", "inches", "1 in = 2.54 cm (exact)")
        .pair("millimeters", "inches", "1 in = 25.4 mm (exact)")
        .pair("kilometers", "miles", "1 mi = 1.609344 km (exact)")
        .pair("meters", "yards", "1 yd = 0.9144 m (exact)")
        .pair("feet", "inches", "1 ft = 12 in")
        .pair("yards", "feet", "1 yd = 3 ft")
        .pair("miles", "feet", "1 mi = 5280 ft")
        .pair("meters", "centimeters", "1 m = 100 cm")
        .pair("kilometers", "meters", "1 km = 1000 m")
        .default_pair("meters-feet")
}
