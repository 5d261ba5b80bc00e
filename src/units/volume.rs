use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 미국 갤런 [L]. 나머지 미국 액량 단위는 갤런의 정확한 분수이다.
const US_GALLON_L: f64 = 3.785411784;

/// 체적 카테고리. 내부 기준은 리터이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("volume", "Volume", "liters")
        .unit(UnitDefinition::linear("milliliters", "Milliliters", "mL", 0.001))
        .unit(UnitDefinition::linear("liters", "Liters", "L", 1.0))
        .unit(UnitDefinition::linear("teaspoons", "Teaspoons", "tsp", US_GALLON_L / 768.0))
        .unit(UnitDefinition::linear("tablespoons", "Tablespoons", "tbsp", US_GALLON_L / 256.0))
        .unit(UnitDefinition::linear("fluid-ounces", "Fluid Ounces", "fl oz", US_GALLON_L / 128.0))
        .unit(UnitDefinition::linear("cups", "US Cups", "cup", US_GALLON_L / 16.0))
        .unit(UnitDefinition::linear("pints", "US Pints", "pt", US_GALLON_L / 8.0))
        .unit(UnitDefinition::linear("quarts", "US Quarts", "qt", US_GALLON_L / 4.0))
        .unit(UnitDefinition::linear("gallons", "US Gallons", "gal", US_GALLON_L))
        .pair("liters", "gallons", "1 US gal = 3.785411784 L (exact)")
        .pair("milliliters", "fluid-ounces", "1 US fl oz = 29.5735295625 mL")
        .pair("liters", "quarts", "1 US qt = 1/4 gal")
        .pair("cups", "milliliters", "1 US cup = 1/16 gal")
        .pair("tablespoons", "teaspoons", "1 tbsp = 3 tsp")
        .pair("gallons", "pints", "1 gal = 8 pt")
        .default_pair("liters-gallons")
}
