use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 1 US mpg 를 km/L 로 환산한 값 (1.609344 / 3.785411784)
const KM_PER_L_PER_MPG: f64 = 1.609344 / 3.785411784;

/// 연비 카테고리. 내부 기준은 km/L 이다.
/// L/100km 는 역수 관계라 함수 쌍으로 정의하며, 0 입력은 무한대가 되어 빈 값으로 표시된다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("fuel-economy", "Fuel Economy", "kilometers per liter")
        .unit(UnitDefinition::linear("kilometers-per-liter", "Kilometers per Liter", "km/L", 1.0))
        .unit(UnitDefinition::linear("miles-per-gallon", "Miles per US Gallon", "mpg", KM_PER_L_PER_MPG))
        .unit(UnitDefinition::custom(
            "liters-per-100km",
            "Liters per 100 km",
            "L/100km",
            per_hundred_reciprocal,
            per_hundred_reciprocal,
        ))
        .pair("miles-per-gallon", "liters-per-100km", "L/100km = 235.215 / mpg")
        .pair("kilometers-per-liter", "liters-per-100km", "L/100km = 100 / (km/L)")
        .pair("miles-per-gallon", "kilometers-per-liter", "1 mpg ≈ 0.425144 km/L")
        .default_pair("miles-per-gallon-liters-per-100km")
}

/// km/L ↔ L/100km. 자기 자신이 역함수이다.
fn per_hundred_reciprocal(value: f64) -> f64 {
    100.0 / value
}
