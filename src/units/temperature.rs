use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 온도 카테고리. 내부 기준은 섭씨이며 화씨/켈빈은 함수 쌍으로 정의한다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("temperature", "Temperature", "celsius")
        .unit(UnitDefinition::custom(
            "celsius",
            "Celsius",
            "°C",
            celsius_identity,
            celsius_identity,
        ))
        .unit(UnitDefinition::custom(
            "fahrenheit",
            "Fahrenheit",
            "°F",
            fahrenheit_to_celsius,
            celsius_to_fahrenheit,
        ))
        .unit(UnitDefinition::custom(
            "kelvin",
            "Kelvin",
            "K",
            kelvin_to_celsius,
            celsius_to_kelvin,
        ))
        .pair("celsius", "fahrenheit", "°F = °C × 9/5 + 32")
        .pair("celsius", "kelvin", "K = °C + 273.15")
        .pair("fahrenheit", "kelvin", "K = (°F − 32) × 5/9 + 273.15")
        .default_pair("celsius-fahrenheit")
}

fn celsius_identity(c: f64) -> f64 {
    c
}

/// 화씨를 섭씨로 변환한다.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// 섭씨를 화씨로 변환한다.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}
