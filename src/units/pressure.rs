use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 표준 대기압 [Pa]
const ATM_PA: f64 = 101_325.0;

/// 압력 카테고리. 내부 기준은 파스칼이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("pressure", "Pressure", "pascals")
        .unit(UnitDefinition::linear("pascals", "Pascals", "Pa", 1.0))
        .unit(UnitDefinition::linear("kilopascals", "Kilopascals", "kPa", 1000.0))
        .unit(UnitDefinition::linear("megapascals", "Megapascals", "MPa", 1_000_000.0))
        .unit(UnitDefinition::linear("bar", "Bar", "bar", 100_000.0))
        .unit(UnitDefinition::linear("psi", "Pounds per Square Inch", "psi", 6894.76))
        .unit(UnitDefinition::linear("atmospheres", "Atmospheres", "atm", ATM_PA))
        .pair("bar", "psi", "1 psi ≈ 6894.76 Pa")
        .pair("kilopascals", "psi", "1 psi ≈ 6.89476 kPa")
        .pair("atmospheres", "kilopascals", "1 atm = 101.325 kPa (exact)")
        .pair("megapascals", "bar", "1 MPa = 10 bar")
        .default_pair("bar-psi")
}
