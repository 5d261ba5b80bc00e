use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 에너지 카테고리. 내부 기준은 줄(J)이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("energy", "Energy", "joules")
        .unit(UnitDefinition::linear("joules", "Joules", "J", 1.0))
        .unit(UnitDefinition::linear("kilojoules", "Kilojoules", "kJ", 1000.0))
        // 열화학 칼로리
        .unit(UnitDefinition::linear("calories", "Calories", "cal", 4.184))
        .unit(UnitDefinition::linear("kilocalories", "Kilocalories", "kcal", 4184.0))
        .unit(UnitDefinition::linear("btu", "British Thermal Units", "BTU", 1055.06))
        .pair("kilojoules", "kilocalories", "1 kcal = 4.184 kJ")
        .pair("joules", "calories", "1 cal = 4.184 J")
        .pair("kilojoules", "btu", "1 BTU ≈ 1.05506 kJ")
        .default_pair("kilojoules-kilocalories")
}
