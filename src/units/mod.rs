//! 내장 카테고리 표 모음. 각 모듈은 카테고리 하나를 정의한다.

pub mod area;
pub mod digital;
pub mod energy;
pub mod fuel_economy;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod volume;

use crate::catalog::CategoryDefinition;

/// 화면에 나열되는 순서대로 내장 카테고리를 만든다.
pub fn builtin_categories() -> Vec<CategoryDefinition> {
    vec![
        length::category(),
        mass::category(),
        temperature::category(),
        volume::category(),
        area::category(),
        power::category(),
        digital::category(),
        energy::category(),
        speed::category(),
        pressure::category(),
        fuel_economy::category(),
    ]
}
