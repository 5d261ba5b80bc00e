//! 선택 상태를 변환 문맥으로 해석하고, 입력 문자열을 파싱/변환/포맷한다.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CategoryDefinition, ConversionDefinition, UnitDefinition};
use crate::sync::SelectionState;
use crate::transform::{Mapping, Transform};

/// 현재 선택으로부터 해석된 변환 문맥.
///
/// `reversed` 상태이면 from/to 단위와 두 방향의 변환이 카탈로그 정의와 반대로
/// 바뀌어 있다. 카탈로그 자체는 건드리지 않는다.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    pub category: &'a CategoryDefinition,
    pub conversion: &'a ConversionDefinition,
    pub from_unit: &'a UnitDefinition,
    pub to_unit: &'a UnitDefinition,
    /// from 필드 → to 필드
    pub forward: Mapping,
    /// to 필드 → from 필드
    pub reverse: Mapping,
}

/// 선택 상태를 변환 문맥으로 해석한다.
///
/// 카테고리나 쌍 id가 없거나 카탈로그에 없으면 `None`을 돌려준다.
/// 호출자는 이를 오류가 아닌 "선택 없음"으로 취급한다.
pub fn resolve_context<'a>(
    state: &SelectionState,
    catalog: &'a Catalog,
) -> Option<ConversionContext<'a>> {
    let category = catalog.find_category(state.category_id.as_deref()?)?;
    let conversion = category.find_conversion(state.conversion_id.as_deref()?)?;
    let stored_from = category.find_unit(&conversion.from_key)?;
    let stored_to = category.find_unit(&conversion.to_key)?;

    let forward = Mapping::forward(conversion.transform);
    let reverse = Mapping::reverse(conversion.transform);
    Some(if state.reversed {
        ConversionContext {
            category,
            conversion,
            from_unit: stored_to,
            to_unit: stored_from,
            forward: reverse,
            reverse: forward,
        }
    } else {
        ConversionContext {
            category,
            conversion,
            from_unit: stored_from,
            to_unit: stored_to,
            forward,
            reverse,
        }
    })
}

/// 선택된 변환을 값에 적용한다.
pub fn convert(value: f64, mapping: &Mapping) -> f64 {
    mapping.apply(value)
}

/// 같은 카테고리의 두 단위 사이를 기준 단위를 거쳐 변환한다.
/// 같은 단위면 변환식을 거치지 않고 값을 그대로 돌려준다.
pub fn convert_units(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    if from.key == to.key {
        return value;
    }
    Transform::between(from.scale, to.scale).apply(value)
}

/// 사용자 입력 파싱 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// 빈 문자열 또는 공백뿐인 입력
    Blank,
    /// 숫자로 해석할 수 없는 입력
    Invalid,
    /// 유한한 숫자
    Value(f64),
}

/// 천 단위 구분자(`,`)를 제거한 뒤 앞에서부터 읽을 수 있는 가장 긴 숫자를 파싱한다.
///
/// `"5 ft"`는 5, 지수를 입력하는 중인 `"1e"`는 1이다.
/// 숫자로 시작하지 않거나 `inf`, `NaN` 같은 비유한 값은 `Invalid`로 취급한다.
pub fn parse_user_input(raw: &str) -> ParsedInput {
    if raw.trim().is_empty() {
        return ParsedInput::Blank;
    }
    let sanitized: String = raw.chars().filter(|c| *c != ',').collect();
    let prefix = numeric_prefix(sanitized.trim());
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => ParsedInput::Value(v),
        _ => ParsedInput::Invalid,
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` 형태의 가장 긴 접두사. 가수에 숫자가 없으면 빈 문자열.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return "";
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &text[..end]
}

/// 결과 표시 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPolicy {
    /// 크기에 따라 소수 자릿수 2/4/6
    #[default]
    Tiered,
    /// Tiered + 1e9 이상, 1e-6 미만은 지수 표기
    Scientific,
}

const SCIENTIFIC_UPPER: f64 = 1e9;
const SCIENTIFIC_LOWER: f64 = 1e-6;
const SCIENTIFIC_DIGITS: usize = 6;

/// 크기에 따라 최대 소수 자릿수를 정한다.
fn max_fraction_digits(abs: f64) -> usize {
    if abs >= 1000.0 {
        2
    } else if abs >= 1.0 {
        4
    } else {
        6
    }
}

/// 숫자를 화면 표시용 문자열로 만든다.
///
/// 자릿수 구분 기호는 넣지 않는다. 결과 문자열은 다시 입력으로 파싱될 수 있어야 한다.
/// NaN/무한대는 빈 문자열이다.
pub fn format_result(value: f64, policy: FormatPolicy) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let abs = value.abs();
    if policy == FormatPolicy::Scientific
        && (abs >= SCIENTIFIC_UPPER || (abs > 0.0 && abs < SCIENTIFIC_LOWER))
    {
        return format_exponential(value);
    }

    round_half_up(value, max_fraction_digits(abs))
}

/// 최단 십진 표현을 기준으로 소수 `digits`자리에서 반올림(.5는 0에서 멀어지는 쪽)한다.
/// `-0`은 `0`이 된다.
fn round_half_up(value: f64, digits: usize) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let rounded = if frac_part.len() <= digits {
        text.clone()
    } else {
        let mut kept: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes().take(digits))
            .collect();
        if frac_part.as_bytes()[digits] >= b'5' {
            carry_one(&mut kept);
        }
        let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
        let int_digits: String = int_digits.iter().map(|&b| b as char).collect();
        let frac_digits: String = frac_digits.iter().map(|&b| b as char).collect();
        if digits == 0 {
            int_digits
        } else {
            format!("{int_digits}.{frac_digits}")
        }
    };
    let trimmed = trim_fraction(&rounded);
    if value.is_sign_negative() && trimmed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// 십진 숫자열에 1을 더한다. 자리올림이 넘치면 앞에 1을 붙인다.
fn carry_one(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn format_exponential(value: f64) -> String {
    let text = format!("{:.*e}", SCIENTIFIC_DIGITS, value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
        None => text,
    }
}

/// 소수부 끝의 0과 남는 소수점을 잘라낸다.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
