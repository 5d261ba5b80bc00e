//! 변환 엔진(파싱/변환/포맷) 회귀 테스트.
use unit_converter::catalog::Catalog;
use unit_converter::engine::{
    convert, convert_units, format_result, parse_user_input, resolve_context, FormatPolicy,
    ParsedInput,
};
use unit_converter::sync::SelectionState;
use unit_converter::transform::{BaseScale, Mapping, Transform};

fn selection(category: &str, conversion: &str, reversed: bool) -> SelectionState {
    SelectionState {
        category_id: Some(category.into()),
        conversion_id: Some(conversion.into()),
        reversed,
        ..SelectionState::default()
    }
}

#[test]
fn ratio_transform_round_trips() {
    let t = Transform::Ratio(0.3048);
    for v in [-1e6, -12.5, 0.0, 1.0, 3.25, 1e9] {
        let back = t.invert(t.apply(v));
        assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "v={v} back={back}");
    }
}

#[test]
fn linear_transform_applies_offset_and_round_trips() {
    let t = Transform::Linear {
        multiplier: 1.8,
        offset: 32.0,
    };
    assert!((t.apply(100.0) - 212.0).abs() < 1e-12);
    assert!((t.apply(-40.0) + 40.0).abs() < 1e-12);
    for v in [-273.15, 0.0, 37.0, 1000.0] {
        assert!((t.invert(t.apply(v)) - v).abs() < 1e-9);
    }
}

#[test]
fn between_picks_simplest_transform() {
    assert_eq!(
        Transform::between(BaseScale::Linear(1.0), BaseScale::Linear(1.0)),
        Transform::Identity
    );
    assert_eq!(
        Transform::between(BaseScale::Linear(1000.0), BaseScale::Linear(1.0)),
        Transform::Ratio(1000.0)
    );
    // 아핀 + 선형 조합은 Linear 로 합쳐진다
    let t = Transform::between(
        BaseScale::Affine {
            factor: 1.0,
            offset: 0.5,
        },
        BaseScale::Linear(2.0),
    );
    assert_eq!(
        t,
        Transform::Linear {
            multiplier: 0.5,
            offset: 0.25
        }
    );
}

#[test]
fn resolve_context_swaps_units_when_reversed() {
    let catalog = Catalog::builtin();
    let fwd = resolve_context(&selection("length", "meters-feet", false), &catalog)
        .expect("resolved");
    assert_eq!(fwd.from_unit.symbol, "m");
    assert_eq!(fwd.to_unit.symbol, "ft");

    let rev = resolve_context(&selection("length", "meters-feet", true), &catalog)
        .expect("resolved");
    assert_eq!(rev.from_unit.symbol, "ft");
    assert_eq!(rev.to_unit.symbol, "m");
    assert!((convert(1.0, &rev.forward) - 0.3048).abs() < 1e-12);
    assert!((convert(1.0, &rev.reverse) - 3.280839895).abs() < 1e-9);
}

#[test]
fn resolve_context_returns_none_for_stale_ids() {
    let catalog = Catalog::builtin();
    assert!(resolve_context(&selection("length", "kilograms-pounds", false), &catalog).is_none());
    assert!(resolve_context(&selection("nope", "meters-feet", false), &catalog).is_none());
    assert!(resolve_context(&SelectionState::default(), &catalog).is_none());
}

#[test]
fn temperature_uses_function_pairs() {
    let catalog = Catalog::builtin();
    let ctx = resolve_context(&selection("temperature", "celsius-fahrenheit", false), &catalog)
        .expect("resolved");
    assert!((convert(100.0, &ctx.forward) - 212.0).abs() < 1e-9);
    assert!((convert(32.0, &ctx.reverse) - 0.0).abs() < 1e-9);

    let ctx = resolve_context(&selection("temperature", "fahrenheit-kelvin", false), &catalog)
        .expect("resolved");
    assert!((convert(-459.67, &ctx.forward)).abs() < 1e-9);
}

#[test]
fn same_unit_conversion_is_identity() {
    let catalog = Catalog::builtin();
    let temp = catalog.find_category("temperature").expect("temperature");
    let f = temp.find_unit("fahrenheit").expect("fahrenheit");
    // 같은 단위면 변환식을 거치지 않아 오차가 없다
    assert_eq!(convert_units(98.6, f, f), 98.6);
    let c = temp.find_unit("celsius").expect("celsius");
    assert!((convert_units(98.6, f, c) - 37.0).abs() < 1e-9);
}

#[test]
fn parse_blank_and_whitespace() {
    assert_eq!(parse_user_input(""), ParsedInput::Blank);
    assert_eq!(parse_user_input("   "), ParsedInput::Blank);
    assert_eq!(parse_user_input("\t"), ParsedInput::Blank);
}

#[test]
fn parse_strips_thousands_separators() {
    assert_eq!(parse_user_input("1,234.5"), ParsedInput::Value(1234.5));
    assert_eq!(parse_user_input(" 1,000,000 "), ParsedInput::Value(1_000_000.0));
    assert_eq!(parse_user_input("-2.5e3"), ParsedInput::Value(-2500.0));
}

#[test]
fn parse_reads_leading_number_and_ignores_trailing_text() {
    assert_eq!(parse_user_input("12abc"), ParsedInput::Value(12.0));
    assert_eq!(parse_user_input("5 ft"), ParsedInput::Value(5.0));
    assert_eq!(parse_user_input("3.5kg"), ParsedInput::Value(3.5));
    assert_eq!(parse_user_input("1..2"), ParsedInput::Value(1.0));
    assert_eq!(parse_user_input(".5"), ParsedInput::Value(0.5));
    assert_eq!(parse_user_input("-7."), ParsedInput::Value(-7.0));
    // 지수 입력 중간 상태
    assert_eq!(parse_user_input("1e"), ParsedInput::Value(1.0));
    assert_eq!(parse_user_input("2E-"), ParsedInput::Value(2.0));
    assert_eq!(parse_user_input("2E-3x"), ParsedInput::Value(0.002));
}

#[test]
fn parse_rejects_non_numeric_and_non_finite() {
    for raw in ["abc", "-", ".", ",", "+.", "e5", "inf", "Infinity", "NaN", "1e999"] {
        assert_eq!(parse_user_input(raw), ParsedInput::Invalid, "raw={raw:?}");
    }
}

#[test]
fn format_uses_magnitude_tiers() {
    let p = FormatPolicy::Tiered;
    assert_eq!(format_result(3.280839895, p), "3.2808");
    assert_eq!(format_result(1234.5678, p), "1234.57");
    assert_eq!(format_result(0.0254, p), "0.0254");
    assert_eq!(format_result(0.123456789, p), "0.123457");
    assert_eq!(format_result(1000.0, p), "1000");
    assert_eq!(format_result(1_000_000.0, p), "1000000");
    assert_eq!(format_result(-0.0000001, p), "0");
}

#[test]
fn format_rounds_ties_away_from_zero() {
    let p = FormatPolicy::Tiered;
    assert_eq!(format_result(1000.125, p), "1000.13");
    assert_eq!(format_result(1.03125, p), "1.0313");
    assert_eq!(format_result(-1.03125, p), "-1.0313");
    assert_eq!(format_result(999.99995, p), "1000");
    assert_eq!(format_result(9999.995, p), "10000");
    assert_eq!(format_result(0.0000005, p), "0.000001");
}

#[test]
fn format_never_emits_nan_or_infinity() {
    for policy in [FormatPolicy::Tiered, FormatPolicy::Scientific] {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(format_result(v, policy), "");
        }
        for v in [f64::MAX, f64::MIN_POSITIVE, -1e300, 1e-300] {
            let s = format_result(v, policy);
            assert!(!s.contains("NaN") && !s.contains("inf"), "{s}");
        }
    }
}

#[test]
fn scientific_switches_to_exponent_outside_range() {
    let p = FormatPolicy::Scientific;
    assert_eq!(format_result(1.5e9, p), "1.5e9");
    assert_eq!(format_result(2.5e-7, p), "2.5e-7");
    assert_eq!(format_result(123.456789, p), "123.4568");
    assert_eq!(format_result(0.0, p), "0");
    // 지수 표기도 다시 입력으로 파싱된다
    assert_eq!(parse_user_input(&format_result(1.5e9, p)), ParsedInput::Value(1.5e9));
}

#[test]
fn mapping_direction_flag_selects_inverse() {
    let t = Transform::Ratio(4.0);
    assert_eq!(Mapping::forward(t).apply(2.0), 8.0);
    assert_eq!(Mapping::reverse(t).apply(8.0), 2.0);
}
