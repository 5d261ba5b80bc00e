//! 선택/동기화 코디네이터 시나리오 테스트.
use unit_converter::catalog::Catalog;
use unit_converter::sync::{
    dispatch, initial_state, Event, Field, Render, SyncOptions, WidgetState,
};

fn start() -> (Catalog, SyncOptions, WidgetState, Render) {
    let catalog = Catalog::builtin();
    let options = SyncOptions::default();
    let (state, render) = initial_state(&catalog, &options, None);
    (catalog, options, state, render)
}

fn edit(field: Field, text: &str) -> Event {
    Event::FieldEdited {
        field,
        text: text.to_string(),
    }
}

#[test]
fn initial_state_selects_first_category_default_pair() {
    let (_, _, state, render) = start();
    assert_eq!(state.selection.category_id.as_deref(), Some("length"));
    assert_eq!(state.selection.conversion_id.as_deref(), Some("meters-feet"));
    assert!(render.resolved);
    assert_eq!(render.from_label, "Meters");
    assert_eq!(render.from_unit, "m");
    assert_eq!(render.to_label, "Feet");
    assert_eq!(render.to_unit, "ft");
    assert_eq!(render.from_text, "1");
    assert_eq!(render.to_text, "3.2808");
    assert!(!render.note.is_empty());
}

#[test]
fn unknown_preferred_category_falls_back_to_first() {
    let catalog = Catalog::builtin();
    let (state, _) = initial_state(&catalog, &SyncOptions::default(), Some("does-not-exist"));
    assert_eq!(state.selection.category_id.as_deref(), Some("length"));
}

#[test]
fn editing_from_updates_to() {
    let (catalog, options, state, _) = start();
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::From, "1,000"));
    assert_eq!(state.selection.last_edited, Field::From);
    assert_eq!(render.from_text, "1,000");
    assert_eq!(render.to_text, "3280.84");
}

#[test]
fn editing_to_updates_from() {
    let (catalog, options, state, _) = start();
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::To, "3.2808398950131"));
    assert_eq!(state.selection.last_edited, Field::To);
    assert_eq!(render.from_text, "1");
}

#[test]
fn blank_and_invalid_input_clear_the_derived_field() {
    let (catalog, options, state, _) = start();
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::From, "   "));
    assert_eq!(render.to_text, "");
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::From, "x12"));
    assert_eq!(render.to_text, "");
    assert_eq!(render.from_text, "x12");
    // 앞쪽 숫자만 읽고 원문은 그대로 둔다
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::From, "12 m"));
    assert_eq!(render.to_text, "39.3701");
    assert_eq!(render.from_text, "12 m");
    let (_, render) = dispatch(&catalog, &options, state, edit(Field::To, ""));
    assert_eq!(render.from_text, "");
}

#[test]
fn reverse_twice_restores_pair_and_texts() {
    let (catalog, options, state, before) = start();
    let (state, mid) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    assert!(mid.reversed);
    assert_eq!(mid.from_unit, "ft");
    assert_eq!(mid.to_unit, "m");
    assert_eq!(mid.from_text, before.to_text);
    assert_eq!(mid.to_text, before.from_text);

    let (state, after) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    assert_eq!(after, before);
    assert_eq!(state.selection.conversion_id.as_deref(), Some("meters-feet"));
}

#[test]
fn reverse_after_editing_to_keeps_user_text() {
    let (catalog, options, state, _) = start();
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::To, "10"));
    assert_eq!(render.from_text, "3.048");
    let (state, render) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    assert_eq!(render.from_unit, "ft");
    assert_eq!(render.from_text, "10");
    assert_eq!(render.to_text, "3.048");
    let (_, render) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    assert_eq!(render.from_text, "3.048");
    assert_eq!(render.to_text, "10");
}

#[test]
fn category_change_reseeds_and_resets_direction() {
    let (catalog, options, state, _) = start();
    let (state, _) = dispatch(&catalog, &options, state, edit(Field::To, "42"));
    let (state, _) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    let (state, render) = dispatch(
        &catalog,
        &options,
        state,
        Event::CategorySelected("mass".into()),
    );
    assert_eq!(state.selection.category_id.as_deref(), Some("mass"));
    assert_eq!(state.selection.conversion_id.as_deref(), Some("kilograms-pounds"));
    assert!(!state.selection.reversed);
    assert_eq!(state.selection.last_edited, Field::From);
    assert_eq!(render.from_text, "1");
    assert_eq!(render.to_text, "2.2046");
}

#[test]
fn conversion_change_reseeds_from_field() {
    let (catalog, options, state, _) = start();
    let (state, _) = dispatch(&catalog, &options, state, edit(Field::From, "5"));
    let (state, render) = dispatch(
        &catalog,
        &options,
        state,
        Event::ConversionSelected("kilometers-miles".into()),
    );
    assert_eq!(state.selection.conversion_id.as_deref(), Some("kilometers-miles"));
    assert_eq!(render.from_text, "1");
    assert_eq!(render.to_text, "0.621371");
}

#[test]
fn unknown_selection_events_are_ignored() {
    let (catalog, options, state, before) = start();
    let (state, render) = dispatch(
        &catalog,
        &options,
        state,
        Event::CategorySelected("bogus".into()),
    );
    assert_eq!(render, before);
    // 다른 카테고리의 쌍 id 는 현재 카테고리에서 찾을 수 없다
    let (_, render) = dispatch(
        &catalog,
        &options,
        state,
        Event::ConversionSelected("kilograms-pounds".into()),
    );
    assert_eq!(render, before);
}

#[test]
fn edits_during_sync_are_ignored() {
    let (catalog, options, mut state, before) = start();
    state.syncing = true;
    let (state, render) = dispatch(&catalog, &options, state, edit(Field::To, "99"));
    assert_eq!(render.to_text, before.to_text);
    assert_eq!(render.from_text, before.from_text);
    assert!(state.syncing);
}

#[test]
fn reverse_twice_after_focusing_derived_field_restores_texts() {
    let (catalog, options, state, before) = start();
    let (state, _) = dispatch(&catalog, &options, state, Event::FieldFocused(Field::To));
    let (state, mid) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    assert_eq!(mid.from_text, "3.2808");
    assert_eq!(mid.to_text, "1");
    let (state, after) = dispatch(&catalog, &options, state, Event::ReverseToggled);
    assert_eq!(after, before);
    assert_eq!(state.source, Field::From);
}

#[test]
fn focus_changes_driver_without_recompute() {
    let (catalog, options, state, before) = start();
    let (state, render) = dispatch(&catalog, &options, state, Event::FieldFocused(Field::To));
    assert_eq!(state.selection.last_edited, Field::To);
    assert_eq!(render, before);
}

#[test]
fn unresolved_selection_renders_placeholder_and_clears_derived() {
    let (catalog, options, mut state, _) = start();
    state.selection.conversion_id = Some("stale".into());
    let (_, render) = dispatch(&catalog, &options, state, edit(Field::From, "3"));
    assert!(!render.resolved);
    assert_eq!(render.from_label, "");
    assert_eq!(render.note, "");
    assert_eq!(render.to_text, "");
}

#[test]
fn custom_seed_and_scientific_format_apply() {
    let catalog = Catalog::builtin();
    let options = SyncOptions {
        format: unit_converter::engine::FormatPolicy::Scientific,
        seed: "1".into(),
    };
    let (state, _) = initial_state(&catalog, &options, Some("digital"));
    let (_, render) = dispatch(
        &catalog,
        &options,
        state,
        Event::ConversionSelected("terabytes-gigabytes".into()),
    );
    assert_eq!(render.to_text, "1024");

    let options = SyncOptions {
        seed: "2".into(),
        ..SyncOptions::default()
    };
    let (_, render) = initial_state(&catalog, &options, Some("length"));
    assert_eq!(render.from_text, "2");
    assert_eq!(render.to_text, "6.5617");
}

#[test]
fn fuel_economy_zero_renders_blank() {
    let catalog = Catalog::builtin();
    let options = SyncOptions::default();
    let (state, render) = initial_state(&catalog, &options, Some("fuel-economy"));
    assert_eq!(render.to_unit, "L/100km");
    // 1 mpg ≈ 235.2146 L/100km
    assert_eq!(render.to_text, "235.2146");
    let (_, render) = dispatch(&catalog, &options, state, edit(Field::From, "0"));
    assert_eq!(render.to_text, "");
}
