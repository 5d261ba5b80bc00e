//! 두 입력 필드의 선택/동기화 상태 머신.
//!
//! 상태는 [`WidgetState`] 값 하나로 명시적으로 소유되며, 뷰는 이벤트마다
//! [`dispatch`]를 호출해 다음 상태와 [`Render`]를 받는다.

use tracing::debug;

use crate::catalog::Catalog;
use crate::engine::{self, FormatPolicy, ParsedInput};

/// 카테고리/쌍이 바뀔 때 from 필드에 채우는 기본값.
pub const DEFAULT_SEED: &str = "1";

/// 두 입력 필드 중 하나.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    From,
    To,
}

impl Field {
    pub fn opposite(self) -> Self {
        match self {
            Field::From => Field::To,
            Field::To => Field::From,
        }
    }
}

/// 어떤 카테고리/쌍/방향이 활성인지와 마지막으로 사용자가 다룬 필드.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub category_id: Option<String>,
    pub conversion_id: Option<String>,
    pub reversed: bool,
    pub last_edited: Field,
}

/// 두 필드의 원문 텍스트.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldTexts {
    pub from: String,
    pub to: String,
}

impl FieldTexts {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::From => &self.from,
            Field::To => &self.to,
        }
    }

    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::From => self.from = text,
            Field::To => self.to = text,
        }
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

/// 위젯 하나의 전체 상태.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    pub selection: SelectionState,
    pub fields: FieldTexts,
    /// 사용자가 입력했거나 기본값으로 채운 원문이 들어 있는 필드. 반대편은 계산값이다.
    pub source: Field,
    /// 동기화 중 프로그램이 쓴 값이 다시 입력 이벤트로 들어오는 것을 막는다.
    pub syncing: bool,
}

/// 뷰가 코디네이터에 넘기는 이벤트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CategorySelected(String),
    ConversionSelected(String),
    ReverseToggled,
    FieldEdited { field: Field, text: String },
    FieldFocused(Field),
    /// 상태 변경 없이 다시 그린다.
    Refresh,
}

/// 동기화 동작 옵션.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOptions {
    pub format: FormatPolicy,
    pub seed: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            format: FormatPolicy::default(),
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

/// 이벤트 처리 후 뷰가 그릴 내용.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Render {
    /// 활성 변환이 해석되었는지. false면 뷰는 "변환 선택" 안내를 표시한다.
    pub resolved: bool,
    pub category_id: Option<String>,
    pub conversion_id: Option<String>,
    pub from_label: String,
    pub from_unit: String,
    pub to_label: String,
    pub to_unit: String,
    pub from_text: String,
    pub to_text: String,
    pub note: String,
    pub reversed: bool,
}

/// 초기 상태를 만든다. 선호 카테고리가 카탈로그에 없으면 첫 카테고리를 쓴다.
pub fn initial_state(
    catalog: &Catalog,
    options: &SyncOptions,
    preferred_category: Option<&str>,
) -> (WidgetState, Render) {
    let category_id = preferred_category
        .and_then(|id| catalog.find_category(id))
        .or_else(|| catalog.first_category())
        .map(|c| c.id.clone());
    match category_id {
        Some(id) => dispatch(
            catalog,
            options,
            WidgetState::default(),
            Event::CategorySelected(id),
        ),
        None => {
            let state = WidgetState::default();
            let render = render(catalog, &state);
            (state, render)
        }
    }
}

/// 이벤트 하나를 처리해 다음 상태와 그릴 내용을 돌려준다.
pub fn dispatch(
    catalog: &Catalog,
    options: &SyncOptions,
    mut state: WidgetState,
    event: Event,
) -> (WidgetState, Render) {
    debug!(?event, "dispatch");
    match event {
        Event::CategorySelected(id) => {
            if let Some(category) = catalog.find_category(&id) {
                state.selection = SelectionState {
                    category_id: Some(category.id.clone()),
                    conversion_id: category.default_conversion().map(|c| c.id.clone()),
                    reversed: false,
                    last_edited: Field::From,
                };
                reset_inputs(catalog, options, &mut state);
            } else {
                debug!(%id, "unknown category ignored");
            }
        }
        Event::ConversionSelected(id) => {
            let known = state
                .selection
                .category_id
                .as_deref()
                .and_then(|c| catalog.find_category(c))
                .and_then(|c| c.find_conversion(&id))
                .is_some();
            if known {
                state.selection.conversion_id = Some(id);
                reset_inputs(catalog, options, &mut state);
            } else {
                debug!(%id, "unknown conversion ignored");
            }
        }
        Event::ReverseToggled => {
            state.selection.reversed = !state.selection.reversed;
            state.fields.swap();
            state.selection.last_edited = state.selection.last_edited.opposite();
            // 포커스만 옮긴 계산값이 아니라 원문 쪽에서 다시 계산한다.
            state.source = state.source.opposite();
            let source = state.source;
            sync_values(catalog, options, &mut state, source);
        }
        Event::FieldEdited { field, text } => {
            if state.syncing {
                debug!(?field, "edit during sync ignored");
            } else {
                state.syncing = true;
                state.selection.last_edited = field;
                state.source = field;
                state.fields.set(field, text);
                sync_values(catalog, options, &mut state, field);
                state.syncing = false;
            }
        }
        Event::FieldFocused(field) => {
            state.selection.last_edited = field;
        }
        Event::Refresh => {}
    }
    let render = render(catalog, &state);
    (state, render)
}

/// from 필드를 기본값으로 채우고 to 필드를 다시 계산한다.
fn reset_inputs(catalog: &Catalog, options: &SyncOptions, state: &mut WidgetState) {
    state.selection.last_edited = Field::From;
    state.source = Field::From;
    state.fields.from = options.seed.clone();
    sync_values(catalog, options, state, Field::From);
}

/// 구동 필드의 원문을 읽어 반대편 필드를 덮어쓴다.
fn sync_values(catalog: &Catalog, options: &SyncOptions, state: &mut WidgetState, source: Field) {
    let target = source.opposite();
    let Some(context) = engine::resolve_context(&state.selection, catalog) else {
        state.fields.set(target, String::new());
        return;
    };
    let mapping = match source {
        Field::From => context.forward,
        Field::To => context.reverse,
    };
    let text = match engine::parse_user_input(state.fields.get(source)) {
        ParsedInput::Blank | ParsedInput::Invalid => String::new(),
        ParsedInput::Value(v) => engine::format_result(engine::convert(v, &mapping), options.format),
    };
    state.fields.set(target, text);
}

/// 현재 상태를 뷰가 그릴 값으로 만든다.
pub fn render(catalog: &Catalog, state: &WidgetState) -> Render {
    let base = Render {
        category_id: state.selection.category_id.clone(),
        conversion_id: state.selection.conversion_id.clone(),
        from_text: state.fields.from.clone(),
        to_text: state.fields.to.clone(),
        reversed: state.selection.reversed,
        ..Render::default()
    };
    match engine::resolve_context(&state.selection, catalog) {
        Some(context) => Render {
            resolved: true,
            from_label: context.from_unit.name.clone(),
            from_unit: context.from_unit.symbol.clone(),
            to_label: context.to_unit.name.clone(),
            to_unit: context.to_unit.symbol.clone(),
            note: context.conversion.note.clone(),
            ..base
        },
        None => base,
    }
}
