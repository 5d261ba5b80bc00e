use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::engine::{self, FormatPolicy, ParsedInput};
use crate::i18n::{keys, Translator};
use crate::sync::{Event, Field, Render, SyncOptions, WidgetState};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectCategory,
    SelectConversion,
    EditFrom,
    EditTo,
    Reverse,
    AllUnits,
    Settings,
    Exit,
}

/// 현재 변환 상태를 출력한다.
pub fn print_render(tr: &Translator, catalog: &Catalog, render: &Render) {
    let category_name = render
        .category_id
        .as_deref()
        .and_then(|id| catalog.find_category(id))
        .map(|c| c.name.as_str())
        .unwrap_or("-");
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    println!("{}: {category_name}", tr.t(keys::LABEL_CATEGORY));
    if !render.resolved {
        println!("{}", tr.t(keys::LABEL_PLACEHOLDER));
        return;
    }
    let reversed = if render.reversed {
        format!(" {}", tr.t(keys::LABEL_REVERSED))
    } else {
        String::new()
    };
    println!(
        "{}: {} → {}{reversed}",
        tr.t(keys::LABEL_CONVERSION),
        render.from_label,
        render.to_label
    );
    println!("  {} [{}]: {}", render.from_label, render.from_unit, render.from_text);
    println!("  {} [{}]: {}", render.to_label, render.to_unit, render.to_text);
    if !render.note.is_empty() {
        println!("{}: {}", tr.t(keys::LABEL_NOTE), render.note);
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MENU_SELECT_CATEGORY,
        keys::MENU_SELECT_CONVERSION,
        keys::MENU_EDIT_FROM,
        keys::MENU_EDIT_TO,
        keys::MENU_REVERSE,
        keys::MENU_ALL_UNITS,
        keys::MENU_SETTINGS,
        keys::MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SelectCategory),
            "2" => return Ok(MenuChoice::SelectConversion),
            "3" => return Ok(MenuChoice::EditFrom),
            "4" => return Ok(MenuChoice::EditTo),
            "5" => return Ok(MenuChoice::Reverse),
            "6" => return Ok(MenuChoice::AllUnits),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 카테고리 목록을 보여주고 선택 이벤트를 만든다. 잘못된 번호면 None.
pub fn choose_category(tr: &Translator, catalog: &Catalog) -> Result<Option<Event>, AppError> {
    let options = catalog.list_categories();
    for (i, opt) in options.iter().enumerate() {
        println!("{:>2}) {}", i + 1, opt.name);
    }
    let picked = read_index(tr, options.len())?;
    Ok(picked.map(|i| Event::CategorySelected(options[i].id.clone())))
}

/// 현재 카테고리의 단위 쌍 목록을 보여주고 선택 이벤트를 만든다.
pub fn choose_conversion(
    tr: &Translator,
    catalog: &Catalog,
    render: &Render,
) -> Result<Option<Event>, AppError> {
    let options = render
        .category_id
        .as_deref()
        .map(|id| catalog.list_conversions(id))
        .unwrap_or_default();
    for (i, opt) in options.iter().enumerate() {
        let marker = if render.conversion_id.as_deref() == Some(opt.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{:>2}){marker}{}", i + 1, opt.label);
    }
    let picked = read_index(tr, options.len())?;
    Ok(picked.map(|i| Event::ConversionSelected(options[i].id.clone())))
}

/// 필드에 포커스를 준 뒤 입력한 원문을 편집 이벤트로 만든다.
pub fn edit_field(tr: &Translator, field: Field) -> Result<Event, AppError> {
    let text = read_line(&tr.t(keys::PROMPT_VALUE))?;
    Ok(Event::FieldEdited {
        field,
        text: text.trim_end_matches(['\r', '\n']).to_string(),
    })
}

/// 구동 필드 값을 카테고리의 모든 단위로 환산해 출력한다.
pub fn print_all_units(
    tr: &Translator,
    catalog: &Catalog,
    state: &WidgetState,
    options: &SyncOptions,
) {
    let Some(context) = engine::resolve_context(&state.selection, catalog) else {
        println!("{}", tr.t(keys::LABEL_PLACEHOLDER));
        return;
    };
    let source = state.source;
    let unit = match source {
        Field::From => context.from_unit,
        Field::To => context.to_unit,
    };
    let ParsedInput::Value(value) = engine::parse_user_input(state.fields.get(source)) else {
        println!("{}", tr.t(keys::LABEL_PLACEHOLDER));
        return;
    };
    println!("\n-- {}: {value} {} --", tr.t(keys::LABEL_ALL_UNITS), unit.symbol);
    for target in &context.category.units {
        let converted = engine::convert_units(value, unit, target);
        println!(
            "  {:<24} {:>16} {}",
            target.name,
            engine::format_result(converted, options.format),
            target.symbol
        );
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_FORMAT),
        format_label(tr, cfg.format)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.format = FormatPolicy::Tiered,
        "2" => cfg.format = FormatPolicy::Scientific,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 표시 형식의 현지화된 이름.
pub fn format_label(tr: &Translator, policy: FormatPolicy) -> String {
    match policy {
        FormatPolicy::Tiered => tr.t(keys::SETTINGS_FORMAT_TIERED),
        FormatPolicy::Scientific => tr.t(keys::SETTINGS_FORMAT_SCIENTIFIC),
    }
}

/// 1부터 시작하는 번호를 읽어 0 기반 인덱스로 돌려준다.
fn read_index(tr: &Translator, len: usize) -> Result<Option<usize>, AppError> {
    let sel = read_line(&tr.t(keys::PROMPT_NUMBER))?;
    match sel.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(None)
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
