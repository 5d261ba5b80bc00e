use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MENU_SELECT_CATEGORY: &str = "menu.select_category";
    pub const MENU_SELECT_CONVERSION: &str = "menu.select_conversion";
    pub const MENU_EDIT_FROM: &str = "menu.edit_from";
    pub const MENU_EDIT_TO: &str = "menu.edit_to";
    pub const MENU_REVERSE: &str = "menu.reverse";
    pub const MENU_ALL_UNITS: &str = "menu.all_units";
    pub const MENU_SETTINGS: &str = "menu.settings";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_NUMBER: &str = "prompt.number";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const LABEL_CATEGORY: &str = "label.category";
    pub const LABEL_CONVERSION: &str = "label.conversion";
    pub const LABEL_NOTE: &str = "label.note";
    pub const LABEL_REVERSED: &str = "label.reversed";
    pub const LABEL_PLACEHOLDER: &str = "label.placeholder";
    pub const LABEL_CONVERSION_COUNT: &str = "label.conversion_count";
    pub const LABEL_ALL_UNITS: &str = "label.all_units";
    pub const BUTTON_REVERSE: &str = "button.reverse";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_FORMAT: &str = "settings.current_format";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_FORMAT: &str = "settings.format";
    pub const SETTINGS_FORMAT_TIERED: &str = "settings.format_tiered";
    pub const SETTINGS_FORMAT_SCIENTIFIC: &str = "settings.format_scientific";
    pub const SETTINGS_CUSTOM_CATALOG: &str = "settings.custom_catalog";
    pub const SETTINGS_BROWSE: &str = "settings.browse";
    pub const SETTINGS_OPACITY: &str = "settings.opacity";
    pub const SETTINGS_ALWAYS_ON_TOP: &str = "settings.always_on_top";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_RESTART_NOTE: &str = "settings.restart_note";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 내장 문자열을 쓴다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        }
        .unwrap_or(key)
        .to_string()
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블을 `a.b.c` 형태의 평평한 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "단위 변환기",
        APP_EXIT => "프로그램을 종료합니다.",
        MENU_SELECT_CATEGORY => "1) 카테고리 선택",
        MENU_SELECT_CONVERSION => "2) 변환 선택",
        MENU_EDIT_FROM => "3) 왼쪽 값 입력",
        MENU_EDIT_TO => "4) 오른쪽 값 입력",
        MENU_REVERSE => "5) 방향 전환",
        MENU_ALL_UNITS => "6) 전체 단위 표",
        MENU_SETTINGS => "7) 설정",
        MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_NUMBER => "번호 입력: ",
        PROMPT_VALUE => "값 입력: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        LABEL_CATEGORY => "카테고리",
        LABEL_CONVERSION => "변환",
        LABEL_NOTE => "참고",
        LABEL_REVERSED => "(역방향)",
        LABEL_PLACEHOLDER => "변환을 선택하세요",
        LABEL_CONVERSION_COUNT => "지원 변환 수",
        LABEL_ALL_UNITS => "전체 단위",
        BUTTON_REVERSE => "⇄ 방향 전환",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_FORMAT => "현재 표시 형식:",
        SETTINGS_OPTIONS => "1) 자릿수 단계  2) 지수 표기",
        SETTINGS_PROMPT_CHANGE => "변경할 번호 (Enter=유지): ",
        SETTINGS_INVALID => "잘못된 선택입니다. 기존 설정을 유지합니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SETTINGS_LANGUAGE => "언어",
        SETTINGS_FORMAT => "표시 형식",
        SETTINGS_FORMAT_TIERED => "자릿수 단계",
        SETTINGS_FORMAT_SCIENTIFIC => "지수 표기",
        SETTINGS_CUSTOM_CATALOG => "사용자 카탈로그",
        SETTINGS_BROWSE => "찾아보기…",
        SETTINGS_OPACITY => "창 투명도",
        SETTINGS_ALWAYS_ON_TOP => "항상 위",
        SETTINGS_SAVE => "저장",
        SETTINGS_RESTART_NOTE => "사용자 카탈로그는 다시 시작하면 적용됩니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Unit Converter",
        APP_EXIT => "Exiting application.",
        MENU_SELECT_CATEGORY => "1) Select category",
        MENU_SELECT_CONVERSION => "2) Select conversion",
        MENU_EDIT_FROM => "3) Enter left value",
        MENU_EDIT_TO => "4) Enter right value",
        MENU_REVERSE => "5) Reverse direction",
        MENU_ALL_UNITS => "6) All units table",
        MENU_SETTINGS => "7) Settings",
        MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_NUMBER => "Enter number: ",
        PROMPT_VALUE => "Value: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        LABEL_CATEGORY => "Category",
        LABEL_CONVERSION => "Conversion",
        LABEL_NOTE => "Note",
        LABEL_REVERSED => "(reversed)",
        LABEL_PLACEHOLDER => "Select a conversion",
        LABEL_CONVERSION_COUNT => "Conversions available",
        LABEL_ALL_UNITS => "All units",
        BUTTON_REVERSE => "⇄ Reverse",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_FORMAT => "Current number format:",
        SETTINGS_OPTIONS => "1) Tiered digits  2) Scientific",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter=keep): ",
        SETTINGS_INVALID => "Invalid selection. Keeping current setting.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_FORMAT => "Number format",
        SETTINGS_FORMAT_TIERED => "Tiered digits",
        SETTINGS_FORMAT_SCIENTIFIC => "Scientific",
        SETTINGS_CUSTOM_CATALOG => "Custom catalog",
        SETTINGS_BROWSE => "Browse…",
        SETTINGS_OPACITY => "Window opacity",
        SETTINGS_ALWAYS_ON_TOP => "Always on top",
        SETTINGS_SAVE => "Save",
        SETTINGS_RESTART_NOTE => "Custom catalog changes apply after restart.",
        _ => return None,
    })
}
