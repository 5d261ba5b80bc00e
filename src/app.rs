use std::path::Path;

use tracing::info;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::sync::{self, Event};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 카탈로그 로드 오류
    Catalog(CatalogError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

/// CLI 에서 쓸 카탈로그를 고른다.
///
/// 명령행으로 직접 지정한 파일은 잘못되면 오류로 끝낸다. 설정 파일의 경로는
/// [`Catalog::load`]처럼 경고 후 내장 카탈로그로 대체한다.
pub fn load_catalog(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<Catalog, AppError> {
    match explicit {
        Some(path) => {
            let catalog = Catalog::builtin_with_custom(path)?;
            info!(categories = catalog.categories().len(), "Using catalog from command line");
            Ok(catalog)
        }
        None => Ok(Catalog::load(configured)),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator, catalog: &Catalog) -> Result<(), AppError> {
    let mut options = config.sync_options();
    let (mut state, mut render) =
        sync::initial_state(catalog, &options, config.default_category.as_deref());
    println!(
        "{}: {}",
        tr.t(i18n::keys::LABEL_CONVERSION_COUNT),
        catalog.conversion_count()
    );
    loop {
        ui_cli::print_render(tr, catalog, &render);
        let event = match ui_cli::main_menu(tr)? {
            MenuChoice::SelectCategory => ui_cli::choose_category(tr, catalog)?,
            MenuChoice::SelectConversion => ui_cli::choose_conversion(tr, catalog, &render)?,
            MenuChoice::EditFrom => Some(ui_cli::edit_field(tr, sync::Field::From)?),
            MenuChoice::EditTo => Some(ui_cli::edit_field(tr, sync::Field::To)?),
            MenuChoice::Reverse => Some(Event::ReverseToggled),
            MenuChoice::AllUnits => {
                ui_cli::print_all_units(tr, catalog, &state, &options);
                None
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                options = config.sync_options();
                Some(Event::Refresh)
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        if let Some(event) = event {
            (state, render) = sync::dispatch(catalog, &options, state, event);
        }
    }
    Ok(())
}
