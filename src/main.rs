use clap::Parser;
use std::path::Path;
use tracing::error;
use unit_converter::{
    app::{self, AppError},
    config,
    engine::FormatPolicy,
    i18n, logging,
};

/// 터미널용 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "unit_converter_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 사용자 정의 카테고리 TOML 경로 (설정값보다 우선, 잘못된 파일이면 종료)
    #[arg(long)]
    catalog: Option<String>,
    /// 결과 표시 형식
    #[arg(long, value_parser = parse_format)]
    format: Option<FormatPolicy>,
    /// 시작 카테고리 id
    #[arg(long)]
    category: Option<String>,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

fn parse_format(s: &str) -> Result<FormatPolicy, String> {
    match s.to_lowercase().as_str() {
        "tiered" => Ok(FormatPolicy::Tiered),
        "scientific" | "sci" => Ok(FormatPolicy::Scientific),
        other => Err(format!("알 수 없는 형식: {other} (tiered|scientific)")),
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = try_run(cli) {
        error!("{err}");
        eprintln!("오류: {err}");
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default()?;
    if let Some(format) = cli.format {
        cfg.format = format;
    }
    if cli.category.is_some() {
        cfg.default_category = cli.category;
    }
    let catalog = app::load_catalog(
        cli.catalog.as_deref().map(Path::new),
        cfg.custom_catalog.as_deref().map(Path::new),
    )?;

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &tr, &catalog)?;
    Ok(())
}
