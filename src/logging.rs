use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// stderr 로 출력하는 전역 tracing 구독자를 설치한다.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("로그 초기화 실패: {e}");
    }
}
