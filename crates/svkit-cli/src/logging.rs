use tracing_subscriber::EnvFilter;

/// ログレベルを上書きする環境変数
pub const LOG_ENV: &str = "SVKIT_LOG";

/// `-v` の回数に応じた既定のログレベル。
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// ログ出力を初期化する。出力先は標準エラー出力。
///
/// `SVKIT_LOG` が設定されていればそちらを優先する。
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
