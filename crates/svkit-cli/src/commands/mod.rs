pub mod compose;
pub mod docs;
pub mod listing;
pub mod wizard;

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::Path;
use svkit_core::{default_config_path, load_config, merge_config, SvkitConfig};
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};

/// カレントディレクトリに置くプロジェクト単位の上書き設定
pub const LOCAL_CONFIG_FILE: &str = "svkit.yaml";

/// パース済みの引数に従ってサブコマンドを実行する。
///
/// # Errors
///
/// 設定の読み込み、引数の変換、または各サブコマンドが失敗した場合。
pub fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "svkit", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_cli_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Create(args)) => compose::run_create(&config, &args),
        Some(Commands::Add(args)) => compose::run_add(&config, &args),
        Some(Commands::Docs(args)) => docs::run(&config, &args),
        Some(Commands::Addons) => {
            listing::run_addons();
            Ok(())
        }
        Some(Commands::Categories) => {
            listing::run_categories();
            Ok(())
        }
        Some(Commands::Wizard) | None => wizard::run(&config),
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

/// 設定を読み込む。
///
/// `--config` が指定されていればそのファイル、なければ既定パスを使う。
/// 既定パスの設定が壊れている場合は警告してデフォルト設定で続行する。
/// その後、カレントディレクトリの `svkit.yaml` があれば上書きマージする。
///
/// # Errors
///
/// 明示したファイル、またはローカル上書きファイルが不正な場合。
pub fn load_cli_config(explicit: Option<&Path>) -> Result<SvkitConfig> {
    let mut config = match explicit {
        Some(path) => load_config(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
        None => match default_config_path() {
            Some(path) => load_config(&path).unwrap_or_else(|e| {
                warn!(error = %e, "設定ファイルの読み込みに失敗しました。デフォルト設定を使用します");
                SvkitConfig::default()
            }),
            None => SvkitConfig::default(),
        },
    };

    merge_config(&mut config, Path::new(LOCAL_CONFIG_FILE))
        .with_context(|| format!("{LOCAL_CONFIG_FILE} を読み込めません"))?;
    debug!(?config, "resolved config");
    Ok(config)
}
