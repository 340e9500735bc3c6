use std::path::PathBuf;

/// svkit-core の境界処理（設定・カタログ読み込み、文字列からの列挙値変換）で発生するエラー。
///
/// コマンド生成とドキュメント検索そのものは全域関数のためエラーを返さない。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("未知の {kind} です: {value}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("設定ファイルの読み込みに失敗: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイルのパースに失敗: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("カタログファイルの読み込みに失敗: {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("カタログのパースに失敗")]
    CatalogParse(#[source] serde_yaml::Error),

    #[error("ドキュメント ID が重複しています: {0}")]
    DuplicateDocId(String),
}

impl CoreError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}
