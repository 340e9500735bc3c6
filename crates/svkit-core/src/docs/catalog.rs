use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::debug;

use super::{filter, CategoryFilter, DocEntry};
use crate::error::CoreError;

/// ビルド時に埋め込むカタログデータ
const BUILTIN_CATALOG: &str = include_str!("../../data/docs.yaml");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

/// 読み込み後に変更されないドキュメントカタログ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<DocEntry>,
}

/// カタログファイルの形式
#[derive(Deserialize)]
struct CatalogFile {
    entries: Vec<DocEntry>,
}

impl Catalog {
    /// エントリ列からカタログを作る。ID が重複している場合はエラー。
    ///
    /// # Errors
    /// 同じ ID を持つエントリが 2 つ以上ある場合。
    pub fn new(entries: Vec<DocEntry>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CoreError::DuplicateDocId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// 埋め込みカタログ。初回呼び出し時に一度だけパースする。
    ///
    /// # Errors
    /// 埋め込みデータが不正な場合。
    pub fn builtin() -> Result<&'static Catalog, CoreError> {
        BUILTIN.get_or_try_init(|| {
            let catalog = Self::from_yaml(BUILTIN_CATALOG)?;
            debug!(entries = catalog.len(), "loaded builtin docs catalog");
            Ok(catalog)
        })
    }

    /// YAML 文字列（トップレベルに `entries:`）からカタログを作る。
    ///
    /// # Errors
    /// YAML が不正な場合、または ID が重複している場合。
    pub fn from_yaml(content: &str) -> Result<Self, CoreError> {
        let file: CatalogFile = serde_yaml::from_str(content).map_err(CoreError::CatalogParse)?;
        Self::new(file.entries)
    }

    /// 外部のカタログファイルを読み込む。
    ///
    /// # Errors
    /// ファイルが読めない場合、または内容が不正な場合。
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml(&content)?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded docs catalog");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DocEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// クエリとカテゴリで絞り込む。毎回カタログ全体を走査する。
    pub fn search(&self, query: &str, category: CategoryFilter) -> Vec<&DocEntry> {
        let result = filter(&self.entries, query, category);
        debug!(query, %category, hits = result.len(), "searched docs catalog");
        result
    }
}
