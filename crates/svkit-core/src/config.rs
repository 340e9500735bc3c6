use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CoreError;
use crate::options::{
    AddonSelection, CommandOptions, Mode, PackageManager, Template, TypeChecking,
    DEFAULT_PROJECT_PATH,
};

/// svkit 全体の設定を保持する構造体。
///
/// ユーザー設定ディレクトリの設定ファイル (svkit/config.yaml) から読み込む。
/// 省略したキーは既定値になる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SvkitConfig {
    /// `create` の既定オプション
    pub create: CreateDefaults,
    /// `add` の既定オプション
    pub add: AddDefaults,
    /// ドキュメント検索の設定
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDefaults {
    pub project_path: String,
    pub template: Template,
    pub types: TypeChecking,
    pub package_manager: PackageManager,
    pub skip_install: bool,
    pub skip_add_ons: bool,
}

impl Default for CreateDefaults {
    fn default() -> Self {
        Self {
            project_path: DEFAULT_PROJECT_PATH.to_string(),
            template: Template::default(),
            types: TypeChecking::default(),
            package_manager: PackageManager::default(),
            skip_install: false,
            skip_add_ons: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddDefaults {
    pub addons: AddonSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// 埋め込みカタログの代わりに使うカタログファイル。
    /// 相対パスは設定ファイルのあるディレクトリ基準。
    pub catalog: Option<PathBuf>,
}

impl DocsConfig {
    fn resolve_catalog(&mut self, base_dir: &Path) {
        if let Some(catalog) = self.catalog.as_mut() {
            if catalog.is_relative() {
                *catalog = base_dir.join(&*catalog);
            }
        }
    }
}

impl SvkitConfig {
    /// 設定値から `sv create` 用のオプションを作る。
    pub fn create_options(&self) -> CommandOptions {
        CommandOptions {
            mode: Mode::Create,
            project_path: self.create.project_path.clone(),
            template: self.create.template,
            type_checking: self.create.types,
            package_manager: self.create.package_manager,
            skip_install: self.create.skip_install,
            skip_addons_prompt: self.create.skip_add_ons,
            selected_addons: self.add.addons.clone(),
        }
    }

    /// 設定値から `sv add` 用のオプションを作る。
    pub fn add_options(&self) -> CommandOptions {
        CommandOptions {
            mode: Mode::Add,
            ..self.create_options()
        }
    }
}

/// 既定の設定ファイルパス。設定ディレクトリが取得できない環境では `None`。
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("svkit").join("config.yaml"))
}

/// 設定ファイルを読み込む。
///
/// ファイルが存在しない場合はデフォルト値を返す。
///
/// # Errors
/// 読み込みまたはパースに失敗した場合。
pub fn load_config(path: &Path) -> Result<SvkitConfig, CoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(SvkitConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: SvkitConfig =
        serde_yaml::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.docs.resolve_catalog(parent_dir(path));
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// 上書き用の設定ファイルをマージする。
///
/// 上書きファイルに存在するキーだけをベース設定に反映する。
/// ファイルが存在しない場合は何もしない。
///
/// # Errors
/// 読み込みまたはパースに失敗した場合。
pub fn merge_config(base: &mut SvkitConfig, override_path: &Path) -> Result<(), CoreError> {
    if !override_path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(override_path).map_err(|source| CoreError::ConfigRead {
        path: override_path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: serde_yaml::Error| CoreError::ConfigParse {
        path: override_path.to_path_buf(),
        source,
    };
    let overlay: serde_yaml::Value = serde_yaml::from_str(&content).map_err(parse_err)?;

    let mut merged = serde_yaml::to_value(&*base).map_err(parse_err)?;
    merge_value(&mut merged, overlay);
    *base = serde_yaml::from_value(merged).map_err(parse_err)?;
    base.docs.resolve_catalog(parent_dir(override_path));
    debug!(path = %override_path.display(), "merged config override");
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new(""))
}

fn merge_value(base: &mut serde_yaml::Value, overlay: serde_yaml::Value) {
    match (base, overlay) {
        (serde_yaml::Value::Mapping(base_map), serde_yaml::Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // 値が空のキーは上書きしない
        (_, serde_yaml::Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
