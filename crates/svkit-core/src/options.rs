use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 生成するコマンドの種別。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `sv create`: 新規プロジェクト作成
    #[default]
    Create,
    /// `sv add`: 既存プロジェクトへのインテグレーション追加
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Minimal,
    Demo,
    Library,
}

/// 型チェック方式。`--types` に渡す値は `ts` / `jsdoc`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeChecking {
    #[default]
    #[serde(rename = "ts", alias = "typescript")]
    TypeScript,
    #[serde(rename = "jsdoc")]
    JsDoc,
    #[serde(rename = "none")]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Create, Mode::Add];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Add => "add",
        }
    }
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Minimal, Template::Demo, Template::Library];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Minimal => "minimal",
            Template::Demo => "demo",
            Template::Library => "library",
        }
    }

    /// 対話プロンプト用の説明。
    pub fn description(&self) -> &'static str {
        match self {
            Template::Minimal => "Minimal - Barebones scaffolding",
            Template::Demo => "Demo - Showcase app with examples",
            Template::Library => "Library - Svelte library template",
        }
    }
}

impl TypeChecking {
    pub const ALL: [TypeChecking; 3] = [
        TypeChecking::TypeScript,
        TypeChecking::JsDoc,
        TypeChecking::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeChecking::TypeScript => "ts",
            TypeChecking::JsDoc => "jsdoc",
            TypeChecking::None => "none",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TypeChecking::TypeScript => "TypeScript - .ts files & lang='ts'",
            TypeChecking::JsDoc => "JSDoc - Type annotations in comments",
            TypeChecking::None => "None - No type checking (not recommended)",
        }
    }
}

impl PackageManager {
    pub const ALL: [PackageManager; 5] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
        PackageManager::Deno,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
        }
    }

    /// `sv` 自身の既定値（npm）かどうか。既定値のときは `--install` を省略する。
    pub fn is_baseline(&self) -> bool {
        matches!(self, PackageManager::Npm)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for TypeChecking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Mode::Create),
            "add" => Ok(Mode::Add),
            _ => Err(CoreError::unknown("mode", s)),
        }
    }
}

impl std::str::FromStr for Template {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Template::Minimal),
            "demo" => Ok(Template::Demo),
            "library" | "lib" => Ok(Template::Library),
            _ => Err(CoreError::unknown("template", s)),
        }
    }
}

impl std::str::FromStr for TypeChecking {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ts" | "typescript" => Ok(TypeChecking::TypeScript),
            "jsdoc" => Ok(TypeChecking::JsDoc),
            "none" => Ok(TypeChecking::None),
            _ => Err(CoreError::unknown("type checking", s)),
        }
    }
}

impl std::str::FromStr for PackageManager {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            "deno" => Ok(PackageManager::Deno),
            _ => Err(CoreError::unknown("package manager", s)),
        }
    }
}

/// 選択順を保持し、重複を持たないアドオン ID の集合。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AddonSelection(Vec<String>);

impl AddonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 末尾に追加する。既に選択済みの場合は何もせず `false` を返す。
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|a| a != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|a| a == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for AddonSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl From<Vec<String>> for AddonSelection {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<AddonSelection> for Vec<String> {
    fn from(selection: AddonSelection) -> Self {
        selection.0
    }
}

/// コマンド生成の入力。1 回の生成につき不変の値として扱う。
///
/// `mode` に関係しないフィールドは無視され、検証もされない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOptions {
    pub mode: Mode,
    pub project_path: String,
    pub template: Template,
    pub type_checking: TypeChecking,
    pub package_manager: PackageManager,
    pub skip_install: bool,
    pub skip_addons_prompt: bool,
    pub selected_addons: AddonSelection,
}

/// プロジェクトパスの既定値
pub const DEFAULT_PROJECT_PATH: &str = "my-app";

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Create,
            project_path: DEFAULT_PROJECT_PATH.to_string(),
            template: Template::default(),
            type_checking: TypeChecking::default(),
            package_manager: PackageManager::default(),
            skip_install: false,
            skip_addons_prompt: false,
            selected_addons: AddonSelection::new(),
        }
    }
}

impl CommandOptions {
    /// `sv create` 用のオプションを作る。その他の値は既定値。
    pub fn create(project_path: impl Into<String>) -> Self {
        Self {
            mode: Mode::Create,
            project_path: project_path.into(),
            ..Self::default()
        }
    }

    /// `sv add` 用のオプションを作る。
    pub fn add<I, S>(addons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: Mode::Add,
            selected_addons: addons.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CommandOptions::default();
        assert_eq!(options.mode, Mode::Create);
        assert_eq!(options.project_path, "my-app");
        assert_eq!(options.template, Template::Minimal);
        assert_eq!(options.type_checking, TypeChecking::TypeScript);
        assert_eq!(options.package_manager, PackageManager::Npm);
        assert!(!options.skip_install);
        assert!(!options.skip_addons_prompt);
        assert!(options.selected_addons.is_empty());
    }

    #[test]
    fn test_template_from_str() {
        assert_eq!("minimal".parse::<Template>().unwrap(), Template::Minimal);
        assert_eq!("Demo".parse::<Template>().unwrap(), Template::Demo);
        assert_eq!("library".parse::<Template>().unwrap(), Template::Library);
        assert_eq!("lib".parse::<Template>().unwrap(), Template::Library);
        assert!("skeleton".parse::<Template>().is_err());
    }

    #[test]
    fn test_type_checking_from_str() {
        assert_eq!("ts".parse::<TypeChecking>().unwrap(), TypeChecking::TypeScript);
        assert_eq!(
            "typescript".parse::<TypeChecking>().unwrap(),
            TypeChecking::TypeScript
        );
        assert_eq!("JSDoc".parse::<TypeChecking>().unwrap(), TypeChecking::JsDoc);
        assert_eq!("none".parse::<TypeChecking>().unwrap(), TypeChecking::None);
        assert!("flow".parse::<TypeChecking>().is_err());
    }

    #[test]
    fn test_package_manager_from_str() {
        for pm in PackageManager::ALL {
            assert_eq!(pm.as_str().parse::<PackageManager>().unwrap(), pm);
        }
        let err = "cargo".parse::<PackageManager>().unwrap_err();
        assert_eq!(err.to_string(), "未知の package manager です: cargo");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("create".parse::<Mode>().unwrap(), Mode::Create);
        assert_eq!("ADD".parse::<Mode>().unwrap(), Mode::Add);
        assert!("remove".parse::<Mode>().is_err());
    }

    #[test]
    fn test_only_npm_is_baseline() {
        let baseline: Vec<_> = PackageManager::ALL
            .iter()
            .filter(|pm| pm.is_baseline())
            .collect();
        assert_eq!(baseline, vec![&PackageManager::Npm]);
    }

    #[test]
    fn test_addon_selection_keeps_order_and_drops_duplicates() {
        let mut selection = AddonSelection::new();
        assert!(selection.insert("tailwindcss"));
        assert!(selection.insert("eslint"));
        assert!(!selection.insert("tailwindcss"));
        assert_eq!(selection.as_slice(), ["tailwindcss", "eslint"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_addon_selection_remove() {
        let mut selection: AddonSelection = ["vitest", "prettier"].into_iter().collect();
        assert!(selection.remove("vitest"));
        assert!(!selection.remove("vitest"));
        assert!(!selection.contains("vitest"));
        assert!(selection.contains("prettier"));
    }

    #[test]
    fn test_addon_selection_deserialize_dedupes() {
        let selection: AddonSelection =
            serde_yaml::from_str("[drizzle, lucia, drizzle]").unwrap();
        assert_eq!(selection.as_slice(), ["drizzle", "lucia"]);
    }

    #[test]
    fn test_type_checking_serde_names() {
        let value: TypeChecking = serde_yaml::from_str("typescript").unwrap();
        assert_eq!(value, TypeChecking::TypeScript);
        assert_eq!(serde_yaml::to_string(&TypeChecking::TypeScript).unwrap().trim(), "ts");
    }

    #[test]
    fn test_display_traits() {
        assert_eq!(Mode::Add.to_string(), "add");
        assert_eq!(Template::Demo.to_string(), "demo");
        assert_eq!(TypeChecking::JsDoc.to_string(), "jsdoc");
        assert_eq!(PackageManager::Bun.to_string(), "bun");
    }
}
