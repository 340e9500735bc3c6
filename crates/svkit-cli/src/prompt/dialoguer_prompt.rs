use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use svkit_core::{AddonSelection, Mode, PackageManager, Template, TypeChecking, KNOWN_ADDONS};

use super::{parse_path_input, ConfirmResult, WizardPrompt};
use crate::ui;

/// dialoguer による端末プロンプト。
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// 列挙値の選択肢から 1 つ選ぶ。Ctrl+C / Esc で None を返す。
    fn select_from<T: Copy + PartialEq>(
        &self,
        prompt: &str,
        values: &[T],
        labels: &[&str],
        current: T,
    ) -> Result<Option<T>> {
        let default = values.iter().position(|v| *v == current).unwrap_or(0);
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(labels)
            .default(default)
            .interact_opt()?;
        Ok(selection.map(|i| values[i]))
    }

    fn confirm_flag(&self, prompt: &str, current: bool) -> Result<Option<bool>> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(current)
            .interact_opt()?;
        Ok(answer)
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardPrompt for DialoguerPrompt {
    fn select_mode(&self, current: Mode) -> Result<Option<Mode>> {
        self.select_from(
            "コマンド種別を選択してください",
            &Mode::ALL,
            &["sv create - Create new project", "sv add - Add integrations"],
            current,
        )
    }

    fn input_project_path(&self, current: &str) -> Result<Option<String>> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt("プロジェクト名（< で前に戻る）")
            .default(current.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(parse_path_input(value))
    }

    fn select_template(&self, current: Template) -> Result<Option<Template>> {
        let labels: Vec<&str> = Template::ALL.iter().map(Template::description).collect();
        self.select_from("テンプレートを選択してください", &Template::ALL, &labels, current)
    }

    fn select_types(&self, current: TypeChecking) -> Result<Option<TypeChecking>> {
        let labels: Vec<&str> = TypeChecking::ALL
            .iter()
            .map(TypeChecking::description)
            .collect();
        self.select_from("型チェック方式を選択してください", &TypeChecking::ALL, &labels, current)
    }

    fn select_package_manager(&self, current: PackageManager) -> Result<Option<PackageManager>> {
        let labels: Vec<&str> = PackageManager::ALL
            .iter()
            .map(PackageManager::as_str)
            .collect();
        self.select_from(
            "パッケージマネージャーを選択してください",
            &PackageManager::ALL,
            &labels,
            current,
        )
    }

    fn confirm_skip_install(&self, current: bool) -> Result<Option<bool>> {
        self.confirm_flag("依存関係のインストールをスキップしますか？", current)
    }

    fn confirm_skip_add_ons(&self, current: bool) -> Result<Option<bool>> {
        self.confirm_flag("アドオン選択プロンプトをスキップしますか？", current)
    }

    fn select_addons(&self, current: &AddonSelection) -> Result<Option<AddonSelection>> {
        let labels: Vec<String> = KNOWN_ADDONS
            .iter()
            .map(|a| format!("{} ({})", a.title, a.id))
            .collect();
        let defaults: Vec<bool> = KNOWN_ADDONS.iter().map(|a| current.contains(a.id)).collect();
        let selection = MultiSelect::with_theme(&self.theme)
            .with_prompt("追加するアドオンを選択してください（複数選択可）")
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()?;
        Ok(selection.map(|indices| selection_in_order(current, &indices)))
    }

    fn confirm(&self) -> Result<ConfirmResult> {
        let items = &[
            "はい（コマンドを出力する）",
            "いいえ（前のステップに戻る）",
            "キャンセル",
        ];
        let selection = Select::with_theme(&self.theme)
            .with_prompt("このコマンドでよろしいですか？")
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(match selection {
            Some(0) => ConfirmResult::Yes,
            Some(1) => ConfirmResult::GoBack,
            _ => ConfirmResult::Cancel,
        })
    }

    fn show_preview(&self, command: &str) {
        eprintln!("{}", ui::format_preview(command));
    }

    fn show_message(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_banner(&self) {
        ui::render_banner();
    }
}

/// MultiSelect の結果を選択順の集合に変換する。
///
/// 既に選ばれていたものは元の順序を保ち、新しく選ばれたものを一覧順で末尾に追加する。
fn selection_in_order(current: &AddonSelection, indices: &[usize]) -> AddonSelection {
    let chosen: Vec<&str> = indices.iter().map(|&i| KNOWN_ADDONS[i].id).collect();
    let mut result: AddonSelection = current
        .iter()
        .filter(|id| chosen.contains(id) || !KNOWN_ADDONS.iter().any(|a| a.id == *id))
        .collect();
    for id in chosen {
        result.insert(id);
    }
    result
}
