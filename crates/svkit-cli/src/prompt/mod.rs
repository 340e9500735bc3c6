mod dialoguer_prompt;
mod scripted;

pub use dialoguer_prompt::DialoguerPrompt;
pub use scripted::ScriptedPrompt;

use anyhow::Result;
use svkit_core::{AddonSelection, Mode, PackageManager, Template, TypeChecking};

/// 確認プロンプトの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// はい: コマンドを確定する
    Yes,
    /// いいえ: 前のステップに戻る
    GoBack,
    /// キャンセル: 何も出力せずに終了する
    Cancel,
}

/// プロジェクト名の入力欄で前のステップに戻るための入力
pub const BACK_INPUT: &str = "<";

/// プロジェクト名の入力値を解釈する。`<` だけの入力は「戻る」(`None`)。
///
/// テキスト入力は Esc を受け付けないため、戻る操作はこの入力で表す。
pub fn parse_path_input(raw: String) -> Option<String> {
    if raw.trim() == BACK_INPUT {
        None
    } else {
        Some(raw)
    }
}

/// ウィザードが使う入力ポート。
///
/// 各メソッドは現在値を受け取り、Esc が押された場合は `None` を返す。
/// `input_project_path` だけは `<` の入力で `None` を返す。
pub trait WizardPrompt {
    fn select_mode(&self, current: Mode) -> Result<Option<Mode>>;
    fn input_project_path(&self, current: &str) -> Result<Option<String>>;
    fn select_template(&self, current: Template) -> Result<Option<Template>>;
    fn select_types(&self, current: TypeChecking) -> Result<Option<TypeChecking>>;
    fn select_package_manager(&self, current: PackageManager) -> Result<Option<PackageManager>>;
    fn confirm_skip_install(&self, current: bool) -> Result<Option<bool>>;
    fn confirm_skip_add_ons(&self, current: bool) -> Result<Option<bool>>;
    fn select_addons(&self, current: &AddonSelection) -> Result<Option<AddonSelection>>;
    fn confirm(&self) -> Result<ConfirmResult>;
    fn show_preview(&self, command: &str);
    fn show_message(&self, message: &str);
    fn show_banner(&self) {}
}
