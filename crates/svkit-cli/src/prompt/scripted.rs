use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::Result;
use svkit_core::{AddonSelection, Mode, PackageManager, Template, TypeChecking};

use super::{parse_path_input, ConfirmResult, WizardPrompt, BACK_INPUT};

/// 事前に用意した回答を順に返すプロンプト。端末なしでウィザードを動かす。
///
/// 回答キューが空になったステップは現在値をそのまま受け入れる。
/// 確認プロンプトのキューが空なら `Yes` を返す。
/// プロジェクト名は端末と同じく入力文字列として扱う。
#[derive(Default)]
pub struct ScriptedPrompt {
    modes: RefCell<VecDeque<Option<Mode>>>,
    paths: RefCell<VecDeque<String>>,
    templates: RefCell<VecDeque<Option<Template>>>,
    types: RefCell<VecDeque<Option<TypeChecking>>>,
    package_managers: RefCell<VecDeque<Option<PackageManager>>>,
    skip_install: RefCell<VecDeque<Option<bool>>>,
    skip_add_ons: RefCell<VecDeque<Option<bool>>>,
    addons: RefCell<VecDeque<Option<Vec<String>>>>,
    confirms: RefCell<VecDeque<ConfirmResult>>,
    previews: RefCell<Vec<String>>,
    messages: RefCell<Vec<String>>,
}

fn next_or<T>(queue: &RefCell<VecDeque<Option<T>>>, current: T) -> Option<T> {
    queue.borrow_mut().pop_front().unwrap_or(Some(current))
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(self, mode: Option<Mode>) -> Self {
        self.modes.borrow_mut().push_back(mode);
        self
    }

    /// `None` は戻る入力 (`<`) として扱う。
    pub fn with_path(self, path: Option<&str>) -> Self {
        self.paths
            .borrow_mut()
            .push_back(path.unwrap_or(BACK_INPUT).to_string());
        self
    }

    pub fn with_template(self, template: Option<Template>) -> Self {
        self.templates.borrow_mut().push_back(template);
        self
    }

    pub fn with_types(self, types: Option<TypeChecking>) -> Self {
        self.types.borrow_mut().push_back(types);
        self
    }

    pub fn with_package_manager(self, pm: Option<PackageManager>) -> Self {
        self.package_managers.borrow_mut().push_back(pm);
        self
    }

    pub fn with_skip_install(self, skip: Option<bool>) -> Self {
        self.skip_install.borrow_mut().push_back(skip);
        self
    }

    pub fn with_skip_add_ons(self, skip: Option<bool>) -> Self {
        self.skip_add_ons.borrow_mut().push_back(skip);
        self
    }

    pub fn with_addons(self, addons: Option<&[&str]>) -> Self {
        self.addons
            .borrow_mut()
            .push_back(addons.map(|ids| ids.iter().map(|s| s.to_string()).collect()));
        self
    }

    pub fn with_confirm(self, result: ConfirmResult) -> Self {
        self.confirms.borrow_mut().push_back(result);
        self
    }

    pub fn previews(&self) -> Vec<String> {
        self.previews.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl WizardPrompt for ScriptedPrompt {
    fn select_mode(&self, current: Mode) -> Result<Option<Mode>> {
        Ok(next_or(&self.modes, current))
    }

    fn input_project_path(&self, current: &str) -> Result<Option<String>> {
        let raw = self
            .paths
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| current.to_string());
        Ok(parse_path_input(raw))
    }

    fn select_template(&self, current: Template) -> Result<Option<Template>> {
        Ok(next_or(&self.templates, current))
    }

    fn select_types(&self, current: TypeChecking) -> Result<Option<TypeChecking>> {
        Ok(next_or(&self.types, current))
    }

    fn select_package_manager(&self, current: PackageManager) -> Result<Option<PackageManager>> {
        Ok(next_or(&self.package_managers, current))
    }

    fn confirm_skip_install(&self, current: bool) -> Result<Option<bool>> {
        Ok(next_or(&self.skip_install, current))
    }

    fn confirm_skip_add_ons(&self, current: bool) -> Result<Option<bool>> {
        Ok(next_or(&self.skip_add_ons, current))
    }

    fn select_addons(&self, current: &AddonSelection) -> Result<Option<AddonSelection>> {
        let answer = next_or(&self.addons, current.as_slice().to_vec());
        Ok(answer.map(AddonSelection::from))
    }

    fn confirm(&self) -> Result<ConfirmResult> {
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or(ConfirmResult::Yes))
    }

    fn show_preview(&self, command: &str) {
        self.previews.borrow_mut().push(command.to_string());
    }

    fn show_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_queued_answers_then_current() {
        let prompt = ScriptedPrompt::new()
            .with_template(None)
            .with_template(Some(Template::Demo));
        assert_eq!(prompt.select_template(Template::Minimal).unwrap(), None);
        assert_eq!(
            prompt.select_template(Template::Minimal).unwrap(),
            Some(Template::Demo)
        );
        assert_eq!(
            prompt.select_template(Template::Library).unwrap(),
            Some(Template::Library)
        );
    }

    #[test]
    fn returns_configured_path() {
        let prompt = ScriptedPrompt::new().with_path(Some("site"));
        assert_eq!(prompt.input_project_path("my-app").unwrap().as_deref(), Some("site"));
        assert_eq!(prompt.input_project_path("my-app").unwrap().as_deref(), Some("my-app"));
    }

    #[test]
    fn back_input_for_path_returns_none() {
        let prompt = ScriptedPrompt::new().with_path(Some("<")).with_path(None);
        assert_eq!(prompt.input_project_path("my-app").unwrap(), None);
        assert_eq!(prompt.input_project_path("my-app").unwrap(), None);
    }

    #[test]
    fn addons_answer_is_deduplicated() {
        let prompt = ScriptedPrompt::new().with_addons(Some(&["eslint", "vitest", "eslint"]));
        let selection = prompt.select_addons(&AddonSelection::new()).unwrap().unwrap();
        assert_eq!(selection.as_slice(), ["eslint", "vitest"]);
    }

    #[test]
    fn confirm_defaults_to_yes() {
        let prompt = ScriptedPrompt::new().with_confirm(ConfirmResult::GoBack);
        assert_eq!(prompt.confirm().unwrap(), ConfirmResult::GoBack);
        assert_eq!(prompt.confirm().unwrap(), ConfirmResult::Yes);
    }

    #[test]
    fn records_previews_and_messages() {
        let prompt = ScriptedPrompt::new();
        prompt.show_preview("npx sv add");
        prompt.show_message("メッセージ");
        assert_eq!(prompt.previews(), vec!["npx sv add"]);
        assert_eq!(prompt.messages(), vec!["メッセージ"]);
    }
}
