use anyhow::Result;
use svkit_core::{compile, CommandOptions, Mode, SvkitConfig};
use tracing::debug;

use crate::prompt::{ConfirmResult, DialoguerPrompt, WizardPrompt};

/// ウィザードのステップ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Mode,
    ProjectPath,
    Template,
    Types,
    PackageManager,
    SkipInstall,
    SkipAddOns,
    Addons,
    Confirm,
}

impl Step {
    fn next(self, mode: Mode) -> Step {
        match (self, mode) {
            (Step::Mode, Mode::Create) => Step::ProjectPath,
            (Step::Mode, Mode::Add) => Step::Addons,
            (Step::ProjectPath, _) => Step::Template,
            (Step::Template, _) => Step::Types,
            (Step::Types, _) => Step::PackageManager,
            (Step::PackageManager, _) => Step::SkipInstall,
            (Step::SkipInstall, _) => Step::SkipAddOns,
            (Step::SkipAddOns, _) | (Step::Addons, _) | (Step::Confirm, _) => Step::Confirm,
        }
    }

    fn prev(self, mode: Mode) -> Step {
        match (self, mode) {
            (Step::Mode, _) | (Step::ProjectPath, _) | (Step::Addons, _) => Step::Mode,
            (Step::Template, _) => Step::ProjectPath,
            (Step::Types, _) => Step::Template,
            (Step::PackageManager, _) => Step::Types,
            (Step::SkipInstall, _) => Step::PackageManager,
            (Step::SkipAddOns, _) => Step::SkipInstall,
            (Step::Confirm, Mode::Create) => Step::SkipAddOns,
            (Step::Confirm, Mode::Add) => Step::Addons,
        }
    }
}

/// 対話式にコマンドを組み立て、確定したコマンドを標準出力に出す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub fn run(config: &SvkitConfig) -> Result<()> {
    let prompt = DialoguerPrompt::new();
    prompt.show_banner();
    if let Some(command) = drive(&prompt, config.create_options())? {
        println!("{command}");
    }
    Ok(())
}

/// ウィザードを最後まで進める。キャンセルされた場合は `None`。
///
/// 各ステップの入力後にコマンドを再生成してプレビューする。
/// 各ステップで Esc を押すと前のステップに戻り、最初のステップで Esc を押すと終了する。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub fn drive<P: WizardPrompt>(prompt: &P, initial: CommandOptions) -> Result<Option<String>> {
    let mut options = initial;
    let mut step = Step::Mode;

    loop {
        debug!(?step, "wizard step");
        let answered = match step {
            Step::Mode => match prompt.select_mode(options.mode)? {
                Some(mode) => {
                    options.mode = mode;
                    true
                }
                None => {
                    prompt.show_message("終了します。");
                    return Ok(None);
                }
            },
            Step::ProjectPath => apply(prompt.input_project_path(&options.project_path)?, |v| {
                options.project_path = v;
            }),
            Step::Template => apply(prompt.select_template(options.template)?, |v| {
                options.template = v;
            }),
            Step::Types => apply(prompt.select_types(options.type_checking)?, |v| {
                options.type_checking = v;
            }),
            Step::PackageManager => {
                apply(prompt.select_package_manager(options.package_manager)?, |v| {
                    options.package_manager = v;
                })
            }
            Step::SkipInstall => apply(prompt.confirm_skip_install(options.skip_install)?, |v| {
                options.skip_install = v;
            }),
            Step::SkipAddOns => {
                apply(prompt.confirm_skip_add_ons(options.skip_addons_prompt)?, |v| {
                    options.skip_addons_prompt = v;
                })
            }
            Step::Addons => apply(prompt.select_addons(&options.selected_addons)?, |v| {
                options.selected_addons = v;
            }),
            Step::Confirm => match prompt.confirm()? {
                ConfirmResult::Yes => return Ok(Some(compile(&options))),
                ConfirmResult::GoBack => false,
                ConfirmResult::Cancel => {
                    prompt.show_message("キャンセルしました。");
                    return Ok(None);
                }
            },
        };

        if answered {
            prompt.show_preview(&compile(&options));
            step = step.next(options.mode);
        } else {
            step = step.prev(options.mode);
        }
    }
}

/// 回答があれば反映して `true`、Esc なら `false` を返す。
fn apply<T>(answer: Option<T>, set: impl FnOnce(T)) -> bool {
    match answer {
        Some(value) => {
            set(value);
            true
        }
        None => false,
    }
}
