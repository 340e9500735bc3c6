//! オプションから `sv` コマンドラインを組み立てる。
//!
//! トークンの並び順は入力に依存せず固定。パスやアドオン ID のクォート・
//! エスケープは行わない。

use crate::options::{CommandOptions, Mode, TypeChecking};

/// ツール呼び出しのプレフィックス
pub const COMMAND_PREFIX: &str = "npx sv";

/// オプションからコマンド文字列を生成する。
///
/// 同じ入力には常に同じ文字列を返す。
pub fn compile(options: &CommandOptions) -> String {
    tokens(options).join(" ")
}

/// コマンドを構成するトークン列を返す。
///
/// `project_path` は空文字列でもそのまま 1 トークンとして残る。
pub fn tokens(options: &CommandOptions) -> Vec<String> {
    let mut tokens = vec![COMMAND_PREFIX.to_string()];
    match options.mode {
        Mode::Create => push_create(&mut tokens, options),
        Mode::Add => push_add(&mut tokens, options),
    }
    tokens
}

fn push_create(tokens: &mut Vec<String>, options: &CommandOptions) {
    tokens.push(Mode::Create.as_str().to_string());

    // パスは位置引数として subcommand の直後に置く
    tokens.push(options.project_path.clone());

    tokens.push(format!("--template {}", options.template));

    match options.type_checking {
        TypeChecking::None => tokens.push("--no-types".to_string()),
        types => tokens.push(format!("--types {types}")),
    }

    if !options.package_manager.is_baseline() {
        tokens.push(format!("--install {}", options.package_manager));
    }

    if options.skip_install {
        tokens.push("--no-install".to_string());
    }

    if options.skip_addons_prompt {
        tokens.push("--no-add-ons".to_string());
    }
}

fn push_add(tokens: &mut Vec<String>, options: &CommandOptions) {
    tokens.push(Mode::Add.as_str().to_string());
    tokens.extend(options.selected_addons.iter().map(str::to_string));
}
