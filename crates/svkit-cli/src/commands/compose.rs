use anyhow::{Context, Result};
use serde::Serialize;
use svkit_core::{command, compile, find_addon, AddonSelection, CommandOptions, SvkitConfig};
use tracing::{debug, warn};

use crate::cli::{AddArgs, CreateArgs};

/// `--json` 指定時の出力
#[derive(Debug, Serialize)]
struct CommandOutput<'a> {
    command: &'a str,
    tokens: Vec<String>,
    options: &'a CommandOptions,
}

/// 設定値に引数を上書きして `sv create` 用のオプションを作る。
///
/// # Errors
/// 列挙値として解釈できない引数がある場合。
pub fn create_options(config: &SvkitConfig, args: &CreateArgs) -> Result<CommandOptions> {
    let mut options = config.create_options();
    if let Some(path) = &args.path {
        options.project_path = path.clone();
    }
    if let Some(template) = &args.template {
        options.template = template.parse().context("--template の値が不正です")?;
    }
    if let Some(types) = &args.types {
        options.type_checking = types.parse().context("--types の値が不正です")?;
    }
    if let Some(pm) = &args.package_manager {
        options.package_manager = pm.parse().context("--install の値が不正です")?;
    }
    options.skip_install |= args.no_install;
    options.skip_addons_prompt |= args.no_add_ons;
    Ok(options)
}

/// 設定値に引数を上書きして `sv add` 用のオプションを作る。
///
/// 引数でアドオンを指定した場合は設定のアドオン一覧を置き換える。
pub fn add_options(config: &SvkitConfig, args: &AddArgs) -> CommandOptions {
    let mut options = config.add_options();
    if !args.addons.is_empty() {
        options.selected_addons = args.addons.iter().cloned().collect::<AddonSelection>();
    }
    for id in options.selected_addons.iter() {
        if find_addon(id).is_none() {
            warn!(addon = id, "unknown add-on, passing through as-is");
        }
    }
    options
}

/// `svkit create` を実行する。
///
/// # Errors
/// 引数が不正な場合、または JSON への変換に失敗した場合。
pub fn run_create(config: &SvkitConfig, args: &CreateArgs) -> Result<()> {
    let options = create_options(config, args)?;
    print_command(&options, args.json)
}

/// `svkit add` を実行する。
///
/// # Errors
/// JSON への変換に失敗した場合。
pub fn run_add(config: &SvkitConfig, args: &AddArgs) -> Result<()> {
    let options = add_options(config, args);
    print_command(&options, args.json)
}

fn print_command(options: &CommandOptions, json: bool) -> Result<()> {
    let compiled = compile(options);
    debug!(command = %compiled, mode = %options.mode, "compiled command");
    if json {
        let output = CommandOutput {
            command: &compiled,
            tokens: command::tokens(options),
            options,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{compiled}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use svkit_core::{Mode, PackageManager, Template, TypeChecking};

    #[test]
    fn create_args_override_config() {
        let mut config = SvkitConfig::default();
        config.create.package_manager = PackageManager::Yarn;
        config.create.template = Template::Demo;
        let args = CreateArgs {
            path: Some("site".to_string()),
            types: Some("jsdoc".to_string()),
            package_manager: Some("bun".to_string()),
            no_install: true,
            ..CreateArgs::default()
        };
        let options = create_options(&config, &args).unwrap();
        assert_eq!(options.mode, Mode::Create);
        assert_eq!(options.project_path, "site");
        assert_eq!(options.template, Template::Demo);
        assert_eq!(options.type_checking, TypeChecking::JsDoc);
        assert_eq!(options.package_manager, PackageManager::Bun);
        assert!(options.skip_install);
        assert!(!options.skip_addons_prompt);
    }

    #[test]
    fn create_flags_cannot_unset_config_booleans() {
        let mut config = SvkitConfig::default();
        config.create.skip_add_ons = true;
        let options = create_options(&config, &CreateArgs::default()).unwrap();
        assert!(options.skip_addons_prompt);
    }

    #[test]
    fn create_rejects_unknown_template() {
        let args = CreateArgs {
            template: Some("skeleton".to_string()),
            ..CreateArgs::default()
        };
        let err = create_options(&SvkitConfig::default(), &args).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("--template"));
        assert!(message.contains("未知の template です: skeleton"));
    }

    #[test]
    fn add_args_replace_config_addons() {
        let mut config = SvkitConfig::default();
        config.add.addons = ["prettier"].into_iter().collect();
        let args = AddArgs {
            addons: vec!["eslint".to_string(), "vitest".to_string(), "eslint".to_string()],
            json: false,
        };
        let options = add_options(&config, &args);
        assert_eq!(options.mode, Mode::Add);
        assert_eq!(compile(&options), "npx sv add eslint vitest");
    }

    #[test]
    fn add_without_args_uses_config_addons() {
        let mut config = SvkitConfig::default();
        config.add.addons = ["prettier", "eslint"].into_iter().collect();
        let options = add_options(&config, &AddArgs::default());
        assert_eq!(compile(&options), "npx sv add prettier eslint");
    }

    #[test]
    fn json_output_shape() {
        let options = CommandOptions::add(["mdsvex"]);
        let output = CommandOutput {
            command: "npx sv add mdsvex",
            tokens: command::tokens(&options),
            options: &options,
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["command"], "npx sv add mdsvex");
        assert_eq!(value["tokens"], serde_json::json!(["npx sv", "add", "mdsvex"]));
        assert_eq!(value["options"]["mode"], "add");
        assert_eq!(value["options"]["type_checking"], "ts");
        assert_eq!(value["options"]["selected_addons"], serde_json::json!(["mdsvex"]));
    }
}
