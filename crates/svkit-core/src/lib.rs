// svkit-core: CLI から利用するコマンド生成・ドキュメント検索ロジック

pub mod addon;
pub mod command;
pub mod config;
pub mod docs;
pub mod error;
pub mod options;

pub use addon::{find_addon, Addon, KNOWN_ADDONS};
pub use command::{compile, COMMAND_PREFIX};
pub use config::{default_config_path, load_config, merge_config, SvkitConfig};
pub use docs::{filter, Catalog, Category, CategoryFilter, DocEntry, Icon};
pub use error::CoreError;
pub use options::{AddonSelection, CommandOptions, Mode, PackageManager, Template, TypeChecking};
