pub mod cli;
pub mod commands;
pub mod logging;
pub mod prompt;
pub mod ui;

pub use cli::{Cli, Commands};
pub use prompt::{ConfirmResult, ScriptedPrompt, WizardPrompt};
