use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "svkit", version, about = "sv command builder and Svelte docs search")]
pub struct Cli {
    /// Config file (defaults to <config dir>/svkit/config.yaml)
    #[arg(long, global = true, env = "SVKIT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an `sv create` command
    Create(CreateArgs),
    /// Build an `sv add` command
    Add(AddArgs),
    /// Search the Svelte documentation catalog
    Docs(DocsArgs),
    /// List known add-ons
    Addons,
    /// List documentation categories
    Categories,
    /// Build a command interactively
    Wizard,
    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Project directory passed to `sv create`
    pub path: Option<String>,

    /// Template to use (minimal, demo, library)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Type checking (ts, jsdoc, none)
    #[arg(long)]
    pub types: Option<String>,

    /// Package manager (npm, pnpm, yarn, bun, deno)
    #[arg(long = "install", value_name = "PM")]
    pub package_manager: Option<String>,

    /// Skip dependency installation
    #[arg(long)]
    pub no_install: bool,

    /// Skip the interactive add-ons prompt
    #[arg(long)]
    pub no_add_ons: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Add-on identifiers, in order
    pub addons: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DocsArgs {
    /// Search text (matched against title, description and keywords)
    pub query: Vec<String>,

    /// Category filter (all, introduction, runes, template, ...)
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Print matches as JSON
    #[arg(long, conflicts_with = "urls")]
    pub json: bool,

    /// Print only the URLs of matches
    #[arg(long)]
    pub urls: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_full() {
        let cli = Cli::parse_from([
            "svkit", "create", "my-site", "--template", "demo", "--types", "jsdoc", "--install",
            "pnpm", "--no-install", "--no-add-ons",
        ]);
        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.path.as_deref(), Some("my-site"));
                assert_eq!(args.template.as_deref(), Some("demo"));
                assert_eq!(args.types.as_deref(), Some("jsdoc"));
                assert_eq!(args.package_manager.as_deref(), Some("pnpm"));
                assert!(args.no_install);
                assert!(args.no_add_ons);
                assert!(!args.json);
            }
            _ => panic!("Expected create subcommand"),
        }
    }

    #[test]
    fn test_parse_create_without_path() {
        let cli = Cli::parse_from(["svkit", "create"]);
        match cli.command {
            Some(Commands::Create(args)) => {
                assert!(args.path.is_none());
                assert!(args.template.is_none());
            }
            _ => panic!("Expected create subcommand"),
        }
    }

    #[test]
    fn test_parse_add_keeps_order() {
        let cli = Cli::parse_from(["svkit", "add", "tailwindcss", "eslint"]);
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args.addons, vec!["tailwindcss", "eslint"]),
            _ => panic!("Expected add subcommand"),
        }
    }

    #[test]
    fn test_parse_docs() {
        let cli = Cli::parse_from(["svkit", "docs", "form", "actions", "-c", "sveltekit"]);
        match cli.command {
            Some(Commands::Docs(args)) => {
                assert_eq!(args.query, vec!["form", "actions"]);
                assert_eq!(args.category, "sveltekit");
            }
            _ => panic!("Expected docs subcommand"),
        }
    }

    #[test]
    fn test_parse_docs_defaults_to_all() {
        let cli = Cli::parse_from(["svkit", "docs"]);
        match cli.command {
            Some(Commands::Docs(args)) => {
                assert!(args.query.is_empty());
                assert_eq!(args.category, "all");
            }
            _ => panic!("Expected docs subcommand"),
        }
    }

    #[test]
    fn test_parse_docs_json_conflicts_with_urls() {
        assert!(Cli::try_parse_from(["svkit", "docs", "--json", "--urls"]).is_err());
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::parse_from(["svkit", "-vv", "addons", "--config", "/tmp/svkit.yaml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/svkit.yaml")));
        assert!(matches!(cli.command, Some(Commands::Addons)));
    }

    #[test]
    fn test_parse_no_args_is_none() {
        let cli = Cli::parse_from(["svkit"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["svkit", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: clap_complete::Shell::Bash })
        ));
    }

    #[test]
    fn test_parse_invalid_command_fails() {
        assert!(Cli::try_parse_from(["svkit", "invalid"]).is_err());
    }
}
