use std::borrow::Cow;

use anyhow::{Context, Result};
use svkit_core::{Catalog, CategoryFilter, DocEntry, SvkitConfig};

use crate::cli::DocsArgs;
use crate::ui;

/// 設定に応じてカタログを選ぶ。外部ファイル指定がなければ埋め込みカタログ。
///
/// # Errors
/// カタログの読み込みに失敗した場合。
pub fn resolve_catalog(config: &SvkitConfig) -> Result<Cow<'static, Catalog>> {
    match &config.docs.catalog {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("カタログを読み込めません: {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(Catalog::builtin()?)),
    }
}

/// `svkit docs` を実行する。
///
/// # Errors
/// カテゴリ指定が不正な場合、またはカタログの読み込みに失敗した場合。
pub fn run(config: &SvkitConfig, args: &DocsArgs) -> Result<()> {
    let filter: CategoryFilter = args
        .category
        .parse()
        .context("--category の値が不正です")?;
    let query = args.query.join(" ");
    let catalog = resolve_catalog(config)?;
    let matches = catalog.search(&query, filter);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        eprintln!("{}", ui::no_results_hint(&query, filter));
        return Ok(());
    }

    print!("{}", render(&matches, args.urls));
    Ok(())
}

/// 検索結果を表示用に整形する。
pub fn render(matches: &[&DocEntry], urls_only: bool) -> String {
    let mut out = String::new();
    for doc in matches {
        if urls_only {
            out.push_str(&doc.url);
        } else {
            out.push_str(&ui::format_doc(doc));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalog_by_default() {
        let catalog = resolve_catalog(&SvkitConfig::default()).unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn external_catalog_from_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "entries:\n  - id: only\n    title: Only entry\n    description: d\n    category: misc\n    url: https://example.com/only"
        )
        .unwrap();
        let mut config = SvkitConfig::default();
        config.docs.catalog = Some(file.path().to_path_buf());
        let catalog = resolve_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("only").is_some());
    }

    #[test]
    fn missing_external_catalog_is_an_error() {
        let mut config = SvkitConfig::default();
        config.docs.catalog = Some(PathBuf::from("/nonexistent/docs.yaml"));
        assert!(resolve_catalog(&config).is_err());
    }

    #[test]
    fn render_urls_only() {
        let catalog = Catalog::builtin().unwrap();
        let matches = catalog.search("$derived", CategoryFilter::All);
        assert_eq!(
            render(&matches, true),
            "https://svelte.dev/docs/svelte/$derived\n"
        );
    }

    #[test]
    fn render_full_rows() {
        let catalog = Catalog::builtin().unwrap();
        let matches = catalog.search("form actions", CategoryFilter::All);
        let out = render(&matches, false);
        assert!(out.contains("Form actions"));
        assert!(out.contains("https://svelte.dev/docs/kit/form-actions"));
    }
}
