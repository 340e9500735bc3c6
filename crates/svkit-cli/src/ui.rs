use console::style;
use svkit_core::{Addon, CategoryFilter, DocEntry};

pub fn render_banner() {
    let line = style("━".repeat(40)).cyan();
    eprintln!("{line}");
    eprintln!("  {}", style("svkit - sv command builder").cyan().bold());
    eprintln!("  {}", style("Svelte プロジェクトのコマンドを組み立てます").cyan());
    eprintln!("{line}");
}

pub fn error_label() -> String {
    style("エラー:").red().bold().to_string()
}

/// 対話中に表示する現在のコマンドのプレビュー。
pub fn format_preview(command: &str) -> String {
    format!("{} {}", style("▶").cyan(), style(command).green())
}

/// ドキュメントエントリを 3 行で整形する。
pub fn format_doc(doc: &DocEntry) -> String {
    format!(
        "{} {}  {}\n    {}\n    {}",
        doc.category.icon().glyph(),
        style(&doc.title).bold(),
        style(format!("[{}]", doc.category)).yellow(),
        style(&doc.description).dim(),
        style(&doc.url).cyan().underlined(),
    )
}

pub fn format_addon(addon: &Addon) -> String {
    format!("{:<20} {}", style(addon.id).green(), addon.title)
}

pub fn format_category(filter: CategoryFilter) -> String {
    let glyph = match filter {
        CategoryFilter::All => " ",
        CategoryFilter::Only(category) => category.icon().glyph(),
    };
    format!("{glyph} {:<14} {}", style(filter).green(), filter.title())
}

/// 検索結果なしのときのヒント。
pub fn no_results_hint(query: &str, filter: CategoryFilter) -> String {
    let scope = match filter {
        CategoryFilter::All => String::new(),
        CategoryFilter::Only(category) => format!(" ({})", category.title()),
    };
    format!(
        "{} '{query}'{scope} に一致するドキュメントがありません。別の検索語を試してください。",
        style("!").yellow()
    )
}
