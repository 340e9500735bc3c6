//! Svelte ドキュメントリンクのカタログと検索。

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use catalog::Catalog;

/// ドキュメントのカテゴリ（閉じた集合）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Introduction,
    Runes,
    Template,
    Styling,
    Special,
    Runtime,
    Misc,
    Reference,
    #[serde(rename = "sveltekit")]
    SvelteKit,
    Tutorial,
}

/// カテゴリの表示アイコン。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Book,
    Wand,
    Code,
    Brush,
    Stars,
    Gear,
    List,
    Terminal,
    Box,
}

impl Icon {
    /// 端末表示用のグリフ。
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Book => "📖",
            Icon::Wand => "🪄",
            Icon::Code => "💻",
            Icon::Brush => "🖌",
            Icon::Stars => "✨",
            Icon::Gear => "⚙",
            Icon::List => "📋",
            Icon::Terminal => "⌨",
            Icon::Box => "📦",
        }
    }
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Introduction,
        Category::Runes,
        Category::Template,
        Category::Styling,
        Category::Special,
        Category::Runtime,
        Category::Misc,
        Category::Reference,
        Category::SvelteKit,
        Category::Tutorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Introduction => "introduction",
            Category::Runes => "runes",
            Category::Template => "template",
            Category::Styling => "styling",
            Category::Special => "special",
            Category::Runtime => "runtime",
            Category::Misc => "misc",
            Category::Reference => "reference",
            Category::SvelteKit => "sveltekit",
            Category::Tutorial => "tutorial",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Introduction => "Introduction",
            Category::Runes => "Runes",
            Category::Template => "Template Syntax",
            Category::Styling => "Styling",
            Category::Special => "Special Elements",
            Category::Runtime => "Runtime",
            Category::Misc => "Misc",
            Category::Reference => "Reference",
            Category::SvelteKit => "SvelteKit",
            Category::Tutorial => "Tutorial & Resources",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Category::Introduction => Icon::Book,
            Category::Runes => Icon::Wand,
            Category::Template => Icon::Code,
            Category::Styling => Icon::Brush,
            Category::Special => Icon::Stars,
            Category::Runtime => Icon::Gear,
            Category::Misc => Icon::List,
            Category::Reference => Icon::Terminal,
            Category::SvelteKit => Icon::Box,
            Category::Tutorial => Icon::Book,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| CoreError::unknown("category", s))
    }
}

/// カテゴリ絞り込み。`all` はすべてのカテゴリに一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Documentation",
            CategoryFilter::Only(c) => c.title(),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// ドキュメントカタログの 1 エントリ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub url: String,
}

impl DocEntry {
    /// 小文字化済みのクエリがタイトル・説明・キーワードのいずれかに含まれるか。
    fn contains_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// カタログからカテゴリとテキストの両方に一致するエントリを返す。
///
/// 結果はカタログ順のまま（関連度による並べ替えはしない）。
/// クエリが空文字列ならテキスト条件は常に一致する。
pub fn filter<'a>(entries: &'a [DocEntry], query: &str, category: CategoryFilter) -> Vec<&'a DocEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|doc| category.matches(doc.category))
        .filter(|doc| needle.is_empty() || doc.contains_text(&needle))
        .collect()
}
