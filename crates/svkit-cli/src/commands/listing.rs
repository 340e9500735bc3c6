use svkit_core::{Category, CategoryFilter, KNOWN_ADDONS};

use crate::ui;

/// 既知アドオンの一覧を表示する。
pub fn run_addons() {
    for addon in KNOWN_ADDONS {
        println!("{}", ui::format_addon(addon));
    }
}

/// `--category` に指定できる値の一覧を表示する。
pub fn run_categories() {
    for filter in category_filters() {
        println!("{}", ui::format_category(filter));
    }
}

fn category_filters() -> impl Iterator<Item = CategoryFilter> {
    std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filters_start_with_all() {
        let filters: Vec<CategoryFilter> = category_filters().collect();
        assert_eq!(filters.len(), Category::ALL.len() + 1);
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters[1], CategoryFilter::Only(Category::Introduction));
    }
}
