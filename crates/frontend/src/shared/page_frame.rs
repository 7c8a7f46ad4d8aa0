//! PageFrame — standard root wrapper for admin pages.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"u601_table_qr_codes--usecase"`
//!   - `data-page-category`  — see [`PageCategory::as_str`]

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Use-case / action page
    Usecase,
    /// Free-form layout, exempt from structural checks
    Custom,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::Usecase => "usecase",
            PageCategory::Custom => "custom",
        }
    }

    fn base_class(self) -> &'static str {
        match self {
            PageCategory::Usecase => "page",
            PageCategory::Custom => "page page--custom",
        }
    }
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: PageCategory,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let full_class = if class.is_empty() {
        category.base_class().to_string()
    } else {
        format!("{} {class}", category.base_class())
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_page_id() {
        assert!(is_valid_page_id("u601_table_qr_codes--usecase"));
        assert!(!is_valid_page_id("u601_table_qr_codes"));
        assert!(!is_valid_page_id("--usecase"));
        assert!(!is_valid_page_id("u601--"));
    }
}
