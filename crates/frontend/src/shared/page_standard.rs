//! Page category constants.
//!
//! Every dashboard page declares:
//!   - HTML `id` in the format `{section}--{page}` (e.g. `"fund-supervision--budget-execution"`)
//!   - `data-page-category` with one of the constants below

/// Analytical page: cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Table of records with tabs, search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Mixed page: a table plus detail panels and forms.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_DASHBOARD, PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{section}--{page}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((section, page)) => !section.is_empty() && !page.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// DOM id of a registry page
pub fn page_dom_id(section_id: &str, page_id: &str) -> String {
    format!("{}--{}", section_id, page_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::sections;

    #[test]
    fn registry_pages_produce_valid_ids() {
        for s in sections() {
            for p in s.pages {
                assert!(is_valid_page_id(&page_dom_id(s.id.as_str(), p.id)));
            }
        }
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(!is_valid_page_id("fund-supervision"));
        assert!(!is_valid_page_id("--budget-execution"));
        assert!(!is_valid_page_id("fund-supervision--"));
    }

    #[test]
    fn categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(!is_known_category("legacy"));
    }
}
