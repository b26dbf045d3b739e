//! ページネーションリンクの正規化

use crate::routes::AdminRoutes;

/// 一覧URLそのもの（クエリなし）を指すリンクだけ `?page=1` 付きに書き換える
///
/// 書き換え不要な場合は `None`。
pub fn canonical_page_href(href: &str, routes: &AdminRoutes) -> Option<String> {
    (href == routes.listing()).then(|| routes.first_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> AdminRoutes {
        AdminRoutes::new("http://localhost:5000", "/admin/products").unwrap()
    }

    #[test]
    fn test_bare_listing_is_rewritten() {
        assert_eq!(
            canonical_page_href("http://localhost:5000/admin/products", &routes()).as_deref(),
            Some("http://localhost:5000/admin/products?page=1")
        );
    }

    #[test]
    fn test_other_links_untouched() {
        let routes = routes();
        for href in [
            "http://localhost:5000/admin/products?page=2",
            "http://localhost:5000/admin/products?page=1",
            "http://localhost:5000/admin/products/",
            "http://localhost:5000/admin/products#top",
            "http://localhost:5001/admin/products",
            "",
        ] {
            assert_eq!(canonical_page_href(href, &routes), None, "{}", href);
        }
    }
}
