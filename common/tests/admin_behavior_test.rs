//! 管理画面の振る舞いテスト
//!
//! プレビュー・フォーム補完・ページネーションの観測可能な結果を検証

use product_admin_common::{
    apply_snapshot, canonical_page_href, AdminConfig, AdminRoutes, Carousel, ImageList,
    PrimaryKey, ProductSnapshot,
};
use std::collections::{BTreeMap, BTreeSet};

/// 読み込み完了順が選択順と違っても、タイトル集合は選択したファイル名と一致する
#[test]
fn test_preview_titles_match_selection() {
    let selected = ["c.png", "a.jpg", "b.gif"];
    let mut carousel = Carousel::from_existing([("/static/placeholder.png".to_string(), None)]);

    let ticket = carousel.begin_rebuild();
    // 完了順は b, c, a
    for name in ["b.gif", "c.png", "a.jpg"] {
        assert!(carousel.push(ticket, format!("data:image/*;base64,{}", name), Some(name.to_string())));
    }

    assert_eq!(carousel.len(), selected.len());
    let titles: BTreeSet<&str> = carousel
        .slides()
        .iter()
        .filter_map(|s| s.title.as_deref())
        .collect();
    let expected: BTreeSet<&str> = selected.into_iter().collect();
    assert_eq!(titles, expected);

    let active: Vec<usize> = (0..carousel.len()).filter(|&i| carousel.is_active(i)).collect();
    assert_eq!(active, vec![0]);
}

/// 前回の選択の読み込みが遅れて完了しても、新しいプレビューに混ざらない
#[test]
fn test_preview_ignores_previous_selection() {
    let mut carousel = Carousel::new();
    let first = carousel.begin_rebuild();
    let second = carousel.begin_rebuild();

    carousel.push(second, "data:new".into(), Some("new.jpg".into()));
    carousel.push(first, "data:old".into(), Some("old.jpg".into()));

    assert_eq!(carousel.len(), 1);
    assert_eq!(carousel.active().unwrap().title.as_deref(), Some("new.jpg"));
}

#[test]
fn test_prefill_fields() {
    let snapshot = ProductSnapshot::from_json(r#"{ "unit_price": "12.5", "name": "Widget" }"#).unwrap();
    let mut form: BTreeMap<String, String> = ["unit_price", "name", "sku"]
        .iter()
        .map(|id| (id.to_string(), String::new()))
        .collect();

    let report = apply_snapshot(&snapshot, &mut form, &AdminConfig::default());

    assert_eq!(form["unit_price"], "12.500");
    assert_eq!(form["name"], "Widget");
    assert_eq!(form["sku"], "");
    assert!(report.missing.is_empty());
}

#[test]
fn test_prefill_images_replace_placeholder() {
    let list = ImageList::from_json(r#"{ "images": ["a.jpg", "b.jpg"] }"#).unwrap();
    let mut carousel = Carousel::from_existing([("placeholder.png".to_string(), None)]);

    let ticket = carousel.ticket();
    assert!(carousel.replace_placeholder(ticket, list.images));

    let srcs: Vec<&str> = carousel.slides().iter().map(|s| s.src.as_str()).collect();
    assert_eq!(srcs, vec!["a.jpg", "b.jpg"]);
    assert!(carousel.is_active(0));
    assert!(!carousel.is_active(1));
}

#[test]
fn test_prefill_empty_images_keep_placeholder() {
    let list = ImageList::from_json(r#"{ "images": [] }"#).unwrap();
    let mut carousel = Carousel::from_existing([("placeholder.png".to_string(), None)]);

    let ticket = carousel.ticket();
    assert!(!carousel.replace_placeholder(ticket, list.images));
    assert_eq!(carousel.len(), 1);
    assert_eq!(carousel.active().unwrap().src, "placeholder.png");
}

#[test]
fn test_pagination_and_routes_share_base() {
    let config = AdminConfig::default();
    let routes = AdminRoutes::new("http://127.0.0.1:5000", &config.base_path).unwrap();

    assert_eq!(
        canonical_page_href("http://127.0.0.1:5000/admin/products", &routes).as_deref(),
        Some("http://127.0.0.1:5000/admin/products?page=1")
    );
    assert_eq!(
        canonical_page_href("http://127.0.0.1:5000/admin/products?page=3", &routes),
        None
    );

    let pk = PrimaryKey::parse("15").unwrap();
    assert!(routes.delete_product(&pk).starts_with(routes.listing()));
}
