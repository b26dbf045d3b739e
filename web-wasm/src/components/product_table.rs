//! 商品一覧テーブル: 行の削除とページネーションリンクの正規化

use crate::api::{self, js_error};
use crate::dom;
use gloo::events::EventListener;
use product_admin_common::{canonical_page_href, AdminConfig, AdminRoutes, PrimaryKey, Result};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlAnchorElement};

/// ページ表示時点の削除ボタンにリスナーを登録し、登録数を返す
///
/// 後から追加された行は対象外。
pub fn bind_delete_controls(config: &AdminConfig, routes: &AdminRoutes) -> Result<usize> {
    let mut bound = 0;
    for control in dom::query_all(&config.selectors.delete_control)? {
        let raw = control.get_attribute("data-pk").unwrap_or_default();
        let pk = match PrimaryKey::parse(&raw) {
            Ok(pk) => pk,
            Err(e) => {
                log::warn!("delete control skipped: {}", e);
                continue;
            }
        };

        let guard = ClickGuard::default();
        let routes = routes.clone();
        let method = config.delete_method.clone();
        let row_selector = config.selectors.row.clone();
        let error_class = config.error_class.clone();

        EventListener::new(&control, "click", {
            let control = control.clone();
            move |_| {
                // 応答待ちの間の連打は無視
                if !guard.try_begin() {
                    return;
                }
                let guard = guard.clone();
                let control = control.clone();
                let routes = routes.clone();
                let pk = pk.clone();
                let method = method.clone();
                let row_selector = row_selector.clone();
                let error_class = error_class.clone();
                spawn_local(async move {
                    let outcome = api::delete_product(&routes, &pk, &method).await;
                    if let Err(e) = &outcome {
                        log::warn!("product {} was not deleted: {}", pk, e);
                    }
                    settle_delete(&control, &outcome, &row_selector, &error_class);
                    guard.finish();
                });
            }
        })
        .forget();
        bound += 1;
    }
    Ok(bound)
}

/// 削除ボタンごとの「応答待ち」フラグ
#[derive(Clone, Default)]
pub struct ClickGuard {
    pending: Rc<Cell<bool>>,
}

impl ClickGuard {
    /// 応答待ちでなければ応答待ちにして true
    pub fn try_begin(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }
}

/// 削除リクエストの結果を行に反映する
///
/// 成功ならボタンを含む行だけを取り除き、失敗なら行を残してエラー用クラスを付ける。
pub fn settle_delete(control: &Element, outcome: &Result<()>, row_selector: &str, error_class: &str) {
    match outcome {
        Ok(()) => remove_row(control, row_selector),
        Err(_) => {
            if let Some(row) = closest_row(control, row_selector) {
                dom::mark_error(&row, error_class);
            }
        }
    }
}

fn closest_row(control: &Element, row_selector: &str) -> Option<Element> {
    match control.closest(row_selector).map_err(js_error) {
        Ok(row) => row,
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

fn remove_row(control: &Element, row_selector: &str) {
    match closest_row(control, row_selector) {
        Some(row) => row.remove(),
        None => log::debug!("deleted control has no enclosing {}", row_selector),
    }
}

/// クエリなしの一覧URLを指すリンクを `?page=1` 付きに書き換え、書き換えた数を返す
pub fn canonicalize_pagination(config: &AdminConfig, routes: &AdminRoutes) -> Result<usize> {
    let mut rewritten = 0;
    for link in dom::query_all(&config.selectors.pagination_link)? {
        let Ok(anchor) = link.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        if let Some(href) = canonical_page_href(&anchor.href(), routes) {
            anchor.set_href(&href);
            rewritten += 1;
        }
    }
    Ok(rewritten)
}
