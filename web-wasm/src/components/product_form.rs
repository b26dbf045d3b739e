//! 編集フォームの補完
//!
//! ページ表示時に商品データと登録済み画像を取得してフォームとカルーセルへ反映する。
//! 2つのリクエストは独立しており、書き込み先（フォーム / カルーセル）も重ならない。

use super::carousel::CarouselHandle;
use crate::api;
use crate::dom::{self, DocumentFields};
use product_admin_common::{apply_snapshot, AdminConfig, AdminRoutes, PrimaryKey, Result};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// 商品マーカー（`data-pk`）があれば取得を開始する
pub fn bind(
    config: &AdminConfig,
    routes: &AdminRoutes,
    carousel: Option<CarouselHandle>,
) -> Result<bool> {
    let Some(marker) = dom::query(&config.selectors.product_marker)? else {
        return Ok(false);
    };
    let raw = marker.get_attribute("data-pk").unwrap_or_default();
    if raw.trim().is_empty() {
        log::debug!("product marker has no primary key, nothing to prefill");
        return Ok(false);
    }
    let pk = PrimaryKey::parse(&raw)?;

    spawn_local(prefill_fields(
        config.clone(),
        routes.clone(),
        pk.clone(),
        marker.clone(),
    ));

    if let Some(carousel) = carousel {
        spawn_local(prefill_images(
            routes.clone(),
            pk,
            carousel,
            marker,
            config.error_class.clone(),
        ));
    }
    Ok(true)
}

async fn prefill_fields(config: AdminConfig, routes: AdminRoutes, pk: PrimaryKey, marker: Element) {
    let snapshot = match api::fetch_snapshot(&routes, &pk).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("product {} fields unavailable: {}", pk, e);
            dom::mark_error(&marker, &config.error_class);
            return;
        }
    };

    let mut fields = match dom::document() {
        Ok(document) => DocumentFields::new(document),
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };
    let report = apply_snapshot(&snapshot, &mut fields, &config);
    if !report.missing.is_empty() {
        log::debug!("no form control for: {}", report.missing.join(", "));
    }
    log::info!("prefilled {} field(s) of product {}", report.filled.len(), pk);
}

async fn prefill_images(
    routes: AdminRoutes,
    pk: PrimaryKey,
    carousel: CarouselHandle,
    marker: Element,
    error_class: String,
) {
    // 取得中にプレビューが作り直されたら結果は使わない
    let Some(ticket) = carousel.ticket() else {
        return;
    };

    let list = match api::fetch_images(&routes, &pk).await {
        Ok(list) => list,
        Err(e) => {
            log::warn!("product {} images unavailable: {}", pk, e);
            dom::mark_error(&marker, &error_class);
            return;
        }
    };

    if list.is_empty() {
        log::debug!("product {} has no images, keeping placeholder", pk);
        return;
    }
    let count = list.images.len();
    if carousel.replace_placeholder(ticket, list.images) {
        log::debug!("carousel now shows {} server image(s)", count);
    } else {
        log::debug!("discarding {} server image(s), preview was rebuilt", count);
    }
}
