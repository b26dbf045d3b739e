//! 起動処理
//!
//! 設定とログを初期化し、ドキュメントの解析後に各機能をページへ結び付ける。
//! 機能ごとに失敗を閉じ込め、1つが失敗しても他は動かす。

use crate::api::js_error;
use crate::components::{
    carousel::CarouselHandle, product_form, product_table, upload_preview,
};
use crate::dom;
use gloo::events::EventListener;
use product_admin_common::{AdminConfig, AdminRoutes, Error, Result, CONFIG_ELEMENT_ID};

pub fn boot() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AdminConfig::default(), Some(e)),
    };

    if let Some(level) = config.level_filter().to_level() {
        // 二重初期化（テストなど）は無視
        let _ = console_log::init_with_level(level);
    }
    if let Some(e) = config_error {
        log::warn!("using default settings: {}", e);
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| start(&config)).forget();
    } else {
        start(&config);
    }
}

/// ページ内の `<script type="application/json">` から設定を読む（なければデフォルト）
fn load_config() -> Result<AdminConfig> {
    let Some(element) = dom::document()?.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(AdminConfig::default());
    };
    let text = element.text_content().unwrap_or_default();
    AdminConfig::from_json(&text).map_err(|e| Error::Config(format!("#{}: {}", CONFIG_ELEMENT_ID, e)))
}

fn start(config: &AdminConfig) {
    let routes = match routes(config) {
        Ok(routes) => routes,
        Err(e) => {
            log::error!("product admin scripts disabled: {}", e);
            return;
        }
    };

    let carousel = match dom::query(&config.selectors.carousel)
        .and_then(|found| found.map(|el| CarouselHandle::mount(el, &config.selectors)).transpose())
    {
        Ok(carousel) => carousel,
        Err(e) => {
            log::error!("carousel unavailable: {}", e);
            None
        }
    };

    if let Some(carousel) = &carousel {
        match upload_preview::bind(config, carousel.clone()) {
            Ok(true) => log::debug!("image preview ready"),
            Ok(false) => {}
            Err(e) => log::error!("image preview unavailable: {}", e),
        }
    }

    match product_form::bind(config, &routes, carousel) {
        Ok(true) => log::debug!("form prefill started"),
        Ok(false) => {}
        Err(e) => log::error!("form prefill unavailable: {}", e),
    }

    match product_table::canonicalize_pagination(config, &routes) {
        Ok(0) => {}
        Ok(n) => log::debug!("rewrote {} pagination link(s)", n),
        Err(e) => log::error!("pagination links left as is: {}", e),
    }

    match product_table::bind_delete_controls(config, &routes) {
        Ok(0) => {}
        Ok(n) => log::debug!("{} delete control(s) bound", n),
        Err(e) => log::error!("row deletion unavailable: {}", e),
    }
}

fn routes(config: &AdminConfig) -> Result<AdminRoutes> {
    let origin = dom::window()?.location().origin().map_err(js_error)?;
    AdminRoutes::new(&origin, &config.base_path)
}
