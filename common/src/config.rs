//! 管理画面スクリプトの設定
//!
//! すべての項目にデフォルト値があり、ページに埋め込んだJSONで部分的に上書きできる。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// ページ側で上書き用JSONを置く `<script>` 要素のID
pub const CONFIG_ELEMENT_ID: &str = "product-admin-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// 商品管理エンドポイントのベースパス
    pub base_path: String,
    /// 小数桁を揃えるフィールド（単価）
    pub price_field: String,
    pub price_decimals: usize,
    /// 削除リクエストのHTTPメソッド
    pub delete_method: String,
    pub log_level: String,
    /// 失敗時に対象要素へ付与するクラス
    pub error_class: String,
    pub selectors: Selectors,
}

/// DOM上の要素を特定するセレクタとクラス名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub file_input: String,
    pub upload_trigger: String,
    pub carousel: String,
    pub product_marker: String,
    pub delete_control: String,
    pub pagination_link: String,
    pub row: String,
    pub slide_class: String,
    pub active_class: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_path: "/admin/products".into(),
            price_field: "unit_price".into(),
            price_decimals: 3,
            delete_method: "GET".into(),
            log_level: "info".into(),
            error_class: "admin-error".into(),
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            file_input: "#images".into(),
            upload_trigger: "#upload-img".into(),
            carousel: ".carousel-inner".into(),
            product_marker: ".product-add".into(),
            delete_control: "span.delete".into(),
            pagination_link: ".pagination a".into(),
            row: "tr".into(),
            slide_class: "item".into(),
            active_class: "active".into(),
        }
    }
}

impl AdminConfig {
    /// JSON文字列から読み込む（欠けている項目はデフォルト値）
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AdminConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    /// `log_level` を `log::LevelFilter` に変換（不正値は Info）
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
