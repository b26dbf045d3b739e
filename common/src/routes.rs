//! 商品管理エンドポイントのURL生成

use crate::error::{Error, Result};
use std::fmt;

/// 商品の主キー（`data-pk` の値）
///
/// パスにそのまま埋め込むため、英数字・`-`・`_` のみ許可する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimaryKey(String);

impl PrimaryKey {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::InvalidPrimaryKey(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// オリジンとベースパスから各エンドポイントのURLを組み立てる
///
/// # Examples
/// ```
/// use product_admin_common::{AdminRoutes, PrimaryKey};
///
/// let routes = AdminRoutes::new("http://localhost:5000", "/admin/products").unwrap();
/// let pk = PrimaryKey::parse("42").unwrap();
/// assert_eq!(routes.delete_product(&pk), "http://localhost:5000/admin/products/delete/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRoutes {
    listing: String,
}

impl AdminRoutes {
    pub fn new(origin: &str, base_path: &str) -> Result<Self> {
        let origin = origin.trim_end_matches('/');
        if origin.is_empty() {
            return Err(Error::InvalidRoute("origin is empty".into()));
        }
        if base_path.contains(['?', '#']) {
            return Err(Error::InvalidRoute(format!(
                "base path must not carry a query or fragment: {}",
                base_path
            )));
        }

        let base = base_path.trim_matches('/');
        let listing = if base.is_empty() {
            origin.to_string()
        } else {
            format!("{}/{}", origin, base)
        };
        Ok(Self { listing })
    }

    /// 商品一覧のURL（クエリなし）
    pub fn listing(&self) -> &str {
        &self.listing
    }

    pub fn first_page(&self) -> String {
        format!("{}?page=1", self.listing)
    }

    pub fn product_fields(&self, pk: &PrimaryKey) -> String {
        format!("{}/_get/{}", self.listing, pk)
    }

    pub fn product_images(&self, pk: &PrimaryKey) -> String {
        format!("{}/images/_get/{}", self.listing, pk)
    }

    pub fn delete_product(&self, pk: &PrimaryKey) -> String {
        format!("{}/delete/{}", self.listing, pk)
    }
}
